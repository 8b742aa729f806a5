use crate::constants::pt_to_mm;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Document has no pages")]
    NoPages,
    #[error("Nothing to do: neither reordering nor joining was requested")]
    NothingToDo,
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Width and height of a page in PDF points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }

    /// Size of a sheet holding two of these pages side by side
    pub fn doubled_width(self) -> Self {
        Self::new(self.width_pt * 2.0, self.height_pt)
    }

    /// Dimensions in millimeters (width, height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        (pt_to_mm(self.width_pt), pt_to_mm(self.height_pt))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions_mm();
        write!(f, "{:.2}mm x {:.2}mm", w, h)
    }
}

/// Outcome of the reorder stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderSummary {
    /// Sheets per section
    pub section_size: usize,
    pub num_sections: usize,
    /// Page count after padding
    pub total_pages: usize,
    pub start_padding: usize,
    pub end_padding: usize,
}

impl fmt::Display for ReorderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Reordered document into sections of {} sheets ({} pages) each for a total of {} sections ({} pages)",
            self.section_size,
            self.section_size * crate::constants::PAGES_PER_SHEET,
            self.num_sections,
            self.total_pages
        )?;
        write!(
            f,
            "    Added {} blank pages at the start and {} at the end",
            self.start_padding, self.end_padding
        )
    }
}

/// Outcome of the join stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinSummary {
    pub original_size: PageSize,
    pub joined_size: PageSize,
    pub source_pages: usize,
    pub output_pages: usize,
    /// Whether the last source page had no partner
    pub unpaired_last_page: bool,
}

impl fmt::Display for JoinSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Joined pdf into pairs")?;
        writeln!(f, "    Original pdf size: {}", self.original_size)?;
        write!(f, "    New pdf size: {}", self.joined_size)
    }
}

/// Everything the pipeline did, stage by stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookletReport {
    pub reorder: Option<ReorderSummary>,
    pub join: Option<JoinSummary>,
}

/// Prediction of what the pipeline will produce, computed without touching content
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Pages in the source document
    pub source_pages: usize,
    /// Reorder plan, when reordering is requested
    pub reorder: Option<ReorderSummary>,
    /// Whether pages will be joined into spreads
    pub join: bool,
    /// Page count of the final document
    pub output_pages: usize,
}
