//! Section planning for saddle-stitched booklets
//!
//! A section is a stack of `section_size` sheets folded together. Each sheet
//! carries four logical pages, so a section holds `section_size * 4` pages.
//!
//! ## Sheet order within a section
//!
//! For sheet `i` (outermost first) with `offset = 2 * i` and
//! `n = section_size * 4`, the four slots receive:
//!
//! - `n - 1 - offset` (outer side, left)
//! - `offset` (outer side, right)
//! - `offset + 1` (inner side, left)
//! - `n - 2 - offset` (inner side, right)
//!
//! A single-sheet section therefore prints `[3, 0, 1, 2]`.

use crate::constants::PAGES_PER_SHEET;
use crate::types::*;

// =============================================================================
// Page Ordering
// =============================================================================

/// Calculate the page order for one section (which source page goes in each slot).
///
/// Returns 0-based page indices relative to the section start.
pub fn section_order(section_size: usize) -> Vec<usize> {
    let pages_per_section = section_size * PAGES_PER_SHEET;
    let mut order = Vec::with_capacity(pages_per_section);
    for sheet in 0..section_size {
        let offset = sheet * 2;
        order.push(pages_per_section - 1 - offset);
        order.push(offset);
        order.push(offset + 1);
        order.push(pages_per_section - 2 - offset);
    }
    order
}

// =============================================================================
// Section Plan
// =============================================================================

/// Padding and sectioning for a document of a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPlan {
    /// Pages in the source document
    pub source_pages: usize,
    /// Sheets per section
    pub section_size: usize,
    pub start_padding: usize,
    pub end_padding: usize,
    pub num_sections: usize,
}

impl SectionPlan {
    /// Plan the padding for `source_pages` pages split into sections of
    /// `section_size` sheets, after prepending `start_padding` blanks.
    pub fn new(source_pages: usize, section_size: usize, start_padding: usize) -> Result<Self> {
        if section_size == 0 {
            return Err(BookletError::Config(
                "Section size must be at least one sheet".to_string(),
            ));
        }
        if source_pages == 0 {
            return Err(BookletError::NoPages);
        }

        let too_large = || BookletError::Config("Section size too large".to_string());
        let pages_per_section = section_size
            .checked_mul(PAGES_PER_SHEET)
            .ok_or_else(too_large)?;
        let padded_count = source_pages
            .checked_add(start_padding)
            .ok_or_else(too_large)?;
        let num_sections = padded_count.div_ceil(pages_per_section);
        let end_padding = num_sections
            .checked_mul(pages_per_section)
            .ok_or_else(too_large)?
            - padded_count;

        Ok(Self {
            source_pages,
            section_size,
            start_padding,
            end_padding,
            num_sections,
        })
    }

    pub fn pages_per_section(&self) -> usize {
        self.section_size * PAGES_PER_SHEET
    }

    /// Page count after padding
    pub fn total_pages(&self) -> usize {
        self.num_sections * self.pages_per_section()
    }

    /// The padded document in reading order: `None` marks a blank page,
    /// `Some(i)` the source page with index `i`.
    pub fn padded_sequence(&self) -> Vec<Option<usize>> {
        std::iter::repeat_n(None, self.start_padding)
            .chain((0..self.source_pages).map(Some))
            .chain(std::iter::repeat_n(None, self.end_padding))
            .collect()
    }

    /// The final document in print order.
    ///
    /// Position `i` holds the padded page at
    /// `section(i) * pages_per_section + order[i % pages_per_section]`.
    pub fn sequence(&self) -> Vec<Option<usize>> {
        let padded = self.padded_sequence();
        let order = section_order(self.section_size);
        let per_section = self.pages_per_section();

        (0..self.total_pages())
            .map(|position| {
                let current_section = position / per_section;
                let page_in_section = position % per_section;
                padded[current_section * per_section + order[page_in_section]]
            })
            .collect()
    }

    /// Output position of the source page with index `source_index`
    pub fn source_position(&self, source_index: usize) -> Option<usize> {
        if source_index >= self.source_pages {
            return None;
        }

        let per_section = self.pages_per_section();
        let padded_index = source_index + self.start_padding;
        let current_section = padded_index / per_section;
        let within = padded_index % per_section;

        section_order(self.section_size)
            .iter()
            .position(|&slot| slot == within)
            .map(|slot| current_section * per_section + slot)
    }

    pub fn summary(&self) -> ReorderSummary {
        ReorderSummary {
            section_size: self.section_size,
            num_sections: self.num_sections,
            total_pages: self.total_pages(),
            start_padding: self.start_padding,
            end_padding: self.end_padding,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
