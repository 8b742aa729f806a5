//! Booklet building - rearranging pages for folding and duplex printing
//!
//! This module orchestrates the pipeline:
//! 1. Pad and reorder pages into saddle-stitched sections (optional)
//! 2. Join consecutive pages into double-width sheets (optional)
//!
//! Each stage takes a document and returns a new one; nothing touches the
//! filesystem until the caller saves the result.

mod io;
mod join;
mod reorder;

pub use io::{default_output_path, load_pdf, save_pdf};
pub use join::join_pages;
pub use reorder::reorder_pages;

use crate::options::BookletOptions;
use crate::types::*;
use lopdf::Document;

/// Main booklet function
pub async fn make_booklet(
    document: Document,
    options: &BookletOptions,
) -> Result<(Document, BookletReport)> {
    options.validate()?;

    let options = options.clone();

    tokio::task::spawn_blocking(move || make_booklet_sync(document, &options)).await?
}

fn make_booklet_sync(
    mut document: Document,
    options: &BookletOptions,
) -> Result<(Document, BookletReport)> {
    if document.get_pages().is_empty() {
        return Err(BookletError::NoPages);
    }

    let mut report = BookletReport::default();

    if options.reorders() {
        let (reordered, summary) =
            reorder_pages(document, options.section_size, options.start_padding)?;
        log::info!(
            "Reorder stage: {} sections, {} blank pages added",
            summary.num_sections,
            summary.start_padding + summary.end_padding
        );
        document = reordered;
        report.reorder = Some(summary);
    }

    if options.join {
        let (joined, summary) = join_pages(&document)?;
        log::info!(
            "Join stage: {} pages joined into {} sheets",
            summary.source_pages,
            summary.output_pages
        );
        document = joined;
        report.join = Some(summary);
    }

    Ok((document, report))
}
