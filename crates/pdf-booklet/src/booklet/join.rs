//! Joining consecutive page pairs into double-width sheets

use crate::constants::{OUTPUT_PDF_VERSION, PAGES_PER_SPREAD};
use crate::render::{Spread, finalize_document, page_size, render_spread};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;

/// Merge each pair of pages `(2k, 2k+1)` into one sheet twice as wide.
///
/// Every page is assumed to share the first page's size. With an odd page
/// count the last page is placed on the left half of a final sheet whose
/// right half stays blank.
pub fn join_pages(source: &Document) -> Result<(Document, JoinSummary)> {
    let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();
    let first_page = *page_ids.first().ok_or(BookletError::NoPages)?;

    let original_size = page_size(source, first_page)?;
    let joined_size = original_size.doubled_width();

    let mut output = Document::with_version(OUTPUT_PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(page_ids.len().div_ceil(PAGES_PER_SPREAD));
    let mut cache = HashMap::new();

    for pair in page_ids.chunks(PAGES_PER_SPREAD) {
        let spread = Spread {
            left: pair[0],
            right: pair.get(1).copied(),
        };
        let page_id = render_spread(
            &mut output,
            source,
            &spread,
            joined_size,
            original_size.width_pt,
            pages_tree_id,
            &mut cache,
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    let unpaired_last_page = page_ids.len() % PAGES_PER_SPREAD == 1;
    if unpaired_last_page {
        log::warn!(
            "Odd page count ({}): last page placed alone on the final sheet",
            page_ids.len()
        );
    }

    let output_pages = page_refs.len();
    finalize_document(&mut output, pages_tree_id, page_refs);

    Ok((
        output,
        JoinSummary {
            original_size,
            joined_size,
            source_pages: page_ids.len(),
            output_pages,
            unpaired_last_page,
        },
    ))
}
