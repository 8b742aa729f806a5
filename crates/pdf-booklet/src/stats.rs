use crate::constants::PAGES_PER_SPREAD;
use crate::layout::SectionPlan;
use crate::options::BookletOptions;
use crate::types::*;
use lopdf::Document;

/// Predict what the booklet pipeline will produce for `document`
pub fn calculate_statistics(
    document: &Document,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;

    let source_pages = document.get_pages().len();
    if source_pages == 0 {
        return Err(BookletError::NoPages);
    }

    let reorder = if options.reorders() {
        let plan = SectionPlan::new(source_pages, options.section_size, options.start_padding)?;
        Some(plan.summary())
    } else {
        None
    };

    let after_reorder = reorder.map_or(source_pages, |r| r.total_pages);
    let output_pages = if options.join {
        after_reorder.div_ceil(PAGES_PER_SPREAD)
    } else {
        after_reorder
    };

    Ok(BookletStatistics {
        source_pages,
        reorder,
        join: options.join,
        output_pages,
    })
}
