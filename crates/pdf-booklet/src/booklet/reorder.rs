//! Padding and reordering pages into booklet sections

use crate::constants::INHERITABLE_PAGE_KEYS;
use crate::layout::SectionPlan;
use crate::render::{create_blank_page, inherited_attribute, media_box};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};

/// Pad `doc` with blank pages and rearrange it into print order for
/// sections of `section_size` sheets.
///
/// The page tree is flattened to a single `/Pages` node. Blank pages take
/// their size from the first source page.
pub fn reorder_pages(
    mut doc: Document,
    section_size: usize,
    start_padding: usize,
) -> Result<(Document, ReorderSummary)> {
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    let plan = SectionPlan::new(page_ids.len(), section_size, start_padding)?;

    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let pages_id = doc
        .get_dictionary(catalog_id)?
        .get(b"Pages")?
        .as_reference()?;

    let blank_media_box = media_box(&doc, page_ids[0])?;

    flatten_page_tree(&mut doc, &page_ids, pages_id)?;

    let mut kids = Vec::with_capacity(plan.total_pages());
    for slot in plan.sequence() {
        let page_id = match slot {
            Some(source_index) => page_ids[source_index],
            None => create_blank_page(&mut doc, &blank_media_box, pages_id),
        };
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let mut pages_dict = doc.get_dictionary(pages_id)?.clone();
    pages_dict.remove(b"Parent");
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(count));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Intermediate Pages nodes are unreachable now
    let pruned = doc.prune_objects();
    log::debug!(
        "Reordered {} pages into {} ({} orphaned objects pruned)",
        plan.source_pages,
        plan.total_pages(),
        pruned.len()
    );

    Ok((doc, plan.summary()))
}

/// Copy inherited attributes onto each page and re-parent it to `root_id`.
fn flatten_page_tree(doc: &mut Document, page_ids: &[ObjectId], root_id: ObjectId) -> Result<()> {
    for &page_id in page_ids {
        let mut inherited = Vec::new();
        {
            let page = doc.get_dictionary(page_id)?;
            for key in INHERITABLE_PAGE_KEYS {
                if page.has(key) {
                    continue;
                }
                if let Some(value) = inherited_attribute(doc, page_id, key)? {
                    inherited.push((key, value.clone()));
                }
            }
        }

        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        for (key, value) in inherited {
            page.set(key.to_vec(), value);
        }
        page.set("Parent", Object::Reference(root_id));
    }
    Ok(())
}
