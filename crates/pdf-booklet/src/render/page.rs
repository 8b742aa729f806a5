//! Page-level PDF operations
//!
//! Reading page geometry (with page-tree inheritance), creating blank pages,
//! compositing two pages onto one spread, and closing off a page tree.

use super::xobject::create_page_xobject;
use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::{PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, walking up the page tree when the page itself
/// does not carry it. References are resolved.
pub fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut visited = HashSet::new();
    let mut node_id = page_id;

    while visited.insert(node_id) {
        let node = doc.get_dictionary(node_id)?;
        if let Ok(value) = node.get(key) {
            let (_, resolved) = doc.dereference(value)?;
            return Ok(Some(resolved));
        }
        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => node_id = parent_id,
            Err(_) => break,
        }
    }

    Ok(None)
}

/// MediaBox of a page as a four-element array, US Letter when absent
pub fn media_box(doc: &Document, page_id: ObjectId) -> Result<Vec<Object>> {
    match inherited_attribute(doc, page_id, b"MediaBox")? {
        Some(Object::Array(arr)) if arr.len() == 4 => Ok(arr.clone()),
        _ => Ok(default_media_box()),
    }
}

/// Get page dimensions in points
pub fn page_size(doc: &Document, page_id: ObjectId) -> Result<PageSize> {
    let mb = media_box(doc, page_id)?;
    let coords: Vec<f32> = mb.iter().filter_map(extract_number).collect();

    if let &[x0, y0, x1, y1] = coords.as_slice() {
        Ok(PageSize::new((x1 - x0).abs(), (y1 - y0).abs()))
    } else {
        Ok(PageSize::new(
            DEFAULT_PAGE_DIMENSIONS.0,
            DEFAULT_PAGE_DIMENSIONS.1,
        ))
    }
}

/// Lower-left corner of a page's MediaBox, the origin when unreadable
pub fn media_box_origin(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let mb = media_box(doc, page_id)?;
    let coords: Vec<f32> = mb.iter().filter_map(extract_number).collect();

    if let &[x0, y0, x1, y1] = coords.as_slice() {
        Ok((x0.min(x1), y0.min(y1)))
    } else {
        Ok((0.0, 0.0))
    }
}

/// Get default MediaBox for US Letter size
fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.0 as i64),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.1 as i64),
    ]
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

// =============================================================================
// Page Creation
// =============================================================================

/// Create a blank page with the given media box
pub fn create_blank_page(
    doc: &mut Document,
    media_box: &[Object],
    parent_id: ObjectId,
) -> ObjectId {
    let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_id));
    page_dict.set("MediaBox", Object::Array(media_box.to_vec()));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));

    doc.add_object(page_dict)
}

/// Two source pages destined for one double-width sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub left: ObjectId,
    /// Missing when the source has an odd page count and this is the last sheet
    pub right: Option<ObjectId>,
}

/// Render a spread onto a new page of `sheet` size.
///
/// Each page is moved so its MediaBox starts at the sheet origin; the right
/// page is then shifted right by `offset_x` points.
pub fn render_spread(
    output: &mut Document,
    source: &Document,
    spread: &Spread,
    sheet: PageSize,
    offset_x: f32,
    parent_pages_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet.width_pt),
            Object::Real(sheet.height_pt),
        ]),
    );

    let placements = [(spread.left, 0.0)]
        .into_iter()
        .chain(spread.right.map(|right| (right, offset_x)));

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for (idx, (source_page_id, tx)) in placements.enumerate() {
        let xobject_name = format!("P{}", idx);
        let xobject_id = create_page_xobject(output, source, source_page_id, cache)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        // `0.0 - y0` so a zero origin prints as 0 rather than -0
        let (x0, y0) = media_box_origin(source, source_page_id)?;
        content_ops.push(placement_command(&xobject_name, tx - x0, 0.0 - y0));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Content stream command drawing an XObject translated by (tx, ty)
fn placement_command(xobject_name: &str, tx: f32, ty: f32) -> String {
    format!("q 1 0 0 1 {} {} cm /{} Do Q\n", tx, ty, xobject_name)
}

// =============================================================================
// Document Structure
// =============================================================================

/// Create pages tree and catalog, finalize document structure
pub fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
