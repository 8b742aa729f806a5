//! Shared constants for booklet building
//!
//! This module centralizes magic numbers and constants used throughout
//! the reorder and join stages.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter, as used in the printed size summaries
pub const POINTS_PER_MM: f32 = 2.83465;

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Used when neither a page nor any of its ancestors carries a MediaBox
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Booklet Geometry
// =============================================================================

/// Logical pages carried by one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Source pages placed side by side on one joined sheet
pub const PAGES_PER_SPREAD: usize = 2;

/// Blank pages inserted before the first source page unless configured otherwise
pub const DEFAULT_START_PADDING: usize = 2;

/// Page attributes a page may inherit from its ancestors in the page tree
pub const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// PDF version written for freshly built documents
pub const OUTPUT_PDF_VERSION: &str = "1.7";
