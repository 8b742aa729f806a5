//! PDF rendering modules for booklets
//!
//! This module handles all PDF-specific operations:
//! - Reading page geometry through the page tree
//! - Creating blank pages
//! - Creating XObjects from source pages and compositing spreads
//! - Deep copying PDF objects

mod page;
mod xobject;

pub use page::*;
