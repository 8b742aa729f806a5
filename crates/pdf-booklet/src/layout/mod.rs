//! Layout calculation for booklets
//!
//! Pure page-index arithmetic: how much padding a document needs and in
//! which order its pages must be printed so folded sections read correctly.

mod section;

pub use section::*;
