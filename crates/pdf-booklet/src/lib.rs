pub mod booklet;
pub mod constants;
pub mod layout;
mod options;
mod render;
mod stats;
mod types;

pub use booklet::{
    default_output_path, join_pages, load_pdf, make_booklet, reorder_pages, save_pdf,
};
pub use layout::{SectionPlan, section_order};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
