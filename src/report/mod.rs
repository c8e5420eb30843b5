//! Output writers
//!
//! - `tabular` - BLAST-style tab-separated hit lines and adjustment tables
//! - `alignment` - wrapped pairwise alignment text

pub mod alignment;
pub mod tabular;

pub use alignment::{write_alignment, DEFAULT_LINE_LENGTH};
pub use tabular::{write_adjustments, write_tabular};
