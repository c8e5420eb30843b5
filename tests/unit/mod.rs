//! Integration tests for compalign
//!
//! Grouped by module:
//! - `matrix` - packed/dense score tables
//! - `composition` - composition-based matrix adjustment
//! - `gapalign` - x-drop extension, edit scripts, state-array pool
//! - `global` - Needleman-Wunsch and transcripts
//! - `msa` - sequences, hit lists, block extension, HSP chains
//! - `batch` - FASTA round trips through the batch API

pub mod helpers;

pub mod batch;
pub mod composition;
pub mod gapalign;
pub mod global;
pub mod matrix;
pub mod msa;
