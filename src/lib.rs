//! Composition-adjusted gapped alignment of protein sequences.
//!
//! - `config` - matrices, gap costs, composition and DP settings
//! - `utils` - packed and dense score matrices
//! - `core` - statistics, composition adjustment, x-drop DP, edit scripts
//! - `align` - global (Needleman-Wunsch) alignment and transcripts
//! - `msa` - profile sequences, hits, block extension
//! - `api` - pairwise and batch entry points
//! - `report` - tabular and alignment output

pub mod align;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod msa;
pub mod report;
pub mod utils;
