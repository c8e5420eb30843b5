//! High-level entry points
//!
//! - `pairwise` - one comparison: composition adjustment, DP, scoring
//! - `batch` - all-against-all runs over FASTA sets on rayon

pub mod batch;
pub mod pairwise;

pub use batch::{adjust_batch, align_batch, read_fasta, BatchOptions, PairAdjustment, SeqRecord};
pub use pairwise::{AdjustSummary, AlignedPair, PairwiseAligner};
