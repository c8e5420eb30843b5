//! BLAST Statistical Functions
//!
//! Reference: ncbi-blast/c++/src/algo/blast/core/blast_stat.c
//!
//! - `karlin_params` - parameter block, bit scores, x-drop conversion
//! - `composition` - ungapped lambda / entropy from residue compositions
//! - `lookup_tables` - published gapped parameters per matrix and gap costs

pub mod composition;
pub mod karlin_params;
pub mod lookup_tables;

pub use composition::{compute_h, compute_lambda, AaScores, ScoreFreqProfile};
pub use karlin_params::KarlinParams;
pub use lookup_tables::{gapped_params, lookup_protein_params, ungapped_params};
