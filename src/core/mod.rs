//! Core Alignment Algorithms
//!
//! Reference: ncbi-blast/c++/src/algo/blast/core/
//!            ncbi-blast/c++/src/algo/blast/composition_adjustment/
//!
//! # Structure
//!
//! - **Statistics** (`blast_stat`)
//!   - Ungapped lambda and relative entropy from score profiles
//!   - Published gapped Karlin-Altschul parameters
//!
//! - **Composition Adjustment** (`composition_adjustment`)
//!   - Relative-entropy constrained target frequencies
//!   - Adjusted integer scoring tables
//!
//! - **Gapped Alignment** (`blast_gapalign`, `gapinfo`, `state_array`)
//!   - X-drop DP with traceback
//!   - Edit scripts and alignment blocks
//!   - Pooled traceback state bytes
//!
//! - **HSP Chains** (`spliced_hits`)
//!
//! - **Diagnostics** (`diagnostics`, `error`)

// Statistics
pub mod blast_stat;

// Composition-based score adjustment
pub mod composition_adjustment;

// Gapped Alignment
pub mod blast_gapalign;
pub mod gapinfo;
pub mod state_array;

// HSP Management
pub mod spliced_hits;

// Diagnostics and errors
pub mod diagnostics;
pub mod error;

pub use error::{AlignError, Result};
