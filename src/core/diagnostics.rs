//! Diagnostic counters for the pairwise alignment pipeline
//!
//! Enabled via the COMPALIGN_DIAGNOSTICS environment variable. Counters are
//! shared between rayon workers through an `Arc`, so every field is atomic.

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// Check if diagnostics are enabled via environment variable
pub fn diagnostics_enabled() -> bool {
    std::env::var("COMPALIGN_DIAGNOSTICS")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

#[derive(Default, Debug)]
pub struct PipelineDiagnostics {
    // Pair stage
    pub pairs_aligned: AtomicUsize,
    pub pairs_failed: AtomicUsize,
    pub pairs_without_hit: AtomicUsize,
    // Composition adjustment
    pub adjustments_converged: AtomicUsize,
    pub adjustments_fallback: AtomicUsize,
    // DP memory
    pub pool_nodes_allocated: AtomicUsize,
    pub dp_cells: AtomicUsize,
}

impl PipelineDiagnostics {
    #[inline]
    pub fn inc(counter: &AtomicUsize) {
        counter.fetch_add(1, AtomicOrdering::Relaxed);
    }

    #[inline]
    pub fn add(counter: &AtomicUsize, n: usize) {
        counter.fetch_add(n, AtomicOrdering::Relaxed);
    }

    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(AtomicOrdering::Relaxed)
    }

    /// Print a summary of all counters to stderr
    pub fn print_summary(&self) {
        eprintln!("\n=== compalign Pipeline Diagnostics ===");
        eprintln!("Pairs:");
        eprintln!("  Aligned:                    {}", Self::get(&self.pairs_aligned));
        eprintln!("  Failed:                     {}", Self::get(&self.pairs_failed));
        eprintln!("  Without hit:                {}", Self::get(&self.pairs_without_hit));

        let converged = Self::get(&self.adjustments_converged);
        let fallback = Self::get(&self.adjustments_fallback);
        eprintln!("Composition Adjustment:");
        eprintln!("  Converged:                  {}", converged);
        eprintln!("  Fell back to matrix:        {}", fallback);
        if converged + fallback > 0 {
            eprintln!(
                "  Fallback rate:              {:.2}%",
                100.0 * fallback as f64 / (converged + fallback) as f64
            );
        }

        eprintln!("Dynamic Programming:");
        eprintln!("  State-pool nodes allocated: {}", Self::get(&self.pool_nodes_allocated));
        eprintln!("  Cells computed:             {}", Self::get(&self.dp_cells));
        eprintln!("======================================\n");
    }
}
