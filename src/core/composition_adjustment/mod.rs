//! Composition-based score adjustment
//!
//! Rescales the target frequencies of a substitution matrix so that they
//! agree with the residue compositions of the two sequences being compared,
//! with the relative entropy fixed by the selected `RelEntropyMode`.
//!
//! Reference: ncbi-blast/c++/src/algo/blast/composition_adjustment/
//!            composition_adjustment.c Blast_AdjustComposition

pub mod optimize;
pub mod workspace;

pub use optimize::{AaMatrix, MARGINAL_TOLERANCE, RELATIVE_ENTROPY_TOLERANCE};
pub use workspace::CompositionWorkspace;

use crate::config::ScoringMatrix;
use crate::core::error::{AlignError, Result};
use crate::utils::matrix::{true_aa_index, TRUE_AA_COUNT};

/// Allowed deviation of a composition vector's sum from 1
pub const FREQUENCY_SUM_TOLERANCE: f64 = 1e-6;

/// Adjust the target frequencies of `matrix_name` to the compositions
/// `prob_array1` / `prob_array2` of sequences with `length1` / `length2`
/// true residues.
///
/// Returns the achieved relative entropy in nats. Compositions must already
/// be normalised; nothing is re-normalised here. A target the optimiser
/// cannot meet is not an error: the workspace then keeps the starting
/// frequencies, reports the implicit entropy and clears `converged`.
#[allow(clippy::too_many_arguments)]
pub fn adjust_composition(
    matrix_name: &str,
    length1: usize,
    length2: usize,
    prob_array1: &[f64],
    prob_array2: &[f64],
    pseudocounts: u32,
    specified_re: f64,
    workspace: &mut CompositionWorkspace,
) -> Result<f64> {
    let matrix: ScoringMatrix = matrix_name.parse()?;
    let p = validate_composition(prob_array1, "first")?;
    let q = validate_composition(prob_array2, "second")?;
    if length1 + pseudocounts as usize == 0 || length2 + pseudocounts as usize == 0 {
        return Err(AlignError::precondition(
            "a sequence without true residues needs pseudocounts",
        ));
    }

    workspace.load_matrix(matrix)?;
    workspace.first_seq_freq =
        blend_with_background(&p, length1, pseudocounts, &workspace.first_standard_freq);
    workspace.second_seq_freq =
        blend_with_background(&q, length2, pseudocounts, &workspace.second_standard_freq);

    Ok(workspace.optimize(specified_re))
}

fn validate_composition(prob: &[f64], which: &str) -> Result<[f64; TRUE_AA_COUNT]> {
    let arr: [f64; TRUE_AA_COUNT] = prob.try_into().map_err(|_| {
        AlignError::precondition(format!(
            "{} composition has {} entries, expected {}",
            which,
            prob.len(),
            TRUE_AA_COUNT
        ))
    })?;
    if let Some(bad) = arr.iter().find(|f| !f.is_finite() || **f < 0.0) {
        return Err(AlignError::precondition(format!(
            "{} composition contains invalid frequency {}",
            which, bad
        )));
    }
    let sum: f64 = arr.iter().sum();
    if (sum - 1.0).abs() > FREQUENCY_SUM_TOLERANCE {
        return Err(AlignError::precondition(format!(
            "{} composition sums to {}, not 1",
            which, sum
        )));
    }
    Ok(arr)
}

/// `(n * p_i + c * bg_i) / (n + c)`
fn blend_with_background(
    prob: &[f64; TRUE_AA_COUNT],
    length: usize,
    pseudocounts: u32,
    background: &[f64; TRUE_AA_COUNT],
) -> [f64; TRUE_AA_COUNT] {
    let n = length as f64;
    let c = pseudocounts as f64;
    let mut out = [0.0; TRUE_AA_COUNT];
    for i in 0..TRUE_AA_COUNT {
        out[i] = (n * prob[i] + c * background[i]) / (n + c);
    }
    out
}

/// Composition of `seq` over the 20 true amino acids and the number of
/// residues counted. Ambiguity codes, `X`, stops and gaps are skipped;
/// `None` when nothing was counted.
pub fn residue_frequencies(seq: &[u8]) -> Option<([f64; TRUE_AA_COUNT], usize)> {
    let mut counts = [0usize; TRUE_AA_COUNT];
    for &r in seq {
        if let Some(i) = true_aa_index(r) {
            counts[i] += 1;
        }
    }
    let total: usize = counts.iter().sum();
    if total == 0 {
        return None;
    }
    let mut freq = [0.0; TRUE_AA_COUNT];
    for (f, &c) in freq.iter_mut().zip(counts.iter()) {
        *f = c as f64 / total as f64;
    }
    Some((freq, total))
}
