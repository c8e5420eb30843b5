//! Unit tests for core/composition_adjustment

use compalign::config::{RelEntropyMode, ScoringMatrix};
use compalign::core::composition_adjustment::{
    adjust_composition, residue_frequencies, CompositionWorkspace, FREQUENCY_SUM_TOLERANCE,
};
use compalign::core::AlignError;
use compalign::utils::matrix::{get_score, packed_matrix, TRUE_AA_ALPHABET, TRUE_AA_COUNT};

use super::helpers::background;

/// A composition rich in hydrophobic residues
fn skewed() -> Vec<f64> {
    let (freq, _) = residue_frequencies(b"LLLLIIIVVVAAAGGFFMWKKEEDDSSTTNQRHCYP").unwrap();
    freq.to_vec()
}

fn row_sums(m: &[[f64; TRUE_AA_COUNT]; TRUE_AA_COUNT]) -> Vec<f64> {
    m.iter().map(|row| row.iter().sum()).collect()
}

fn col_sums(m: &[[f64; TRUE_AA_COUNT]; TRUE_AA_COUNT]) -> Vec<f64> {
    (0..TRUE_AA_COUNT).map(|j| m.iter().map(|row| row[j]).sum()).collect()
}

#[test]
fn test_user_target_is_met_with_observed_marginals() {
    let p = skewed();
    let q = background();
    let mut ws = CompositionWorkspace::new(RelEntropyMode::UserSpecified);
    let re = adjust_composition("BLOSUM62", 36, 200, &p, &q, 20, 0.3, &mut ws).unwrap();

    assert!(ws.converged);
    assert!((re - 0.3).abs() < 1e-6, "re = {}", re);
    assert_eq!(re, ws.achieved_relative_entropy);

    for (got, want) in row_sums(&ws.mat_final).iter().zip(ws.first_seq_freq.iter()) {
        assert!((got - want).abs() < 1e-8);
    }
    for (got, want) in col_sums(&ws.mat_final).iter().zip(ws.second_seq_freq.iter()) {
        assert!((got - want).abs() < 1e-8);
    }
}

#[test]
fn test_blended_frequencies_stay_normalised() {
    let p = skewed();
    let q = background();
    let mut ws = CompositionWorkspace::new(RelEntropyMode::OldMatrixNewContext);
    adjust_composition("BLOSUM62", 36, 200, &p, &q, 20, 0.0, &mut ws).unwrap();
    let s1: f64 = ws.first_seq_freq.iter().sum();
    let s2: f64 = ws.second_seq_freq.iter().sum();
    assert!((s1 - 1.0).abs() < FREQUENCY_SUM_TOLERANCE);
    assert!((s2 - 1.0).abs() < FREQUENCY_SUM_TOLERANCE);
    assert!(ws.achieved_relative_entropy.is_finite());
}

#[test]
fn test_unnormalised_input_is_a_precondition_failure() {
    let mut p = background();
    p.iter_mut().for_each(|f| *f *= 1.01);
    let q = background();
    let mut ws = CompositionWorkspace::new(RelEntropyMode::OldMatrixNewContext);
    assert!(matches!(
        adjust_composition("BLOSUM62", 100, 100, &p, &q, 20, 0.0, &mut ws),
        Err(AlignError::Precondition(_))
    ));
    assert!(matches!(
        adjust_composition("BLOSUM62", 100, 100, &q, &p, 20, 0.0, &mut ws),
        Err(AlignError::Precondition(_))
    ));
}

#[test]
fn test_unreachable_target_falls_back_to_implicit_entropy() {
    let p = skewed();
    let q = background();
    let mut ws = CompositionWorkspace::new(RelEntropyMode::UserSpecified);
    let re = adjust_composition("BLOSUM62", 36, 200, &p, &q, 20, -1.0, &mut ws).unwrap();

    assert!(!ws.converged);
    assert_eq!(re, ws.implicit_relative_entropy());
    assert_eq!(ws.mat_final, ws.mat_b);

    let packed = packed_matrix(ScoringMatrix::Blosum62);
    let full = ws.adjusted_matrix(packed).unwrap();
    for &a in TRUE_AA_ALPHABET {
        for &b in TRUE_AA_ALPHABET {
            assert_eq!(full.score(a, b), get_score(packed, a, b));
        }
    }
    assert!(ws.adjusted_scores().iter().flatten().all(|s| s.is_finite()));
}

#[test]
fn test_old_context_keeps_scores() {
    let q = background();
    let mut ws = CompositionWorkspace::new(RelEntropyMode::OldMatrixOldContext);
    adjust_composition("PAM250", 300, 300, &q, &q, 0, 0.0, &mut ws).unwrap();
    let packed = packed_matrix(ScoringMatrix::Pam250);
    let full = ws.adjusted_matrix(packed).unwrap();
    assert_eq!(full.score(b'W', b'W'), 17);
    assert_eq!(full.score(b'C', b'w'), get_score(packed, b'C', b'W'));
}
