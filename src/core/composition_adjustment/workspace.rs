//! Per-pair state of a composition adjustment.
//!
//! Reference: composition_adjustment.h Blast_CompositionWorkspace

use super::optimize::{fit_marginals, fit_relative_entropy, relative_entropy, AaMatrix};
use crate::config::{RelEntropyMode, ScoringMatrix};
use crate::core::blast_stat::{compute_h, compute_lambda, AaScores, ScoreFreqProfile};
use crate::core::error::{AlignError, Result};
use crate::utils::matrix::{
    get_index, get_score, packed_matrix, FullScoreMatrix, PackedScoreMatrix, STD_AA_FREQS,
    TRUE_AA_ALPHABET, TRUE_AA_COUNT,
};

/// Ambiguity codes and the residues they stand for
const AMBIGUITY_CODES: [(u8, [u8; 2]); 3] = [
    (b'B', [b'N', b'D']),
    (b'Z', [b'Q', b'E']),
    (b'J', [b'I', b'L']),
];

/// Working storage for one pair of sequences.
///
/// Created per pair (or reused by one worker across pairs); every call to
/// `adjust_composition` overwrites all of it.
#[derive(Debug, Clone)]
pub struct CompositionWorkspace {
    pub flag: RelEntropyMode,
    /// Pseudocount-blended composition of the first sequence
    pub first_seq_freq: [f64; TRUE_AA_COUNT],
    pub second_seq_freq: [f64; TRUE_AA_COUNT],
    pub first_standard_freq: [f64; TRUE_AA_COUNT],
    pub second_standard_freq: [f64; TRUE_AA_COUNT],
    /// Joint target frequencies implied by the starting matrix
    pub mat_b: AaMatrix,
    /// Joint target frequencies after adjustment
    pub mat_final: AaMatrix,
    /// Entropy the adjustment aimed for (nats)
    pub relative_entropy: f64,
    pub achieved_relative_entropy: f64,
    /// Ungapped lambda of the starting matrix under background frequencies
    pub lambda: f64,
    /// `false` when the engine fell back to `mat_b`
    pub converged: bool,
    pub iterations: usize,
    pub alpha: f64,
    matrix: Option<ScoringMatrix>,
    scores: AaScores,
    implicit_relative_entropy: f64,
    final_row_freq: [f64; TRUE_AA_COUNT],
    final_col_freq: [f64; TRUE_AA_COUNT],
}

impl CompositionWorkspace {
    pub fn new(flag: RelEntropyMode) -> Self {
        let zero20 = [0.0; TRUE_AA_COUNT];
        let zero400 = [[0.0; TRUE_AA_COUNT]; TRUE_AA_COUNT];
        Self {
            flag,
            first_seq_freq: zero20,
            second_seq_freq: zero20,
            first_standard_freq: zero20,
            second_standard_freq: zero20,
            mat_b: zero400,
            mat_final: zero400,
            relative_entropy: 0.0,
            achieved_relative_entropy: 0.0,
            lambda: 0.0,
            converged: false,
            iterations: 0,
            alpha: 0.0,
            matrix: None,
            scores: [[0; TRUE_AA_COUNT]; TRUE_AA_COUNT],
            implicit_relative_entropy: 0.0,
            final_row_freq: zero20,
            final_col_freq: zero20,
        }
    }

    /// Matrix of the last adjustment, if any
    pub fn matrix(&self) -> Option<ScoringMatrix> {
        self.matrix
    }

    /// Relative entropy of `mat_b` against the background (nats)
    pub fn implicit_relative_entropy(&self) -> f64 {
        self.implicit_relative_entropy
    }

    /// Load the starting matrix: integer scores, background, lambda, `mat_b`.
    /// Skipped when the workspace already holds `matrix`.
    pub(super) fn load_matrix(&mut self, matrix: ScoringMatrix) -> Result<()> {
        if self.matrix == Some(matrix) {
            return Ok(());
        }
        let packed = packed_matrix(matrix);

        let total: f64 = STD_AA_FREQS.iter().sum();
        let mut bg = STD_AA_FREQS;
        bg.iter_mut().for_each(|f| *f /= total);

        for (i, &a) in TRUE_AA_ALPHABET.iter().enumerate() {
            for (j, &b) in TRUE_AA_ALPHABET.iter().enumerate() {
                self.scores[i][j] = get_score(packed, a, b);
            }
        }

        let sfp = ScoreFreqProfile::from_scores(&self.scores, &bg, &bg);
        let lambda = compute_lambda(&sfp).map_err(|e| {
            AlignError::precondition(format!(
                "matrix {} has no ungapped lambda: {}",
                packed.name, e
            ))
        })?;

        let mut z = 0.0;
        for i in 0..TRUE_AA_COUNT {
            for j in 0..TRUE_AA_COUNT {
                self.mat_b[i][j] = bg[i] * bg[j] * (lambda * self.scores[i][j] as f64).exp();
                z += self.mat_b[i][j];
            }
        }
        self.mat_b.iter_mut().flatten().for_each(|x| *x /= z);

        self.first_standard_freq = bg;
        self.second_standard_freq = bg;
        self.lambda = lambda;
        self.implicit_relative_entropy = relative_entropy(&self.mat_b, &bg, &bg);
        self.matrix = Some(matrix);
        Ok(())
    }

    /// `ln(mat_b_ij / (bg_i bg_j))`
    fn log_ratio(&self) -> AaMatrix {
        let mut lr = [[0.0; TRUE_AA_COUNT]; TRUE_AA_COUNT];
        for i in 0..TRUE_AA_COUNT {
            for j in 0..TRUE_AA_COUNT {
                lr[i][j] = (self.mat_b[i][j]
                    / (self.first_standard_freq[i] * self.second_standard_freq[j]))
                    .ln();
            }
        }
        lr
    }

    /// Run the adjustment selected by `flag` on the loaded compositions.
    pub(super) fn optimize(&mut self, specified_re: f64) -> f64 {
        let row = self.first_seq_freq;
        let col = self.second_seq_freq;
        self.iterations = 0;

        let outcome = match self.flag {
            RelEntropyMode::OldMatrixOldContext => {
                self.relative_entropy = self.implicit_relative_entropy;
                self.mat_final = self.mat_b;
                self.final_row_freq = self.first_standard_freq;
                self.final_col_freq = self.second_standard_freq;
                self.achieved_relative_entropy = self.implicit_relative_entropy;
                self.alpha = 1.0;
                self.converged = true;
                return self.achieved_relative_entropy;
            }
            RelEntropyMode::Unconstrained => {
                fit_marginals(&self.log_ratio(), 1.0, &row, &col).map(|joint| {
                    let re = relative_entropy(&joint, &row, &col);
                    self.relative_entropy = re;
                    (joint, re, 1.0, 1)
                })
            }
            RelEntropyMode::OldMatrixNewContext => {
                let sfp = ScoreFreqProfile::from_scores(&self.scores, &row, &col);
                compute_lambda(&sfp)
                    .map(|new_lambda| compute_h(&sfp, new_lambda))
                    .and_then(|target| {
                        self.relative_entropy = target;
                        fit_relative_entropy(&self.log_ratio(), &row, &col, target)
                    })
                    .map(|fit| (fit.joint, fit.relative_entropy, fit.alpha, fit.iterations))
            }
            RelEntropyMode::UserSpecified => {
                self.relative_entropy = specified_re;
                fit_relative_entropy(&self.log_ratio(), &row, &col, specified_re)
                    .map(|fit| (fit.joint, fit.relative_entropy, fit.alpha, fit.iterations))
            }
        };

        match outcome {
            Ok((joint, re, alpha, iterations)) => {
                self.mat_final = joint;
                self.final_row_freq = row;
                self.final_col_freq = col;
                self.achieved_relative_entropy = re;
                self.alpha = alpha;
                self.iterations = iterations;
                self.converged = true;
            }
            Err(reason) => {
                log::debug!(
                    "composition adjustment kept the unadjusted {} frequencies: {}",
                    self.matrix.map(ScoringMatrix::name).unwrap_or("?"),
                    reason
                );
                self.mat_final = self.mat_b;
                self.final_row_freq = self.first_standard_freq;
                self.final_col_freq = self.second_standard_freq;
                self.achieved_relative_entropy = self.implicit_relative_entropy;
                self.alpha = 1.0;
                self.converged = false;
            }
        }
        self.achieved_relative_entropy
    }

    /// Real-valued scores implied by `mat_final`, in the starting matrix's
    /// units (`ln(x_ij / (p_i q_j)) / lambda`).
    ///
    /// Residues absent from a composition keep their original score.
    pub fn adjusted_scores(&self) -> AaMatrix {
        let mut out = [[0.0; TRUE_AA_COUNT]; TRUE_AA_COUNT];
        for i in 0..TRUE_AA_COUNT {
            for j in 0..TRUE_AA_COUNT {
                let x = self.mat_final[i][j];
                let pq = self.final_row_freq[i] * self.final_col_freq[j];
                out[i][j] = if x > 0.0 && pq > 0.0 && self.lambda > 0.0 {
                    (x / pq).ln() / self.lambda
                } else {
                    self.scores[i][j] as f64
                };
            }
        }
        out
    }

    /// Integer scoring table for DP: the rounded adjusted scores, ambiguity
    /// codes re-derived as frequency-weighted averages of their members,
    /// everything else (`X`, `*`, unknown bytes) as in `packed`.
    pub fn adjusted_matrix(&self, packed: &PackedScoreMatrix) -> Result<FullScoreMatrix> {
        let mut full = packed.unpack()?;
        let scores = self.adjusted_scores();

        // Real-valued score of residue `a` (seq 1) against `b` (seq 2);
        // ambiguity codes expand to a weighted mean over their members.
        let expand = |r: u8, weights: &[f64; TRUE_AA_COUNT]| -> Option<Vec<(usize, f64)>> {
            let r = r.to_ascii_uppercase();
            if let Some(i) = TRUE_AA_ALPHABET.iter().position(|&c| c == r) {
                return Some(vec![(i, 1.0)]);
            }
            let (_, members) = AMBIGUITY_CODES.iter().find(|(code, _)| *code == r)?;
            let picked: Vec<(usize, f64)> = members
                .iter()
                .filter_map(|m| TRUE_AA_ALPHABET.iter().position(|c| c == m))
                .map(|i| (i, weights[i]))
                .collect();
            let total: f64 = picked.iter().map(|&(_, w)| w).sum();
            if total > 0.0 {
                Some(picked.into_iter().map(|(i, w)| (i, w / total)).collect())
            } else {
                None
            }
        };

        let symbols: Vec<u8> = TRUE_AA_ALPHABET
            .iter()
            .copied()
            .chain(
                AMBIGUITY_CODES
                    .iter()
                    .map(|&(code, _)| code)
                    .filter(|&code| get_index(packed, code).is_some()),
            )
            .collect();

        for &a in &symbols {
            let Some(rows) = expand(a, &self.final_row_freq) else { continue };
            for &b in &symbols {
                let Some(cols) = expand(b, &self.final_col_freq) else { continue };
                let mut s = 0.0;
                for &(i, wi) in &rows {
                    for &(j, wj) in &cols {
                        s += wi * wj * scores[i][j];
                    }
                }
                full.set_score(a, b, s.round() as i32);
            }
        }
        Ok(full)
    }
}
