//! Ungapped Karlin-Altschul lambda and entropy for a 20x20 score table
//! under a pair of residue compositions.
//!
//! Reference: blast_stat.c Blast_KarlinBlkUngappedCalc, BlastScoreFreqCalc

use crate::utils::matrix::TRUE_AA_COUNT;

/// Square score table over the 20 true amino acids
pub type AaScores = [[i32; TRUE_AA_COUNT]; TRUE_AA_COUNT];

/// Probability of each integer score under independent residue draws.
#[derive(Debug, Clone)]
pub struct ScoreFreqProfile {
    sprob: Vec<f64>,
    score_min: i32,
    obs_min: i32,
    obs_max: i32,
    score_avg: f64,
}

impl ScoreFreqProfile {
    /// Accumulate `freq1[i] * freq2[j]` into the bin of `scores[i][j]`.
    pub fn from_scores(scores: &AaScores, freq1: &[f64], freq2: &[f64]) -> Self {
        let score_min = scores.iter().flatten().copied().min().unwrap_or(0);
        let score_max = scores.iter().flatten().copied().max().unwrap_or(0);
        let mut sprob = vec![0.0; (score_max - score_min + 1) as usize];

        for (i, row) in scores.iter().enumerate() {
            for (j, &s) in row.iter().enumerate() {
                sprob[(s - score_min) as usize] += freq1[i] * freq2[j];
            }
        }

        let total: f64 = sprob.iter().sum();
        let mut obs_min = score_max;
        let mut obs_max = score_min;
        let mut score_avg = 0.0;
        for (k, &p) in sprob.iter().enumerate() {
            if p > 0.0 {
                let score = score_min + k as i32;
                obs_min = obs_min.min(score);
                obs_max = obs_max.max(score);
                score_avg += score as f64 * p;
            }
        }
        if total > 0.0 {
            score_avg /= total;
        }

        Self { sprob, score_min, obs_min, obs_max, score_avg }
    }

    pub fn prob(&self, score: i32) -> f64 {
        let idx = score - self.score_min;
        if idx < 0 {
            return 0.0;
        }
        self.sprob.get(idx as usize).copied().unwrap_or(0.0)
    }

    pub fn obs_min(&self) -> i32 {
        self.obs_min
    }

    pub fn obs_max(&self) -> i32 {
        self.obs_max
    }

    pub fn score_avg(&self) -> f64 {
        self.score_avg
    }

    fn scores(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (self.obs_min..=self.obs_max)
            .map(move |s| (s as f64, self.prob(s)))
            .filter(|&(_, p)| p > 0.0)
    }

    /// `sum_s p(s) * exp(lambda * s)` and its derivative in lambda
    fn moment(&self, lambda: f64) -> (f64, f64) {
        let mut sum = 0.0;
        let mut deriv = 0.0;
        for (s, p) in self.scores() {
            let e = p * (lambda * s).exp();
            sum += e;
            deriv += e * s;
        }
        (sum, deriv)
    }
}

const LAMBDA_ACCURACY: f64 = 1e-12;
const LAMBDA_ITER_MAX: usize = 200;

/// Solve `sum_s p(s) exp(lambda s) = 1` for the positive root.
///
/// Newton steps safeguarded by a bisection bracket; the expected score must
/// be negative and some score positive, otherwise no positive root exists.
pub fn compute_lambda(sfp: &ScoreFreqProfile) -> Result<f64, String> {
    if sfp.score_avg() >= 0.0 {
        return Err(format!("expected score {} must be negative", sfp.score_avg()));
    }
    if sfp.obs_max() <= 0 {
        return Err("no positive score is reachable".to_string());
    }

    // f(0) = 0 with f'(0) < 0, so f is negative just past zero.
    let f = |l: f64| sfp.moment(l).0 - 1.0;
    let mut lo = 0.0;
    let mut hi = 0.5;
    while f(hi) <= 0.0 {
        lo = hi;
        hi *= 2.0;
        if hi > 1e3 {
            return Err("lambda bracket did not close".to_string());
        }
    }

    let mut lambda = hi;
    for _ in 0..LAMBDA_ITER_MAX {
        let (sum, deriv) = sfp.moment(lambda);
        let fx = sum - 1.0;
        if fx > 0.0 {
            hi = lambda;
        } else {
            lo = lambda;
        }

        let mut next = lambda - fx / deriv;
        if !(next > lo && next < hi) || deriv <= 0.0 {
            next = 0.5 * (lo + hi);
        }
        if (next - lambda).abs() < LAMBDA_ACCURACY * lambda.max(1.0) {
            return Ok(next);
        }
        lambda = next;
    }

    Err(format!("lambda did not converge: last estimate {}", lambda))
}

/// Relative entropy `H = lambda * sum_s s p(s) exp(lambda s)` in nats.
pub fn compute_h(sfp: &ScoreFreqProfile, lambda: f64) -> f64 {
    let mut sum = 0.0;
    for (s, p) in sfp.scores() {
        sum += s * p * (lambda * s).exp();
    }
    lambda * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::matrix::{get_score, STD_AA_FREQS, TRUE_AA_ALPHABET};
    use crate::utils::matrix_tables;

    fn blosum62_scores() -> AaScores {
        let mut scores = [[0; TRUE_AA_COUNT]; TRUE_AA_COUNT];
        for (i, &a) in TRUE_AA_ALPHABET.iter().enumerate() {
            for (j, &b) in TRUE_AA_ALPHABET.iter().enumerate() {
                scores[i][j] = get_score(&matrix_tables::BLOSUM62, a, b);
            }
        }
        scores
    }

    #[test]
    fn test_blosum62_ungapped_lambda_and_h() {
        let sfp = ScoreFreqProfile::from_scores(&blosum62_scores(), &STD_AA_FREQS, &STD_AA_FREQS);
        assert!(sfp.score_avg() < 0.0);
        let lambda = compute_lambda(&sfp).unwrap();
        assert!((lambda - 0.3176).abs() < 1e-3, "lambda = {}", lambda);
        let h = compute_h(&sfp, lambda);
        assert!((h - 0.4012).abs() < 1e-3, "H = {}", h);
    }

    #[test]
    fn test_positive_expected_score_has_no_lambda() {
        let scores = [[1; TRUE_AA_COUNT]; TRUE_AA_COUNT];
        let sfp = ScoreFreqProfile::from_scores(&scores, &STD_AA_FREQS, &STD_AA_FREQS);
        assert!(compute_lambda(&sfp).is_err());
    }
}
