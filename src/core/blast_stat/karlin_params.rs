//! Karlin-Altschul statistical parameters and score conversions.
//!
//! Reference: blast_stat.c BLAST_KarlinStoE_simple

/// Karlin-Altschul statistical parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KarlinParams {
    pub lambda: f64,
    pub k: f64,
    /// Relative entropy of the scoring system (nats)
    pub h: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl KarlinParams {
    /// Normalised score in bits: `(lambda * S - ln K) / ln 2`
    pub fn bit_score(&self, raw_score: i32) -> f64 {
        (self.lambda * raw_score as f64 - self.k.ln()) / std::f64::consts::LN_2
    }

    /// Expected number of chance hits in an `m x n` comparison
    pub fn evalue(&self, raw_score: i32, m: usize, n: usize) -> f64 {
        let space = (m as f64) * (n as f64);
        space * self.k * (-self.lambda * raw_score as f64).exp()
    }

    /// Raw score equivalent to `bits` bits; used for x-drop thresholds.
    /// Reference: blast_parameters.c (gap_x_dropoff * NCBIMATH_LN2 / lambda)
    pub fn raw_from_bits(&self, bits: f64) -> i32 {
        (bits * std::f64::consts::LN_2 / self.lambda) as i32
    }
}
