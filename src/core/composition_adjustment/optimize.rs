//! Relative-entropy constrained target frequencies.
//!
//! Candidate joint distributions form the one-parameter family
//!
//! ```text
//! x_ij(alpha) = r_i * c_j * (mat_b_ij / (bg_i * bg_j))^alpha
//! ```
//!
//! where the dual variables `r`, `c` are fitted (Sinkhorn sweeps) so that
//! the row and column marginals equal the new compositions. `alpha = 0`
//! gives the independent distribution (entropy 0), `alpha = 1` the
//! minimum-discrimination fit to `mat_b`. The entropy grows monotonically
//! with `alpha`, so a bracketed secant (Illinois) search on `alpha` meets
//! any reachable target.

use crate::utils::matrix::TRUE_AA_COUNT;

pub type AaMatrix = [[f64; TRUE_AA_COUNT]; TRUE_AA_COUNT];

/// Largest marginal error accepted from the Sinkhorn sweeps
pub const MARGINAL_TOLERANCE: f64 = 1e-10;
/// Entropy error accepted by the outer search (nats)
pub const RELATIVE_ENTROPY_TOLERANCE: f64 = 1e-8;

const MAX_SINKHORN_SWEEPS: usize = 20_000;
const MAX_OUTER_ITERATIONS: usize = 200;
const ALPHA_MAX: f64 = 32.0;

/// A converged member of the family
#[derive(Debug, Clone)]
pub struct Fit {
    pub joint: AaMatrix,
    pub relative_entropy: f64,
    pub alpha: f64,
    /// Outer (alpha) iterations spent
    pub iterations: usize,
}

/// Fit the dual variables for one `alpha`.
pub fn fit_marginals(
    log_ratio: &AaMatrix,
    alpha: f64,
    row: &[f64; TRUE_AA_COUNT],
    col: &[f64; TRUE_AA_COUNT],
) -> Result<AaMatrix, String> {
    let mut kernel = [[0.0; TRUE_AA_COUNT]; TRUE_AA_COUNT];
    for i in 0..TRUE_AA_COUNT {
        for j in 0..TRUE_AA_COUNT {
            kernel[i][j] = (alpha * log_ratio[i][j]).exp();
        }
    }

    let mut r = [0.0; TRUE_AA_COUNT];
    let mut c = [1.0; TRUE_AA_COUNT];
    for _ in 0..MAX_SINKHORN_SWEEPS {
        for i in 0..TRUE_AA_COUNT {
            let s: f64 = (0..TRUE_AA_COUNT).map(|j| kernel[i][j] * c[j]).sum();
            r[i] = if row[i] > 0.0 { row[i] / s } else { 0.0 };
        }
        for j in 0..TRUE_AA_COUNT {
            let s: f64 = (0..TRUE_AA_COUNT).map(|i| r[i] * kernel[i][j]).sum();
            c[j] = if col[j] > 0.0 { col[j] / s } else { 0.0 };
        }
        if !r.iter().chain(c.iter()).all(|v| v.is_finite()) {
            return Err(format!("dual variables diverged at alpha {}", alpha));
        }

        // Columns are exact after the column sweep; rows decide convergence.
        let row_error = (0..TRUE_AA_COUNT)
            .map(|i| {
                let s: f64 = (0..TRUE_AA_COUNT).map(|j| r[i] * kernel[i][j] * c[j]).sum();
                (s - row[i]).abs()
            })
            .fold(0.0, f64::max);
        if row_error < MARGINAL_TOLERANCE {
            let mut joint = [[0.0; TRUE_AA_COUNT]; TRUE_AA_COUNT];
            for i in 0..TRUE_AA_COUNT {
                for j in 0..TRUE_AA_COUNT {
                    joint[i][j] = r[i] * kernel[i][j] * c[j];
                }
            }
            return Ok(joint);
        }
    }

    Err(format!("marginal fit did not converge at alpha {}", alpha))
}

/// `sum x_ij ln(x_ij / (row_i col_j))`, zero cells contributing nothing.
pub fn relative_entropy(
    joint: &AaMatrix,
    row: &[f64; TRUE_AA_COUNT],
    col: &[f64; TRUE_AA_COUNT],
) -> f64 {
    let mut re = 0.0;
    for i in 0..TRUE_AA_COUNT {
        for j in 0..TRUE_AA_COUNT {
            let x = joint[i][j];
            if x > 0.0 {
                re += x * (x / (row[i] * col[j])).ln();
            }
        }
    }
    re
}

fn evaluate(
    log_ratio: &AaMatrix,
    alpha: f64,
    row: &[f64; TRUE_AA_COUNT],
    col: &[f64; TRUE_AA_COUNT],
) -> Result<(AaMatrix, f64), String> {
    let joint = fit_marginals(log_ratio, alpha, row, col)?;
    let re = relative_entropy(&joint, row, col);
    Ok((joint, re))
}

/// Family member with the marginals `row`/`col` and entropy `target`.
pub fn fit_relative_entropy(
    log_ratio: &AaMatrix,
    row: &[f64; TRUE_AA_COUNT],
    col: &[f64; TRUE_AA_COUNT],
    target: f64,
) -> Result<Fit, String> {
    if !target.is_finite() || target < 0.0 {
        return Err(format!("target relative entropy {} is unreachable", target));
    }

    let mut lo = 0.0;
    let mut f_lo = -target;
    if f_lo.abs() < RELATIVE_ENTROPY_TOLERANCE {
        let (joint, re) = evaluate(log_ratio, 0.0, row, col)?;
        return Ok(Fit { joint, relative_entropy: re, alpha: 0.0, iterations: 0 });
    }

    let mut iterations = 1;
    let mut hi = 1.0;
    let (mut joint, mut re) = evaluate(log_ratio, hi, row, col)?;
    let mut f_hi = re - target;
    while f_hi < 0.0 {
        if f_hi.abs() < RELATIVE_ENTROPY_TOLERANCE {
            return Ok(Fit { joint, relative_entropy: re, alpha: hi, iterations });
        }
        lo = hi;
        f_lo = f_hi;
        hi *= 2.0;
        if hi > ALPHA_MAX {
            return Err(format!(
                "target relative entropy {} exceeds the reachable {}",
                target, re
            ));
        }
        iterations += 1;
        (joint, re) = evaluate(log_ratio, hi, row, col)?;
        f_hi = re - target;
    }

    // Illinois: halve the stale endpoint when the same side moves twice.
    let mut side = 0i8;
    loop {
        if f_hi.abs() < RELATIVE_ENTROPY_TOLERANCE {
            return Ok(Fit { joint, relative_entropy: re, alpha: hi, iterations });
        }
        if iterations >= MAX_OUTER_ITERATIONS {
            return Err(format!(
                "relative entropy search stalled after {} iterations (error {})",
                iterations, f_hi
            ));
        }
        iterations += 1;

        let alpha = hi - f_hi * (hi - lo) / (f_hi - f_lo);
        let (x, fx_re) = evaluate(log_ratio, alpha, row, col)?;
        let fx = fx_re - target;
        if fx.abs() < RELATIVE_ENTROPY_TOLERANCE {
            return Ok(Fit { joint: x, relative_entropy: fx_re, alpha, iterations });
        }

        if fx > 0.0 {
            hi = alpha;
            f_hi = fx;
            joint = x;
            re = fx_re;
            if side == 1 {
                f_lo *= 0.5;
            }
            side = 1;
        } else {
            lo = alpha;
            f_lo = fx;
            if side == -1 {
                f_hi *= 0.5;
            }
            side = -1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform() -> [f64; TRUE_AA_COUNT] {
        [1.0 / TRUE_AA_COUNT as f64; TRUE_AA_COUNT]
    }

    fn diagonal_log_ratio() -> AaMatrix {
        let mut lr = [[-0.5; TRUE_AA_COUNT]; TRUE_AA_COUNT];
        for (i, row) in lr.iter_mut().enumerate() {
            row[i] = 2.0;
        }
        lr
    }

    #[test]
    fn test_alpha_zero_is_independent() {
        let p = uniform();
        let joint = fit_marginals(&diagonal_log_ratio(), 0.0, &p, &p).unwrap();
        assert!((joint[3][7] - 1.0 / 400.0).abs() < 1e-12);
        assert!(relative_entropy(&joint, &p, &p).abs() < 1e-12);
    }

    #[test]
    fn test_fit_hits_target_entropy() {
        let p = uniform();
        let fit = fit_relative_entropy(&diagonal_log_ratio(), &p, &p, 0.5).unwrap();
        assert!((fit.relative_entropy - 0.5).abs() < RELATIVE_ENTROPY_TOLERANCE);
        for i in 0..TRUE_AA_COUNT {
            let row_sum: f64 = fit.joint[i].iter().sum();
            assert!((row_sum - p[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_target_is_rejected() {
        let p = uniform();
        assert!(fit_relative_entropy(&diagonal_log_ratio(), &p, &p, -0.1).is_err());
        assert!(fit_relative_entropy(&diagonal_log_ratio(), &p, &p, f64::NAN).is_err());
    }

    #[test]
    fn test_entropy_beyond_reach_is_rejected() {
        // uniform marginals cap the entropy at ln(20)
        let p = uniform();
        assert!(fit_relative_entropy(&diagonal_log_ratio(), &p, &p, 3.5).is_err());
    }
}
