//! Global affine-gap alignment (Gotoh)
//!
//! Reference: ncbi-cxx-toolkit algo/align/nw/nw_aligner.cpp CNWAligner
//!
//! Three states per cell: `H` best, `D` vertical gap (residue of sequence 1
//! against a gap), `I` horizontal gap (residue of sequence 2 against a gap).
//! A gap of `k` columns costs `open + k * extend`. Each end of each
//! sequence can be made free of end-gap penalties, and the DP can be
//! limited to the band `|i - j| <= band`.
//!
//! Tie-break: diagonal over vertical over horizontal; gap extension over
//! gap opening.

use super::traceback::{TracebackDir, TracebackMatrix};
use super::transcript::{Transcript, TranscriptOp};
use crate::config::{EndSpaceFree, GapCosts};
use crate::core::error::{AlignError, Result};
use crate::utils::matrix::FullScoreMatrix;

const NEG_INF: i32 = i32::MIN / 2;

/// Result of a global alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NwAlignment {
    pub score: i32,
    /// Covers both sequences end to end, free end gaps included
    pub transcript: Transcript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Best,
    Vertical,
    Horizontal,
}

fn zeroed_row(len: usize) -> Result<Vec<i32>> {
    let mut row = Vec::new();
    row.try_reserve_exact(len)
        .map_err(|_| AlignError::MemoryLimit { requested: len * std::mem::size_of::<i32>() })?;
    row.resize(len, NEG_INF);
    Ok(row)
}

#[derive(Debug)]
pub struct NwAligner {
    gap: GapCosts,
    end_space_free: EndSpaceFree,
    band: Option<usize>,
    traceback: TracebackMatrix,
}

impl NwAligner {
    pub fn new(gap: GapCosts) -> Self {
        Self {
            gap,
            end_space_free: EndSpaceFree::default(),
            band: None,
            traceback: TracebackMatrix::new(),
        }
    }

    pub fn with_end_space_free(mut self, end_space_free: EndSpaceFree) -> Self {
        self.end_space_free = end_space_free;
        self
    }

    pub fn with_band(mut self, band: Option<usize>) -> Self {
        self.band = band;
        self
    }

    pub fn gap_costs(&self) -> GapCosts {
        self.gap
    }

    #[inline]
    fn in_band(&self, i: usize, j: usize) -> bool {
        self.band.map_or(true, |b| i.abs_diff(j) <= b)
    }

    /// Align `seq1` (rows) against `seq2` (columns).
    pub fn align(
        &mut self,
        seq1: &[u8],
        seq2: &[u8],
        matrix: &FullScoreMatrix,
    ) -> Result<NwAlignment> {
        let (m, n) = (seq1.len(), seq2.len());
        let GapCosts { open, extend } = self.gap;
        if open < 0 || extend < 0 {
            return Err(AlignError::precondition(format!(
                "gap costs must be non-negative (open {}, extend {})",
                open, extend
            )));
        }
        let esf = self.end_space_free;
        let any_free = esf.left1 || esf.right1 || esf.left2 || esf.right2;
        if let Some(band) = self.band {
            if band < m.abs_diff(n) && !any_free {
                return Err(AlignError::precondition(format!(
                    "band {} cannot span sequences of length {} and {}",
                    band, m, n
                )));
            }
        }

        let open_extend = open + extend;
        self.traceback.reset(m + 1, n + 1)?;
        let mut h_prev = zeroed_row(n + 1)?;
        let mut h_cur = zeroed_row(n + 1)?;
        let mut d_prev = zeroed_row(n + 1)?;
        let mut d_cur = zeroed_row(n + 1)?;
        let mut last_col = zeroed_row(m + 1)?;

        // Row 0: leading gaps in sequence 1
        h_prev[0] = 0;
        for j in 1..=n {
            if !self.in_band(0, j) {
                break;
            }
            h_prev[j] = if esf.left1 { 0 } else { -self.gap.cost(j) };
            self.traceback.set(0, j, TracebackDir::Left, false, j >= 2);
        }
        last_col[0] = h_prev[n];

        for i in 1..=m {
            h_cur.fill(NEG_INF);
            d_cur.fill(NEG_INF);
            if self.in_band(i, 0) {
                h_cur[0] = if esf.left2 { 0 } else { -self.gap.cost(i) };
                d_cur[0] = h_cur[0];
                self.traceback.set(i, 0, TracebackDir::Up, i >= 2, false);
            }

            let lo = self.band.map_or(1, |b| i.saturating_sub(b).max(1));
            let hi = self.band.map_or(n, |b| (i + b).min(n));
            let residue1 = seq1[i - 1];
            let mut ins = NEG_INF;
            for j in lo..=hi {
                let d_open = h_prev[j].saturating_sub(open_extend);
                let d_ext = d_prev[j].saturating_sub(extend);
                let (d, d_extends) = if d_ext >= d_open { (d_ext, true) } else { (d_open, false) };

                let i_open = h_cur[j - 1].saturating_sub(open_extend);
                let i_ext = ins.saturating_sub(extend);
                let (iv, i_extends) = if i_ext >= i_open { (i_ext, true) } else { (i_open, false) };
                ins = iv;

                let diag = h_prev[j - 1].saturating_add(matrix.score(residue1, seq2[j - 1]));
                let (h, dir) = if diag >= d && diag >= iv {
                    (diag, TracebackDir::Diag)
                } else if d >= iv {
                    (d, TracebackDir::Up)
                } else {
                    (iv, TracebackDir::Left)
                };

                h_cur[j] = h;
                d_cur[j] = d;
                self.traceback.set(i, j, dir, d_extends, i_extends);
            }

            last_col[i] = h_cur[n];
            std::mem::swap(&mut h_prev, &mut h_cur);
            std::mem::swap(&mut d_prev, &mut d_cur);
        }

        // End cell: the corner unless trailing gaps are free
        let mut end = (m, n, h_prev[n]);
        if esf.right1 {
            for j in (0..n).rev() {
                if h_prev[j] > end.2 {
                    end = (m, j, h_prev[j]);
                }
            }
        }
        if esf.right2 {
            for i in (0..m).rev() {
                if last_col[i] > end.2 {
                    end = (i, n, last_col[i]);
                }
            }
        }
        if end.2 <= NEG_INF / 2 {
            return Err(AlignError::precondition("band excludes every end cell"));
        }

        let transcript = self.trace(seq1, seq2, end.0, end.1);
        Ok(NwAlignment { score: end.2, transcript })
    }

    fn trace(&self, seq1: &[u8], seq2: &[u8], end_i: usize, end_j: usize) -> Transcript {
        let (m, n) = (seq1.len(), seq2.len());
        let mut t = Transcript::new();
        for _ in end_j..n {
            t.push(TranscriptOp::Insert);
        }
        for _ in end_i..m {
            t.push(TranscriptOp::Delete);
        }

        let (mut i, mut j) = (end_i, end_j);
        let mut state = State::Best;
        while i > 0 || j > 0 {
            match state {
                State::Best if i == 0 => state = State::Horizontal,
                State::Best if j == 0 => state = State::Vertical,
                State::Best => match self.traceback.get(i, j) {
                    TracebackDir::Diag => {
                        let same = seq1[i - 1].eq_ignore_ascii_case(&seq2[j - 1]);
                        t.push(if same { TranscriptOp::Match } else { TranscriptOp::Replace });
                        i -= 1;
                        j -= 1;
                    }
                    TracebackDir::Up => state = State::Vertical,
                    TracebackDir::Left => state = State::Horizontal,
                },
                State::Vertical => {
                    t.push(TranscriptOp::Delete);
                    let extends = self.traceback.extends_up(i, j);
                    i -= 1;
                    if !extends {
                        state = State::Best;
                    }
                }
                State::Horizontal => {
                    t.push(TranscriptOp::Insert);
                    let extends = self.traceback.extends_left(i, j);
                    j -= 1;
                    if !extends {
                        state = State::Best;
                    }
                }
            }
        }
        t.reverse();
        t
    }
}
