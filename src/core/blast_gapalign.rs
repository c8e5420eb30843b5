//! Gapped extension with traceback
//!
//! Reference: ncbi-blast/c++/src/algo/blast/core/blast_gapalign.c
//!            ALIGN_EX, BLAST_GappedAlignmentWithTraceback
//!
//! Semi-global x-drop DP with affine gaps. Rows run over sequence 1, columns
//! over sequence 2. Each computed cell leaves one state byte in the
//! `GapStateArrayPool`; the traceback walks those bytes back from the best
//! cell and feeds an `EditScriptBuilder`.
//!
//! Orientation of the edit operations:
//! - moving down a row only (gap in sequence 2) is `Del`
//! - moving along a row only (gap in sequence 1) is `Ins`

use crate::config::GapCosts;
use crate::core::error::{AlignError, Result};
use crate::core::gapinfo::{EditOpType, EditScriptBuilder, GapEditBlock, GapEditScript};
use crate::core::state_array::{GapStateArrayPool, StateRow};
use crate::utils::matrix::FullScoreMatrix;

/// Sentinel for cells outside the x-drop window
pub const MININT: i32 = i32::MIN / 2;

// Traceback state byte layout
const SCRIPT_SUB: u8 = 0x00;
/// Horizontal move: gap in sequence 1 (`Ins`)
const SCRIPT_GAP_IN_A: u8 = 0x01;
/// Vertical move: gap in sequence 2 (`Del`)
const SCRIPT_GAP_IN_B: u8 = 0x02;
const SCRIPT_OP_MASK: u8 = 0x03;
const SCRIPT_EXTEND_GAP_A: u8 = 0x10;
const SCRIPT_EXTEND_GAP_B: u8 = 0x40;

#[derive(Debug, Clone, Copy)]
struct GapDp {
    best: i32,
    /// Best score of a vertical gap entering the next row at this column
    best_gap: i32,
}

impl Default for GapDp {
    fn default() -> Self {
        Self { best: MININT, best_gap: MININT }
    }
}

/// One-directional extension result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub score: i32,
    /// Residues of sequence 1 covered
    pub consumed1: usize,
    pub consumed2: usize,
    /// Operations in extension order (away from the anchor)
    pub script: GapEditScript,
}

/// X-drop gapped aligner. Owns its DP row, traceback pool and edit-script
/// builder; one instance per worker.
#[derive(Debug)]
pub struct GapAligner {
    gap: GapCosts,
    x_drop: i32,
    dp: Vec<GapDp>,
    pool: GapStateArrayPool,
    rows: Vec<(StateRow, usize)>,
    builder: EditScriptBuilder,
    cells: usize,
}

impl GapAligner {
    /// `x_drop` is in raw score units and is raised to at least one
    /// gap opening (`open + extend`).
    pub fn new(gap: GapCosts, x_drop: i32) -> Self {
        Self::with_pool(gap, x_drop, GapStateArrayPool::new())
    }

    pub fn with_pool(gap: GapCosts, x_drop: i32, pool: GapStateArrayPool) -> Self {
        Self {
            gap,
            x_drop,
            dp: Vec::new(),
            pool,
            rows: Vec::new(),
            builder: EditScriptBuilder::new(),
            cells: 0,
        }
    }

    pub fn gap_costs(&self) -> GapCosts {
        self.gap
    }

    pub fn x_drop(&self) -> i32 {
        self.x_drop.max(self.gap.open + self.gap.extend)
    }

    pub fn pool(&self) -> &GapStateArrayPool {
        &self.pool
    }

    /// DP cells computed since construction
    pub fn cells_computed(&self) -> usize {
        self.cells
    }

    /// Extend from the corner before `a[0]`/`b[0]` (or after the last
    /// residues when `reverse`), returning the best-scoring prefix alignment.
    ///
    /// Reference: blast_gapalign.c ALIGN_EX
    pub fn align_ex(
        &mut self,
        a: &[u8],
        b: &[u8],
        matrix: &FullScoreMatrix,
        reverse: bool,
    ) -> Result<Extension> {
        let m = a.len();
        let n = b.len();
        let gap_open = self.gap.open;
        let gap_extend = self.gap.extend;
        if gap_open < 0 || gap_extend < 0 || gap_open + gap_extend <= 0 {
            return Err(AlignError::precondition(format!(
                "gap costs must be non-negative with a positive sum (open {}, extend {})",
                gap_open, gap_extend
            )));
        }
        if m == 0 || n == 0 {
            return Ok(Extension {
                score: 0,
                consumed1: 0,
                consumed2: 0,
                script: GapEditScript::new(),
            });
        }

        let res_a = |i: usize| if reverse { a[m - i] } else { a[i - 1] };
        let res_b = |j: usize| if reverse { b[n - j] } else { b[j - 1] };

        let gap_open_extend = gap_open + gap_extend;
        let x_dropoff = self.x_drop();
        let num_extra_cells = if gap_extend > 0 {
            (x_dropoff / gap_extend) as usize + 3
        } else {
            n + 3
        };

        self.pool.reset();
        self.rows.clear();
        self.rows
            .try_reserve(m + 1)
            .map_err(|_| AlignError::MemoryLimit { requested: m + 1 })?;
        if self.dp.len() < n + 2 {
            self.dp
                .try_reserve(n + 2 - self.dp.len())
                .map_err(|_| AlignError::MemoryLimit {
                    requested: (n + 2) * std::mem::size_of::<GapDp>(),
                })?;
            self.dp.resize(n + 2, GapDp::default());
        }

        // Row 0: leading horizontal gaps until they fall out of the window
        self.dp[0] = GapDp { best: 0, best_gap: -gap_open_extend };
        let mut score = -gap_open_extend;
        let mut b_size = 1;
        while b_size <= n && score >= -x_dropoff {
            self.dp[b_size] = GapDp { best: score, best_gap: score - gap_open_extend };
            score -= gap_extend;
            b_size += 1;
        }
        let row0 = self.pool.acquire(b_size)?;
        self.pool.row_mut(&row0)[1..].fill(SCRIPT_GAP_IN_A);
        self.rows.push((row0, 0));

        let mut best_score = 0;
        let mut best_a = 0;
        let mut best_b = 0;
        let mut first_b_index = 0;

        for a_index in 1..=m {
            let row = self.pool.acquire(b_size - first_b_index + num_extra_cells)?;
            let start_col = first_b_index;
            self.rows.push((row, start_col));

            let residue_a = res_a(a_index);
            let mut last_b_index = first_b_index;
            let mut score = MININT;
            let mut score_gap_row = MININT;

            for b_index in first_b_index..b_size {
                let next_score = if b_index < n {
                    self.dp[b_index]
                        .best
                        .saturating_add(matrix.score(residue_a, res_b(b_index + 1)))
                } else {
                    MININT
                };
                let mut score_gap_col = self.dp[b_index].best_gap;

                let mut state = SCRIPT_SUB;
                if score < score_gap_col {
                    score = score_gap_col;
                    state = SCRIPT_GAP_IN_B;
                }
                if score < score_gap_row {
                    score = score_gap_row;
                    state = SCRIPT_GAP_IN_A;
                }

                if best_score - score > x_dropoff {
                    if b_index == first_b_index {
                        first_b_index += 1;
                    } else {
                        self.dp[b_index] = GapDp::default();
                    }
                } else {
                    last_b_index = b_index;
                    if score > best_score {
                        best_score = score;
                        best_a = a_index;
                        best_b = b_index;
                    }

                    score_gap_col = score_gap_col.saturating_sub(gap_extend);
                    if score_gap_col < score - gap_open_extend {
                        self.dp[b_index].best_gap = score - gap_open_extend;
                    } else {
                        self.dp[b_index].best_gap = score_gap_col;
                        state |= SCRIPT_EXTEND_GAP_B;
                    }

                    score_gap_row = score_gap_row.saturating_sub(gap_extend);
                    if score_gap_row < score - gap_open_extend {
                        score_gap_row = score - gap_open_extend;
                    } else {
                        state |= SCRIPT_EXTEND_GAP_A;
                    }
                    self.dp[b_index].best = score;
                }

                score = next_score;
                self.pool.row_mut(&row)[b_index - start_col] = state;
            }
            self.cells += b_size - start_col;

            if first_b_index == b_size {
                break;
            }

            if last_b_index + 1 < b_size {
                b_size = last_b_index + 1;
            } else {
                // Trailing horizontal gaps past the last column of the window
                while score_gap_row >= best_score - x_dropoff && b_size <= n {
                    self.dp[b_size] = GapDp {
                        best: score_gap_row,
                        best_gap: score_gap_row - gap_open_extend,
                    };
                    score_gap_row -= gap_extend;
                    self.pool.row_mut(&row)[b_size - start_col] = SCRIPT_GAP_IN_A;
                    b_size += 1;
                }
            }
            if b_size <= n {
                self.dp[b_size] = GapDp::default();
                b_size += 1;
            }
        }

        let script = self.traceback(best_a, best_b)?;
        Ok(Extension { score: best_score, consumed1: best_a, consumed2: best_b, script })
    }

    /// Walk the state bytes back from `(a_index, b_index)` to the origin.
    fn traceback(&mut self, mut a_index: usize, mut b_index: usize) -> Result<GapEditScript> {
        self.builder.begin();
        let mut script = SCRIPT_SUB;
        while a_index > 0 || b_index > 0 {
            let (row, start_col) = self.rows[a_index];
            let next_script = self.pool.row(&row)[b_index - start_col];
            script = match script {
                SCRIPT_GAP_IN_A if next_script & SCRIPT_EXTEND_GAP_A != 0 => SCRIPT_GAP_IN_A,
                SCRIPT_GAP_IN_B if next_script & SCRIPT_EXTEND_GAP_B != 0 => SCRIPT_GAP_IN_B,
                _ => next_script & SCRIPT_OP_MASK,
            };

            let op = match script {
                SCRIPT_GAP_IN_A => {
                    b_index -= 1;
                    EditOpType::Ins
                }
                SCRIPT_GAP_IN_B => {
                    a_index -= 1;
                    EditOpType::Del
                }
                _ => {
                    a_index -= 1;
                    b_index -= 1;
                    EditOpType::Sub
                }
            };
            self.builder.push(op)?;
        }
        // The builder reverses traceback order into DP order.
        Ok(self.builder.finish())
    }

    /// Two-sided extension through the seed pair `(seed1, seed2)`.
    ///
    /// The left pass covers the seed and everything before it, the right
    /// pass everything after. Returns the combined score and the block in
    /// sequence order.
    ///
    /// Reference: blast_gapalign.c BLAST_GappedAlignmentWithTraceback
    pub fn extend_from_seed(
        &mut self,
        seq1: &[u8],
        seq2: &[u8],
        seed1: usize,
        seed2: usize,
        matrix: &FullScoreMatrix,
    ) -> Result<(i32, GapEditBlock)> {
        if seed1 >= seq1.len() || seed2 >= seq2.len() {
            return Err(AlignError::precondition(format!(
                "seed ({}, {}) outside sequences of length {} and {}",
                seed1,
                seed2,
                seq1.len(),
                seq2.len()
            )));
        }

        let left = self.align_ex(&seq1[..=seed1], &seq2[..=seed2], matrix, true)?;
        let right = self.align_ex(&seq1[seed1 + 1..], &seq2[seed2 + 1..], matrix, false)?;

        let mut script = left.script;
        script.reverse();
        script.append(&right.script);

        let start1 = seed1 + 1 - left.consumed1;
        let start2 = seed2 + 1 - left.consumed2;
        let block = GapEditBlock::new(script, start1, start2, seq1.len(), seq2.len());
        Ok((left.score + right.score, block))
    }
}

/// Score an existing script placed at `(start1, start2)`.
pub fn score_script(
    script: &GapEditScript,
    seq1: &[u8],
    seq2: &[u8],
    start1: usize,
    start2: usize,
    matrix: &FullScoreMatrix,
    gap: GapCosts,
) -> i32 {
    let (mut i, mut j) = (start1, start2);
    let mut score = 0;
    for run in script.runs() {
        match run.op_type {
            EditOpType::Sub => {
                for k in 0..run.num {
                    let a = seq1.get(i + k).copied().unwrap_or(0);
                    let b = seq2.get(j + k).copied().unwrap_or(0);
                    score += matrix.score(a, b);
                }
            }
            EditOpType::Ins | EditOpType::Del => score -= gap.cost(run.num),
            EditOpType::Decline => {}
        }
        let (d1, d2) = run.op_type.consumes();
        i += d1 * run.num;
        j += d2 * run.num;
    }
    score
}

/// Seed for a gapped extension: the midpoint of the best ungapped segment
/// over all diagonals. `None` when no pair scores positive.
///
/// Reference: blast_gapalign.c BlastGetStartForGappedAlignment
pub fn best_ungapped_seed(
    seq1: &[u8],
    seq2: &[u8],
    matrix: &FullScoreMatrix,
) -> Option<(usize, usize, i32)> {
    let (m, n) = (seq1.len(), seq2.len());
    let mut best: Option<(usize, usize, i32)> = None;

    // diagonal d = j - i + (m - 1), walked in order of increasing d
    for d in 0..(m + n).saturating_sub(1) {
        let (i0, j0) = if d < m { (m - 1 - d, 0) } else { (0, d + 1 - m) };
        let len = (m - i0).min(n - j0);

        let mut run = 0;
        let mut run_start = 0;
        for k in 0..len {
            if run <= 0 {
                run = 0;
                run_start = k;
            }
            run += matrix.score(seq1[i0 + k], seq2[j0 + k]);
            if run > 0 && best.map_or(true, |(_, _, s)| run > s) {
                let mid = run_start + (k - run_start) / 2;
                best = Some((i0 + mid, j0 + mid, run));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gapinfo::EditOpType::*;
    use crate::utils::matrix::{packed_matrix, FullScoreMatrix};
    use crate::config::ScoringMatrix;

    fn simple_matrix() -> FullScoreMatrix {
        FullScoreMatrix::from_match_mismatch(5, -4)
    }

    #[test]
    fn test_single_substitution_extension() {
        let matrix = simple_matrix();
        let mut aligner = GapAligner::new(GapCosts::new(0, 10), 20);
        let (score, block) = aligner
            .extend_from_seed(b"ACDEFG", b"ACDAFG", 0, 0, &matrix)
            .unwrap();
        assert_eq!(score, 21);
        assert_eq!(block.script, GapEditScript::from_runs([(Sub, 6)]));
        assert_eq!((block.start1, block.start2), (0, 0));
        assert!(block.validate().is_ok());
    }

    #[test]
    fn test_extension_opens_gap() {
        let matrix = simple_matrix();
        let mut aligner = GapAligner::new(GapCosts::new(5, 2), 30);
        // one residue deleted from the second sequence
        let ext = aligner
            .align_ex(b"ACDEFGHIKL", b"ACDEGHIKL", &matrix, false)
            .unwrap();
        assert_eq!(ext.script, GapEditScript::from_runs([(Sub, 4), (Del, 1), (Sub, 5)]));
        assert_eq!(ext.score, 9 * 5 - 7);
        assert_eq!((ext.consumed1, ext.consumed2), (10, 9));
    }

    #[test]
    fn test_reverse_extension_reads_backwards() {
        let matrix = simple_matrix();
        let mut aligner = GapAligner::new(GapCosts::new(5, 2), 30);
        let ext = aligner.align_ex(b"WWWACD", b"ACD", &matrix, true).unwrap();
        assert_eq!(ext.score, 15);
        assert_eq!((ext.consumed1, ext.consumed2), (3, 3));
    }

    #[test]
    fn test_x_drop_stops_extension() {
        let matrix = simple_matrix();
        let mut aligner = GapAligner::new(GapCosts::new(5, 2), 8);
        let ext = aligner
            .align_ex(b"ACDWWWWWWWWACD", b"ACDYYYYYYYYACD", &matrix, false)
            .unwrap();
        assert_eq!(ext.score, 15);
        assert_eq!(ext.consumed1, 3);
    }

    #[test]
    fn test_traceback_is_deterministic() {
        let packed = packed_matrix(ScoringMatrix::Blosum62);
        let matrix = packed.unpack().unwrap();
        let s1 = b"MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQ";
        let s2 = b"MKTAYIAKQRQISFVKSHFSRQDILDLWIYHTQGYFPDWQNYTPGPGVRYPLTFGWCYKLVPVE";
        let mut first = GapAligner::new(GapCosts::new(11, 1), 38);
        let mut second = GapAligner::new(GapCosts::new(11, 1), 38);
        let a = first.extend_from_seed(s1, s2, 5, 5, &matrix).unwrap();
        let b = second.extend_from_seed(s1, s2, 5, 5, &matrix).unwrap();
        let again = first.extend_from_seed(s1, s2, 5, 5, &matrix).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, again);
    }

    #[test]
    fn test_score_script_matches_extension() {
        let matrix = simple_matrix();
        let gap = GapCosts::new(5, 2);
        let mut aligner = GapAligner::new(gap, 30);
        let (score, block) = aligner
            .extend_from_seed(b"ACDEFGHIKL", b"ACDEGHIKL", 2, 2, &matrix)
            .unwrap();
        let rescored = score_script(
            &block.script,
            b"ACDEFGHIKL",
            b"ACDEGHIKL",
            block.start1,
            block.start2,
            &matrix,
            gap,
        );
        assert_eq!(score, rescored);
    }

    #[test]
    fn test_best_ungapped_seed() {
        let matrix = simple_matrix();
        let (i, j, score) = best_ungapped_seed(b"WWACDEF", b"ACDEF", &matrix).unwrap();
        assert_eq!(score, 25);
        assert_eq!(i - j, 2);
        assert!(best_ungapped_seed(b"AAA", b"CCC", &matrix).is_none());
    }

    #[test]
    fn test_seed_outside_sequence() {
        let matrix = simple_matrix();
        let mut aligner = GapAligner::new(GapCosts::new(5, 2), 30);
        assert!(matches!(
            aligner.extend_from_seed(b"AC", b"AC", 2, 0, &matrix),
            Err(AlignError::Precondition(_))
        ));
    }
}
