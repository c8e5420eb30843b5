//! Extension of conserved blocks of a multiple alignment
//!
//! Reference: ncbi-cxx-toolkit algo/cobalt/blockedit.cpp
//!
//! A block is an ungapped region that appears at `starts[r]..starts[r] +
//! length` in every row `r`. Blocks may be grown towards the N terminus
//! (start moves left) or the C terminus (end moves right) as long as the
//! residues they absorb are not gaps and do not belong to a neighbouring
//! block.
//!
//! For one pair of rows the chosen extension is the length with the highest
//! cumulative score over the absorbed columns; zero is always a candidate,
//! so an extension never lowers the pair score. A common extension for a
//! set of rows is the minimum over all pairs in the set.

use rustc_hash::FxHashMap;

use super::sequence::GAP_CHAR;
use crate::core::error::{AlignError, Result};
use crate::utils::matrix::FullScoreMatrix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Start of the block in each row
    pub starts: Vec<usize>,
    pub length: usize,
}

impl Block {
    pub fn new(starts: Vec<usize>, length: usize) -> Self {
        Self { starts, length }
    }

    pub fn end(&self, row: usize) -> usize {
        self.starts[row] + self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminus {
    NTerminal,
    CTerminal,
}

/// Best extension of one block end for one pair of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairExtension {
    pub length: usize,
    /// Pair score added by extending `length` columns, never negative
    pub score_gain: i32,
    /// Both rows had at least one free residue at this end
    pub extensible: bool,
}

type CacheKey = (usize, usize, usize, Terminus);

pub struct BlockExtender<'a> {
    rows: Vec<&'a [u8]>,
    matrix: &'a FullScoreMatrix,
    blocks: Vec<Block>,
    max_extension: usize,
    cache: FxHashMap<CacheKey, PairExtension>,
}

impl<'a> BlockExtender<'a> {
    /// Wrap `rows` and a block model; the model is validated up front.
    pub fn new(
        rows: Vec<&'a [u8]>,
        matrix: &'a FullScoreMatrix,
        blocks: Vec<Block>,
    ) -> Result<Self> {
        let extender = Self {
            rows,
            matrix,
            blocks,
            max_extension: usize::MAX,
            cache: FxHashMap::default(),
        };
        extender.validate_blocks()?;
        Ok(extender)
    }

    /// Cap on the number of residues added at each terminus
    pub fn with_max_extension(mut self, max_extension: usize) -> Self {
        self.max_extension = max_extension;
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Every block has a start per row, lies inside each row, and blocks
    /// are ordered and disjoint within every row.
    pub fn validate_blocks(&self) -> Result<()> {
        for (b, block) in self.blocks.iter().enumerate() {
            if block.starts.len() != self.rows.len() {
                return Err(AlignError::precondition(format!(
                    "block {} has {} starts for {} rows",
                    b,
                    block.starts.len(),
                    self.rows.len()
                )));
            }
            if block.length == 0 {
                return Err(AlignError::precondition(format!("block {} is empty", b)));
            }
            for (r, row) in self.rows.iter().enumerate() {
                if block.end(r) > row.len() {
                    return Err(AlignError::precondition(format!(
                        "block {} ends at {} beyond row {} of length {}",
                        b,
                        block.end(r),
                        r,
                        row.len()
                    )));
                }
                if b > 0 && self.blocks[b - 1].end(r) > block.starts[r] {
                    return Err(AlignError::precondition(format!(
                        "blocks {} and {} overlap or are out of order in row {}",
                        b - 1,
                        b,
                        r
                    )));
                }
            }
        }
        Ok(())
    }

    /// Sum of pair scores over the columns of a block; `None` when a row
    /// or block index is out of range.
    pub fn block_score(&self, row1: usize, row2: usize, block: usize) -> Option<i32> {
        let b = self.blocks.get(block)?;
        let seq1 = self.rows.get(row1)?.get(*b.starts.get(row1)?..)?;
        let seq2 = self.rows.get(row2)?.get(*b.starts.get(row2)?..)?;
        Some(
            seq1.iter()
                .zip(seq2)
                .take(b.length)
                .map(|(&r1, &r2)| self.matrix.score(r1, r2))
                .sum(),
        )
    }

    /// Free residues in `row` beyond the `terminus` end of `block`
    fn room(&self, row: usize, block: usize, terminus: Terminus) -> usize {
        let seq = self.rows[row];
        let b = &self.blocks[block];
        let free = match terminus {
            Terminus::NTerminal => {
                let limit = if block > 0 { self.blocks[block - 1].end(row) } else { 0 };
                seq[limit..b.starts[row]]
                    .iter()
                    .rev()
                    .take_while(|&&c| c != GAP_CHAR)
                    .count()
            }
            Terminus::CTerminal => {
                let limit = self
                    .blocks
                    .get(block + 1)
                    .map_or(seq.len(), |next| next.starts[row]);
                seq[b.end(row)..limit].iter().take_while(|&&c| c != GAP_CHAR).count()
            }
        };
        free.min(self.max_extension)
    }

    /// Score-maximising extension of `block` at `terminus` for two rows.
    /// Ties go to the shorter extension.
    pub fn extend_one_pair(
        &mut self,
        row1: usize,
        row2: usize,
        block: usize,
        terminus: Terminus,
    ) -> PairExtension {
        let key = (row1, row2, block, terminus);
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        let room = self.room(row1, block, terminus).min(self.room(row2, block, terminus));
        let b = &self.blocks[block];
        let (s1, s2) = (b.starts[row1], b.starts[row2]);
        let (e1, e2) = (b.end(row1), b.end(row2));

        let mut best = PairExtension { length: 0, score_gain: 0, extensible: room > 0 };
        let mut running = 0i32;
        for k in 1..=room {
            let (p1, p2) = match terminus {
                Terminus::NTerminal => (s1 - k, s2 - k),
                Terminus::CTerminal => (e1 + k - 1, e2 + k - 1),
            };
            running += self.matrix.score(self.rows[row1][p1], self.rows[row2][p2]);
            if running > best.score_gain {
                best.length = k;
                best.score_gain = running;
            }
        }

        self.cache.insert(key, best);
        best
    }

    /// Largest extension every pair in `rows` agrees on
    pub fn find_common_extension(
        &mut self,
        rows: &[usize],
        block: usize,
        terminus: Terminus,
    ) -> usize {
        if rows.len() < 2 {
            return 0;
        }
        let mut common = usize::MAX;
        for (a, &r1) in rows.iter().enumerate() {
            for &r2 in &rows[a + 1..] {
                common = common.min(self.extend_one_pair(r1, r2, block, terminus).length);
                if common == 0 {
                    return 0;
                }
            }
        }
        common
    }

    /// Grow every block at both ends by the common extension over all rows.
    /// Returns the `(n_terminal, c_terminal)` growth of each block.
    pub fn extend_blocks(&mut self) -> Result<Vec<(usize, usize)>> {
        let all_rows: Vec<usize> = (0..self.rows.len()).collect();
        let mut growth = Vec::with_capacity(self.blocks.len());

        for b in 0..self.blocks.len() {
            let n_ext = self.find_common_extension(&all_rows, b, Terminus::NTerminal);
            if n_ext > 0 {
                let block = &mut self.blocks[b];
                for start in &mut block.starts {
                    *start -= n_ext;
                }
                block.length += n_ext;
                self.cache.clear();
            }

            let c_ext = self.find_common_extension(&all_rows, b, Terminus::CTerminal);
            if c_ext > 0 {
                self.blocks[b].length += c_ext;
                self.cache.clear();
            }
            growth.push((n_ext, c_ext));
        }

        self.validate_blocks()?;
        Ok(growth)
    }
}
