//! Pairwise hits between sequences of an alignment set
//!
//! Reference: ncbi-cxx-toolkit algo/cobalt/hit.cpp CHit

use crate::core::gapinfo::{GapEditBlock, GapEditScript};

/// Half-open residue range `[start, end)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeqRange {
    pub start: usize,
    pub end: usize,
}

impl SeqRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn overlaps(&self, other: &SeqRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// An alignment between sequence `seq_index1` and sequence `seq_index2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub seq_index1: usize,
    pub seq_index2: usize,
    pub score: i32,
    pub bit_score: f64,
    pub evalue: f64,
    pub range1: SeqRange,
    pub range2: SeqRange,
    pub script: GapEditScript,
    /// Component alignments of a composite hit
    pub sub_hits: Vec<Hit>,
}

impl Hit {
    pub fn new(
        seq_index1: usize,
        seq_index2: usize,
        score: i32,
        range1: SeqRange,
        range2: SeqRange,
    ) -> Self {
        Self {
            seq_index1,
            seq_index2,
            score,
            bit_score: 0.0,
            evalue: f64::INFINITY,
            range1,
            range2,
            script: GapEditScript::new(),
            sub_hits: Vec::new(),
        }
    }

    /// Hit covering the aligned region of `block`
    pub fn from_block(
        seq_index1: usize,
        seq_index2: usize,
        score: i32,
        block: &GapEditBlock,
    ) -> Self {
        let mut hit = Self::new(
            seq_index1,
            seq_index2,
            score,
            SeqRange::new(block.start1, block.end1()),
            SeqRange::new(block.start2, block.end2()),
        );
        hit.script = block.script.clone();
        hit
    }

    /// Exchange the two sequences; the script is mirrored so that it still
    /// describes the same columns.
    pub fn swap_roles(&mut self) {
        std::mem::swap(&mut self.seq_index1, &mut self.seq_index2);
        std::mem::swap(&mut self.range1, &mut self.range2);
        self.script.mirror();
        for sub in &mut self.sub_hits {
            sub.swap_roles();
        }
    }

    /// Script lengths agree with both ranges.
    pub fn is_consistent(&self) -> bool {
        self.script.is_empty()
            || (self.script.seq1_len() == self.range1.len()
                && self.script.seq2_len() == self.range2.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gapinfo::EditOpType;

    #[test]
    fn test_swap_roles_mirrors_script() {
        let mut hit = Hit::new(3, 1, 40, SeqRange::new(0, 6), SeqRange::new(10, 15));
        hit.script = GapEditScript::from_runs([
            (EditOpType::Sub, 2),
            (EditOpType::Del, 1),
            (EditOpType::Sub, 3),
        ]);
        hit.sub_hits.push(Hit::new(3, 1, 10, SeqRange::new(0, 2), SeqRange::new(10, 12)));
        assert!(hit.is_consistent());

        hit.swap_roles();
        assert_eq!((hit.seq_index1, hit.seq_index2), (1, 3));
        assert_eq!(hit.range1, SeqRange::new(10, 15));
        assert_eq!(hit.script.runs()[1].op_type, EditOpType::Ins);
        assert_eq!(hit.sub_hits[0].seq_index1, 1);
        assert!(hit.is_consistent());
    }

    #[test]
    fn test_range_overlap() {
        assert!(SeqRange::new(0, 5).overlaps(&SeqRange::new(4, 8)));
        assert!(!SeqRange::new(0, 5).overlaps(&SeqRange::new(5, 8)));
        assert_eq!(SeqRange::new(3, 3).len(), 0);
    }
}
