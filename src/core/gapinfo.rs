//! Edit scripts for gapped alignments
//!
//! Reference: ncbi-blast/c++/src/algo/blast/core/gapinfo.c
//!
//! A `GapEditScript` is a run-length list of operations. Orientation:
//! - `Sub` consumes one residue of each sequence
//! - `Del` consumes a residue of sequence 1 only (gap in sequence 2)
//! - `Ins` consumes a residue of sequence 2 only (gap in sequence 1)
//! - `Decline` consumes one of each but is not scored

use crate::core::error::{AlignError, Result};

/// Operation type of one edit-script run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOpType {
    Sub,
    Ins,
    Del,
    Decline,
}

impl EditOpType {
    /// Residues of (sequence 1, sequence 2) consumed per column
    #[inline]
    pub fn consumes(self) -> (usize, usize) {
        match self {
            EditOpType::Sub | EditOpType::Decline => (1, 1),
            EditOpType::Del => (1, 0),
            EditOpType::Ins => (0, 1),
        }
    }

    /// The same column seen with the sequences swapped
    pub fn mirrored(self) -> Self {
        match self {
            EditOpType::Ins => EditOpType::Del,
            EditOpType::Del => EditOpType::Ins,
            other => other,
        }
    }

    pub fn is_gap(self) -> bool {
        matches!(self, EditOpType::Ins | EditOpType::Del)
    }
}

/// `num` consecutive columns of the same operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditRun {
    pub op_type: EditOpType,
    pub num: usize,
}

/// Column statistics of an aligned region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditStats {
    pub identities: usize,
    pub mismatches: usize,
    pub declined: usize,
    /// Gapped columns
    pub gaps: usize,
    pub gap_opens: usize,
    pub columns: usize,
}

impl EditStats {
    /// Percent identity over all columns
    pub fn percent_identity(&self) -> f64 {
        if self.columns == 0 {
            return 0.0;
        }
        100.0 * self.identities as f64 / self.columns as f64
    }
}

/// Run-length encoded alignment operations in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GapEditScript {
    runs: Vec<EditRun>,
}

impl GapEditScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(op, num)` pairs, merging neighbours and dropping empty runs.
    pub fn from_runs<I: IntoIterator<Item = (EditOpType, usize)>>(runs: I) -> Self {
        let mut script = Self::new();
        for (op_type, num) in runs {
            script.push_run(op_type, num);
        }
        script
    }

    pub fn runs(&self) -> &[EditRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// Residues of sequence 1 covered (`Sub + Del + Decline`)
    pub fn seq1_len(&self) -> usize {
        self.runs.iter().map(|r| r.num * r.op_type.consumes().0).sum()
    }

    /// Residues of sequence 2 covered (`Sub + Ins + Decline`)
    pub fn seq2_len(&self) -> usize {
        self.runs.iter().map(|r| r.num * r.op_type.consumes().1).sum()
    }

    pub fn num_columns(&self) -> usize {
        self.runs.iter().map(|r| r.num).sum()
    }

    /// Append a run, extending the last one when the operation repeats.
    pub fn push_run(&mut self, op_type: EditOpType, num: usize) {
        if num == 0 {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.op_type == op_type => last.num += num,
            _ => self.runs.push(EditRun { op_type, num }),
        }
    }

    pub fn reverse(&mut self) {
        self.runs.reverse();
    }

    /// Concatenate `other` after `self`.
    pub fn append(&mut self, other: &GapEditScript) {
        for run in &other.runs {
            self.push_run(run.op_type, run.num);
        }
    }

    /// Swap the roles of the two sequences.
    pub fn mirror(&mut self) {
        for run in &mut self.runs {
            run.op_type = run.op_type.mirrored();
        }
    }

    /// Expand into one operation per column.
    pub fn columns(&self) -> impl Iterator<Item = EditOpType> + '_ {
        self.runs
            .iter()
            .flat_map(|r| std::iter::repeat(r.op_type).take(r.num))
    }

    /// Trim the script at the first point where at least `cut1` residues of
    /// sequence 1 and `cut2` of sequence 2 have been consumed.
    ///
    /// `cut_begin` drops everything before that point, otherwise everything
    /// after it. A substitution run is split exactly at the cut; gap runs
    /// are consumed whole. Returns the residues consumed up to the cut (the
    /// offset shift when cutting the beginning, the new lengths otherwise),
    /// or `None` when the script never reaches the cut.
    ///
    /// Reference: blast_hits.c s_CutOffGapEditScript
    pub fn cut_off(&mut self, cut1: usize, cut2: usize, cut_begin: bool) -> Option<(usize, usize)> {
        let mut consumed1 = 0;
        let mut consumed2 = 0;
        let mut found: Option<(usize, usize)> = None;

        'runs: for (index, run) in self.runs.iter().enumerate() {
            let (d1, d2) = run.op_type.consumes();
            if d1 == 1 && d2 == 1 {
                for opid in 0..run.num {
                    consumed1 += 1;
                    consumed2 += 1;
                    if consumed1 >= cut1 && consumed2 >= cut2 {
                        found = Some((index, opid + 1));
                        break 'runs;
                    }
                }
            } else {
                consumed1 += d1 * run.num;
                consumed2 += d2 * run.num;
                if consumed1 >= cut1 && consumed2 >= cut2 {
                    found = Some((index, run.num));
                    break 'runs;
                }
            }
        }

        let (index, used) = found?;
        if cut_begin {
            let mut tail = Vec::with_capacity(self.runs.len() - index);
            let run = self.runs[index];
            if used < run.num {
                tail.push(EditRun { op_type: run.op_type, num: run.num - used });
            }
            tail.extend_from_slice(&self.runs[index + 1..]);
            self.runs = tail;
        } else {
            self.runs.truncate(index + 1);
            if let Some(last) = self.runs.last_mut() {
                last.num = used;
            }
        }
        Some((consumed1, consumed2))
    }

    /// Identity / mismatch / gap counts against the aligned regions
    /// `seq1` and `seq2` (starting at the first aligned residue).
    pub fn stats(&self, seq1: &[u8], seq2: &[u8]) -> EditStats {
        let mut stats = EditStats::default();
        let (mut i, mut j) = (0usize, 0usize);
        for run in &self.runs {
            stats.columns += run.num;
            match run.op_type {
                EditOpType::Sub => {
                    for k in 0..run.num {
                        let a = seq1.get(i + k).map(u8::to_ascii_uppercase);
                        let b = seq2.get(j + k).map(u8::to_ascii_uppercase);
                        if a.is_some() && a == b {
                            stats.identities += 1;
                        } else {
                            stats.mismatches += 1;
                        }
                    }
                }
                EditOpType::Decline => stats.declined += run.num,
                EditOpType::Ins | EditOpType::Del => {
                    stats.gaps += run.num;
                    stats.gap_opens += 1;
                }
            }
            let (d1, d2) = run.op_type.consumes();
            i += d1 * run.num;
            j += d2 * run.num;
        }
        stats
    }
}

/// Traceback construction phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Idle,
    Tracing,
    Finalized,
}

/// Accumulates traceback operations, most recent last, and reverses them
/// once into DP order on `finish`.
#[derive(Debug)]
pub struct EditScriptBuilder {
    state: BuilderState,
    runs: Vec<EditRun>,
}

impl Default for EditScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EditScriptBuilder {
    pub fn new() -> Self {
        Self { state: BuilderState::Idle, runs: Vec::new() }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Start a traceback at the best-scoring cell.
    pub fn begin(&mut self) {
        self.runs.clear();
        self.state = BuilderState::Tracing;
    }

    /// Record one traceback step.
    pub fn push(&mut self, op_type: EditOpType) -> Result<()> {
        match self.state {
            BuilderState::Idle => self.begin(),
            BuilderState::Tracing => {}
            BuilderState::Finalized => {
                return Err(AlignError::precondition("edit script already finalized"));
            }
        }
        if let Some(last) = self.runs.last_mut() {
            if last.op_type == op_type {
                last.num += 1;
                return Ok(());
            }
        }
        self.runs.try_reserve(1).map_err(|_| AlignError::MemoryLimit {
            requested: (self.runs.len() + 1) * std::mem::size_of::<EditRun>(),
        })?;
        self.runs.push(EditRun { op_type, num: 1 });
        Ok(())
    }

    /// Close the traceback; runs come back in DP (forward) order.
    pub fn finish(&mut self) -> GapEditScript {
        let mut runs = std::mem::take(&mut self.runs);
        runs.reverse();
        self.state = BuilderState::Finalized;
        GapEditScript { runs }
    }

    /// Back to `Idle` for another traceback.
    pub fn reset(&mut self) {
        self.runs.clear();
        self.state = BuilderState::Idle;
    }
}

/// A gapped alignment: its edit script plus placement metadata.
///
/// Reference: gapinfo.h GapEditBlock / BlastHSP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapEditBlock {
    pub start1: usize,
    pub start2: usize,
    /// Residues of each sequence covered by the script
    pub length1: usize,
    pub length2: usize,
    /// Full sequence lengths (before any translation)
    pub original_length1: usize,
    pub original_length2: usize,
    pub frame1: i8,
    pub frame2: i8,
    pub translate1: bool,
    pub translate2: bool,
    /// Sequence 2 is on the reverse strand
    pub reverse: bool,
    pub is_ooframe: bool,
    pub discontinuous: bool,
    pub script: GapEditScript,
}

impl GapEditBlock {
    /// Wrap `script` placed at `(start1, start2)`; lengths come from the script.
    pub fn new(
        script: GapEditScript,
        start1: usize,
        start2: usize,
        original_length1: usize,
        original_length2: usize,
    ) -> Self {
        Self {
            start1,
            start2,
            length1: script.seq1_len(),
            length2: script.seq2_len(),
            original_length1,
            original_length2,
            frame1: 0,
            frame2: 0,
            translate1: false,
            translate2: false,
            reverse: false,
            is_ooframe: false,
            discontinuous: false,
            script,
        }
    }

    /// Exclusive end on sequence 1
    pub fn end1(&self) -> usize {
        self.start1 + self.length1
    }

    pub fn end2(&self) -> usize {
        self.start2 + self.length2
    }

    /// Check that the script accounts for exactly the stated lengths and
    /// that the aligned region lies inside both sequences.
    pub fn validate(&self) -> Result<()> {
        if self.script.seq1_len() != self.length1 || self.script.seq2_len() != self.length2 {
            return Err(AlignError::precondition(format!(
                "edit script covers {}x{} residues, block states {}x{}",
                self.script.seq1_len(),
                self.script.seq2_len(),
                self.length1,
                self.length2
            )));
        }
        if self.end1() > self.original_length1 || self.end2() > self.original_length2 {
            return Err(AlignError::precondition(format!(
                "aligned region [{}, {}) x [{}, {}) exceeds sequence lengths {} x {}",
                self.start1,
                self.end1(),
                self.start2,
                self.end2(),
                self.original_length1,
                self.original_length2
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EditOpType::*;

    #[test]
    fn test_push_run_merges() {
        let script = GapEditScript::from_runs([(Sub, 3), (Sub, 2), (Del, 0), (Ins, 1), (Sub, 4)]);
        assert_eq!(script.runs().len(), 3);
        assert_eq!(script.runs()[0], EditRun { op_type: Sub, num: 5 });
        assert_eq!(script.seq1_len(), 9);
        assert_eq!(script.seq2_len(), 10);
        assert_eq!(script.num_columns(), 10);
    }

    #[test]
    fn test_builder_reverses_once() {
        let mut builder = EditScriptBuilder::new();
        assert_eq!(builder.state(), BuilderState::Idle);
        // traceback order: end of the alignment first
        for op in [Sub, Sub, Ins, Sub, Del, Del] {
            builder.push(op).unwrap();
        }
        assert_eq!(builder.state(), BuilderState::Tracing);
        let script = builder.finish();
        assert_eq!(builder.state(), BuilderState::Finalized);
        assert_eq!(script, GapEditScript::from_runs([(Del, 2), (Sub, 1), (Ins, 1), (Sub, 2)]));
        assert!(builder.push(Sub).is_err());
    }

    #[test]
    fn test_cut_off_begin_splits_substitution() {
        let mut script = GapEditScript::from_runs([(Sub, 5), (Del, 2), (Sub, 3)]);
        assert_eq!(script.cut_off(2, 2, true), Some((2, 2)));
        assert_eq!(script, GapEditScript::from_runs([(Sub, 3), (Del, 2), (Sub, 3)]));
    }

    #[test]
    fn test_cut_off_end_keeps_gap_whole() {
        let mut script = GapEditScript::from_runs([(Sub, 2), (Ins, 3), (Sub, 4)]);
        assert_eq!(script.cut_off(2, 4, false), Some((2, 5)));
        assert_eq!(script, GapEditScript::from_runs([(Sub, 2), (Ins, 3)]));
    }

    #[test]
    fn test_cut_off_beyond_end() {
        let mut script = GapEditScript::from_runs([(Sub, 2)]);
        assert_eq!(script.cut_off(5, 5, true), None);
        assert_eq!(script.num_columns(), 2);
    }

    #[test]
    fn test_stats() {
        let script = GapEditScript::from_runs([(Sub, 3), (Del, 1), (Sub, 2)]);
        let stats = script.stats(b"ACDEFG", b"ACxFG");
        assert_eq!(stats.identities, 4);
        assert_eq!(stats.mismatches, 1);
        assert_eq!(stats.gap_opens, 1);
        assert_eq!(stats.gaps, 1);
        assert_eq!(stats.columns, 6);
    }

    #[test]
    fn test_mirror_swaps_lengths() {
        let mut script = GapEditScript::from_runs([(Sub, 2), (Del, 3)]);
        script.mirror();
        assert_eq!(script.seq1_len(), 2);
        assert_eq!(script.seq2_len(), 5);
    }

    #[test]
    fn test_block_validate() {
        let script = GapEditScript::from_runs([(Sub, 4), (Ins, 1)]);
        let block = GapEditBlock::new(script.clone(), 2, 0, 6, 5);
        assert!(block.validate().is_ok());
        let block = GapEditBlock::new(script, 3, 0, 6, 5);
        assert!(block.validate().is_err());
    }
}
