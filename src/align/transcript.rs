//! Column-by-column alignment transcripts
//!
//! Reference: ncbi-cxx-toolkit algo/align/nw/nw_aligner.hpp ETranscriptSymbol
//!
//! Unlike a `GapEditScript`, a transcript tells matches from replacements,
//! which is what profile gap propagation and the tabular report need.

use std::fmt;

use crate::core::error::{AlignError, Result};
use crate::core::gapinfo::{EditOpType, GapEditScript};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptOp {
    /// Identical residues
    Match,
    /// Different residues
    Replace,
    /// Residue of sequence 2 against a gap in sequence 1
    Insert,
    /// Residue of sequence 1 against a gap in sequence 2
    Delete,
}

impl TranscriptOp {
    pub fn symbol(self) -> char {
        match self {
            TranscriptOp::Match => 'M',
            TranscriptOp::Replace => 'R',
            TranscriptOp::Insert => 'I',
            TranscriptOp::Delete => 'D',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'M' => Some(TranscriptOp::Match),
            'R' => Some(TranscriptOp::Replace),
            'I' => Some(TranscriptOp::Insert),
            'D' => Some(TranscriptOp::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Transcript {
    ops: Vec<TranscriptOp>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ops(ops: Vec<TranscriptOp>) -> Self {
        Self { ops }
    }

    /// Parse a string of `M`, `R`, `I`, `D` symbols.
    pub fn parse(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| {
                TranscriptOp::from_symbol(c).ok_or_else(|| {
                    AlignError::precondition(format!("invalid transcript symbol '{}'", c))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::from_ops)
    }

    /// Expand an edit script placed at `(start1, start2)`; substitutions
    /// become `Match` or `Replace` by comparing residues case-insensitively.
    /// Declined columns count as `Replace`.
    pub fn from_script(
        script: &GapEditScript,
        seq1: &[u8],
        seq2: &[u8],
        start1: usize,
        start2: usize,
    ) -> Self {
        let mut ops = Vec::with_capacity(script.num_columns());
        let (mut i, mut j) = (start1, start2);
        for op in script.columns() {
            ops.push(match op {
                EditOpType::Sub => {
                    let a = seq1.get(i).map(u8::to_ascii_uppercase);
                    let b = seq2.get(j).map(u8::to_ascii_uppercase);
                    if a.is_some() && a == b {
                        TranscriptOp::Match
                    } else {
                        TranscriptOp::Replace
                    }
                }
                EditOpType::Decline => TranscriptOp::Replace,
                EditOpType::Ins => TranscriptOp::Insert,
                EditOpType::Del => TranscriptOp::Delete,
            });
            let (d1, d2) = op.consumes();
            i += d1;
            j += d2;
        }
        Self { ops }
    }

    /// Collapse into an edit script (`Match`/`Replace` both become `Sub`).
    pub fn to_script(&self) -> GapEditScript {
        GapEditScript::from_runs(self.ops.iter().map(|op| {
            let op_type = match op {
                TranscriptOp::Match | TranscriptOp::Replace => EditOpType::Sub,
                TranscriptOp::Insert => EditOpType::Ins,
                TranscriptOp::Delete => EditOpType::Del,
            };
            (op_type, 1)
        }))
    }

    pub fn ops(&self) -> &[TranscriptOp] {
        &self.ops
    }

    pub fn push(&mut self, op: TranscriptOp) {
        self.ops.push(op);
    }

    pub fn reverse(&mut self) {
        self.ops.reverse();
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Residues of sequence 1 covered
    pub fn seq1_len(&self) -> usize {
        self.ops.iter().filter(|&&op| op != TranscriptOp::Insert).count()
    }

    pub fn seq2_len(&self) -> usize {
        self.ops.iter().filter(|&&op| op != TranscriptOp::Delete).count()
    }

    /// Run-length view, e.g. `[(Match, 3), (Replace, 1), (Match, 2)]`
    pub fn runs(&self) -> Vec<(TranscriptOp, usize)> {
        let mut runs: Vec<(TranscriptOp, usize)> = Vec::new();
        for &op in &self.ops {
            match runs.last_mut() {
                Some((last, n)) if *last == op => *n += 1,
                _ => runs.push((op, 1)),
            }
        }
        runs
    }

    pub fn identities(&self) -> usize {
        self.ops.iter().filter(|&&op| op == TranscriptOp::Match).count()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{}", op.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TranscriptOp::*;

    #[test]
    fn test_parse_and_display() {
        let t = Transcript::parse("MMRIDM").unwrap();
        assert_eq!(t.to_string(), "MMRIDM");
        assert_eq!(t.seq1_len(), 5);
        assert_eq!(t.seq2_len(), 5);
        assert!(Transcript::parse("MMX").is_err());
    }

    #[test]
    fn test_script_round_trip_recovers_matches() {
        let script = GapEditScript::from_runs([
            (EditOpType::Sub, 3),
            (EditOpType::Del, 1),
            (EditOpType::Sub, 2),
        ]);
        let t = Transcript::from_script(&script, b"ACDEFG", b"ACxFG", 0, 0);
        assert_eq!(t.runs(), vec![(Match, 2), (Replace, 1), (Delete, 1), (Match, 2)]);
        assert_eq!(t.to_script(), script);
        assert_eq!(t.identities(), 4);
    }
}
