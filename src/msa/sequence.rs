//! Profile sequences for multiple alignment
//!
//! Reference: ncbi-cxx-toolkit algo/cobalt/seq.cpp CSequence
//!
//! A `Sequence` is a row of residues (gaps as `-`) with one frequency
//! vector per position over the 20 true amino acids. Gap positions carry an
//! all-zero vector.

use crate::align::transcript::{Transcript, TranscriptOp};
use crate::core::error::{AlignError, Result};
use crate::utils::matrix::{true_aa_index, STD_AA_FREQS, TRUE_AA_ALPHABET, TRUE_AA_COUNT};

pub const GAP_CHAR: u8 = b'-';

pub type ProfileColumn = [f64; TRUE_AA_COUNT];

#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    residues: Vec<u8>,
    profile: Vec<ProfileColumn>,
}

/// Frequency vector of a single residue: one-hot for the 20 true amino
/// acids, split between members for B/Z/J, background for anything else.
fn residue_profile(residue: u8) -> ProfileColumn {
    let mut column = [0.0; TRUE_AA_COUNT];
    if residue == GAP_CHAR {
        return column;
    }
    if let Some(i) = true_aa_index(residue) {
        column[i] = 1.0;
        return column;
    }
    let members: &[u8] = match residue.to_ascii_uppercase() {
        b'B' => b"ND",
        b'Z' => b"QE",
        b'J' => b"IL",
        _ => b"",
    };
    if members.is_empty() {
        let total: f64 = STD_AA_FREQS.iter().sum();
        for (c, f) in column.iter_mut().zip(STD_AA_FREQS.iter()) {
            *c = f / total;
        }
    } else {
        for m in members {
            if let Some(i) = TRUE_AA_ALPHABET.iter().position(|c| c == m) {
                column[i] = 1.0 / members.len() as f64;
            }
        }
    }
    column
}

impl Sequence {
    /// Build from raw residues; letters are upper-cased.
    pub fn new(residues: &[u8]) -> Self {
        let residues: Vec<u8> = residues.iter().map(u8::to_ascii_uppercase).collect();
        let profile = residues.iter().map(|&r| residue_profile(r)).collect();
        Self { residues, profile }
    }

    /// Build from residues and an explicit profile of the same length.
    pub fn with_profile(residues: &[u8], profile: Vec<ProfileColumn>) -> Result<Self> {
        if residues.len() != profile.len() {
            return Err(AlignError::precondition(format!(
                "profile has {} columns for {} residues",
                profile.len(),
                residues.len()
            )));
        }
        Ok(Self { residues: residues.iter().map(u8::to_ascii_uppercase).collect(), profile })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn profile(&self) -> &[ProfileColumn] {
        &self.profile
    }

    /// Residue or gap at `pos`; `None` past the end.
    pub fn letter(&self, pos: usize) -> Option<u8> {
        self.residues.get(pos).copied()
    }

    /// Display character at `pos`
    pub fn printable_letter(&self, pos: usize) -> char {
        match self.residues.get(pos) {
            Some(&r) if r.is_ascii_graphic() => r as char,
            _ => '-',
        }
    }

    /// False past the end.
    pub fn is_gap(&self, pos: usize) -> bool {
        self.letter(pos) == Some(GAP_CHAR)
    }

    /// Residues without gaps
    pub fn ungapped(&self) -> Vec<u8> {
        self.residues.iter().copied().filter(|&r| r != GAP_CHAR).collect()
    }

    /// Re-lay this sequence on the columns of `transcript`: every
    /// `gap_choice` column becomes a gap, every other column consumes the
    /// next position of the sequence.
    pub fn propagate_gaps(
        &mut self,
        transcript: &Transcript,
        gap_choice: TranscriptOp,
    ) -> Result<()> {
        let consumed = transcript.ops().iter().filter(|&&op| op != gap_choice).count();
        if consumed != self.len() {
            return Err(AlignError::precondition(format!(
                "transcript consumes {} positions, sequence has {}",
                consumed,
                self.len()
            )));
        }

        let mut residues = Vec::with_capacity(transcript.len());
        let mut profile = Vec::with_capacity(transcript.len());
        let mut next = 0;
        for &op in transcript.ops() {
            if op == gap_choice {
                residues.push(GAP_CHAR);
                profile.push([0.0; TRUE_AA_COUNT]);
            } else {
                residues.push(self.residues[next]);
                profile.push(self.profile[next]);
                next += 1;
            }
        }
        self.residues = residues;
        self.profile = profile;
        Ok(())
    }

    /// Insert a gap column before each position in `gap_locations`
    /// (positions refer to the sequence before insertion; a position equal
    /// to the length appends).
    pub fn insert_gaps(&mut self, gap_locations: &[usize]) -> Result<()> {
        let mut locations = gap_locations.to_vec();
        locations.sort_unstable();
        if let Some(&last) = locations.last() {
            if last > self.len() {
                return Err(AlignError::precondition(format!(
                    "gap location {} beyond sequence length {}",
                    last,
                    self.len()
                )));
            }
        }

        let mut residues = Vec::with_capacity(self.len() + locations.len());
        let mut profile = Vec::with_capacity(self.len() + locations.len());
        let mut gaps = locations.iter().peekable();
        for pos in 0..=self.len() {
            while gaps.next_if(|&&g| g == pos).is_some() {
                residues.push(GAP_CHAR);
                profile.push([0.0; TRUE_AA_COUNT]);
            }
            if pos < self.len() {
                residues.push(self.residues[pos]);
                profile.push(self.profile[pos]);
            }
        }
        self.residues = residues;
        self.profile = profile;
        Ok(())
    }

    fn retain_columns(&mut self, keep: &[bool]) {
        let mut keep_iter = keep.iter();
        self.residues.retain(|_| keep_iter.next().copied().unwrap_or(true));
        let mut keep_iter = keep.iter();
        self.profile.retain(|_| keep_iter.next().copied().unwrap_or(true));
    }
}

/// Drop the columns where every sequence listed in `index_list` has a gap.
/// All listed sequences must have the same length.
pub fn compress_sequences(seqs: &mut [Sequence], index_list: &[usize]) -> Result<()> {
    let Some(&first) = index_list.first() else {
        return Ok(());
    };
    let width = seqs
        .get(first)
        .ok_or_else(|| AlignError::precondition(format!("no sequence {}", first)))?
        .len();
    for &i in index_list {
        let seq = seqs
            .get(i)
            .ok_or_else(|| AlignError::precondition(format!("no sequence {}", i)))?;
        if seq.len() != width {
            return Err(AlignError::precondition(format!(
                "sequence {} has {} columns, expected {}",
                i,
                seq.len(),
                width
            )));
        }
    }

    let keep: Vec<bool> = (0..width)
        .map(|col| index_list.iter().any(|&i| !seqs[i].is_gap(col)))
        .collect();
    for &i in index_list {
        seqs[i].retain_columns(&keep);
    }
    Ok(())
}
