//! Amino-acid substitution matrices - NCBI packed and dense forms
//!
//! NCBI keeps two representations of a scoring matrix:
//! 1. Packed (`SNCBIPackedScoreMatrix`) - an alphabet string plus a
//!    `len(alphabet)^2` score table and a default score
//! 2. Full (`SNCBIFullScoreMatrix`) - a dense 128x128 table indexed directly
//!    by the residue byte, used inside DP inner loops
//!
//! Reference: ncbi-blast/c++/src/util/tables/raw_scoremat.c

use super::matrix_tables;
use crate::config::ScoringMatrix;
use crate::core::error::{AlignError, Result};

/// Dimension of the dense residue table (one slot per 7-bit byte)
pub const FSM_DIM: usize = 128;

/// The 20 true amino acids, in the order used by composition vectors
pub const TRUE_AA_ALPHABET: &[u8; 20] = b"ARNDCQEGHILKMFPSTWYV";

/// Number of true amino acids
pub const TRUE_AA_COUNT: usize = 20;

/// Robinson & Robinson background amino-acid frequencies, `TRUE_AA_ALPHABET` order
pub const STD_AA_FREQS: [f64; TRUE_AA_COUNT] = [
    0.07805, 0.05129, 0.04487, 0.05364, 0.01925, 0.04264, 0.06295, 0.07377, 0.02199, 0.05142,
    0.09019, 0.05744, 0.02243, 0.03856, 0.05203, 0.07120, 0.05841, 0.01330, 0.03216, 0.06441,
];

/// Immutable packed matrix: alphabet + row-major score table + default score.
#[derive(Debug)]
pub struct PackedScoreMatrix {
    pub name: &'static str,
    pub symbols: &'static str,
    pub scores: &'static [i8],
    pub defscore: i32,
}

impl PackedScoreMatrix {
    /// Number of symbols in the packed alphabet
    pub fn alphabet_len(&self) -> usize {
        self.symbols.len()
    }

    /// Score at packed indices `(i, j)`
    #[inline]
    pub fn score_at(&self, i: usize, j: usize) -> i32 {
        self.scores[i * self.symbols.len() + j] as i32
    }

    /// Expand into a dense table.
    ///
    /// Every cell starts at `defscore`; each ordered symbol pair is then
    /// copied into all four upper/lower case combinations.
    ///
    /// Reference: raw_scoremat.c NCBISM_Unpack
    pub fn unpack(&self) -> Result<FullScoreMatrix> {
        let symbols = self.symbols.as_bytes();
        let n = symbols.len();
        if n > FSM_DIM {
            return Err(AlignError::AlphabetTooLarge { len: n, max: FSM_DIM });
        }
        if self.scores.len() != n * n {
            return Err(AlignError::precondition(format!(
                "matrix {} has {} scores for {} symbols",
                self.name,
                self.scores.len(),
                n
            )));
        }

        let mut full = FullScoreMatrix::filled(self.defscore);
        for (i, &a) in symbols.iter().enumerate() {
            for (j, &b) in symbols.iter().enumerate() {
                full.set_score(a, b, self.score_at(i, j));
            }
        }
        Ok(full)
    }
}

/// Dense 128x128 score table indexed by residue byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullScoreMatrix {
    s: Vec<i32>,
    defscore: i32,
}

impl FullScoreMatrix {
    /// Table with every cell set to `defscore`
    pub fn filled(defscore: i32) -> Self {
        Self {
            s: vec![defscore; FSM_DIM * FSM_DIM],
            defscore,
        }
    }

    /// Identity-style matrix over ASCII letters: `matched` on the
    /// (case-insensitive) diagonal, `mismatched` everywhere else.
    pub fn from_match_mismatch(matched: i32, mismatched: i32) -> Self {
        let mut full = Self::filled(mismatched);
        for c in b'A'..=b'Z' {
            full.set_score(c, c, matched);
        }
        full
    }

    /// O(1) lookup used in DP inner loops. Bytes outside the 7-bit range
    /// score as the default.
    #[inline(always)]
    pub fn score(&self, r1: u8, r2: u8) -> i32 {
        let (a, b) = (r1 as usize, r2 as usize);
        if a < FSM_DIM && b < FSM_DIM {
            self.s[a * FSM_DIM + b]
        } else {
            self.defscore
        }
    }

    /// Set the score of an ordered residue pair in every case combination.
    pub fn set_score(&mut self, r1: u8, r2: u8, score: i32) {
        let (r1, r2) = (r1 & 0x7f, r2 & 0x7f);
        for a in [r1.to_ascii_uppercase(), r1.to_ascii_lowercase()] {
            for b in [r2.to_ascii_uppercase(), r2.to_ascii_lowercase()] {
                self.s[a as usize * FSM_DIM + b as usize] = score;
            }
        }
    }

    pub fn default_score(&self) -> i32 {
        self.defscore
    }

    pub fn min_score(&self) -> i32 {
        self.s.iter().copied().min().unwrap_or(self.defscore)
    }

    pub fn max_score(&self) -> i32 {
        self.s.iter().copied().max().unwrap_or(self.defscore)
    }
}

/// Packed index of `residue`, matched case-insensitively.
///
/// Linear scan over the alphabet; meant for setup code only.
pub fn get_index(matrix: &PackedScoreMatrix, residue: u8) -> Option<usize> {
    let r = residue.to_ascii_uppercase();
    matrix
        .symbols
        .bytes()
        .position(|s| s.to_ascii_uppercase() == r)
}

/// Packed score of `(r1, r2)`; `defscore` when either residue is not in the alphabet.
pub fn get_score(matrix: &PackedScoreMatrix, r1: u8, r2: u8) -> i32 {
    match (get_index(matrix, r1), get_index(matrix, r2)) {
        (Some(i), Some(j)) => matrix.score_at(i, j),
        _ => matrix.defscore,
    }
}

/// Compiled-in packed matrix for a configured matrix name
pub fn packed_matrix(matrix: ScoringMatrix) -> &'static PackedScoreMatrix {
    match matrix {
        ScoringMatrix::Blosum45 => &matrix_tables::BLOSUM45,
        ScoringMatrix::Blosum50 => &matrix_tables::BLOSUM50,
        ScoringMatrix::Blosum62 => &matrix_tables::BLOSUM62,
        ScoringMatrix::Blosum80 => &matrix_tables::BLOSUM80,
        ScoringMatrix::Blosum90 => &matrix_tables::BLOSUM90,
        ScoringMatrix::Pam30 => &matrix_tables::PAM30,
        ScoringMatrix::Pam70 => &matrix_tables::PAM70,
        ScoringMatrix::Pam250 => &matrix_tables::PAM250,
    }
}

/// Resolve a matrix by (case-insensitive) name.
pub fn packed_matrix_by_name(name: &str) -> Result<&'static PackedScoreMatrix> {
    let matrix: ScoringMatrix = name.parse()?;
    Ok(packed_matrix(matrix))
}

/// Index of a residue within `TRUE_AA_ALPHABET`; ambiguity codes, `X`,
/// stops and gaps yield `None`.
#[inline]
pub fn true_aa_index(residue: u8) -> Option<usize> {
    match residue.to_ascii_uppercase() {
        b'A' => Some(0),
        b'R' => Some(1),
        b'N' => Some(2),
        b'D' => Some(3),
        b'C' => Some(4),
        b'Q' => Some(5),
        b'E' => Some(6),
        b'G' => Some(7),
        b'H' => Some(8),
        b'I' => Some(9),
        b'L' => Some(10),
        b'K' => Some(11),
        b'M' => Some(12),
        b'F' => Some(13),
        b'P' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'W' => Some(17),
        b'Y' => Some(18),
        b'V' => Some(19),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blosum62_known_scores() {
        let m = &matrix_tables::BLOSUM62;
        assert_eq!(get_score(m, b'A', b'A'), 4);
        assert_eq!(get_score(m, b'W', b'W'), 11);
        assert_eq!(get_score(m, b'A', b'R'), -1);
        assert_eq!(get_score(m, b'*', b'*'), 1);
        assert_eq!(get_score(m, b'L', b'J'), 3);
    }

    #[test]
    fn test_unknown_residue_gets_defscore() {
        let m = &matrix_tables::BLOSUM62;
        assert_eq!(get_score(m, b'U', b'A'), -4);
        assert_eq!(get_index(m, b'O'), None);

        let full = m.unpack().unwrap();
        assert_eq!(full.score(b'U', b'A'), -4);
        assert_eq!(full.score(b'-', b'-'), -4);
        assert_eq!(full.score(200, b'A'), -4);
    }

    #[test]
    fn test_unpack_is_case_insensitive() {
        let full = matrix_tables::PAM250.unpack().unwrap();
        assert_eq!(full.score(b'w', b'W'), 17);
        assert_eq!(full.score(b'W', b'w'), 17);
        assert_eq!(full.score(b'c', b'c'), 12);
    }

    #[test]
    fn test_alphabet_too_large() {
        static BIG_SCORES: [i8; 0] = [];
        let symbols: &'static str = Box::leak("A".repeat(FSM_DIM + 1).into_boxed_str());
        let big = PackedScoreMatrix {
            name: "BIG",
            symbols,
            scores: &BIG_SCORES,
            defscore: -1,
        };
        assert_eq!(
            big.unpack(),
            Err(AlignError::AlphabetTooLarge { len: FSM_DIM + 1, max: FSM_DIM })
        );
    }

    #[test]
    fn test_match_mismatch_matrix() {
        let full = FullScoreMatrix::from_match_mismatch(5, -4);
        assert_eq!(full.score(b'A', b'a'), 5);
        assert_eq!(full.score(b'A', b'C'), -4);
        assert_eq!(full.max_score(), 5);
        assert_eq!(full.min_score(), -4);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(packed_matrix_by_name("blosum80").unwrap().name, "BLOSUM80");
        assert!(matches!(
            packed_matrix_by_name("BLOSUM100"),
            Err(AlignError::UnknownMatrix(_))
        ));
    }

    #[test]
    fn test_background_frequencies_sum_to_one() {
        let sum: f64 = STD_AA_FREQS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
        for (i, &aa) in TRUE_AA_ALPHABET.iter().enumerate() {
            assert_eq!(true_aa_index(aa), Some(i));
        }
        assert_eq!(true_aa_index(b'X'), None);
    }
}
