//! Shared fixtures

use std::io::Write;
use std::path::PathBuf;

use compalign::utils::matrix::{FullScoreMatrix, STD_AA_FREQS, TRUE_AA_ALPHABET};
use tempfile::TempDir;

/// +5 identity / -4 otherwise over A-Z
pub fn simple_matrix() -> FullScoreMatrix {
    FullScoreMatrix::from_match_mismatch(5, -4)
}

/// Standard background, normalised to sum exactly to 1
pub fn background() -> Vec<f64> {
    let total: f64 = STD_AA_FREQS.iter().sum();
    STD_AA_FREQS.iter().map(|f| f / total).collect()
}

/// Deterministic linear congruential generator
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    }

    pub fn next_below(&mut self, n: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % n
    }
}

pub fn random_protein(rng: &mut Lcg, len: usize) -> Vec<u8> {
    (0..len).map(|_| TRUE_AA_ALPHABET[rng.next_below(20)]).collect()
}

/// Copy of `seq` with roughly one substitution in ten and a single
/// deleted residue near the middle.
pub fn mutate(rng: &mut Lcg, seq: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = seq
        .iter()
        .map(|&r| if rng.next_below(10) == 0 { TRUE_AA_ALPHABET[rng.next_below(20)] } else { r })
        .collect();
    if out.len() > 2 {
        out.remove(out.len() / 2);
    }
    out
}

/// Write `records` as FASTA into a file under `dir`.
pub fn write_fasta(dir: &TempDir, name: &str, records: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for (header, seq) in records {
        writeln!(file, ">{}", header).unwrap();
        writeln!(file, "{}", seq).unwrap();
    }
    path
}
