//! Unit tests for align/nw.rs and align/transcript.rs

use compalign::align::{NwAligner, Transcript, TranscriptOp};
use compalign::config::{EndSpaceFree, GapCosts, ScoringMatrix};
use compalign::core::AlignError;
use compalign::utils::matrix::packed_matrix;

use super::helpers::{mutate, random_protein, simple_matrix, Lcg};

use TranscriptOp::*;

#[test]
fn test_end_to_end_single_substitution() {
    let mut nw = NwAligner::new(GapCosts::new(0, 10));
    let aln = nw.align(b"ACDEFG", b"ACDAFG", &simple_matrix()).unwrap();
    assert_eq!(aln.score, 21);
    assert_eq!(aln.transcript.runs(), vec![(Match, 3), (Replace, 1), (Match, 2)]);
}

#[test]
fn test_end_to_end_symmetric_flanks() {
    // three matches either side of the substitution: 6 * 5 - 4
    let mut nw = NwAligner::new(GapCosts::new(0, 10));
    let aln = nw.align(b"ACDEFGH", b"ACDAFGH", &simple_matrix()).unwrap();
    assert_eq!(aln.score, 26);
    assert_eq!(aln.transcript.runs(), vec![(Match, 3), (Replace, 1), (Match, 3)]);
    assert!(aln.transcript.ops().iter().all(|op| !matches!(op, Insert | Delete)));
}

#[test]
fn test_transcript_round_trips_through_script() {
    let matrix = packed_matrix(ScoringMatrix::Blosum62).unpack().unwrap();
    let mut rng = Lcg::new(5);
    let mut nw = NwAligner::new(GapCosts::new(11, 1));
    for _ in 0..5 {
        let seq1 = random_protein(&mut rng, 60);
        let seq2 = mutate(&mut rng, &seq1);
        let aln = nw.align(&seq1, &seq2, &matrix).unwrap();
        assert_eq!(aln.transcript.seq1_len(), seq1.len());
        assert_eq!(aln.transcript.seq2_len(), seq2.len());

        let script = aln.transcript.to_script();
        let back = Transcript::from_script(&script, &seq1, &seq2, 0, 0);
        assert_eq!(back, aln.transcript);
    }
}

#[test]
fn test_free_ends_never_score_lower() {
    let matrix = packed_matrix(ScoringMatrix::Blosum62).unpack().unwrap();
    let mut rng = Lcg::new(9);
    for _ in 0..5 {
        let core = random_protein(&mut rng, 40);
        let mut longer = random_protein(&mut rng, 8);
        longer.extend_from_slice(&core);
        longer.extend(random_protein(&mut rng, 8));

        let penalised = NwAligner::new(GapCosts::new(11, 1))
            .align(&core, &longer, &matrix)
            .unwrap();
        let free = NwAligner::new(GapCosts::new(11, 1))
            .with_end_space_free(EndSpaceFree::all())
            .align(&core, &longer, &matrix)
            .unwrap();
        assert!(free.score >= penalised.score);
    }
}

#[test]
fn test_band_narrower_than_length_difference() {
    let mut nw = NwAligner::new(GapCosts::new(11, 1)).with_band(Some(2));
    assert!(matches!(
        nw.align(b"ACDEFGHIKL", b"ACDEFG", &simple_matrix()),
        Err(AlignError::Precondition(_))
    ));
}

#[test]
fn test_transcript_parse() {
    let t = Transcript::parse("MMRIDM").unwrap();
    assert_eq!(t.to_string(), "MMRIDM");
    assert_eq!((t.seq1_len(), t.seq2_len()), (5, 5));
    assert!(Transcript::parse("MMX").is_err());
}
