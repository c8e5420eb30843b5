//! Unit tests for core/blast_gapalign.rs, core/gapinfo.rs and core/state_array.rs

use compalign::config::{GapCosts, ScoringMatrix};
use compalign::core::blast_gapalign::{best_ungapped_seed, score_script, GapAligner};
use compalign::core::gapinfo::{EditOpType, EditScriptBuilder, GapEditScript};
use compalign::core::state_array::GapStateArrayPool;
use compalign::core::AlignError;
use compalign::utils::matrix::packed_matrix;

use super::helpers::{mutate, random_protein, simple_matrix, Lcg};

#[test]
fn test_single_substitution_example() {
    let matrix = simple_matrix();
    let mut aligner = GapAligner::new(GapCosts::new(0, 10), 30);
    let (score, block) = aligner.extend_from_seed(b"ACDEFG", b"ACDAFG", 0, 0, &matrix).unwrap();
    assert_eq!(score, 21);
    assert_eq!(block.script.runs().len(), 1);
    assert_eq!(block.script.runs()[0].op_type, EditOpType::Sub);
    assert_eq!(block.script.runs()[0].num, 6);

    let stats = block.script.stats(b"ACDEFG", b"ACDAFG");
    assert_eq!((stats.identities, stats.mismatches, stats.gaps), (5, 1, 0));
}

#[test]
fn test_traceback_is_deterministic() {
    let matrix = packed_matrix(ScoringMatrix::Blosum62).unpack().unwrap();
    let gap = GapCosts::new(11, 1);
    let mut rng = Lcg::new(7);
    let mut reused = GapAligner::new(gap, 40);

    for _ in 0..10 {
        let seq1 = random_protein(&mut rng, 120);
        let seq2 = mutate(&mut rng, &seq1);
        let Some((s1, s2, _)) = best_ungapped_seed(&seq1, &seq2, &matrix) else {
            continue;
        };

        let first = reused.extend_from_seed(&seq1, &seq2, s1, s2, &matrix).unwrap();
        let second = reused.extend_from_seed(&seq1, &seq2, s1, s2, &matrix).unwrap();
        let fresh = GapAligner::new(gap, 40)
            .extend_from_seed(&seq1, &seq2, s1, s2, &matrix)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first, fresh);
    }
}

#[test]
fn test_edit_script_lengths_match_block() {
    let matrix = packed_matrix(ScoringMatrix::Blosum62).unpack().unwrap();
    let gap = GapCosts::new(11, 1);
    let mut rng = Lcg::new(11);
    let mut aligner = GapAligner::new(gap, 40);

    for _ in 0..10 {
        let seq1 = random_protein(&mut rng, 90);
        let seq2 = mutate(&mut rng, &seq1);
        let Some((s1, s2, _)) = best_ungapped_seed(&seq1, &seq2, &matrix) else {
            continue;
        };
        let (score, block) = aligner.extend_from_seed(&seq1, &seq2, s1, s2, &matrix).unwrap();

        let mut sub_del = 0;
        let mut sub_ins = 0;
        for run in block.script.runs() {
            match run.op_type {
                EditOpType::Sub | EditOpType::Decline => {
                    sub_del += run.num;
                    sub_ins += run.num;
                }
                EditOpType::Del => sub_del += run.num,
                EditOpType::Ins => sub_ins += run.num,
            }
        }
        assert_eq!(sub_del, block.length1);
        assert_eq!(sub_ins, block.length2);
        assert!(block.start1 <= s1 && s1 < block.end1());
        assert!(block.start2 <= s2 && s2 < block.end2());
        assert!(block.validate().is_ok());

        // adjoining gaps of the two halves merge, which can only lower the penalty
        let rescored = score_script(
            &block.script,
            &seq1,
            &seq2,
            block.start1,
            block.start2,
            &matrix,
            gap,
        );
        assert!(rescored >= score);
    }
}

#[test]
fn test_pool_reset_is_idempotent() {
    let requests = [100, 40, 250, 30, 600, 10];
    let mut fresh = GapStateArrayPool::new();
    for &r in &requests {
        fresh.acquire(r).unwrap();
    }
    let sizes = fresh.node_lengths();

    let mut cycled = GapStateArrayPool::new();
    for _ in 0..5 {
        cycled.reset();
        for &r in &requests {
            let row = cycled.acquire(r).unwrap();
            assert!(row.len() >= r);
            assert!(cycled.row(&row).iter().all(|&b| b == 0));
        }
        assert_eq!(cycled.node_lengths(), sizes);
    }
}

#[test]
fn test_aligner_pool_stops_growing() {
    let matrix = packed_matrix(ScoringMatrix::Blosum62).unpack().unwrap();
    let mut rng = Lcg::new(3);
    let seq1 = random_protein(&mut rng, 200);
    let seq2 = mutate(&mut rng, &seq1);
    let (s1, s2, _) = best_ungapped_seed(&seq1, &seq2, &matrix).unwrap();

    let mut aligner = GapAligner::new(GapCosts::new(11, 1), 40);
    aligner.extend_from_seed(&seq1, &seq2, s1, s2, &matrix).unwrap();
    let sizes = aligner.pool().node_lengths();
    for _ in 0..5 {
        aligner.extend_from_seed(&seq1, &seq2, s1, s2, &matrix).unwrap();
    }
    assert_eq!(aligner.pool().node_lengths(), sizes);
}

#[test]
fn test_pool_limit_surfaces_memory_error() {
    let matrix = simple_matrix();
    let seq: Vec<u8> = b"ACDEFGHIKLMNPQRSTVWY".repeat(10);
    let pool = GapStateArrayPool::with_limit(64);
    let mut aligner = GapAligner::with_pool(GapCosts::new(5, 2), 1000, pool);
    assert!(matches!(
        aligner.extend_from_seed(&seq, &seq, 100, 100, &matrix),
        Err(AlignError::MemoryLimit { .. })
    ));
}

#[test]
fn test_builder_reverses_traceback_order() {
    let mut builder = EditScriptBuilder::new();
    for op in [EditOpType::Sub, EditOpType::Sub, EditOpType::Ins, EditOpType::Sub] {
        builder.push(op).unwrap();
    }
    let script = builder.finish();
    assert_eq!(
        script,
        GapEditScript::from_runs([(EditOpType::Sub, 1), (EditOpType::Ins, 1), (EditOpType::Sub, 2)])
    );
    assert!(builder.push(EditOpType::Sub).is_err());
}
