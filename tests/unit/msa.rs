//! Unit tests for msa/ and core/spliced_hits.rs

use compalign::align::{NwAligner, TranscriptOp};
use compalign::config::{GapCosts, ScoringMatrix};
use compalign::core::spliced_hits::{ChainStore, Hsp, HspChain};
use compalign::msa::{
    compress_sequences, Block, BlockExtender, Hit, HitList, SeqRange, Sequence, Terminus,
};
use compalign::utils::matrix::packed_matrix;

use super::helpers::{mutate, random_protein, simple_matrix, Lcg};

#[test]
fn test_gapped_rows_from_global_alignment() {
    let matrix = packed_matrix(ScoringMatrix::Blosum62).unpack().unwrap();
    let mut rng = Lcg::new(21);
    let seq1 = random_protein(&mut rng, 50);
    let seq2 = mutate(&mut rng, &seq1);
    let aln = NwAligner::new(GapCosts::new(11, 1)).align(&seq1, &seq2, &matrix).unwrap();

    let mut row1 = Sequence::new(&seq1);
    row1.propagate_gaps(&aln.transcript, TranscriptOp::Insert).unwrap();
    let mut row2 = Sequence::new(&seq2);
    row2.propagate_gaps(&aln.transcript, TranscriptOp::Delete).unwrap();

    assert_eq!(row1.len(), aln.transcript.len());
    assert_eq!(row2.len(), aln.transcript.len());
    assert_eq!(row1.ungapped(), seq1);
    assert_eq!(row2.ungapped(), seq2);
    assert!((0..row1.len()).all(|k| !(row1.is_gap(k) && row2.is_gap(k))));
}

#[test]
fn test_compress_drops_shared_gap_columns() {
    let mut seqs = vec![Sequence::new(b"ACDE"), Sequence::new(b"ACDE"), Sequence::new(b"WWWW")];
    seqs[0].insert_gaps(&[2]).unwrap();
    seqs[1].insert_gaps(&[2]).unwrap();
    assert_eq!(seqs[0].residues(), b"AC-DE");

    compress_sequences(&mut seqs, &[0, 1]).unwrap();
    assert_eq!(seqs[0].residues(), b"ACDE");
    assert_eq!(seqs[1].residues(), b"ACDE");
    assert_eq!(seqs[2].residues(), b"WWWW");

    // lengths must agree among the listed rows
    assert!(compress_sequences(&mut seqs, &[0, 2, 1]).is_ok());
    seqs[2].insert_gaps(&[0]).unwrap();
    assert!(compress_sequences(&mut seqs, &[0, 2]).is_err());
}

#[test]
fn test_pair_extension_gain_matches_rescored_block() {
    let matrix = packed_matrix(ScoringMatrix::Blosum62).unpack().unwrap();
    let mut rng = Lcg::new(77);
    for _ in 0..20 {
        let row1 = random_protein(&mut rng, 40);
        let row2 = random_protein(&mut rng, 40);
        let rows: Vec<&[u8]> = vec![row1.as_slice(), row2.as_slice()];
        let block = Block::new(vec![15, 12], 8);

        let mut ext = BlockExtender::new(rows.clone(), &matrix, vec![block.clone()]).unwrap();
        let before = ext.block_score(0, 1, 0).unwrap();

        let n = ext.extend_one_pair(0, 1, 0, Terminus::NTerminal);
        assert!(n.score_gain >= 0);
        assert!(n.length <= 12);
        let grown = Block::new(vec![15 - n.length, 12 - n.length], 8 + n.length);
        let after = BlockExtender::new(rows.clone(), &matrix, vec![grown]).unwrap();
        assert_eq!(after.block_score(0, 1, 0), Some(before + n.score_gain));

        let c = ext.extend_one_pair(0, 1, 0, Terminus::CTerminal);
        assert!(c.score_gain >= 0);
        let grown = Block::new(vec![15, 12], 8 + c.length);
        let after = BlockExtender::new(rows.clone(), &matrix, vec![grown]).unwrap();
        assert_eq!(after.block_score(0, 1, 0), Some(before + c.score_gain));
    }
}

#[test]
fn test_extend_blocks_keeps_model_valid() {
    let m = simple_matrix();
    let rows: Vec<&[u8]> = vec![
        &b"MKACDEFGHIKLPQ"[..],
        &b"MKACDEFGHIKLPQ"[..],
        &b"WKACDEFGHIKLPW"[..],
    ];
    let mut ext = BlockExtender::new(rows, &m, vec![Block::new(vec![4, 4, 4], 4)]).unwrap();
    let growth = ext.extend_blocks().unwrap();

    // the third row blocks the first and last residue
    assert_eq!(growth, vec![(3, 5)]);
    assert_eq!(ext.blocks()[0], Block::new(vec![1, 1, 1], 12));
    assert!(ext.validate_blocks().is_ok());
}

#[test]
fn test_hitlist_canonical_form() {
    let mut list = HitList::new();
    list.add_to_list(Hit::new(2, 1, 10, SeqRange::new(5, 10), SeqRange::new(0, 5)));
    list.add_to_list(Hit::new(1, 2, 20, SeqRange::new(0, 5), SeqRange::new(5, 10)));
    list.add_to_list(Hit::new(0, 3, 5, SeqRange::new(2, 4), SeqRange::new(7, 9)));
    list.make_canonical();

    let hits: Vec<&Hit> = list.iter().collect();
    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].seq_index1, hits[0].seq_index2), (0, 3));
    assert_eq!((hits[1].seq_index1, hits[1].seq_index2, hits[1].score), (1, 2, 20));
    assert!(list.iter().all(|h| h.seq_index1 < h.seq_index2));
}

#[test]
fn test_hitlist_purge_and_remove() {
    let mut list = HitList::new();
    for score in [3, 9, 6] {
        list.add_to_list(Hit::new(0, 1, score, SeqRange::new(0, 1), SeqRange::new(0, 1)));
    }
    list.set_keep_hit(1, false);
    assert!(!list.keep_hit(1));
    list.purge_unwanted_hits();
    assert_eq!(list.iter().map(|h| h.score).collect::<Vec<_>>(), vec![3, 6]);

    let taken = list.remove_hit(0).unwrap();
    assert_eq!(taken.score, 3);
    assert_eq!(list.len(), 1);
    assert!(list.remove_hit(5).is_none());

    list.purge_all_hits();
    assert!(list.is_empty());
}

#[test]
fn test_chain_removal_leaves_mate() {
    let mut store = ChainStore::new();
    let mut left = HspChain::new(0, 7);
    left.add_hsp(Hsp::new(40, 0, 20, 100, 120));
    let mut right = HspChain::new(1, 7);
    right.add_hsp(Hsp::new(25, 30, 50, 300, 320));
    let a = store.insert(left);
    let b = store.insert(right);
    assert!(store.set_pair(a, b));
    assert_eq!(store.pair_of(a).map(|c| c.score), Some(25));

    let removed = store.remove(a).unwrap();
    assert_eq!(removed.hsps.len(), 1);
    assert_eq!(store.len(), 1);
    assert!(store.get(b).is_some());
    assert!(store.get(b).unwrap().pair.is_none());
    assert!(store.pair_of(b).is_none());
    assert!(!store.set_pair(a, b));
}
