//! Unit tests for api/batch.rs and report/tabular.rs

use std::sync::Arc;

use compalign::api::{adjust_batch, align_batch, read_fasta, BatchOptions, SeqRecord};
use compalign::config::{AlignConfig, AlignMode, ScoringMatrix};
use compalign::core::diagnostics::PipelineDiagnostics;
use compalign::report::write_tabular;
use tempfile::TempDir;

use super::helpers::write_fasta;

fn global_config() -> AlignConfig {
    AlignConfig {
        mode: AlignMode::Global,
        composition: None,
        ..AlignConfig::for_matrix(ScoringMatrix::Blosum62)
    }
}

fn load(dir: &TempDir, name: &str, records: &[(&str, &str)]) -> Vec<SeqRecord> {
    read_fasta(&write_fasta(dir, name, records)).unwrap()
}

#[test]
fn test_read_fasta_takes_first_word() {
    let dir = TempDir::new().unwrap();
    let path = write_fasta(&dir, "q.fa", &[("q1 first query", "ACDEFGHIKL"), ("q2", "MKV")]);
    let records = read_fasta(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "q1");
    assert_eq!(records[0].seq, b"ACDEFGHIKL");
    assert_eq!(records[1].id, "q2");

    assert!(read_fasta(&dir.path().join("missing.fa")).is_err());
}

#[test]
fn test_failed_pair_does_not_stop_batch() {
    let dir = TempDir::new().unwrap();
    let queries = load(&dir, "q.fa", &[("q1", "ACDEFGHIKL")]);
    let subjects = load(&dir, "s.fa", &[("s1", "ACDEFGHIKL"), ("s2", "ACDEFGHIK")]);

    // a zero-width band cannot span the one-residue length difference
    let config = AlignConfig { band: Some(0), ..global_config() };
    let diag = Arc::new(PipelineDiagnostics::default());
    let options = BatchOptions { diagnostics: Some(diag.clone()), ..Default::default() };

    let pairs = align_batch(&config, &queries, &subjects, &options).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].hit.seq_index2, 0);
    assert_eq!(pairs[0].hit.score, 57);
    assert_eq!(PipelineDiagnostics::get(&diag.pairs_aligned), 1);
    assert_eq!(PipelineDiagnostics::get(&diag.pairs_failed), 1);
}

#[test]
fn test_hits_sorted_and_capped_per_query() {
    let dir = TempDir::new().unwrap();
    let queries = load(&dir, "q.fa", &[("q1", "ACDEFGHIKL"), ("q2", "ACDEFGHIK")]);
    let subjects = load(&dir, "s.fa", &[("s1", "ACDEFGHIK"), ("s2", "ACDEFGHIKL")]);

    let options = BatchOptions::default();
    let pairs = align_batch(&global_config(), &queries, &subjects, &options).unwrap();
    assert_eq!(pairs.len(), 4);
    let order: Vec<(usize, usize)> = pairs
        .iter()
        .map(|p| (p.hit.seq_index1, p.hit.seq_index2))
        .collect();
    assert_eq!(order, vec![(0, 1), (0, 0), (1, 0), (1, 1)]);

    let options = BatchOptions { max_hits_per_query: Some(1), ..Default::default() };
    let capped = align_batch(&global_config(), &queries, &subjects, &options).unwrap();
    assert_eq!(capped.len(), 2);
    assert_eq!((capped[0].hit.seq_index1, capped[0].hit.seq_index2), (0, 1));
    assert_eq!((capped[1].hit.seq_index1, capped[1].hit.seq_index2), (1, 0));
}

#[test]
fn test_tabular_line() {
    let dir = TempDir::new().unwrap();
    let queries = load(&dir, "q.fa", &[("q1 desc", "ACDEFGHIKL")]);
    let subjects = load(&dir, "s.fa", &[("s1", "ACDEFGHIKL")]);
    let options = BatchOptions::default();
    let pairs = align_batch(&global_config(), &queries, &subjects, &options).unwrap();

    let mut out = Vec::new();
    write_tabular(&mut out, &pairs, &queries, &subjects, true).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("qseqid\tsseqid"));
    assert!(lines[1].starts_with("q1\ts1\t100.000\t10\t0\t0\t1\t10\t1\t10\t"));
}

#[test]
fn test_adjust_batch_without_composition() {
    let dir = TempDir::new().unwrap();
    let queries = load(&dir, "q.fa", &[("q1", "ACDEFGHIKL")]);
    let subjects = load(&dir, "s.fa", &[("s1", "ACDEFGHIKL"), ("s2", "MKV")]);
    let options = BatchOptions::default();
    let adjustments = adjust_batch(&global_config(), &queries, &subjects, &options).unwrap();
    assert_eq!(adjustments.len(), 2);
    assert!(adjustments.iter().all(|a| a.summary.is_none()));
}
