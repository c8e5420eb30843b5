//! Batch comparison of query and subject sets
//!
//! Every query is compared with every subject. Pairs run on rayon, each
//! worker owning its own `PairwiseAligner`. A pair that fails is logged and
//! counted; the rest of the batch carries on.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use bio::io::fasta;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;

use super::pairwise::{AdjustSummary, AlignedPair, PairwiseAligner};
use crate::config::AlignConfig;
use crate::core::diagnostics::PipelineDiagnostics;

/// A named input sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

impl SeqRecord {
    pub fn new(id: impl Into<String>, seq: &[u8]) -> Self {
        Self { id: id.into(), seq: seq.to_vec() }
    }
}

/// Read every record of a FASTA file; the id is the first word of the
/// header line.
pub fn read_fasta(path: &Path) -> Result<Vec<SeqRecord>> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("Failed to open FASTA file {}", path.display()))?;
    let mut records = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to parse FASTA file {}", path.display()))?;
        let id = record.id().split_whitespace().next().unwrap_or("unknown").to_string();
        records.push(SeqRecord { id, seq: record.seq().to_vec() });
    }
    Ok(records)
}

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub show_progress: bool,
    pub diagnostics: Option<Arc<PipelineDiagnostics>>,
    /// Keep at most this many hits per query, best first
    pub max_hits_per_query: Option<usize>,
}

/// Adjustment outcome for one query/subject pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairAdjustment {
    pub query: usize,
    pub subject: usize,
    pub summary: Option<AdjustSummary>,
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
    {
        bar.set_style(style);
    }
    bar
}

fn worker(config: &AlignConfig, options: &BatchOptions) -> crate::core::Result<PairwiseAligner> {
    let aligner = PairwiseAligner::new(config.clone())?;
    Ok(match &options.diagnostics {
        Some(diag) => aligner.with_diagnostics(diag.clone()),
        None => aligner,
    })
}

fn record_failure(
    options: &BatchOptions,
    query: &SeqRecord,
    subject: &SeqRecord,
    err: &dyn std::fmt::Display,
) {
    warn!("skipping pair {} / {}: {}", query.id, subject.id, err);
    if let Some(diag) = &options.diagnostics {
        PipelineDiagnostics::inc(&diag.pairs_failed);
    }
}

/// Align every query against every subject.
///
/// Hits come back grouped by query in input order; within a query they
/// are sorted by score, best first. Hit indices are `(query, subject)`.
pub fn align_batch(
    config: &AlignConfig,
    queries: &[SeqRecord],
    subjects: &[SeqRecord],
    options: &BatchOptions,
) -> Result<Vec<AlignedPair>> {
    // Surface configuration errors before fanning out.
    worker(config, options).context("Invalid alignment configuration")?;

    let pairs: Vec<(usize, usize)> = (0..queries.len())
        .flat_map(|q| (0..subjects.len()).map(move |s| (q, s)))
        .collect();
    let bar = progress_bar(pairs.len(), options.show_progress);

    let results: Vec<Option<AlignedPair>> = pairs
        .par_iter()
        .map_init(
            || worker(config, options),
            |aligner, &(q, s)| {
                let (query, subject) = (&queries[q], &subjects[s]);
                let outcome = match aligner {
                    Ok(aligner) => aligner.align_pair(q, s, &query.seq, &subject.seq),
                    Err(err) => Err(err.clone()),
                };
                bar.inc(1);
                outcome.unwrap_or_else(|err| {
                    record_failure(options, query, subject, &err);
                    None
                })
            },
        )
        .collect();
    bar.finish_and_clear();

    let mut by_query: Vec<Vec<AlignedPair>> = vec![Vec::new(); queries.len()];
    for pair in results.into_iter().flatten() {
        by_query[pair.hit.seq_index1].push(pair);
    }

    let mut out = Vec::new();
    for mut pairs in by_query {
        pairs.sort_by(|a, b| b.hit.score.cmp(&a.hit.score));
        if let Some(max) = options.max_hits_per_query {
            pairs.truncate(max);
        }
        out.extend(pairs);
    }
    Ok(out)
}

/// Run only the composition adjustment for every query/subject pair.
pub fn adjust_batch(
    config: &AlignConfig,
    queries: &[SeqRecord],
    subjects: &[SeqRecord],
    options: &BatchOptions,
) -> Result<Vec<PairAdjustment>> {
    worker(config, options).context("Invalid alignment configuration")?;

    let pairs: Vec<(usize, usize)> = (0..queries.len())
        .flat_map(|q| (0..subjects.len()).map(move |s| (q, s)))
        .collect();
    let bar = progress_bar(pairs.len(), options.show_progress);

    let results: Vec<Option<PairAdjustment>> = pairs
        .par_iter()
        .map_init(
            || worker(config, options),
            |aligner, &(q, s)| {
                let (query, subject) = (&queries[q], &subjects[s]);
                let outcome = match aligner {
                    Ok(aligner) => aligner.adjust(&query.seq, &subject.seq),
                    Err(err) => Err(err.clone()),
                };
                bar.inc(1);
                match outcome {
                    Ok(summary) => Some(PairAdjustment { query: q, subject: s, summary }),
                    Err(err) => {
                        record_failure(options, query, subject, &err);
                        None
                    }
                }
            },
        )
        .collect();
    bar.finish_and_clear();

    Ok(results.into_iter().flatten().collect())
}
