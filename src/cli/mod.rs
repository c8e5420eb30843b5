//! Subcommand drivers for the `compalign` binary

pub mod args;

pub use args::{AlignArgs, MatrixArgs, ScoringArgs};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::api::{adjust_batch, align_batch, read_fasta, BatchOptions, SeqRecord};
use crate::core::diagnostics::{diagnostics_enabled, PipelineDiagnostics};
use crate::report::{write_adjustments, write_alignment, write_tabular, DEFAULT_LINE_LENGTH};
use crate::utils::matrix::{packed_matrix, packed_matrix_by_name};

fn open_output(out: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn init_thread_pool(num_threads: usize) -> Result<()> {
    if num_threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .context("Failed to build thread pool")?;
    }
    Ok(())
}

fn load_inputs(args: &ScoringArgs) -> Result<(Vec<SeqRecord>, Vec<SeqRecord>)> {
    let queries = read_fasta(&args.query)?;
    let subjects = read_fasta(&args.subject)?;
    info!("{} queries, {} subjects", queries.len(), subjects.len());
    Ok((queries, subjects))
}

fn batch_options(args: &ScoringArgs, max_hits: Option<usize>) -> BatchOptions {
    BatchOptions {
        show_progress: args.verbose,
        diagnostics: diagnostics_enabled().then(|| Arc::new(PipelineDiagnostics::default())),
        max_hits_per_query: max_hits,
    }
}

pub fn run_align(args: AlignArgs) -> Result<()> {
    init_thread_pool(args.scoring.num_threads)?;
    let config = args.align_config();
    let (queries, subjects) = load_inputs(&args.scoring)?;
    let options = batch_options(&args.scoring, args.max_hits);

    let pairs = align_batch(&config, &queries, &subjects, &options)?;

    let mut writer = open_output(args.scoring.out.as_ref())?;
    if args.show_alignments {
        let matrix = packed_matrix(config.matrix).unpack()?;
        for pair in &pairs {
            let query = &queries[pair.hit.seq_index1];
            let subject = &subjects[pair.hit.seq_index2];
            write_alignment(&mut writer, pair, query, subject, &matrix, DEFAULT_LINE_LENGTH)?;
        }
    } else {
        write_tabular(&mut writer, &pairs, &queries, &subjects, args.header)?;
    }
    writer.flush()?;

    if let Some(diag) = &options.diagnostics {
        diag.print_summary();
    }
    Ok(())
}

pub fn run_adjust(args: ScoringArgs) -> Result<()> {
    init_thread_pool(args.num_threads)?;
    let config = args.align_config();
    let (queries, subjects) = load_inputs(&args)?;
    let options = batch_options(&args, None);

    let adjustments = adjust_batch(&config, &queries, &subjects, &options)?;

    let mut writer = open_output(args.out.as_ref())?;
    write_adjustments(&mut writer, &adjustments, &queries, &subjects)?;
    writer.flush()?;

    if let Some(diag) = &options.diagnostics {
        diag.print_summary();
    }
    Ok(())
}

/// Print a packed matrix as a labelled square table.
pub fn run_matrix(args: MatrixArgs) -> Result<()> {
    let packed = packed_matrix_by_name(&args.name)?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    writeln!(writer, "# {}", packed.name)?;
    write!(writer, " ")?;
    for c in packed.symbols.chars() {
        write!(writer, " {:>3}", c)?;
    }
    writeln!(writer)?;
    for (i, c) in packed.symbols.chars().enumerate() {
        write!(writer, "{}", c)?;
        for j in 0..packed.alphabet_len() {
            write!(writer, " {:>3}", packed.score_at(i, j))?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
