//! Tabular hit output (BLAST outfmt 6 columns)
//!
//! Reference: ncbi-blast/c++/src/objtools/align_format/tabular.cpp
//!
//! Columns: qseqid sseqid pident length mismatch gapopen qstart qend sstart
//! send evalue bitscore. Coordinates are 1-based and inclusive.

use std::io::{self, Write};

use crate::api::{AlignedPair, PairAdjustment, SeqRecord};

pub const TABULAR_HEADER: &str = concat!(
    "qseqid\tsseqid\tpident\tlength\tmismatch\tgapopen\t",
    "qstart\tqend\tsstart\tsend\tevalue\tbitscore"
);

/// `%le`-style scientific notation with a signed, two-digit exponent
fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// E-value as printed in BLAST tabular output.
/// Reference: align_format_util.cpp GetScoreString
pub fn format_evalue(e_value: f64) -> String {
    if e_value < 1.0e-180 {
        "0.0".to_string()
    } else if e_value < 0.0009 {
        format_scientific(e_value, 2)
    } else if e_value < 0.1 {
        format!("{:.3}", e_value)
    } else if e_value < 1.0 {
        format!("{:.2}", e_value)
    } else if e_value < 10.0 {
        format!("{:.1}", e_value)
    } else {
        format!("{:.0}", e_value)
    }
}

/// Bit score as printed in BLAST tabular output.
pub fn format_bitscore(bit_score: f64) -> String {
    if bit_score > 99999.0 {
        format_scientific(bit_score, 3)
    } else if bit_score > 99.9 {
        format!("{:.0}", bit_score)
    } else {
        format!("{:.1}", bit_score)
    }
}

/// One line per aligned pair. Hit indices select the ids from `queries`
/// and `subjects`.
pub fn write_tabular<W: Write>(
    writer: &mut W,
    pairs: &[AlignedPair],
    queries: &[SeqRecord],
    subjects: &[SeqRecord],
    include_header: bool,
) -> io::Result<()> {
    if include_header {
        writeln!(writer, "{}", TABULAR_HEADER)?;
    }
    for pair in pairs {
        let hit = &pair.hit;
        let query_id = queries.get(hit.seq_index1).map_or("unknown", |r| r.id.as_str());
        let subject_id = subjects.get(hit.seq_index2).map_or("unknown", |r| r.id.as_str());
        let stats = &pair.stats;
        writeln!(
            writer,
            "{}\t{}\t{:.3}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            query_id,
            subject_id,
            stats.percent_identity(),
            stats.columns,
            stats.mismatches,
            stats.gap_opens,
            hit.range1.start + 1,
            hit.range1.end,
            hit.range2.start + 1,
            hit.range2.end,
            format_evalue(hit.evalue),
            format_bitscore(hit.bit_score),
        )?;
    }
    Ok(())
}

/// Composition adjustment results: target and achieved relative entropy
/// (nats) and whether the optimiser converged.
pub fn write_adjustments<W: Write>(
    writer: &mut W,
    adjustments: &[PairAdjustment],
    queries: &[SeqRecord],
    subjects: &[SeqRecord],
) -> io::Result<()> {
    writeln!(writer, "qseqid\tsseqid\ttarget_re\tachieved_re\tconverged\titerations")?;
    for adj in adjustments {
        let query_id = queries.get(adj.query).map_or("unknown", |r| r.id.as_str());
        let subject_id = subjects.get(adj.subject).map_or("unknown", |r| r.id.as_str());
        match &adj.summary {
            Some(s) => writeln!(
                writer,
                "{}\t{}\t{:.4}\t{:.4}\t{}\t{}",
                query_id,
                subject_id,
                s.target_relative_entropy,
                s.achieved_relative_entropy,
                if s.converged { "yes" } else { "no" },
                s.iterations
            )?,
            None => writeln!(writer, "{}\t{}\tNA\tNA\tskipped\t0", query_id, subject_id)?,
        }
    }
    Ok(())
}
