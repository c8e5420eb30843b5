//! Pairwise alignment text view
//!
//! Reference: ncbi-blast/c++/src/objtools/align_format/showalign.cpp
//!
//! ```text
//! Query  1     ACDEFGHIKL  10
//!              ACDE GHIKL
//! Sbjct  1     ACDE-GHIKL  9
//! ```

use std::io::{self, Write};

use crate::align::{Transcript, TranscriptOp};
use crate::api::{AlignedPair, SeqRecord};
use crate::core::error::Result;
use crate::msa::{Sequence, GAP_CHAR};
use crate::report::tabular::{format_bitscore, format_evalue};
use crate::utils::matrix::FullScoreMatrix;

/// Residues per display line
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// The two gapped rows of an aligned pair.
pub fn gapped_rows(
    pair: &AlignedPair,
    query: &[u8],
    subject: &[u8],
) -> Result<(Sequence, Sequence)> {
    let hit = &pair.hit;
    let transcript = Transcript::from_script(
        &hit.script,
        query,
        subject,
        hit.range1.start,
        hit.range2.start,
    );

    let mut row1 = Sequence::new(&query[hit.range1.start..hit.range1.end]);
    row1.propagate_gaps(&transcript, TranscriptOp::Insert)?;
    let mut row2 = Sequence::new(&subject[hit.range2.start..hit.range2.end]);
    row2.propagate_gaps(&transcript, TranscriptOp::Delete)?;
    Ok((row1, row2))
}

/// Middle line: the residue for identities, `+` for other positive
/// scores, blank otherwise.
fn midline(row1: &Sequence, row2: &Sequence, matrix: &FullScoreMatrix) -> String {
    (0..row1.len())
        .map(|k| {
            match (row1.letter(k), row2.letter(k)) {
                (Some(a), Some(b)) if a != GAP_CHAR && b != GAP_CHAR => {
                    if a == b {
                        row1.printable_letter(k)
                    } else if matrix.score(a, b) > 0 {
                        '+'
                    } else {
                        ' '
                    }
                }
                _ => ' ',
            }
        })
        .collect()
}

/// Write the header, score lines and wrapped rows of one pair.
pub fn write_alignment<W: Write>(
    writer: &mut W,
    pair: &AlignedPair,
    query: &SeqRecord,
    subject: &SeqRecord,
    matrix: &FullScoreMatrix,
    line_length: usize,
) -> io::Result<()> {
    let hit = &pair.hit;
    let (row1, row2) = gapped_rows(pair, &query.seq, &subject.seq)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    writeln!(writer, ">{} vs {}", query.id, subject.id)?;
    writeln!(writer, "Length={}/{}", query.seq.len(), subject.seq.len())?;
    writeln!(writer)?;
    writeln!(
        writer,
        " Score = {} bits ({}),  Expect = {}",
        format_bitscore(hit.bit_score),
        hit.score,
        format_evalue(hit.evalue)
    )?;
    let stats = &pair.stats;
    let cols = stats.columns.max(1);
    writeln!(
        writer,
        " Identities = {}/{} ({}%), Gaps = {}/{} ({}%)",
        stats.identities,
        stats.columns,
        100 * stats.identities / cols,
        stats.gaps,
        stats.columns,
        100 * stats.gaps / cols
    )?;
    writeln!(writer)?;

    let mid = midline(&row1, &row2, matrix);
    let width = hit.range1.end.max(hit.range2.end).to_string().len().max(4);
    let line_length = line_length.max(1);
    let (mut pos1, mut pos2) = (hit.range1.start, hit.range2.start);

    let mut offset = 0;
    while offset < row1.len() {
        let end = (offset + line_length).min(row1.len());
        let chunk1: String = (offset..end).map(|k| row1.printable_letter(k)).collect();
        let chunk2: String = (offset..end).map(|k| row2.printable_letter(k)).collect();
        let used1 = (offset..end).filter(|&k| !row1.is_gap(k)).count();
        let used2 = (offset..end).filter(|&k| !row2.is_gap(k)).count();

        writeln!(
            writer,
            "Query  {:<width$}  {}  {}",
            pos1 + 1,
            chunk1,
            pos1 + used1,
            width = width
        )?;
        writeln!(writer, "       {:<width$}  {}", "", &mid[offset..end], width = width)?;
        writeln!(
            writer,
            "Sbjct  {:<width$}  {}  {}",
            pos2 + 1,
            chunk2,
            pos2 + used2,
            width = width
        )?;
        writeln!(writer)?;

        pos1 += used1;
        pos2 += used2;
        offset = end;
    }
    Ok(())
}
