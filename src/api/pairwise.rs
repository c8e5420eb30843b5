//! One pair at a time: composition adjustment, DP, hit.
//!
//! Reference: ncbi-blast/c++/src/algo/blast/core/blast_kappa.c
//!            (Blast_RedoAlignmentCore: adjust matrix, realign, rescore)
//!
//! A `PairwiseAligner` owns every piece of mutable state one comparison
//! needs (composition workspace, x-drop aligner with its state pool, NW
//! traceback). Batch runs give each rayon worker its own instance.

use std::sync::Arc;

use crate::align::NwAligner;
use crate::config::{AlignConfig, AlignMode};
use crate::core::blast_gapalign::{best_ungapped_seed, GapAligner};
use crate::core::blast_stat::{lookup_protein_params, KarlinParams};
use crate::core::composition_adjustment::{
    adjust_composition, residue_frequencies, CompositionWorkspace,
};
use crate::core::diagnostics::PipelineDiagnostics;
use crate::core::error::Result;
use crate::core::gapinfo::EditStats;
use crate::msa::{Hit, SeqRange};
use crate::utils::matrix::{packed_matrix, FullScoreMatrix, PackedScoreMatrix};

/// Outcome of the composition adjustment of one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustSummary {
    /// Entropy the engine aimed for (nats)
    pub target_relative_entropy: f64,
    pub achieved_relative_entropy: f64,
    pub converged: bool,
    pub iterations: usize,
}

/// A scored alignment of one query/subject pair
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    pub hit: Hit,
    pub stats: EditStats,
    pub adjustment: Option<AdjustSummary>,
}

pub struct PairwiseAligner {
    config: AlignConfig,
    packed: &'static PackedScoreMatrix,
    base: FullScoreMatrix,
    adjusted: FullScoreMatrix,
    params: KarlinParams,
    workspace: CompositionWorkspace,
    gap_aligner: GapAligner,
    nw: NwAligner,
    diagnostics: Option<Arc<PipelineDiagnostics>>,
}

impl PairwiseAligner {
    pub fn new(config: AlignConfig) -> Result<Self> {
        let packed = packed_matrix(config.matrix);
        let base = packed.unpack()?;
        let params = lookup_protein_params(config.matrix, config.gap);
        let x_drop = params.raw_from_bits(config.x_drop_bits);
        let mode = config.composition.map(|c| c.mode).unwrap_or_default();

        Ok(Self {
            packed,
            adjusted: base.clone(),
            base,
            params,
            workspace: CompositionWorkspace::new(mode),
            gap_aligner: GapAligner::new(config.gap, x_drop),
            nw: NwAligner::new(config.gap)
                .with_end_space_free(config.end_space_free)
                .with_band(config.band),
            diagnostics: None,
            config,
        })
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<PipelineDiagnostics>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Statistical parameters used for bit scores and e-values
    pub fn karlin_params(&self) -> KarlinParams {
        self.params
    }

    /// Adjust the matrix to the compositions of `seq1` and `seq2`.
    ///
    /// `None` when adjustment is disabled or either sequence has no true
    /// residues; the base matrix is then used unchanged.
    pub fn adjust(&mut self, seq1: &[u8], seq2: &[u8]) -> Result<Option<AdjustSummary>> {
        let Some(comp) = self.config.composition else {
            return Ok(None);
        };
        let (Some((p, len1)), Some((q, len2))) =
            (residue_frequencies(seq1), residue_frequencies(seq2))
        else {
            return Ok(None);
        };

        self.workspace.flag = comp.mode;
        adjust_composition(
            self.packed.name,
            len1,
            len2,
            &p,
            &q,
            comp.pseudocounts,
            comp.target_relative_entropy,
            &mut self.workspace,
        )?;
        self.adjusted = self.workspace.adjusted_matrix(self.packed)?;

        if let Some(diag) = &self.diagnostics {
            if self.workspace.converged {
                PipelineDiagnostics::inc(&diag.adjustments_converged);
            } else {
                PipelineDiagnostics::inc(&diag.adjustments_fallback);
            }
        }

        Ok(Some(AdjustSummary {
            target_relative_entropy: self.workspace.relative_entropy,
            achieved_relative_entropy: self.workspace.achieved_relative_entropy,
            converged: self.workspace.converged,
            iterations: self.workspace.iterations,
        }))
    }

    /// Align `seq1` (sequence `index1`) against `seq2` (sequence `index2`).
    ///
    /// `Ok(None)` means no alignment scored: an empty sequence, or in x-drop
    /// mode no positive ungapped seed.
    pub fn align_pair(
        &mut self,
        index1: usize,
        index2: usize,
        seq1: &[u8],
        seq2: &[u8],
    ) -> Result<Option<AlignedPair>> {
        if seq1.is_empty() || seq2.is_empty() {
            self.count_without_hit();
            return Ok(None);
        }

        let adjustment = self.adjust(seq1, seq2)?;
        let matrix = if adjustment.is_some() { &self.adjusted } else { &self.base };

        let cells_before = self.gap_aligner.cells_computed();
        let nodes_before = self.pool_nodes();
        let mut hit = match self.config.mode {
            AlignMode::XDrop => {
                let Some((seed1, seed2, _)) = best_ungapped_seed(seq1, seq2, matrix) else {
                    self.count_without_hit();
                    return Ok(None);
                };
                let (score, block) = self
                    .gap_aligner
                    .extend_from_seed(seq1, seq2, seed1, seed2, matrix)?;
                block.validate()?;
                Hit::from_block(index1, index2, score, &block)
            }
            AlignMode::Global => {
                let aln = self.nw.align(seq1, seq2, matrix)?;
                let mut hit = Hit::new(
                    index1,
                    index2,
                    aln.score,
                    SeqRange::new(0, seq1.len()),
                    SeqRange::new(0, seq2.len()),
                );
                hit.script = aln.transcript.to_script();
                hit
            }
        };

        hit.bit_score = self.params.bit_score(hit.score);
        hit.evalue = self.params.evalue(hit.score, seq1.len(), seq2.len());
        let stats = hit
            .script
            .stats(&seq1[hit.range1.start..], &seq2[hit.range2.start..]);

        if let Some(diag) = &self.diagnostics {
            PipelineDiagnostics::inc(&diag.pairs_aligned);
            let cells = match self.config.mode {
                AlignMode::XDrop => self.gap_aligner.cells_computed() - cells_before,
                AlignMode::Global => (seq1.len() + 1) * (seq2.len() + 1),
            };
            PipelineDiagnostics::add(&diag.dp_cells, cells);
            PipelineDiagnostics::add(
                &diag.pool_nodes_allocated,
                self.pool_nodes() - nodes_before,
            );
        }

        Ok(Some(AlignedPair { hit, stats, adjustment }))
    }

    /// State-pool nodes currently held by the x-drop aligner
    pub fn pool_nodes(&self) -> usize {
        self.gap_aligner.pool().node_count()
    }

    fn count_without_hit(&self) {
        if let Some(diag) = &self.diagnostics {
            PipelineDiagnostics::inc(&diag.pairs_without_hit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GapCosts, ScoringMatrix};
    use crate::core::gapinfo::{EditOpType, GapEditScript};

    fn config(mode: AlignMode) -> AlignConfig {
        AlignConfig {
            mode,
            composition: None,
            ..AlignConfig::for_matrix(ScoringMatrix::Blosum62)
        }
    }

    #[test]
    fn test_identical_pair_both_modes() {
        for mode in [AlignMode::Global, AlignMode::XDrop] {
            let mut aligner = PairwiseAligner::new(config(mode)).unwrap();
            let pair = aligner.align_pair(0, 1, b"ACDEFGHIKL", b"ACDEFGHIKL").unwrap().unwrap();
            assert_eq!(pair.hit.score, 57);
            assert_eq!(pair.hit.range1, SeqRange::new(0, 10));
            assert_eq!(pair.hit.script, GapEditScript::from_runs([(EditOpType::Sub, 10)]));
            assert_eq!(pair.stats.identities, 10);
            assert!(pair.hit.bit_score > 0.0);
            assert!(pair.adjustment.is_none());
        }
    }

    #[test]
    fn test_xdrop_without_seed_reports_nothing() {
        let diag = Arc::new(PipelineDiagnostics::default());
        let mut aligner = PairwiseAligner::new(config(AlignMode::XDrop))
            .unwrap()
            .with_diagnostics(diag.clone());
        assert!(aligner.align_pair(0, 1, b"AAAA", b"WWWW").unwrap().is_none());
        assert!(aligner.align_pair(0, 1, b"", b"WWWW").unwrap().is_none());
        assert_eq!(PipelineDiagnostics::get(&diag.pairs_without_hit), 2);
    }

    #[test]
    fn test_xdrop_counts_pool_growth() {
        let diag = Arc::new(PipelineDiagnostics::default());
        let mut aligner = PairwiseAligner::new(config(AlignMode::XDrop))
            .unwrap()
            .with_diagnostics(diag.clone());
        aligner
            .align_pair(0, 1, b"ACDEFGHIKLMNPQRST", b"ACDEFGHIKLNPQRST")
            .unwrap()
            .unwrap();
        let nodes = aligner.pool_nodes();
        assert!(nodes > 0);
        assert_eq!(PipelineDiagnostics::get(&diag.pool_nodes_allocated), nodes);

        // the pool is reused, so a repeat adds nothing
        aligner
            .align_pair(0, 1, b"ACDEFGHIKLMNPQRST", b"ACDEFGHIKLNPQRST")
            .unwrap()
            .unwrap();
        assert_eq!(PipelineDiagnostics::get(&diag.pool_nodes_allocated), nodes);
    }

    #[test]
    fn test_composition_adjusted_pair() {
        let mut cfg = config(AlignMode::Global);
        cfg.composition = Some(Default::default());
        cfg.gap = GapCosts::new(11, 1);
        let diag = Arc::new(PipelineDiagnostics::default());
        let mut aligner = PairwiseAligner::new(cfg).unwrap().with_diagnostics(diag.clone());

        let pair = aligner
            .align_pair(0, 1, b"MKTAYIAKQRQISFVKSHFSRQ", b"MKTAYIAKQRQLSFVKSHFSRQ")
            .unwrap()
            .unwrap();
        let summary = pair.adjustment.unwrap();
        assert!(summary.achieved_relative_entropy.is_finite());
        assert_eq!(pair.hit.script.seq1_len(), 22);
        assert_eq!(pair.stats.mismatches + pair.stats.identities, 22);
        assert_eq!(
            PipelineDiagnostics::get(&diag.adjustments_converged)
                + PipelineDiagnostics::get(&diag.adjustments_fallback),
            1
        );
    }
}
