//! Command-line arguments

use clap::Args;
use std::path::PathBuf;

use crate::config::{
    AlignConfig, AlignMode, CompositionConfig, EndSpaceFree, GapCosts, RelEntropyMode,
    ScoringMatrix,
};

/// Options shared by `align` and `adjust`
#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    #[arg(short, long)]
    pub query: PathBuf,
    #[arg(short, long)]
    pub subject: PathBuf,
    /// BLOSUM45/50/62/80/90 or PAM30/70/250
    #[arg(short, long, default_value = "BLOSUM62")]
    pub matrix: ScoringMatrix,
    /// Defaults to the matrix's BLAST gap costs
    #[arg(long)]
    pub gap_open: Option<i32>,
    #[arg(long)]
    pub gap_extend: Option<i32>,
    /// old-old (no adjustment), unconstrained, old-new or user
    #[arg(long, default_value = "old-new")]
    pub comp_mode: RelEntropyMode,
    /// Turn composition adjustment off entirely
    #[arg(long)]
    pub no_comp: bool,
    #[arg(long, default_value_t = 20)]
    pub pseudocounts: u32,
    /// Target relative entropy in nats, used with `--comp-mode user`
    #[arg(long, default_value_t = 0.44)]
    pub target_re: f64,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AlignArgs {
    #[command(flatten)]
    pub scoring: ScoringArgs,
    /// global (Needleman-Wunsch) or xdrop (extension from the best seed)
    #[arg(long, default_value = "global")]
    pub mode: AlignMode,
    /// X-drop in bits
    #[arg(long, default_value_t = 25.0)]
    pub x_drop: f64,
    /// Restrict global DP to |i - j| <= band
    #[arg(long)]
    pub band: Option<usize>,
    /// Do not penalise leading or trailing gaps in global mode
    #[arg(long)]
    pub free_end_gaps: bool,
    #[arg(long)]
    pub max_hits: Option<usize>,
    /// Print wrapped alignments instead of tabular lines
    #[arg(long)]
    pub show_alignments: bool,
    #[arg(long)]
    pub header: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Matrix name, e.g. BLOSUM62
    pub name: String,
}

impl ScoringArgs {
    pub fn gap_costs(&self) -> GapCosts {
        let defaults = self.matrix.default_gap_costs();
        GapCosts::new(
            self.gap_open.unwrap_or(defaults.open),
            self.gap_extend.unwrap_or(defaults.extend),
        )
    }

    pub fn composition(&self) -> Option<CompositionConfig> {
        (!self.no_comp).then_some(CompositionConfig {
            mode: self.comp_mode,
            pseudocounts: self.pseudocounts,
            target_relative_entropy: self.target_re,
        })
    }

    pub fn align_config(&self) -> AlignConfig {
        AlignConfig {
            gap: self.gap_costs(),
            composition: self.composition(),
            ..AlignConfig::for_matrix(self.matrix)
        }
    }
}

impl AlignArgs {
    pub fn align_config(&self) -> AlignConfig {
        AlignConfig {
            mode: self.mode,
            x_drop_bits: self.x_drop,
            band: self.band,
            end_space_free: if self.free_end_gaps {
                EndSpaceFree::all()
            } else {
                EndSpaceFree::default()
            },
            ..self.scoring.align_config()
        }
    }
}
