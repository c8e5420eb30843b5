//! Run configuration: matrices, gap costs, composition adjustment and DP mode.

pub mod scoring;

pub use scoring::{GapCosts, ScoringMatrix};

use crate::core::error::AlignError;

/// How the target relative entropy of a composition adjustment is chosen.
///
/// Reference: composition_adjustment.h ECompoAdjustModes / EMatrixAdjustRule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelEntropyMode {
    /// Keep the starting matrix; report its implicit relative entropy.
    OldMatrixOldContext,
    /// Fit the new marginals only and report whatever entropy results.
    Unconstrained,
    /// Target the entropy the unmodified scores would have under the new
    /// compositions.
    #[default]
    OldMatrixNewContext,
    /// Target a caller-specified entropy.
    UserSpecified,
}

impl std::str::FromStr for RelEntropyMode {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "old-old" | "old-matrix-old-context" | "none" => {
                Ok(RelEntropyMode::OldMatrixOldContext)
            }
            "unconstrained" => Ok(RelEntropyMode::Unconstrained),
            "old-new" | "old-matrix-new-context" => Ok(RelEntropyMode::OldMatrixNewContext),
            "user" | "user-specified" => Ok(RelEntropyMode::UserSpecified),
            _ => Err(AlignError::precondition(format!(
                "unknown relative entropy mode: {}. Use old-old, unconstrained, old-new or user",
                s
            ))),
        }
    }
}

/// Composition adjustment settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionConfig {
    pub mode: RelEntropyMode,
    /// Weight of the background distribution blended into observed counts
    pub pseudocounts: u32,
    /// Used only by `RelEntropyMode::UserSpecified` (nats)
    pub target_relative_entropy: f64,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            mode: RelEntropyMode::default(),
            pseudocounts: 20,
            target_relative_entropy: 0.44,
        }
    }
}

/// DP flavour used by the pairwise aligner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignMode {
    /// Needleman-Wunsch over the full sequences (optionally banded)
    #[default]
    Global,
    /// Two-sided x-drop extension from the best ungapped seed
    XDrop,
}

impl std::str::FromStr for AlignMode {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" | "nw" => Ok(AlignMode::Global),
            "xdrop" | "x-drop" | "local" => Ok(AlignMode::XDrop),
            _ => Err(AlignError::precondition(format!(
                "unknown alignment mode: {}. Use 'global' or 'xdrop'",
                s
            ))),
        }
    }
}

/// Which sequence ends may carry unpenalised gaps in global mode.
///
/// `left1`/`right1` free leading/trailing gaps placed in sequence 1,
/// `left2`/`right2` those placed in sequence 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndSpaceFree {
    pub left1: bool,
    pub right1: bool,
    pub left2: bool,
    pub right2: bool,
}

impl EndSpaceFree {
    pub fn all() -> Self {
        Self { left1: true, right1: true, left2: true, right2: true }
    }
}

/// Complete pairwise alignment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AlignConfig {
    pub matrix: ScoringMatrix,
    pub gap: GapCosts,
    pub mode: AlignMode,
    /// X-drop for gapped extension, in bits (BLAST default 25)
    pub x_drop_bits: f64,
    pub band: Option<usize>,
    pub end_space_free: EndSpaceFree,
    /// `None` disables composition-based score adjustment
    pub composition: Option<CompositionConfig>,
}

impl Default for AlignConfig {
    fn default() -> Self {
        let matrix = ScoringMatrix::default();
        Self {
            matrix,
            gap: matrix.default_gap_costs(),
            mode: AlignMode::default(),
            x_drop_bits: 25.0,
            band: None,
            end_space_free: EndSpaceFree::default(),
            composition: Some(CompositionConfig::default()),
        }
    }
}

impl AlignConfig {
    /// Defaults for `matrix`, including its BLAST gap costs
    pub fn for_matrix(matrix: ScoringMatrix) -> Self {
        Self {
            matrix,
            gap: matrix.default_gap_costs(),
            ..Self::default()
        }
    }
}
