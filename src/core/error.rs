//! Error taxonomy for the alignment and scoring engine.
//!
//! Non-convergence of the composition adjustment is not an error; it is
//! reported through `CompositionWorkspace::converged`.

use thiserror::Error;

/// Errors raised by the library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// No compiled-in matrix carries this name.
    #[error("unknown scoring matrix: {0}")]
    UnknownMatrix(String),

    /// The packed alphabet cannot be indexed by the dense residue table.
    #[error("matrix alphabet of {len} symbols exceeds the {max}-entry residue table")]
    AlphabetTooLarge { len: usize, max: usize },

    /// The caller broke an input contract, e.g. frequencies that do not
    /// sum to one.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A DP buffer could not grow.
    #[error("memory limit reached: could not allocate {requested} bytes")]
    MemoryLimit { requested: usize },
}

impl AlignError {
    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        AlignError::Precondition(msg.into())
    }
}

/// Library result type.
pub type Result<T> = std::result::Result<T, AlignError>;
