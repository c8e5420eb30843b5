//! Global alignment
//!
//! - `nw` - affine-gap Needleman-Wunsch with free end gaps and banding
//! - `transcript` - column transcripts (`M`/`R`/`I`/`D`)
//! - `traceback` - per-cell traceback bytes

pub mod nw;
pub mod traceback;
pub mod transcript;

pub use nw::{NwAligner, NwAlignment};
pub use transcript::{Transcript, TranscriptOp};
