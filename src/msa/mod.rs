//! Multiple alignment building blocks
//!
//! - `sequence` - profile sequences and gap propagation
//! - `hit` / `hitlist` - pairwise hits and the list that owns them
//! - `block_extender` - growing conserved blocks across rows

pub mod block_extender;
pub mod hit;
pub mod hitlist;
pub mod sequence;

pub use block_extender::{Block, BlockExtender, PairExtension, Terminus};
pub use hit::{Hit, SeqRange};
pub use hitlist::HitList;
pub use sequence::{compress_sequences, Sequence, GAP_CHAR};
