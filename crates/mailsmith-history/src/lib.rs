#![forbid(unsafe_code)]

//! In-session undo/redo for Mailsmith.
//!
//! Two small, independent pieces:
//!
//! - [`HistoryEngine`]: a bounded snapshot store. Every discrete edit
//!   pushes a deep snapshot of the block list; capacity is fixed and
//!   the oldest entries are silently evicted — a deliberate
//!   memory/fidelity trade-off, not a bug.
//! - [`ActionBatcher`]: coalesces a rapid burst of fine-grained edits
//!   (keystroke-level formatting, repeated stepper clicks) into exactly
//!   one history push after a quiet period.
//!
//! Neither piece has error conditions. Boundary cases (`undo` at the
//! oldest snapshot, `flush` with nothing queued) signal with `None`,
//! never with a panic or an error value.

pub mod batcher;
pub mod engine;

pub use batcher::{ActionBatcher, BatchConfig};
pub use engine::{HistoryConfig, HistoryEngine};
