#![forbid(unsafe_code)]

//! Editor state container for Mailsmith.
//!
//! # Role in Mailsmith
//! This crate is where the pieces meet: [`EditorStore`] owns the live
//! [`EmailDocument`](mailsmith_model::EmailDocument), routes batched
//! and structural edits through the history engine, enforces the
//! validate-then-atomically-replace template loading contract, and
//! keeps long-lived [`Version`] save points under a retention policy.
//!
//! State transitions emit `tracing` events (`debug!`/`trace!`); no
//! subscriber is installed here — that is the embedding application's
//! choice.

pub mod store;
pub mod versions;

pub use store::EditorStore;
pub use versions::{RetentionPolicy, Version, VersionKind, VersionStore};
