//! # rec-core
//!
//! Error definitions shared by the recurrence crates.
//!
//! Every other crate in the workspace reports failures through the single
//! [`Error`] enum defined here, and validates its inputs with [`ensure!`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
