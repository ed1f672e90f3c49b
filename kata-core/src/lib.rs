//! Shared primitives for the kata exercise crates.
//!
//! `kata-core` provides the foundation the domain crates build on:
//!
//! - **Error types** — [`KataError`] and [`Result`] for structured error handling
//! - **Traits** — the [`Sequence`] abstraction over byte-backed sequences

pub mod error;
pub mod traits;

pub use error::{KataError, Result};
pub use traits::Sequence;
