//! Core trait definitions for the kata crates.
//!
//! These traits define the contracts that domain types implement across crates.

/// A byte-backed symbol sequence (DNA, RNA, plain text).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in symbols.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}
