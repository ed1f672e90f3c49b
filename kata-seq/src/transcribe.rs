//! Prefix-based RNA transcription over raw bytes.
//!
//! The typed [`DnaSequence::to_rna`](crate::DnaSequence::to_rna) API validates
//! its input up front; this module keeps the untyped form, whose output length
//! depends on how many recognized bases the prefix contains.

use kata_core::{KataError, Result};

/// Transcribe the first `n` bytes of `dna` to their RNA complement
/// (G→C, C→G, T→A, A→U).
///
/// Bytes outside `ACGT` contribute nothing to the output — they are dropped,
/// not copied through. Callers wanting rejection instead should construct a
/// [`DnaSequence`](crate::DnaSequence) first.
///
/// # Errors
///
/// Returns an error if `n` exceeds `dna.len()`.
pub fn to_rna(dna: &[u8], n: usize) -> Result<Vec<u8>> {
    if n > dna.len() {
        return Err(KataError::OutOfRange(format!(
            "to_rna: prefix length {} exceeds sequence length {}",
            n,
            dna.len()
        )));
    }
    let mut rna = Vec::with_capacity(n);
    for &b in &dna[..n] {
        match b {
            b'G' => rna.push(b'C'),
            b'C' => rna.push(b'G'),
            b'T' => rna.push(b'A'),
            b'A' => rna.push(b'U'),
            _ => {}
        }
    }
    Ok(rna)
}
