//! Hamming distance between equal-length sequences.

use kata_core::{KataError, Result};

/// Number of positions at which two sequences differ.
///
/// Both sequences may be empty (distance 0).
///
/// # Errors
///
/// Returns an error if the sequences have different lengths; Hamming
/// distance is only defined position-wise.
pub fn hamming(a: &[u8], b: &[u8]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(KataError::InvalidInput(format!(
            "hamming: length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}
