//! Concrete sequence type aliases and strand operations.
//!
//! - [`DnaSequence`] — transcription to the RNA complement
//! - [`RnaSequence`] — reverse transcription back to DNA

use crate::alphabet::{DnaAlphabet, RnaAlphabet};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence over `ACGT`.
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence over `ACGU`.
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// RNA complement of a DNA nucleotide.
fn rna_complement(b: u8) -> u8 {
    match b {
        b'G' => b'C',
        b'C' => b'G',
        b'T' => b'A',
        b'A' => b'U',
        other => other,
    }
}

/// DNA complement of an RNA nucleotide.
fn dna_complement(b: u8) -> u8 {
    match b {
        b'C' => b'G',
        b'G' => b'C',
        b'A' => b'T',
        b'U' => b'A',
        other => other,
    }
}

impl DnaSequence {
    /// Transcribe to the RNA complement (G→C, C→G, T→A, A→U).
    ///
    /// Total for validated sequences: every base has a complement.
    pub fn to_rna(&self) -> RnaSequence {
        let rna: Vec<u8> = self.iter().map(|&b| rna_complement(b)).collect();
        RnaSequence::from_validated(rna)
    }
}

impl RnaSequence {
    /// Reverse-transcribe to the DNA complement (C→G, G→C, A→T, U→A).
    pub fn to_dna(&self) -> DnaSequence {
        let dna: Vec<u8> = self.iter().map(|&b| dna_complement(b)).collect();
        DnaSequence::from_validated(dna)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_base_transcription() {
        assert_eq!(DnaSequence::new("G").unwrap().to_rna().as_ref(), b"C");
        assert_eq!(DnaSequence::new("C").unwrap().to_rna().as_ref(), b"G");
        assert_eq!(DnaSequence::new("T").unwrap().to_rna().as_ref(), b"A");
        assert_eq!(DnaSequence::new("A").unwrap().to_rna().as_ref(), b"U");
    }

    #[test]
    fn full_strand_transcription() {
        let dna = DnaSequence::new("ACGTGGTCTTAA").unwrap();
        assert_eq!(dna.to_rna().to_string(), "UGCACCAGAAUU");
    }

    #[test]
    fn empty_strand() {
        let dna = DnaSequence::new("").unwrap();
        assert_eq!(dna.to_rna().to_string(), "");
    }

    #[test]
    fn transcription_round_trips() {
        let dna = DnaSequence::new("GATTACAGATTACA").unwrap();
        assert_eq!(dna.to_rna().to_dna(), dna);

        let rna = RnaSequence::new("UGCACCAGAAUU").unwrap();
        assert_eq!(rna.to_dna().to_rna(), rna);
    }
}
