//! Nucleotide exercises for the kata ecosystem.
//!
//! Provides strongly-typed, validated nucleotide sequences over the four-letter
//! exercise alphabets, plus an untyped prefix form of RNA transcription:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`]
//! - **Sequences** — [`DnaSequence`], [`RnaSequence`]
//! - **Transcription** — [`DnaSequence::to_rna`] (typed, total) and [`to_rna`]
//!   (prefix form over raw bytes)
//! - **Hamming distance** — [`hamming`]
//!
//! # Example
//!
//! ```
//! use kata_core::Sequence;
//! use kata_seq::DnaSequence;
//!
//! // Lowercased input is normalized; foreign symbols are rejected.
//! let dna = DnaSequence::new("acgtggtcttaa").unwrap();
//! assert_eq!(dna.as_bytes(), b"ACGTGGTCTTAA");
//!
//! // Transcribe to the RNA complement
//! let rna = dna.to_rna();
//! assert_eq!(rna.as_bytes(), b"UGCACCAGAAUU");
//!
//! // And back
//! assert_eq!(rna.to_dna(), dna);
//! ```

pub mod alphabet;
pub mod hamming;
pub mod seq;
pub mod transcribe;
pub mod types;

pub use alphabet::{Alphabet, DnaAlphabet, RnaAlphabet};
pub use hamming::hamming;
pub use seq::ValidatedSeq;
pub use transcribe::to_rna;
pub use types::{DnaSequence, RnaSequence};
