//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases and validates every
//! byte, so the inner data is always uppercase and `as_bytes()` can be
//! handed to downstream `&[u8]` APIs without re-checking.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use kata_core::{KataError, Sequence};

use crate::alphabet::Alphabet;

/// A validated nucleotide sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA. The inner bytes are always uppercase.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first byte outside the alphabet.
    pub fn new(bytes: impl AsRef<[u8]>) -> kata_core::Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        for (i, &b) in data.iter().enumerate() {
            if !A::is_valid(b) {
                return Err(KataError::InvalidInput(format!(
                    "invalid {} symbol '{}' at position {}",
                    A::NAME,
                    b as char,
                    i
                )));
            }
        }
        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "{}(\"{}\")", A::NAME, s)
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DnaAlphabet, RnaAlphabet};

    #[test]
    fn construction_uppercases() {
        let seq = ValidatedSeq::<DnaAlphabet>::new(b"acGt").unwrap();
        assert_eq!(&*seq, b"ACGT");
    }

    #[test]
    fn construction_rejects_foreign_bytes() {
        let err = ValidatedSeq::<DnaAlphabet>::new(b"ACGU").unwrap_err();
        assert!(err.to_string().contains("position 3"));

        assert!(ValidatedSeq::<RnaAlphabet>::new(b"ACGT").is_err());
        assert!(ValidatedSeq::<DnaAlphabet>::new(b"AC-GT").is_err());
    }

    #[test]
    fn empty_sequence_is_valid() {
        let seq = ValidatedSeq::<DnaAlphabet>::new(b"").unwrap();
        assert!(Sequence::is_empty(&seq));
    }

    #[test]
    fn display_and_debug() {
        let seq = ValidatedSeq::<RnaAlphabet>::new(b"ugca").unwrap();
        assert_eq!(seq.to_string(), "UGCA");
        assert_eq!(format!("{seq:?}"), "RNA(\"UGCA\")");
    }

    #[test]
    fn equality_ignores_input_case() {
        let a = ValidatedSeq::<DnaAlphabet>::new(b"acgt").unwrap();
        let b = ValidatedSeq::<DnaAlphabet>::new(b"ACGT").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn into_bytes_round_trips() {
        let seq = ValidatedSeq::<DnaAlphabet>::new(b"GATTACA").unwrap();
        assert_eq!(seq.into_bytes(), b"GATTACA".to_vec());
    }
}
