//! Nicomachus' classification of natural numbers by their aliquot sum.

use std::fmt;

use kata_core::{KataError, Result};

/// How a number's aliquot sum (the sum of its proper divisors) compares
/// to the number itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Aliquot sum equals the number (6, 28, 496, ...).
    Perfect,
    /// Aliquot sum exceeds the number (12, 18, 20, ...).
    Abundant,
    /// Aliquot sum falls short of the number (primes, powers of two, ...).
    Deficient,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Perfect => "perfect",
            Classification::Abundant => "abundant",
            Classification::Deficient => "deficient",
        };
        f.write_str(name)
    }
}

/// Classify `n` as perfect, abundant, or deficient.
///
/// # Errors
///
/// Returns an error if `n` is 0 — only natural numbers are classified.
pub fn classify(n: u64) -> Result<Classification> {
    if n == 0 {
        return Err(KataError::InvalidInput(
            "classify: only natural numbers have an aliquot sum".into(),
        ));
    }
    let aliquot: u64 = (1..n).filter(|i| n % i == 0).sum();
    Ok(if aliquot == n {
        Classification::Perfect
    } else if aliquot > n {
        Classification::Abundant
    } else {
        Classification::Deficient
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_numbers() {
        assert_eq!(classify(6).unwrap(), Classification::Perfect);
        assert_eq!(classify(28).unwrap(), Classification::Perfect);
        assert_eq!(classify(496).unwrap(), Classification::Perfect);
    }

    #[test]
    fn abundant_numbers() {
        assert_eq!(classify(12).unwrap(), Classification::Abundant);
        assert_eq!(classify(24).unwrap(), Classification::Abundant);
    }

    #[test]
    fn deficient_numbers() {
        // 1 has an empty aliquot sum
        assert_eq!(classify(1).unwrap(), Classification::Deficient);
        assert_eq!(classify(8).unwrap(), Classification::Deficient);
        assert_eq!(classify(13).unwrap(), Classification::Deficient);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(classify(0).is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(Classification::Perfect.to_string(), "perfect");
        assert_eq!(Classification::Abundant.to_string(), "abundant");
        assert_eq!(Classification::Deficient.to_string(), "deficient");
    }
}
