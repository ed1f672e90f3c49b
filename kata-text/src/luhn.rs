//! Luhn checksum validation.

/// Whether `number` passes the Luhn check.
///
/// Spaces are skipped; any other non-digit byte makes the string invalid,
/// as does a string with fewer than two digits. From the rightmost digit,
/// every second digit is doubled (subtracting 9 when the double exceeds 9)
/// and the total must be a multiple of 10.
pub fn is_valid(number: &str) -> bool {
    let mut digit_count = 0;
    for b in number.bytes() {
        if b == b' ' {
            continue;
        }
        if !b.is_ascii_digit() {
            return false;
        }
        digit_count += 1;
    }
    if digit_count <= 1 {
        return false;
    }

    let mut total = 0u32;
    let mut count = 0;
    for b in number.bytes().rev() {
        if b == b' ' {
            continue;
        }
        let mut d = u32::from(b - b'0');
        if count % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        total += d;
        count += 1;
    }
    total % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert!(is_valid("059"));
        assert!(is_valid("59"));
        assert!(is_valid("4539 3195 0343 6467"));
        assert!(is_valid("091"));
    }

    #[test]
    fn invalid_checksums() {
        assert!(!is_valid("4539 3195 0343 6476"));
        assert!(!is_valid("8273 1232 7352 0569"));
    }

    #[test]
    fn too_few_digits() {
        assert!(!is_valid(""));
        assert!(!is_valid("0"));
        assert!(!is_valid(" 0"));
        assert!(!is_valid("  "));
    }

    #[test]
    fn non_digits_are_rejected() {
        assert!(!is_valid("059a"));
        assert!(!is_valid("055-444-285"));
        assert!(!is_valid("055b 444 285"));
    }

    #[test]
    fn doubling_wraps_above_nine() {
        // 9 doubled becomes 18 - 9 = 9
        assert!(is_valid("091"));
    }
}
