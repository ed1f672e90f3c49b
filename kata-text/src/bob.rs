//! Bob, a lackadaisical teenager with five stock responses.

/// Bob's reply to `message`.
///
/// - Nothing but whitespace → "Fine. Be that way!"
/// - Yelled question (all caps, ends in `?`) → "Calm down, I know what I'm doing!"
/// - Yelling (has uppercase letters, no lowercase) → "Whoa, chill out!"
/// - Question (last non-whitespace byte is `?`) → "Sure."
/// - Anything else → "Whatever."
///
/// Classification is ASCII-based; bytes outside the ASCII letters neither
/// make nor break "yelling".
pub fn reply(message: &str) -> &'static str {
    let mut has_content = false;
    let mut has_upper = false;
    let mut has_lower = false;
    let mut last_non_space = 0u8;
    for &b in message.as_bytes() {
        if !b.is_ascii_whitespace() {
            has_content = true;
            last_non_space = b;
        }
        if b.is_ascii_uppercase() {
            has_upper = true;
        }
        if b.is_ascii_lowercase() {
            has_lower = true;
        }
    }

    if !has_content {
        return "Fine. Be that way!";
    }
    let yelling = has_upper && !has_lower;
    let question = last_non_space == b'?';
    match (yelling, question) {
        (true, true) => "Calm down, I know what I'm doing!",
        (true, false) => "Whoa, chill out!",
        (false, true) => "Sure.",
        (false, false) => "Whatever.",
    }
}
