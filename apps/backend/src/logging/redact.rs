use std::fmt;

const TOKEN_MIN_LEN: usize = 16;

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+' | '/' | '=')
}

/// Opaque-looking runs (JWTs, base64, hex) of at least 16 characters.
fn looks_like_token(word: &str) -> bool {
    word.len() >= TOKEN_MIN_LEN
        && word.chars().all(is_token_char)
        && word.chars().any(|c| c.is_ascii_digit() || c == '.' || c.is_ascii_uppercase())
}

/// Redacts sensitive information from free text.
///
/// Token-like words become `[REDACTED_TOKEN]`; everything else is kept.
pub fn redact(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            if looks_like_token(word) {
                "[REDACTED_TOKEN]"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Masks an identifier such as a username, keeping only its first character.
pub fn mask_identifier(input: &str) -> String {
    match input.chars().next() {
        None => String::new(),
        Some(first) => format!("{first}***"),
    }
}

/// A username or other identifier that should not appear verbatim in logs.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_identifier(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_identifier(self.0))
    }
}

/// Free text that may embed tokens.
pub struct RedactedText<'a>(pub &'a str);

impl fmt::Display for RedactedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
