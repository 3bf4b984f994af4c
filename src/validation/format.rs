use std::sync::OnceLock;

use regex::Regex;

/// Check 2: exactly 13 ASCII digits, nothing else.
pub struct FormatValidator;

pub const ID_NUMBER_LENGTH: usize = 13;

fn thirteen_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{13}$").expect("id number pattern is valid"))
}

/// Digit values of `input` when it is exactly `N` ASCII digits.
pub(crate) fn ascii_digits<const N: usize>(input: &str) -> Option<[u8; N]> {
    if input.len() != N || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut digits = [0u8; N];
    for (slot, b) in digits.iter_mut().zip(input.bytes()) {
        *slot = b - b'0';
    }
    Some(digits)
}

impl FormatValidator {
    pub fn is_thirteen_digits(input: &str) -> bool {
        thirteen_digits().is_match(input)
    }

    /// The 13 digit values, or `None` when the format check fails.
    pub fn digits(input: &str) -> Option<[u8; ID_NUMBER_LENGTH]> {
        if !Self::is_thirteen_digits(input) {
            return None;
        }
        ascii_digits(input)
    }
}
