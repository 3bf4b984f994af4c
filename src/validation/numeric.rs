use std::sync::OnceLock;

use regex::Regex;

/// Check 1: the input must read as a finite number.
///
/// Mirrors the host's `parseFloat`/`isFinite` pair: surrounding white space is
/// ignored, a signed decimal literal (fraction and exponent optional) or an
/// unsigned `0x`/`0o`/`0b` integer is accepted, and the value must not
/// overflow to infinity. Anything else, including the empty string, fails.
pub struct NumericValidator;

fn decimal_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("decimal literal pattern is valid")
    })
}

fn radix_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$")
            .expect("radix literal pattern is valid")
    })
}

// ECMAScript WhiteSpace and LineTerminator code points.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl NumericValidator {
    pub fn is_number(input: &str) -> bool {
        let trimmed = input.trim_matches(is_js_whitespace);
        if trimmed.is_empty() {
            return false;
        }

        if decimal_literal().is_match(trimmed) {
            return trimmed
                .parse::<f64>()
                .map(|value| value.is_finite())
                .unwrap_or(false);
        }

        radix_literal().is_match(trimmed)
    }
}
