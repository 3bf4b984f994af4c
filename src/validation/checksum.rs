use log::debug;

use crate::validation::format::{ascii_digits, ID_NUMBER_LENGTH};

/// Check 5: the Luhn-style check digit used on South African ID numbers.
///
/// Over the leading 12 digits (the body):
///
/// * `odd_sum` adds the digits at 0-based indices 0, 2, 4, 6, 8 and 10;
/// * the digits at indices 1, 3, 5, 7, 9 and 11 are concatenated, read as one
///   integer and doubled, and `even_sum` adds the digits of the doubled value
///   (`999999` doubles to `1999998`, so seven digits get summed);
/// * `last_digit` is `(odd_sum + even_sum) % 10`.
///
/// The comparison with the observed 13th digit `Z` is NOT textbook Luhn:
/// `10 - last_digit` is only taken when `Z` is nonzero. When `Z` is `0` the
/// raw `last_digit` is compared instead. A body whose `last_digit` is `0`
/// therefore only matches `Z == 0`.
///
/// The `&str` entry points return `None`/`false` unless given exactly 12 or
/// 13 ASCII digits.
pub struct ChecksumValidator;

const BODY_LENGTH: usize = ID_NUMBER_LENGTH - 1;

impl ChecksumValidator {
    fn body_last_digit(body: &[u8]) -> u32 {
        let odd_sum: u32 = body.iter().step_by(2).map(|&d| u32::from(d)).sum();

        let even_number = body
            .iter()
            .skip(1)
            .step_by(2)
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d));
        let doubled = (even_number * 2).to_string();
        let even_sum: u32 = doubled.chars().filter_map(|c| c.to_digit(10)).sum();

        (odd_sum + even_sum) % 10
    }

    /// The value the 13th digit is compared against; `10` is possible.
    pub(crate) fn compared_digit(digits: &[u8; ID_NUMBER_LENGTH]) -> u8 {
        let z = digits[BODY_LENGTH];
        let mut last_digit = Self::body_last_digit(&digits[..BODY_LENGTH]);
        if z != 0 {
            last_digit = 10 - last_digit;
        }
        last_digit as u8
    }

    pub(crate) fn matches(digits: &[u8; ID_NUMBER_LENGTH]) -> bool {
        let expected = Self::compared_digit(digits);
        let actual = digits[BODY_LENGTH];
        if expected != actual {
            debug!("checksum failed: compared against {}, found {}", expected, actual);
        }
        expected == actual
    }

    /// `(odd_sum + even_sum) % 10` over a 12-digit body.
    pub fn last_digit(body: &str) -> Option<u32> {
        ascii_digits::<BODY_LENGTH>(body).map(|digits| Self::body_last_digit(&digits))
    }

    /// The value the 13th digit of `id_number` is compared against.
    ///
    /// Depends on the observed 13th digit itself: the complement is skipped
    /// when it is `0`.
    pub fn expected_digit(id_number: &str) -> Option<u8> {
        ascii_digits::<ID_NUMBER_LENGTH>(id_number).map(|digits| Self::compared_digit(&digits))
    }

    pub fn is_valid(id_number: &str) -> bool {
        ascii_digits::<ID_NUMBER_LENGTH>(id_number).is_some_and(|digits| Self::matches(&digits))
    }
}
