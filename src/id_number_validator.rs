use log::{debug, trace};

use crate::models::{IdNumber, InvalidReason, ValidationResult};
use crate::validation::citizenship::CITIZENSHIP_INDEX;
use crate::validation::*;

/// Validates South African ID numbers.
///
/// Stateless: one instance can be shared freely between threads, and every
/// call depends only on the string it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdNumberValidator;

impl IdNumberValidator {
    pub fn new() -> Self {
        IdNumberValidator
    }

    /// Runs the five checks in order and reports the first one that fails.
    pub fn validate(&self, input: &str) -> ValidationResult {
        let result = ValidationResult::from(self.parse(input));
        trace!("validated {:?}: {:?}", input, result);
        result
    }

    /// Validates a host field value; a missing value counts as `""`.
    pub fn validate_field(&self, value: Option<&str>) -> ValidationResult {
        self.validate(value.unwrap_or(""))
    }

    /// Same pipeline as [`validate`](Self::validate), keeping the parsed parts.
    pub fn parse(&self, input: &str) -> Result<IdNumber, InvalidReason> {
        // Step 1: numeric
        if !NumericValidator::is_number(input) {
            debug!("not a number: {:?}", input);
            return Err(InvalidReason::NotANumber);
        }

        // Step 2: exactly 13 ASCII digits
        let digits = match FormatValidator::digits(input) {
            Some(digits) => digits,
            None => {
                debug!("wrong length or characters: {:?}", input);
                return Err(InvalidReason::WrongLength);
            }
        };

        // Step 3: YYMMDD birth date. The input is ASCII from here on, so
        // byte slicing is safe.
        let birth_date =
            BirthDateValidator::birth_date(&input[..6]).ok_or(InvalidReason::BadBirthDate)?;

        // Step 4: citizenship digit
        let citizenship = CitizenshipValidator::classify(digits[CITIZENSHIP_INDEX])?;

        // Step 5: checksum
        let actual = digits[12];
        if !ChecksumValidator::matches(&digits) {
            return Err(InvalidReason::ChecksumMismatch {
                compared_against: ChecksumValidator::compared_digit(&digits),
                actual,
            });
        }

        Ok(IdNumber::new(input, birth_date, citizenship, actual))
    }
}

/// Validates `input` with a default [`IdNumberValidator`].
pub fn validate(input: &str) -> ValidationResult {
    IdNumberValidator::new().validate(input)
}

/// Parses `input` with a default [`IdNumberValidator`].
pub fn parse(input: &str) -> Result<IdNumber, InvalidReason> {
    IdNumberValidator::new().parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Citizenship;
    use chrono::Datelike;

    fn invalid(reason: InvalidReason) -> ValidationResult {
        ValidationResult::Invalid(reason)
    }

    #[test]
    fn test_end_to_end_scenarios() {
        let validator = IdNumberValidator::new();

        assert_eq!(validator.validate(""), invalid(InvalidReason::NotANumber));
        assert_eq!(
            validator.validate("abcdefghijklm"),
            invalid(InvalidReason::NotANumber)
        );
        assert_eq!(
            validator.validate("9913011234567"),
            invalid(InvalidReason::BadBirthDate)
        );
        assert_eq!(
            validator.validate("8001015009587"),
            invalid(InvalidReason::BadCitizenshipDigit { digit: 5 })
        );
        assert_eq!(
            validator.validate("8001015009088"),
            invalid(InvalidReason::ChecksumMismatch { compared_against: 7, actual: 8 })
        );
        assert_eq!(validator.validate("8001015009087"), ValidationResult::Valid);
    }

    #[test]
    fn test_numeric_then_length_gate() {
        let validator = IdNumberValidator::new();
        let wrong_length = [
            "123",
            "12345678901.5",
            "-1234567890123",
            "+800101500908",
            " 8001015009087",
            "8001015009087 ",
            "80010150090870",
            "1e12",
            "0x1A",
        ];
        for input in &wrong_length {
            assert_eq!(
                validator.validate(input),
                invalid(InvalidReason::WrongLength),
                "input {:?}",
                input
            );
        }

        let not_a_number = ["12a4567890123", "   ", "800101 5009087", "Infinity"];
        for input in &not_a_number {
            assert_eq!(
                validator.validate(input),
                invalid(InvalidReason::NotANumber),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_missing_field_value() {
        let validator = IdNumberValidator::new();
        assert_eq!(validator.validate_field(None), invalid(InvalidReason::NotANumber));
        assert_eq!(
            validator.validate_field(Some("8001015009087")),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_birth_date_stage() {
        assert_eq!(validate("8002305009087"), invalid(InvalidReason::BadBirthDate));
        assert_eq!(validate("0002305009087"), invalid(InvalidReason::BadBirthDate));
        assert_eq!(validate("2002305009087"), invalid(InvalidReason::BadBirthDate));
        assert_eq!(validate("8000015009087"), invalid(InvalidReason::BadBirthDate));
    }

    #[test]
    fn test_century_inference_through_parse() {
        let cases = [
            ("0001015000084", 2000),
            ("9912310000085", 1999),
            ("2001010000186", 1920),
        ];
        for (id, year) in &cases {
            let parsed = parse(id).unwrap();
            assert_eq!(parsed.birth_date().year(), *year, "id {}", id);
        }
    }

    #[test]
    fn test_citizenship_stage() {
        for digit in 2..=9 {
            let id = format!("8001015009{}87", digit);
            assert_eq!(
                validate(&id),
                invalid(InvalidReason::BadCitizenshipDigit { digit }),
                "id {}",
                id
            );
        }
        assert_eq!(
            parse("9001010001187").unwrap().citizenship(),
            Citizenship::PermanentResident
        );
    }

    #[test]
    fn test_zero_check_digit() {
        assert_eq!(validate("7506150123080"), ValidationResult::Valid);
        assert_eq!(
            validate("8001015009080"),
            invalid(InvalidReason::ChecksumMismatch { compared_against: 3, actual: 0 })
        );
        assert_eq!(
            validate("7506150123085"),
            invalid(InvalidReason::ChecksumMismatch { compared_against: 10, actual: 5 })
        );
    }

    #[test]
    fn test_classification_is_stable() {
        // Mutating digits after the failing rule keeps the same reason.
        for tail in ["5009087", "1234567", "9999999"] {
            let id = format!("991301{}", tail);
            assert_eq!(validate(&id), invalid(InvalidReason::BadBirthDate), "id {}", id);
        }
        for check in 0..=9 {
            let id = format!("80010150095{}{}", 8, check);
            assert_eq!(
                validate(&id),
                invalid(InvalidReason::BadCitizenshipDigit { digit: 5 }),
                "id {}",
                id
            );
        }

        // Fixing only the failing rule moves on to the next stage.
        assert_eq!(
            validate("8013015009587"),
            invalid(InvalidReason::BadBirthDate)
        );
        assert_eq!(
            validate("8001015009587"),
            invalid(InvalidReason::BadCitizenshipDigit { digit: 5 })
        );
        assert_eq!(validate("8001015009087"), ValidationResult::Valid);
    }

    #[test]
    fn test_deterministic() {
        let validator = IdNumberValidator::new();
        for input in ["", "abc", "8001015009087", "8001015009088", "9913011234567"] {
            assert_eq!(validator.validate(input), validator.validate(input));
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let validator = IdNumberValidator::new();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || validator.validate("8001015009087")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), ValidationResult::Valid);
        }
    }
}
