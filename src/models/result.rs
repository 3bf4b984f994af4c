use serde::Serialize;
use thiserror::Error;

/// The structural rule an ID number failed, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidReason {
    #[error("not a number")]
    NotANumber,
    #[error("expected exactly 13 digits")]
    WrongLength,
    #[error("first 6 digits are not a valid YYMMDD date")]
    BadBirthDate,
    #[error("citizenship digit must be 0 or 1, found {digit}")]
    BadCitizenshipDigit { digit: u8 },
    #[error("checksum mismatch: found {actual}, compared against {compared_against}")]
    ChecksumMismatch {
        /// Value the check digit was compared against. Can be `10`, which
        /// no digit matches, when the complement step runs on a zero sum.
        compared_against: u8,
        actual: u8,
    },
}

/// Outcome of a single validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(*reason),
        }
    }
}

impl<T> From<Result<T, InvalidReason>> for ValidationResult {
    fn from(result: Result<T, InvalidReason>) -> Self {
        match result {
            Ok(_) => ValidationResult::Valid,
            Err(reason) => ValidationResult::Invalid(reason),
        }
    }
}

impl From<InvalidReason> for ValidationResult {
    fn from(reason: InvalidReason) -> Self {
        ValidationResult::Invalid(reason)
    }
}
