use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::InvalidReason;

/// Citizenship status encoded in the 11th digit of an ID number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,           // 0
    PermanentResident, // 1
}

impl Citizenship {
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Citizenship::Citizen),
            1 => Some(Citizenship::PermanentResident),
            _ => None,
        }
    }

    pub fn digit(&self) -> u8 {
        match self {
            Citizenship::Citizen => 0,
            Citizenship::PermanentResident => 1,
        }
    }
}

/// A 13-digit South African ID number that passed every structural check.
///
/// Only [`crate::IdNumberValidator::parse`] builds one, so holding an
/// `IdNumber` means the birth date, citizenship digit and checksum digit
/// were all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdNumber {
    digits: String,
    birth_date: NaiveDate,
    citizenship: Citizenship,
    checksum_digit: u8,
}

impl IdNumber {
    pub(crate) fn new(
        digits: &str,
        birth_date: NaiveDate,
        citizenship: Citizenship,
        checksum_digit: u8,
    ) -> Self {
        IdNumber {
            digits: digits.to_string(),
            birth_date,
            citizenship,
            checksum_digit,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Birth date with the century inferred from the two-digit year.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn citizenship(&self) -> Citizenship {
        self.citizenship
    }

    pub fn checksum_digit(&self) -> u8 {
        self.checksum_digit
    }

    /// The leading 12 digits the checksum is computed over.
    pub fn check_body(&self) -> &str {
        &self.digits[..12]
    }
}

impl FromStr for IdNumber {
    type Err = InvalidReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl fmt::Display for IdNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl AsRef<str> for IdNumber {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}
