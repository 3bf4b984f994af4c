use log::debug;

use crate::models::{Citizenship, InvalidReason};

/// Check 4: the 11th digit (index 10) must be 0 or 1.
pub struct CitizenshipValidator;

pub const CITIZENSHIP_INDEX: usize = 10;

impl CitizenshipValidator {
    pub fn classify(digit: u8) -> Result<Citizenship, InvalidReason> {
        Citizenship::from_digit(digit).ok_or_else(|| {
            debug!("citizen error: must be 0 or 1, found {}", digit);
            InvalidReason::BadCitizenshipDigit { digit }
        })
    }
}
