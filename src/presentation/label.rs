use serde::Serialize;

use crate::models::{InvalidReason, ValidationResult};

/// Foreground/background colour pair for the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub foreground: &'static str,
    pub background: &'static str,
}

impl Palette {
    pub const NOT_A_NUMBER: Palette = Palette {
        foreground: "black",
        background: "#Ff0000",
    };
    pub const ERROR: Palette = Palette {
        foreground: "white",
        background: "#Ff0000",
    };
    pub const SUCCESS: Palette = Palette {
        foreground: "white",
        background: "#4CAF50",
    };
}

/// Text and colours the host shows under the input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    pub text: String,
    #[serde(flatten)]
    pub palette: Palette,
}

impl StatusLabel {
    pub fn for_result(result: &ValidationResult) -> Self {
        let (text, palette) = match result {
            ValidationResult::Valid => ("The Id Number is valid !".to_string(), Palette::SUCCESS),
            ValidationResult::Invalid(reason) => match reason {
                InvalidReason::NotANumber => (
                    "Error occured Validating Id Number - not a number. Please try again!"
                        .to_string(),
                    Palette::NOT_A_NUMBER,
                ),
                InvalidReason::WrongLength => (
                    "The Id Number doesn't meet the required charactor length - invalid !"
                        .to_string(),
                    Palette::ERROR,
                ),
                InvalidReason::BadBirthDate => (
                    "The Id Number first 6 characters must be valid date in format YYMMDD - invalid !"
                        .to_string(),
                    Palette::ERROR,
                ),
                InvalidReason::BadCitizenshipDigit { digit } => (
                    format!("citizen error: must be 0 or 1 found ({}) - invalid !", digit),
                    Palette::ERROR,
                ),
                // Same black-on-red shade as the not-a-number case.
                InvalidReason::ChecksumMismatch { .. } => (
                    "Error occured Validating Id Number. Please try again!".to_string(),
                    Palette::NOT_A_NUMBER,
                ),
            },
        };

        StatusLabel { text, palette }
    }
}

impl From<ValidationResult> for StatusLabel {
    fn from(result: ValidationResult) -> Self {
        StatusLabel::for_result(&result)
    }
}
