//! Validation of 13-digit South African national ID numbers.
//!
//! ```
//! use sa_id_validator::{validate, InvalidReason, ValidationResult};
//!
//! assert_eq!(validate("8001015009087"), ValidationResult::Valid);
//! assert_eq!(
//!     validate("8001015009587"),
//!     ValidationResult::Invalid(InvalidReason::BadCitizenshipDigit { digit: 5 })
//! );
//! ```

pub mod id_number_validator;
pub mod models;
pub mod presentation;
pub mod utils;
pub mod validation;

pub use id_number_validator::{parse, validate, IdNumberValidator};
pub use models::{Citizenship, IdNumber, InvalidReason, ValidationResult};
