pub mod data;
pub mod result;

pub use data::{Citizenship, IdNumber};
pub use result::{InvalidReason, ValidationResult};
