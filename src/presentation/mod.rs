//! Host-facing adapter: turns validation results into the status label an
//! editing UI shows. Nothing here feeds back into validation.

pub mod field;
pub mod label;

pub use field::FieldState;
pub use label::{Palette, StatusLabel};
