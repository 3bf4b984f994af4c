use crate::models::ValidationResult;
use crate::presentation::StatusLabel;
use crate::IdNumberValidator;

/// Bound value of the host's ID number field plus its current status.
///
/// Change and key-down events both go through [`FieldState::on_edit`].
#[derive(Debug, Clone)]
pub struct FieldState {
    validator: IdNumberValidator,
    value: String,
    result: ValidationResult,
}

impl FieldState {
    /// Starts from the host's initial value, validating it straight away.
    pub fn new(initial: Option<&str>) -> Self {
        let validator = IdNumberValidator::new();
        let result = validator.validate_field(initial);
        let value = initial.map(str::to_string).unwrap_or_default();
        FieldState {
            validator,
            value,
            result,
        }
    }

    pub fn on_edit(&mut self, value: &str) -> &ValidationResult {
        self.value = value.to_string();
        self.result = self.validator.validate(&self.value);
        &self.result
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn label(&self) -> StatusLabel {
        StatusLabel::for_result(&self.result)
    }

    /// The value handed back to the host, valid or not.
    pub fn output(&self) -> &str {
        &self.value
    }
}
