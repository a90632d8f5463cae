//! Ordered accumulation of validation failures

use automotion_common::{Rect, ValidationError};
use tracing::debug;

/// Append-only list of failures for one session.
///
/// Nothing is ever removed; a session failed iff this is non-empty when it
/// concludes.
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    errors: Vec<ValidationError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure with no element attached
    pub fn push(&mut self, message: impl Into<String>) {
        self.record(ValidationError::new(message));
    }

    /// Record a failure highlighting an element
    pub fn push_with_element(&mut self, message: impl Into<String>, element: Rect) {
        self.record(ValidationError::with_element(message, element));
    }

    pub fn record(&mut self, error: ValidationError) {
        debug!(message = %error.message, element = ?error.element, "Recorded validation error");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
