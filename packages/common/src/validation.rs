use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// A failed assertion recorded by a validation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable message
    pub message: String,

    /// Geometry of the implicated element, when a single element is to blame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Rect>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            element: None,
        }
    }

    pub fn with_element(message: impl Into<String>, element: Rect) -> Self {
        Self {
            message: message.into(),
            element: Some(element),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
