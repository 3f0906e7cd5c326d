//! Layout tree errors

use super::ShareError;

/// Creates a layout structure error
pub fn structure_invalid(message: impl Into<String>) -> ShareError {
    ShareError::LayoutStructureInvalid {
        message: message.into(),
    }
}
