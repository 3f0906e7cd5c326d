//! Share store errors

use super::ShareError;

/// Creates a state read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ShareError {
    ShareError::StateReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a state write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ShareError {
    ShareError::StateWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a state encode failed error
pub fn encode_failed(reason: impl Into<String>) -> ShareError {
    ShareError::StateEncodeFailed {
        reason: reason.into(),
    }
}
