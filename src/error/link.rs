//! Share link errors

use super::ShareError;

/// Creates an invalid share URL error
pub fn invalid_url(url: impl Into<String>) -> ShareError {
    ShareError::InvalidShareUrl { url: url.into() }
}
