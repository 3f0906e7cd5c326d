//! Asset registry errors

use super::ShareError;

/// Creates a resource directory not found error
pub fn dir_not_found(path: impl Into<String>) -> ShareError {
    ShareError::ResourceDirectoryNotFound { path: path.into() }
}

/// Creates a duplicate registration error
pub fn duplicate(name: impl Into<String>, version: impl Into<String>) -> ShareError {
    ShareError::DuplicateRegistration {
        name: name.into(),
        version: version.into(),
    }
}

/// Creates a descriptor validation error
pub fn descriptor_invalid(message: impl Into<String>) -> ShareError {
    ShareError::DescriptorInvalid {
        message: message.into(),
    }
}

/// Creates a package not found error
pub fn package_not_found(name: impl Into<String>) -> ShareError {
    ShareError::PackageNotFound { name: name.into() }
}
