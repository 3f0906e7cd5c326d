//! Error types and handling for dash-share
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`registry`]: Asset registry and bootstrap errors
//! - [`store`]: Share store errors
//! - [`layout`]: Layout tree errors
//! - [`link`]: Share link errors

// Declare submodules
pub mod layout;
pub mod link;
pub mod registry;
pub mod store;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use layout::structure_invalid as layout_structure_invalid;
#[allow(unused_imports)]
pub use link::invalid_url as invalid_share_url;
#[allow(unused_imports)]
pub use registry::{
    descriptor_invalid, dir_not_found as resource_dir_not_found,
    duplicate as duplicate_registration, package_not_found,
};
#[allow(unused_imports)]
pub use store::{
    encode_failed as state_encode_failed, read_failed as state_read_failed,
    write_failed as state_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dash-share operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShareError {
    // Registry errors
    #[error("Resource directory not found: {path}")]
    #[diagnostic(
        code(dash_share::registry::resource_dir_not_found),
        help("Check that the component library is fully installed and its deps/ assets exist")
    )]
    ResourceDirectoryNotFound { path: String },

    #[error("Package '{name}' (version {version}) is already registered")]
    #[diagnostic(
        code(dash_share::registry::duplicate_registration),
        help(
            "Registration runs once per process. Use DuplicatePolicy::Overwrite or Ignore if re-initialization is intended"
        )
    )]
    DuplicateRegistration { name: String, version: String },

    #[error("Invalid package descriptor: {message}")]
    #[diagnostic(code(dash_share::registry::descriptor_invalid))]
    DescriptorInvalid { message: String },

    #[error("Package '{name}' not found in registry")]
    #[diagnostic(code(dash_share::registry::package_not_found))]
    PackageNotFound { name: String },

    // Layout errors
    #[error("Unexpected app layout structure: {message}")]
    #[diagnostic(
        code(dash_share::layout::structure_invalid),
        help("Layout lists must contain component objects carrying a 'props' object")
    )]
    LayoutStructureInvalid { message: String },

    // Share link errors
    #[error("Invalid share URL: {url}")]
    #[diagnostic(
        code(dash_share::link::invalid_url),
        help("Share links are built from an href of the form scheme://host[:port]/...")
    )]
    InvalidShareUrl { url: String },

    // Share store errors
    #[error("Failed to read shared state: {path}")]
    #[diagnostic(code(dash_share::store::read_failed))]
    StateReadFailed { path: String, reason: String },

    #[error("Failed to write shared state: {path}")]
    #[diagnostic(code(dash_share::store::write_failed))]
    StateWriteFailed { path: String, reason: String },

    #[error("Failed to encode state: {reason}")]
    #[diagnostic(code(dash_share::store::encode_failed))]
    StateEncodeFailed { reason: String },

    // Configuration errors
    #[error("Failed to parse configuration: {reason}")]
    #[diagnostic(code(dash_share::config::parse_failed))]
    ConfigParseFailed { reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(dash_share::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ShareError {
    fn from(err: std::io::Error) -> Self {
        ShareError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(err: serde_json::Error) -> Self {
        ShareError::StateEncodeFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ShareError {
    fn from(err: serde_yaml::Error) -> Self {
        ShareError::ConfigParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShareError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = resource_dir_not_found("/lib/deps");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("dash_share::registry::resource_dir_not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ShareError = io_err.into();
        assert!(matches!(err, ShareError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("not json");
        let err: ShareError = parse_result.unwrap_err().into();
        assert!(matches!(err, ShareError::StateEncodeFailed { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: [unclosed");
        let err: ShareError = parse_result.unwrap_err().into();
        assert!(matches!(err, ShareError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_resource_dir_not_found,
        resource_dir_not_found("/missing/deps"),
        "Resource directory not found",
        "/missing/deps"
    );

    test_error_contains!(
        test_duplicate_registration,
        duplicate_registration("dash_share", "0.0.1"),
        "already registered",
        "dash_share",
        "0.0.1"
    );

    test_error_contains!(
        test_descriptor_invalid,
        descriptor_invalid("relative path cannot be empty"),
        "Invalid package descriptor"
    );

    test_error_contains!(
        test_package_not_found,
        package_not_found("dash_share"),
        "not found in registry"
    );

    test_error_contains!(
        test_layout_structure_invalid,
        layout_structure_invalid("list item without props"),
        "Unexpected app layout structure"
    );

    test_error_contains!(
        test_invalid_share_url,
        invalid_share_url("not-a-url"),
        "Invalid share URL",
        "not-a-url"
    );

    test_error_contains!(
        test_state_read_failed,
        state_read_failed("share/abc123.json", "permission denied"),
        "Failed to read shared state"
    );

    test_error_contains!(
        test_state_write_failed,
        state_write_failed("share/abc123.json", "disk full"),
        "Failed to write shared state"
    );
}
