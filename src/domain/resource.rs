//! Resource descriptors
//!
//! One descriptor per static asset (script or stylesheet), carrying the
//! load-time hints the host framework consumes when serving the asset.

use serde::{Deserialize, Serialize};

use crate::error::{Result, descriptor_invalid};

/// Kind of static asset a resource descriptor points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Script,
    Stylesheet,
}

/// Metadata record describing one built asset and its load semantics
///
/// `external_url` and `relative_path` are not mutually exclusive; when both
/// are present the host decides precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Path of the built asset relative to the package's resource directory
    pub relative_path: String,

    /// Optional URL the host may fetch the asset from instead of disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// Lazily loaded on demand rather than eagerly injected (e.g. source maps)
    #[serde(default)]
    pub dynamic: bool,

    /// Loaded without blocking initial page render
    #[serde(default)]
    pub async_load: bool,

    /// Script or stylesheet
    pub kind: ResourceKind,
}

impl ResourceDescriptor {
    /// Create a script resource with default (eager, blocking) load semantics
    pub fn script(relative_path: impl Into<String>) -> Self {
        Self::new(relative_path, ResourceKind::Script)
    }

    /// Create a stylesheet resource with default load semantics
    pub fn stylesheet(relative_path: impl Into<String>) -> Self {
        Self::new(relative_path, ResourceKind::Stylesheet)
    }

    fn new(relative_path: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            relative_path: relative_path.into(),
            external_url: None,
            dynamic: false,
            async_load: false,
            kind,
        }
    }

    /// Mark the asset as dynamically loaded
    #[must_use]
    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    /// Mark the asset as async-loaded
    #[must_use]
    pub fn asynchronous(mut self) -> Self {
        self.async_load = true;
        self
    }

    /// Attach an external URL the host may serve the asset from
    #[must_use]
    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.relative_path.is_empty() {
            return Err(descriptor_invalid("Resource relative path cannot be empty"));
        }
        Ok(())
    }
}
