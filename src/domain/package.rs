//! Package descriptors
//!
//! The top-level registration unit a component library hands to the host
//! registry: a name, a semantic version, the on-disk resource directory, and
//! an ordered list of resource descriptors. Constructed once at startup and
//! never mutated afterwards.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::ResourceDescriptor;
use crate::error::{Result, descriptor_invalid, resource_dir_not_found};

/// Registration unit grouping a package's identity and its assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Package name, unique within the host registry's namespace
    pub name: String,

    /// Semantic version string, used by the host to cache-bust served assets
    pub version: String,

    /// Absolute resource directory, resolved once at startup
    pub resource_dir: PathBuf,

    /// Resources in load order
    pub resources: Vec<ResourceDescriptor>,
}

impl PackageDescriptor {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        resource_dir: impl Into<PathBuf>,
        resources: Vec<ResourceDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            resource_dir: resource_dir.into(),
            resources,
        }
    }

    /// Validate the descriptor against the filesystem.
    ///
    /// Every declared `relative_path` must resolve to an existing file under
    /// `resource_dir`. A missing directory or missing file is fatal: the host
    /// must not start up serving a package it cannot deliver.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(descriptor_invalid("Package name cannot be empty"));
        }
        if self.version.is_empty() {
            return Err(descriptor_invalid("Package version cannot be empty"));
        }
        if !self.resource_dir.is_dir() {
            return Err(resource_dir_not_found(
                self.resource_dir.display().to_string(),
            ));
        }
        for resource in &self.resources {
            resource.validate()?;
            let asset = self.resource_path(resource);
            if !asset.is_file() {
                return Err(resource_dir_not_found(asset.display().to_string()));
            }
        }
        Ok(())
    }

    /// Absolute path of one declared resource
    pub fn resource_path(&self, resource: &ResourceDescriptor) -> PathBuf {
        self.resource_dir.join(&resource.relative_path)
    }

    /// Look up a resource by its relative path
    pub fn resource(&self, relative_path: &str) -> Option<&ResourceDescriptor> {
        self.resources
            .iter()
            .find(|r| r.relative_path == relative_path)
    }

    /// Content digest of the declared assets, for cache busting beyond the
    /// semver string. See [`crate::hash::hash_assets`].
    pub fn asset_hash(&self) -> Result<String> {
        crate::hash::hash_assets(&self.resource_dir)
    }
}
