//! Resource registry bootstrapper
//!
//! Advertises the compiled frontend bundle of this component library to the
//! host framework's asset pipeline, exactly once per process. Registration is
//! an explicit call made by the host's startup sequence, not an on-import
//! side effect, so ordering and failures stay observable.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::domain::{PackageDescriptor, ResourceDescriptor};
use crate::error::{Result, resource_dir_not_found};
use crate::registry::AssetRegistry;

/// Name this package registers under in the host registry
pub const PACKAGE_NAME: &str = "dash_share";

/// Subdirectory of the library root holding the built assets
pub const RESOURCE_SUBDIR: &str = "deps";

/// The fixed resource table of this package, in load order:
/// the compiled bundle, then its source map (dynamic, fetched on demand).
pub fn resource_table() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::script("dash_share.min.js"),
        ResourceDescriptor::script("dash_share.min.js.map").dynamic(),
    ]
}

/// One-shot registration of this library's assets with a host registry
pub struct Bootstrapper {
    lib_root: PathBuf,
}

impl Bootstrapper {
    /// Create a bootstrapper rooted at the library's installation directory
    pub fn new(lib_root: impl Into<PathBuf>) -> Self {
        Self {
            lib_root: lib_root.into(),
        }
    }

    /// Resolve the resource directory to an absolute path.
    ///
    /// Idempotent: repeated calls in the same process yield the identical
    /// path. Fails with `ResourceDirectoryNotFound` if `<lib_root>/deps`
    /// does not exist.
    pub fn resolve_resource_dir(&self) -> Result<PathBuf> {
        let candidate = self.lib_root.join(RESOURCE_SUBDIR);
        let normalized = candidate
            .normalize()
            .map_err(|_| resource_dir_not_found(candidate.display().to_string()))?;
        // Strip Windows verbatim prefixes so the host serves a plain path
        Ok(dunce::simplified(normalized.as_path()).to_path_buf())
    }

    /// Build the validated package descriptor for this library.
    ///
    /// The version is the crate's declared semantic version, propagated
    /// verbatim so the host's cache busting sees no reformatting.
    pub fn descriptor(&self) -> Result<PackageDescriptor> {
        let resource_dir = self.resolve_resource_dir()?;
        let descriptor = PackageDescriptor::new(
            PACKAGE_NAME,
            env!("CARGO_PKG_VERSION"),
            resource_dir,
            resource_table(),
        );
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Resolve, validate, and hand the descriptor to the host registry.
    ///
    /// Issues exactly one `register` call and does not retry. Any failure
    /// here should abort host startup: a dangling resource path means the
    /// host could not serve this component's frontend.
    pub fn initialize(&self, registry: &mut dyn AssetRegistry) -> Result<()> {
        registry.register(self.descriptor()?)
    }

    pub fn lib_root(&self) -> &Path {
        &self.lib_root
    }
}
