//! Host asset registry
//!
//! The host framework owns a process-wide registry of package descriptors;
//! component libraries advertise their assets by registering exactly once at
//! startup. The registry is modelled as an injected capability
//! ([`AssetRegistry`]) rather than a hidden global, so tests can substitute
//! fakes and assert on the calls made to them.

pub mod bootstrap;

use std::collections::HashMap;

use crate::domain::PackageDescriptor;
use crate::error::{Result, duplicate_registration};

pub use bootstrap::{Bootstrapper, PACKAGE_NAME, RESOURCE_SUBDIR, resource_table};

/// Behaviour when a package name is registered a second time
///
/// The default is [`DuplicatePolicy::Reject`]: re-registration is a startup
/// error. Hosts that re-initialize libraries deliberately can opt into
/// `Overwrite` (deterministic replace) or `Ignore` (first registration wins).
/// Under every policy the registry holds at most one live entry per name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Overwrite,
    Ignore,
}

/// Registry interface consumed by component libraries
pub trait AssetRegistry {
    /// Register a package's descriptor with the host
    fn register(&mut self, package: PackageDescriptor) -> Result<()>;

    /// Look up a registered package by name
    fn lookup(&self, name: &str) -> Option<&PackageDescriptor>;

    /// All registered packages, in registration order
    fn packages(&self) -> &[PackageDescriptor];
}

/// In-memory registry keyed by package name
pub struct InMemoryRegistry {
    packages: Vec<PackageDescriptor>,
    by_name: HashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            packages: Vec::new(),
            by_name: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRegistry for InMemoryRegistry {
    fn register(&mut self, package: PackageDescriptor) -> Result<()> {
        if let Some(&idx) = self.by_name.get(&package.name) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(duplicate_registration(&package.name, &package.version));
                }
                DuplicatePolicy::Overwrite => {
                    self.packages[idx] = package;
                    return Ok(());
                }
                DuplicatePolicy::Ignore => return Ok(()),
            }
        }

        self.by_name.insert(package.name.clone(), self.packages.len());
        self.packages.push(package);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<&PackageDescriptor> {
        self.by_name.get(name).and_then(|&idx| self.packages.get(idx))
    }

    fn packages(&self) -> &[PackageDescriptor] {
        &self.packages
    }
}
