//! Domain types for asset registration
//!
//! Contains the descriptors a component library hands to the host
//! framework's asset pipeline.

pub mod package;
pub mod resource;

pub use package::PackageDescriptor;
pub use resource::{ResourceDescriptor, ResourceKind};
