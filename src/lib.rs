//! dash-share - asset registration and shareable app state for dashboard
//! components
//!
//! Two halves:
//!
//! - **Asset registration**: at host startup, a [`registry::Bootstrapper`]
//!   resolves the library's compiled frontend assets (`deps/dash_share.min.js`
//!   and its source map), validates they exist on disk, and registers an
//!   immutable [`domain::PackageDescriptor`] with the host's
//!   [`registry::AssetRegistry`] exactly once.
//! - **State sharing**: a [`share::ShareSession`] fingerprints the serialized
//!   app layout, persists snapshots through a [`share::ShareStore`], hands
//!   back `?state=` share links, and restores snapshots on load, patching
//!   component props through [`layout::update_component_state`].
//!
//! ```no_run
//! use dash_share::registry::{Bootstrapper, InMemoryRegistry};
//!
//! # fn main() -> dash_share::error::Result<()> {
//! let mut registry = InMemoryRegistry::new();
//! Bootstrapper::new("/opt/app/libs/dash_share").initialize(&mut registry)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod hash;
pub mod layout;
pub mod registry;
pub mod share;

pub use config::ShareConfig;
pub use domain::{PackageDescriptor, ResourceDescriptor, ResourceKind};
pub use error::{Result, ShareError};
pub use layout::{AppLayout, ComponentUpdates, update_component_state};
pub use registry::{AssetRegistry, Bootstrapper, DuplicatePolicy, InMemoryRegistry};
pub use share::{FileStore, SavedShare, ShareOptions, ShareSession, ShareStore};
