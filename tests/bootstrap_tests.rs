//! End-to-end asset registration tests
//!
//! Drives the public API against on-disk library fixtures: resolve the
//! resource directory, validate the declared assets, register with a host
//! registry, and look the package back up.

#![allow(clippy::unwrap_used)]

use dash_share::registry::{PACKAGE_NAME, RESOURCE_SUBDIR};
use dash_share::{
    AssetRegistry, Bootstrapper, DuplicatePolicy, InMemoryRegistry, ResourceKind, ShareError,
};
use tempfile::TempDir;

/// Create a library installation fixture with the built assets in deps/
fn library_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let deps = temp.path().join(RESOURCE_SUBDIR);
    std::fs::create_dir(&deps).unwrap();
    std::fs::write(deps.join("dash_share.min.js"), "// compiled bundle").unwrap();
    std::fs::write(deps.join("dash_share.min.js.map"), "{\"version\":3}").unwrap();
    temp
}

#[test]
fn initialize_registers_package_with_resolved_deps_dir() {
    let lib = library_fixture();
    let mut registry = InMemoryRegistry::new();

    Bootstrapper::new(lib.path())
        .initialize(&mut registry)
        .unwrap();

    let package = registry.lookup(PACKAGE_NAME).unwrap();
    assert_eq!(package.name, "dash_share");
    assert_eq!(package.version, "0.0.1");
    assert!(package.resource_dir.is_absolute());
    assert!(package.resource_dir.ends_with("deps"));
}

#[test]
fn registered_resource_table_matches_contract() {
    let lib = library_fixture();
    let mut registry = InMemoryRegistry::new();
    Bootstrapper::new(lib.path())
        .initialize(&mut registry)
        .unwrap();

    let resources = &registry.lookup(PACKAGE_NAME).unwrap().resources;
    let summary: Vec<_> = resources
        .iter()
        .map(|r| (r.relative_path.as_str(), r.dynamic, r.async_load, r.kind))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("dash_share.min.js", false, false, ResourceKind::Script),
            ("dash_share.min.js.map", true, false, ResourceKind::Script),
        ]
    );
}

#[test]
fn missing_deps_dir_aborts_registration() {
    let lib = TempDir::new().unwrap();
    let mut registry = InMemoryRegistry::new();

    let err = Bootstrapper::new(lib.path())
        .initialize(&mut registry)
        .unwrap_err();

    assert!(matches!(err, ShareError::ResourceDirectoryNotFound { .. }));
    assert!(registry.is_empty());
}

#[test]
fn missing_bundle_file_aborts_registration() {
    let lib = library_fixture();
    std::fs::remove_file(lib.path().join(RESOURCE_SUBDIR).join("dash_share.min.js")).unwrap();
    let mut registry = InMemoryRegistry::new();

    let err = Bootstrapper::new(lib.path())
        .initialize(&mut registry)
        .unwrap_err();

    assert!(matches!(err, ShareError::ResourceDirectoryNotFound { .. }));
    assert!(err.to_string().contains("dash_share.min.js"));
    assert!(registry.is_empty());
}

#[test]
fn path_resolution_is_idempotent_across_calls() {
    let lib = library_fixture();
    let bootstrapper = Bootstrapper::new(lib.path());

    let paths: Vec<_> = (0..2)
        .map(|_| bootstrapper.resolve_resource_dir().unwrap())
        .collect();
    assert_eq!(paths[0], paths[1]);
}

#[test]
fn second_initialize_never_produces_two_entries() {
    let lib = library_fixture();
    let bootstrapper = Bootstrapper::new(lib.path());

    // Reject: errors, one entry
    let mut registry = InMemoryRegistry::new();
    bootstrapper.initialize(&mut registry).unwrap();
    assert!(bootstrapper.initialize(&mut registry).is_err());
    assert_eq!(registry.packages().len(), 1);

    // Overwrite: succeeds, one entry
    let mut registry = InMemoryRegistry::with_policy(DuplicatePolicy::Overwrite);
    bootstrapper.initialize(&mut registry).unwrap();
    bootstrapper.initialize(&mut registry).unwrap();
    assert_eq!(registry.packages().len(), 1);

    // Ignore: succeeds, one entry
    let mut registry = InMemoryRegistry::with_policy(DuplicatePolicy::Ignore);
    bootstrapper.initialize(&mut registry).unwrap();
    bootstrapper.initialize(&mut registry).unwrap();
    assert_eq!(registry.packages().len(), 1);
}

#[test]
fn asset_hash_tracks_bundle_contents() {
    let lib = library_fixture();
    let mut registry = InMemoryRegistry::new();
    Bootstrapper::new(lib.path())
        .initialize(&mut registry)
        .unwrap();

    let package = registry.lookup(PACKAGE_NAME).unwrap();
    let hash_before = package.asset_hash().unwrap();
    assert!(hash_before.starts_with("blake3:"));

    std::fs::write(
        lib.path().join(RESOURCE_SUBDIR).join("dash_share.min.js"),
        "// rebuilt bundle",
    )
    .unwrap();
    let hash_after = package.asset_hash().unwrap();
    assert_ne!(hash_before, hash_after);
}
