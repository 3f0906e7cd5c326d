//! BLAKE3 hashing utilities for asset cache busting and state fingerprints

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;
use walkdir::WalkDir;

use crate::error::{Result, ShareError, state_encode_failed};
use crate::layout::AppLayout;

/// Hash prefix for BLAKE3 asset digests
pub const HASH_PREFIX: &str = "blake3:";

/// Hex length of a state fingerprint embedded in share links
pub const FINGERPRINT_LEN: usize = 8;

/// Calculate a BLAKE3 digest of a resource directory's contents
///
/// Hashes all files recursively, sorted by path for deterministic results.
/// The host uses this alongside the package version to cache-bust served
/// assets.
pub fn hash_assets(path: &Path) -> Result<String> {
    if !path.is_dir() {
        return Err(ShareError::ResourceDirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut hasher = Hasher::new();
    let mut files: Vec<_> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();

    // Sort for deterministic hashing
    files.sort_by_key(|e| e.path().to_path_buf());

    for entry in files {
        let file_path = entry.path();

        // Include relative path in hash for uniqueness
        let relative_path = file_path
            .strip_prefix(path)
            .unwrap_or(file_path)
            .to_string_lossy();
        hasher.update(relative_path.as_bytes());
        hasher.update(b"\0");

        hash_file_into(&mut hasher, file_path)?;
        hasher.update(b"\0");
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

fn hash_file_into(hasher: &mut Hasher, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| ShareError::IoError {
        message: format!("{}: {}", path.display(), e),
    })?;

    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| ShareError::IoError {
                message: format!("{}: {}", path.display(), e),
            })?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(())
}

/// Fingerprint an app layout for use in share links
///
/// Digests the compact JSON encoding and truncates to
/// [`FINGERPRINT_LEN`] lowercase hex characters.
pub fn fingerprint_state(state: &AppLayout) -> Result<String> {
    fingerprint_state_n(state, FINGERPRINT_LEN)
}

/// Fingerprint an app layout to `n` hex characters
pub fn fingerprint_state_n(state: &AppLayout, n: usize) -> Result<String> {
    let encoded = serde_json::to_vec(state).map_err(|e| state_encode_failed(e.to_string()))?;
    let hex = blake3::hash(&encoded).to_hex();
    Ok(hex[..n.min(hex.len())].to_string())
}
