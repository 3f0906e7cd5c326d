//! Share workflow configuration
//!
//! Optional YAML configuration the embedding host can ship next to its app.
//! Every field has a default, so any subset of keys may be given.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the share workflow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShareConfig {
    /// Directory snapshots are written to
    pub share_dir: PathBuf,

    /// How long the app stays locked after a reload, in milliseconds.
    /// Raise this when callbacks take more than a couple of seconds.
    pub interval_delay_ms: u64,

    /// Deployment path prefix for share links (e.g. "/dash" behind a proxy)
    pub url_path_prefix: Option<String>,

    /// How long share links are advertised to stay active, in days
    pub link_ttl_days: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            share_dir: PathBuf::from("share"),
            interval_delay_ms: 2000,
            url_path_prefix: None,
            link_ttl_days: 90,
        }
    }
}

impl ShareConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }
}
