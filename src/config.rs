//! Serializable export configuration.
//!
//! An [`ExportConfig`] names the icon sizes to produce and the directory the
//! PNG files go to. It round-trips through JSON so a build script can keep it
//! next to the assets it generates.
//!
//! # Example
//!
//! ```
//! use emblem_renderer::ExportConfig;
//!
//! let config = ExportConfig::from_json(r#"{ "sizes": [16, 32], "outDir": "assets" }"#).unwrap();
//! assert_eq!(config.sizes, vec![16, 32]);
//!
//! // Omitted fields fall back to the defaults
//! let config = ExportConfig::from_json("{}").unwrap();
//! assert_eq!(config.sizes, vec![16, 48, 128]);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// The sizes rendered when nothing else is configured.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Driver settings: which sizes to render and where to write them.
///
/// # JSON Format
///
/// ```json
/// {
///   "sizes": [16, 48, 128],
///   "outDir": "."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Edge lengths to render, in output order.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    /// Directory the `icon{size}.png` files are written to.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            out_dir: default_out_dir(),
        }
    }
}

impl ExportConfig {
    /// Creates the default configuration: 16, 48 and 128 into the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Replaces the size list.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Checks that there is at least one size and that none is zero.
    pub fn validate(&self) -> Result<(), IconError> {
        if self.sizes.is_empty() {
            return Err(IconError::NoSizes);
        }
        match self.sizes.iter().find(|&&s| s == 0) {
            Some(&s) => Err(IconError::InvalidSize(s)),
            None => Ok(()),
        }
    }

    /// Returns the configured sizes with duplicates removed, keeping first occurrences.
    pub fn unique_sizes(&self) -> Vec<u32> {
        let mut seen = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            if !seen.contains(&size) {
                seen.push(size);
            }
        }
        seen
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| IconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
