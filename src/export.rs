//! Writing rendered icons to disk.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::info;

use crate::config::ExportConfig;
use crate::error::IconError;
use crate::icon::{IconImage, IconSet};
use crate::renderer::IconRenderer;

/// File name an icon of the given size is written under.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Renders every configured size and writes the results as PNG files.
///
/// # Example
///
/// ```no_run
/// use emblem_renderer::{ExportConfig, IconExporter};
///
/// let exporter = IconExporter::new(ExportConfig::new().with_out_dir("assets"));
/// let written = exporter.export().unwrap();
/// assert_eq!(written.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconExporter {
    renderer: IconRenderer,
    config: ExportConfig,
}

impl IconExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            renderer: IconRenderer::new(),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Renders each configured size once, in configuration order.
    pub fn render_all(&self) -> Result<IconSet, IconError> {
        self.config.validate()?;

        let mut set = IconSet::new();
        for size in self.config.unique_sizes() {
            set.add_image(self.renderer.render(size)?);
        }
        Ok(set)
    }

    /// Renders and writes every icon, returning the written paths.
    ///
    /// The output directory is created if missing. The first failure aborts
    /// the export; files already written are left in place.
    pub fn export(&self) -> Result<Vec<PathBuf>, IconError> {
        let icons = self.render_all()?;

        let out_dir = &self.config.out_dir;
        std::fs::create_dir_all(out_dir).map_err(|source| IconError::Io {
            path: out_dir.clone(),
            source,
        })?;

        icons
            .iter()
            .map(|icon| write_icon(icon, out_dir))
            .collect()
    }
}

/// Writes one icon as `icon{size}.png` inside `dir`.
pub fn write_icon(icon: &IconImage, dir: &Path) -> Result<PathBuf, IconError> {
    let path = dir.join(icon_file_name(icon.size()));
    icon.data.save_with_format(&path, ImageFormat::Png)?;
    info!(size = icon.size(), path = %path.display(), "Wrote icon");
    Ok(path)
}

/// Writes `icon16.png`, `icon48.png` and `icon128.png` to the working directory.
pub fn generate_default_icons() -> Result<Vec<PathBuf>, IconError> {
    IconExporter::new(ExportConfig::default()).export()
}

// ============================================================================
// Tests
// ============================================================================
