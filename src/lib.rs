//! emblem-renderer: network emblem icon generator
//!
//! This crate draws a small node-and-circle emblem (a ring, six satellite
//! dots on it and a filled center dot on a dark background) onto square
//! canvases and writes them out as PNG icons.
//!
//! # Example
//!
//! ```
//! use emblem_renderer::{IconRenderer, EmblemGeometry};
//!
//! let renderer = IconRenderer::new();
//! let icon = renderer.render(48).unwrap();
//! assert_eq!(icon.data.dimensions(), (48, 48));
//!
//! // The geometry behind the drawing is available on its own
//! let geometry = EmblemGeometry::for_size(48);
//! assert_eq!(geometry.satellites().len(), 6);
//! ```
//!
//! # Writing Files
//!
//! [`IconExporter`] renders every size in an [`ExportConfig`] and saves
//! `icon{size}.png` files. [`generate_default_icons`] writes the standard
//! 16, 48 and 128 pixel set into the working directory:
//!
//! ```no_run
//! let written = emblem_renderer::generate_default_icons().unwrap();
//! assert_eq!(written.len(), 3);
//! ```

mod color;
mod config;
mod error;
mod export;
mod geometry;
mod icon;
mod renderer;
mod svg;

pub use color::EmblemPalette;
pub use config::{DEFAULT_SIZES, ExportConfig};
pub use error::IconError;
pub use export::{IconExporter, generate_default_icons, icon_file_name, write_icon};
pub use geometry::{EmblemGeometry, Point, SATELLITE_COUNT, Shape};
pub use icon::{IconImage, IconSet};
pub use renderer::{IconRenderer, render};
pub use svg::emblem_svg;
