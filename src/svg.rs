//! SVG emission and rasterization using resvg/usvg.
//!
//! The emblem is described as SVG markup and rendered by resvg, so the ring
//! and dots are real circles rather than hand-scanned pixel spans.
//!
//! # Pixel model
//!
//! A shape centered on pixel `(cx, cy)` with pixel radius `r` covers the
//! inclusive box `[cx - r, cx + r]`. In SVG user space that is a circle at
//! `(cx + 0.5, cy + 0.5)` with radius `r + 0.5`. All shapes are drawn with
//! `shape-rendering="crispEdges"`, so pixels are never blended.

use std::fmt::Write as _;

use image::{Rgb, RgbImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::color::{to_hex, EmblemPalette};
use crate::error::IconError;
use crate::geometry::{EmblemGeometry, Point, Shape};

// ============================================================================
// SVG Emission
// ============================================================================

/// Builds the SVG document for an emblem on a `geometry.size` square canvas.
pub fn emblem_svg(geometry: &EmblemGeometry, palette: &EmblemPalette) -> String {
    let size = geometry.size;
    let accent = to_hex(palette.accent);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" shape-rendering="crispEdges">"#
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{size}" height="{size}" fill="{}"/>"#,
        to_hex(palette.background)
    );

    for shape in geometry.shapes() {
        svg.push_str(&shape_element(&shape, &accent));
    }

    svg.push_str("</svg>");
    svg
}

/// Emits one `<circle>` element for a shape.
fn shape_element(shape: &Shape, color: &str) -> String {
    match *shape {
        Shape::Ring {
            center,
            radius,
            width,
        } => {
            let outer = f64::from(radius) + 0.5;
            let width = f64::from(width);
            if width >= outer {
                // The stroke would cross the center; what is left is a disc.
                return dot_element(center, outer, color);
            }
            let (cx, cy) = pixel_center(center);
            format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="{color}" stroke-width="{width}" shape-rendering="crispEdges"/>"#,
                outer - width / 2.0
            )
        }
        Shape::Dot { center, radius } => dot_element(center, f64::from(radius) + 0.5, color),
    }
}

fn dot_element(center: Point, radius: f64, color: &str) -> String {
    let (cx, cy) = pixel_center(center);
    format!(
        r#"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="{color}" shape-rendering="crispEdges"/>"#
    )
}

/// Maps a pixel coordinate to the center of that pixel in SVG user space.
fn pixel_center(p: Point) -> (f64, f64) {
    (f64::from(p.x) + 0.5, f64::from(p.y) + 0.5)
}

// ============================================================================
// SVG Rendering
// ============================================================================

/// Renders SVG markup onto a `size x size` RGB image.
///
/// The SVG is scaled to fit the canvas while preserving aspect ratio.
/// Pixels the SVG leaves uncovered come out black.
pub fn rasterize(svg_data: &str, size: u32) -> Result<RgbImage, IconError> {
    let opts = Options::default();
    let tree = Tree::from_str(svg_data, &opts)?;

    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::Pixmap { size })?;

    let svg_size = tree.size();
    let scale = size as f32 / svg_size.width().max(svg_size.height());
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Ok(pixmap_to_rgb_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an `image::RgbImage`, dropping alpha.
fn pixmap_to_rgb_image(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();

    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        // tiny_skia stores premultiplied alpha
        let color = pixels[(y * width + x) as usize].demultiply();
        Rgb([color.red(), color.green(), color.blue()])
    })
}

// ============================================================================
// Tests
// ============================================================================
