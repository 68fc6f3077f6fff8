//! The size-to-image renderer.

use tracing::debug;

use crate::color::EmblemPalette;
use crate::error::IconError;
use crate::geometry::EmblemGeometry;
use crate::icon::IconImage;
use crate::svg::{emblem_svg, rasterize};

/// Renders the network emblem onto square canvases.
///
/// Rendering is a pure function of the edge length: the renderer holds no
/// state between calls and the same size always yields the same pixels.
///
/// # Example
///
/// ```
/// use emblem_renderer::IconRenderer;
///
/// let icon = IconRenderer::new().render(16).unwrap();
/// assert_eq!(icon.size(), 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    palette: EmblemPalette,
}

impl IconRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the colors the emblem is painted with.
    pub fn palette(&self) -> &EmblemPalette {
        &self.palette
    }

    /// Renders the emblem on a `size x size` canvas.
    ///
    /// Returns [`IconError::InvalidSize`] for a zero size.
    pub fn render(&self, size: u32) -> Result<IconImage, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }

        let geometry = EmblemGeometry::for_size(size);
        debug!(
            size,
            center = geometry.center,
            radius = geometry.radius,
            ring_line_width = geometry.ring_line_width,
            satellite_dot_radius = geometry.satellite_dot_radius,
            center_dot_radius = geometry.center_dot_radius,
            "Rendering emblem"
        );

        let svg = emblem_svg(&geometry, &self.palette);
        let data = rasterize(&svg, size)?;
        Ok(IconImage::new(data))
    }
}

/// Renders the emblem with the default renderer.
pub fn render(size: u32) -> Result<IconImage, IconError> {
    IconRenderer::new().render(size)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_pixel;

    const BACKGROUND: [u8; 3] = [0x0f, 0x17, 0x2a];
    const ACCENT: [u8; 3] = [0x06, 0xb6, 0xd4];

    #[test]
    fn canvas_matches_requested_size() {
        for size in [16, 48, 128] {
            let icon = render(size).unwrap();
            assert_eq!(icon.data.dimensions(), (size, size));
        }
    }

    #[test]
    fn corners_are_background() {
        for size in [16, 48, 128] {
            let icon = render(size).unwrap();
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(icon.data.get_pixel(x, y).0, BACKGROUND, "size {size} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn center_is_accent() {
        for size in [16, 48, 128] {
            let icon = render(size).unwrap();
            let c = size / 2;
            assert_eq!(icon.data.get_pixel(c, c).0, ACCENT, "size {size}");
        }
    }

    #[test]
    fn satellite_centers_are_accent() {
        for size in [16, 48, 128] {
            let icon = render(size).unwrap();
            for p in EmblemGeometry::for_size(size).satellites() {
                assert_eq!(
                    icon.data.get_pixel(p.x as u32, p.y as u32).0,
                    ACCENT,
                    "size {size} at {p:?}"
                );
            }
        }
    }

    #[test]
    fn ring_is_hollow() {
        // Between the center dot (r = 10) and the ring's inner edge (42 - 8 = 34).
        let icon = render(128).unwrap();
        assert_eq!(icon.data.get_pixel(64, 64 - 20).0, BACKGROUND);
        // On the ring at the top, just inside the outer edge.
        assert_eq!(icon.data.get_pixel(64, 64 - 40).0, ACCENT);
    }

    #[test]
    fn only_palette_colors_appear() {
        let icon = render(128).unwrap();
        assert!(icon.data.pixels().all(|p| p.0 == BACKGROUND || p.0 == ACCENT));
    }

    #[test]
    fn rendering_is_deterministic() {
        for size in [16, 48, 128] {
            assert_eq!(render(size).unwrap(), render(size).unwrap());
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(render(0), Err(IconError::InvalidSize(0))));
    }

    #[test]
    fn tiny_sizes_still_render() {
        for size in 1..=4 {
            let icon = render(size).unwrap();
            assert_eq!(icon.size(), size);
        }
    }

    #[test]
    fn palette_is_fixed() {
        let renderer = IconRenderer::new();
        assert_eq!(to_pixel(renderer.palette().background).0, BACKGROUND);
        assert_eq!(to_pixel(renderer.palette().accent).0, ACCENT);
    }
}
