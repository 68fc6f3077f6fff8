//! Size-derived emblem geometry.
//!
//! Every measurement of the emblem is a function of the canvas edge length
//! alone. Lengths use integer floor division, and each stroke or dot has a
//! minimum so it stays visible at 16px.

use std::f64::consts::PI;

/// Number of satellite dots placed around the ring.
pub const SATELLITE_COUNT: usize = 6;

const MIN_RING_LINE_WIDTH: u32 = 2;
const MIN_SATELLITE_DOT_RADIUS: u32 = 2;
const MIN_CENTER_DOT_RADIUS: u32 = 3;

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

/// A single primitive of the emblem, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Circle outline. `radius` is the outer edge; the stroke grows inward by `width`.
    Ring { center: Point, radius: u32, width: u32 },
    /// Filled circle.
    Dot { center: Point, radius: u32 },
}

/// All measurements for an emblem drawn on a `size x size` canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmblemGeometry {
    pub size: u32,
    pub center: u32,
    pub radius: u32,
    pub ring_line_width: u32,
    pub satellite_dot_radius: u32,
    pub center_dot_radius: u32,
}

impl EmblemGeometry {
    /// Computes the geometry for the given edge length.
    ///
    /// Never fails; callers reject a zero size before asking for geometry.
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            center: size / 2,
            radius: size / 3,
            ring_line_width: (size / 16).max(MIN_RING_LINE_WIDTH),
            satellite_dot_radius: (size / 20).max(MIN_SATELLITE_DOT_RADIUS),
            center_dot_radius: (size / 12).max(MIN_CENTER_DOT_RADIUS),
        }
    }

    /// The canvas center as a point.
    pub fn center_point(&self) -> Point {
        Point::new(self.center as i32, self.center as i32)
    }

    /// Angle of the `index`-th satellite, in radians from the positive x axis.
    pub fn satellite_angle(index: usize) -> f64 {
        (2.0 * PI / SATELLITE_COUNT as f64) * index as f64
    }

    /// Centers of the satellite dots, starting at 0° and stepping 60° clockwise
    /// in image coordinates (y grows downward).
    ///
    /// Offsets are truncated toward zero, not rounded: `cos(60°) * 5` is just
    /// above 2.5 and must land on 2.
    pub fn satellites(&self) -> [Point; SATELLITE_COUNT] {
        let center = self.center_point();
        let radius = f64::from(self.radius);
        std::array::from_fn(|i| {
            let angle = Self::satellite_angle(i);
            let dx = (angle.cos() * radius) as i32;
            let dy = (angle.sin() * radius) as i32;
            Point::new(center.x + dx, center.y + dy)
        })
    }

    /// The emblem primitives in draw order: ring, satellites, center dot.
    pub fn shapes(&self) -> Vec<Shape> {
        let center = self.center_point();
        let mut shapes = Vec::with_capacity(SATELLITE_COUNT + 2);

        shapes.push(Shape::Ring {
            center,
            radius: self.radius,
            width: self.ring_line_width,
        });
        shapes.extend(self.satellites().into_iter().map(|p| Shape::Dot {
            center: p,
            radius: self.satellite_dot_radius,
        }));
        shapes.push(Shape::Dot {
            center,
            radius: self.center_dot_radius,
        });

        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_for_shipped_sizes() {
        let g = EmblemGeometry::for_size(16);
        assert_eq!((g.center, g.radius), (8, 5));
        assert_eq!(g.ring_line_width, 2);
        assert_eq!(g.satellite_dot_radius, 2);
        assert_eq!(g.center_dot_radius, 3);

        let g = EmblemGeometry::for_size(48);
        assert_eq!((g.center, g.radius), (24, 16));
        assert_eq!(g.ring_line_width, 3);
        assert_eq!(g.satellite_dot_radius, 2);
        assert_eq!(g.center_dot_radius, 4);

        let g = EmblemGeometry::for_size(128);
        assert_eq!((g.center, g.radius), (64, 42));
        assert_eq!(g.ring_line_width, 8);
        assert_eq!(g.satellite_dot_radius, 6);
        assert_eq!(g.center_dot_radius, 10);
    }

    #[test]
    fn floors_hold_for_every_size() {
        for size in 1..=256 {
            let g = EmblemGeometry::for_size(size);
            assert!(g.ring_line_width >= 2, "size {size}");
            assert!(g.satellite_dot_radius >= 2, "size {size}");
            assert!(g.center_dot_radius >= 3, "size {size}");
        }
    }

    #[test]
    fn six_satellites_on_the_ring() {
        for size in [16, 48, 128] {
            let g = EmblemGeometry::for_size(size);
            let center = g.center_point();
            let satellites = g.satellites();
            assert_eq!(satellites.len(), 6);

            for p in satellites {
                let d = p.distance_to(center);
                // Truncating both axes pulls a point inward by less than sqrt(2).
                assert!(d <= f64::from(g.radius) + 1e-9, "size {size}: {p:?}");
                assert!(d > f64::from(g.radius) - 1.5, "size {size}: {p:?}");
            }
        }
    }

    #[test]
    fn satellite_angles_step_sixty_degrees() {
        for i in 0..SATELLITE_COUNT {
            let degrees = EmblemGeometry::satellite_angle(i).to_degrees();
            assert!((degrees - 60.0 * i as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn axis_satellites_are_exact() {
        let g = EmblemGeometry::for_size(48);
        let s = g.satellites();
        assert_eq!(s[0], Point::new(24 + 16, 24));
        assert_eq!(s[3], Point::new(24 - 16, 24));
    }

    #[test]
    fn offsets_truncate_instead_of_rounding() {
        // cos(60°) * 5 = 2.5000000000000004 and sin(60°) * 5 = 4.33
        let g = EmblemGeometry::for_size(16);
        let s = g.satellites();
        assert_eq!(s[1], Point::new(8 + 2, 8 + 4));
        // Negative offsets truncate toward zero as well.
        assert_eq!(s[4], Point::new(8 - 2, 8 - 4));
    }

    #[test]
    fn shapes_are_in_draw_order() {
        let g = EmblemGeometry::for_size(48);
        let shapes = g.shapes();
        assert_eq!(shapes.len(), 8);
        assert!(matches!(shapes[0], Shape::Ring { radius: 16, width: 3, .. }));
        assert!(shapes[1..7]
            .iter()
            .all(|s| matches!(s, Shape::Dot { radius: 2, .. })));
        assert_eq!(
            shapes[7],
            Shape::Dot {
                center: Point::new(24, 24),
                radius: 4
            }
        );
    }
}
