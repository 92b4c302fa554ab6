//! Planar helpers for ring layouts.
//!
//! Angles are in degrees, measured from the positive x-axis (3 o'clock) and
//! growing counter-clockwise. Points live in screen space, so y grows
//! downward and the sine term is subtracted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Wraps `angle` into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Point on the circle of `radius` around `center` at `angle` degrees.
pub fn arc_point(center: Point, radius: f64, angle: f64) -> Point {
    let rad = angle.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// Polar angle of `point` around `center`, in `[0, 360)`.
pub fn angle_of(center: Point, point: Point) -> f64 {
    let (dx, dy) = (point.x - center.x, center.y - point.y);
    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Annular wedge bounded by two radii and the angular range
/// `[start_angle, start_angle + sweep)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Wedge {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }

    /// The radial range is closed, the angular range is half-open, so two
    /// wedges sharing an edge never both claim a point on it.
    pub fn contains(&self, point: Point) -> bool {
        let dist = self.center.distance(point);
        if dist < self.inner_radius || dist > self.outer_radius {
            return false;
        }

        let offset = normalize_degrees(angle_of(self.center, point) - self.start_angle);
        offset < self.sweep
    }

    /// Closed boundary: the outer arc from start to end, then the inner arc
    /// back. `segments` is the number of chords per arc.
    pub fn outline(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let step = self.sweep / segments as f64;
        let angle = |k: usize| self.start_angle + k as f64 * step;

        let outer = (0..=segments).map(|k| arc_point(self.center, self.outer_radius, angle(k)));
        let inner = (0..=segments)
            .rev()
            .map(|k| arc_point(self.center, self.inner_radius, angle(k)));

        outer.chain(inner).collect()
    }
}
