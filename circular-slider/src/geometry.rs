//! Sweep geometry: pointer positions to sweep percentages and back.
//!
//! The track is a 270 degree arc whose gap is centred at the bottom. Percentage
//! `0.0` is the bottom-left end of the arc, `0.5` the top and `1.0` the
//! bottom-right end.

use glam::DVec2;

/// Angular length of the track in degrees.
pub const MAX_ANGLE: f64 = 270.0;
/// Rotation applied to the track so the gap sits at the bottom.
pub const ROTATE_ANGLE: f64 = 360.0 - MAX_ANGLE / 2.0 - 90.0;
/// Track radius in viewbox units.
pub const RADIUS: f64 = 145.0;
/// Side length of the square viewbox the track is drawn in.
pub const VIEWBOX_SIZE: f64 = 320.0;

/// Axis-aligned rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: DVec2,
    /// Width and height.
    pub size: DVec2,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
            || !self.size.is_finite()
            || !self.origin.is_finite()
    }
}

/// Maps a pointer position over `bounds` to a percentage along the sweep.
///
/// Only the angle around the centre of `bounds` matters; the distance from
/// the centre is ignored. Returns `None` when `bounds` has no finite area or
/// the position is not finite.
pub fn percentage_from_point(position: DVec2, bounds: &Rect) -> Option<f64> {
    if bounds.is_degenerate() || !position.is_finite() {
        return None;
    }
    let centered = 2.0 * (position - bounds.center()) / bounds.size;
    let degrees = centered.to_angle().to_degrees();
    if degrees.is_nan() {
        return None;
    }

    let offset = (360.0 - MAX_ANGLE) / 2.0;
    let angle = (degrees + offset - ROTATE_ANGLE + 360.0).rem_euclid(360.0) - offset;

    Some((angle / MAX_ANGLE).clamp(0.0, 1.0))
}

/// Angle in degrees from the start of the track for a sweep percentage.
pub fn percentage_to_sweep_angle(percentage: f64) -> f64 {
    percentage.clamp(0.0, 1.0) * MAX_ANGLE
}

/// Point on the track, in viewbox coordinates, for a sweep percentage.
pub fn point_on_track(percentage: f64) -> DVec2 {
    let radians = (percentage_to_sweep_angle(percentage) + ROTATE_ANGLE).to_radians();
    let center = DVec2::splat(VIEWBOX_SIZE / 2.0);
    center + RADIUS * DVec2::from_angle(radians)
}
