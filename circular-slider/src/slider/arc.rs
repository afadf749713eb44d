//! Render model for the circular slider.
//!
//! Arcs are expressed in degrees along the track, starting at the bottom-left
//! end. Hosts rotate the whole drawing by [`SliderLayers::rotation_degrees`].

use glam::DVec2;
use smallvec::SmallVec;

use crate::geometry::{MAX_ANGLE, ROTATE_ANGLE, percentage_to_sweep_angle, point_on_track};

use super::{CircularSlider, Handle, SliderMode};

/// A stretch of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Offset from the start of the track, in degrees.
    pub start_degrees: f64,
    /// Angular length in degrees. Zero draws a round dot.
    pub sweep_degrees: f64,
}

impl ArcSegment {
    pub fn is_dot(&self) -> bool {
        self.sweep_degrees == 0.0
    }
}

/// Everything drawn for one handle.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleArc {
    pub handle: Handle,
    pub mode: SliderMode,
    /// Faint arc between the target and the mode's limit.
    pub colored: ArcSegment,
    /// Arc between `current` and the target, or a dot at the target.
    pub active: Option<ArcSegment>,
    /// Target marker.
    pub target: Option<ArcSegment>,
    /// Target marker centre in viewbox coordinates.
    pub target_position: Option<DVec2>,
    /// Marker for the `current` reading.
    pub current: Option<ArcSegment>,
}

/// The complete render model.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayers {
    /// Rotation applied to every arc.
    pub rotation_degrees: f64,
    /// Background track.
    pub track: ArcSegment,
    /// `current` marker drawn on the background track.
    pub current: Option<ArcSegment>,
    pub handles: SmallVec<[HandleArc; 2]>,
    pub pressed: bool,
    pub inactive: bool,
}

impl CircularSlider {
    /// Builds the render model for the current state.
    pub fn layers(&self) -> SliderLayers {
        let mut handles = SmallVec::new();

        if !self.args.disabled {
            let (first, first_value) = if self.args.dual {
                (Handle::Low, self.controller.low)
            } else {
                (Handle::Value, self.controller.value)
            };
            let first_mode = if self.args.dual {
                SliderMode::Start
            } else {
                self.args.mode
            };
            if first_value.is_some() || self.args.mode == SliderMode::Full {
                handles.push(self.handle_arc(first, first_value, first_mode));
            }
            if self.args.dual && self.controller.high.is_some() {
                handles.push(self.handle_arc(Handle::High, self.controller.high, SliderMode::End));
            }
        }

        SliderLayers {
            rotation_degrees: ROTATE_ANGLE,
            track: ArcSegment {
                start_degrees: 0.0,
                sweep_degrees: MAX_ANGLE,
            },
            current: self.args.current.map(|current| self.dot(current)),
            handles,
            pressed: self.controller.pressed,
            inactive: self.args.inactive,
        }
    }

    fn handle_arc(&self, handle: Handle, value: Option<f64>, mode: SliderMode) -> HandleArc {
        let limit = match mode {
            SliderMode::End => self.range.max(),
            _ => self.range.min(),
        };
        let current = self.args.current.unwrap_or(limit);
        let target = value.unwrap_or(limit);

        let show_active = match mode {
            SliderMode::End => target <= current,
            SliderMode::Start => current <= target,
            SliderMode::Full => false,
        };
        let show_target = value.is_some();

        let active = show_target.then(|| match (show_active, mode) {
            (true, SliderMode::End) => self.segment(target, current),
            (true, _) => self.segment(current, target),
            (false, _) => self.dot(target),
        });

        let colored = match mode {
            SliderMode::Full => self.segment(self.range.min(), self.range.max()),
            SliderMode::End => self.segment(target, limit),
            SliderMode::Start => self.segment(limit, target),
        };

        let current = self
            .args
            .current
            .filter(|c| (self.range.min()..=self.range.max()).contains(c))
            .filter(|_| show_active || self.args.mode == SliderMode::Full)
            .map(|c| self.dot(c));

        HandleArc {
            handle,
            mode,
            colored,
            active,
            target: show_target.then(|| self.dot(target)),
            target_position: show_target
                .then(|| point_on_track(self.range.value_to_percentage(target))),
            current,
        }
    }

    fn segment(&self, from: f64, to: f64) -> ArcSegment {
        let start = self.range.value_to_percentage(from);
        let end = self.range.value_to_percentage(to);
        ArcSegment {
            start_degrees: percentage_to_sweep_angle(start),
            sweep_degrees: ((end - start) * MAX_ANGLE).max(0.0),
        }
    }

    fn dot(&self, value: f64) -> ArcSegment {
        self.segment(value, value)
    }
}

#[cfg(test)]
mod tests {
    use crate::slider::CircularSliderArgs;

    use super::*;

    fn slider(args: CircularSliderArgs) -> CircularSlider {
        CircularSlider::new(args).unwrap()
    }

    #[test]
    fn start_mode_fills_from_min() {
        let layers = slider(CircularSliderArgs::default().value(50.0)).layers();
        assert_eq!(layers.rotation_degrees, 135.0);
        assert_eq!(layers.track.sweep_degrees, 270.0);
        assert_eq!(layers.handles.len(), 1);

        let arc = &layers.handles[0];
        assert_eq!(arc.handle, Handle::Value);
        assert_eq!(
            arc.colored,
            ArcSegment {
                start_degrees: 0.0,
                sweep_degrees: 135.0
            }
        );
        // No current reading: current defaults to min, so active spans min..target.
        assert_eq!(arc.active, Some(arc.colored));
        assert!(arc.target.unwrap().is_dot());
        assert_eq!(arc.target.unwrap().start_degrees, 135.0);
        assert!(arc.current.is_none());
    }

    #[test]
    fn start_mode_active_between_current_and_target() {
        let layers = slider(CircularSliderArgs::default().value(60.0).current(20.0)).layers();
        let arc = &layers.handles[0];
        let active = arc.active.unwrap();
        assert!((active.start_degrees - 54.0).abs() < 1e-9);
        assert!((active.sweep_degrees - 108.0).abs() < 1e-9);
        assert!(arc.current.unwrap().is_dot());
        assert!(layers.current.is_some());
    }

    #[test]
    fn target_below_current_draws_dot() {
        let layers = slider(CircularSliderArgs::default().value(10.0).current(20.0)).layers();
        let arc = &layers.handles[0];
        assert!(arc.active.unwrap().is_dot());
        assert!(arc.current.is_none());
    }

    #[test]
    fn end_mode_fills_to_max() {
        let layers = slider(
            CircularSliderArgs::default()
                .value(75.0)
                .current(90.0)
                .mode(SliderMode::End),
        )
        .layers();
        let arc = &layers.handles[0];
        assert_eq!(arc.mode, SliderMode::End);
        assert!((arc.colored.start_degrees - 202.5).abs() < 1e-9);
        assert!((arc.colored.sweep_degrees - 67.5).abs() < 1e-9);
        let active = arc.active.unwrap();
        assert!((active.sweep_degrees - 40.5).abs() < 1e-9);
    }

    #[test]
    fn full_mode_renders_without_value() {
        let layers = slider(CircularSliderArgs::default().mode(SliderMode::Full)).layers();
        let arc = &layers.handles[0];
        assert_eq!(arc.colored.sweep_degrees, 270.0);
        assert!(arc.active.is_none());
        assert!(arc.target.is_none());
        assert!(arc.target_position.is_none());
    }

    #[test]
    fn dual_renders_low_and_high() {
        let layers = slider(
            CircularSliderArgs::default()
                .dual(true)
                .low(20.0)
                .high(80.0)
                .mode(SliderMode::End),
        )
        .layers();
        let modes: Vec<_> = layers.handles.iter().map(|a| (a.handle, a.mode)).collect();
        assert_eq!(
            modes,
            [(Handle::Low, SliderMode::Start), (Handle::High, SliderMode::End)]
        );
    }

    #[test]
    fn disabled_hides_value_arcs() {
        let layers = slider(CircularSliderArgs::default().value(50.0).disabled(true)).layers();
        assert!(layers.handles.is_empty());
        let layers = slider(CircularSliderArgs::default().value(50.0).readonly(true)).layers();
        assert_eq!(layers.handles.len(), 1);
    }

    #[test]
    fn target_position_sits_on_track() {
        let layers = slider(CircularSliderArgs::default().value(50.0)).layers();
        let position = layers.handles[0].target_position.unwrap();
        assert!((position.x - 160.0).abs() < 1e-9);
        assert!((position.y - 15.0).abs() < 1e-9);
    }
}
