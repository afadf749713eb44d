//! Logic for a circular slider control.
//!
//! The slider maps pointer gestures over a ring onto a value inside
//! `[min, max]`, optionally as a low/high pair, and reports live and committed
//! values through callbacks. It does not draw anything itself:
//! [`CircularSlider::layers`](slider::CircularSlider::layers) describes the
//! arcs to paint and
//! [`CircularSlider::accessibility_nodes`](slider::CircularSlider::accessibility_nodes)
//! the nodes to expose to assistive technologies.
//!
//! # Example
//!
//! ```
//! use circular_slider::{
//!     geometry::{Rect, point_on_track},
//!     gesture::{GestureEvent, GesturePoint},
//!     slider::{CircularSlider, CircularSliderArgs},
//! };
//!
//! let args = CircularSliderArgs::default()
//!     .dual(true)
//!     .low(20.0)
//!     .high(80.0)
//!     .on_changed(|change| println!("{} = {:?}", change.event_name_changed(), change.value));
//! let mut slider = CircularSlider::new(args).unwrap();
//!
//! let bounds = Rect::new(0.0, 0.0, 320.0, 320.0);
//! let at = |p| GesturePoint::new(point_on_track(p), bounds);
//! let mut script = [GestureEvent::PanStart(at(0.15)), GestureEvent::PanEnd(at(0.10))].into_iter();
//! slider.drive(&mut script);
//! assert_eq!(slider.low(), Some(10.0));
//! ```

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod prop;
pub mod range;
pub mod slider;

pub use accesskit;
pub use glam;

pub use error::ConfigError;
pub use slider::{CircularSlider, CircularSliderArgs, Handle, SliderChange, SliderMode};
