//! A circular slider for picking a value, or a low/high pair, on a 270 degree
//! track.
//!
//! ## Usage
//!
//! Build [`CircularSliderArgs`], create a [`CircularSlider`] and feed it
//! gestures from the host's recogniser. Notifications arrive through the
//! `on_changing` (live preview while dragging) and `on_changed` (committed
//! value) callbacks.
//!
//! ```
//! use circular_slider::{
//!     geometry::Rect,
//!     gesture::{GestureEvent, GesturePoint},
//!     glam::DVec2,
//!     slider::{CircularSlider, CircularSliderArgs},
//! };
//!
//! let args = CircularSliderArgs::default()
//!     .min(10.0)
//!     .max(30.0)
//!     .step(0.5)
//!     .value(20.0)
//!     .on_changed(|change| println!("{}: {:?}", change.event_name_changed(), change.value));
//! let mut slider = CircularSlider::new(args).unwrap();
//!
//! let bounds = Rect::new(0.0, 0.0, 320.0, 320.0);
//! // Tap the top of the ring: the middle of the range.
//! slider.handle_gesture(GestureEvent::Tap(GesturePoint::new(DVec2::new(160.0, 0.0), bounds)));
//! assert_eq!(slider.value(), Some(20.0));
//! ```

use derive_setters::Setters;
use tracing::{debug, warn};

use crate::{error::ConfigError, prop::CallbackWith, range::ValueRange};

pub use arc::{ArcSegment, HandleArc, SliderLayers};
pub use keyboard::Key;

mod accessibility;
mod arc;
mod interaction;
mod keyboard;

/// One of the values a slider can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The single value of a non-dual slider.
    Value,
    /// Lower handle of a dual slider.
    Low,
    /// Upper handle of a dual slider.
    High,
}

impl Handle {
    /// Notification name prefix.
    pub fn name(self) -> &'static str {
        match self {
            Handle::Value => "value",
            Handle::Low => "low",
            Handle::High => "high",
        }
    }
}

/// Which side of the target the active arc is drawn on, relative to the
/// `current` reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderMode {
    /// The active arc grows from `min` (heating-style targets).
    #[default]
    Start,
    /// The active arc grows from `max` (cooling-style targets).
    End,
    /// The whole track is coloured; only the target marker moves.
    Full,
}

/// Payload of a `*-changing` or `*-changed` notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChange {
    /// Handle the value belongs to.
    pub handle: Handle,
    /// Stepped value, or `None` on the "drag ended" changing notification.
    /// A value pinned to `min`, `max` or the partner handle may be off the step grid.
    pub value: Option<f64>,
}

impl SliderChange {
    /// `value-changing`, `low-changing` or `high-changing`.
    pub fn event_name_changing(&self) -> String {
        format!("{}-changing", self.handle.name())
    }

    /// `value-changed`, `low-changed` or `high-changed`.
    pub fn event_name_changed(&self) -> String {
        format!("{}-changed", self.handle.name())
    }
}

/// Arguments for [`CircularSlider`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct CircularSliderArgs {
    /// Lower bound of the range.
    pub min: f64,
    /// Upper bound of the range.
    pub max: f64,
    /// Quantization unit for reported values.
    pub step: f64,
    /// Low/high range mode instead of a single value.
    pub dual: bool,
    /// Ignore all input and hide the value arcs.
    pub disabled: bool,
    /// Ignore all input but keep rendering the value arcs.
    pub readonly: bool,
    /// Active arc placement.
    pub mode: SliderMode,
    /// Dim the value arcs, e.g. while the device is off.
    pub inactive: bool,
    /// Value of a single slider.
    #[setters(strip_option)]
    pub value: Option<f64>,
    /// Low value of a dual slider.
    #[setters(strip_option)]
    pub low: Option<f64>,
    /// High value of a dual slider.
    #[setters(strip_option)]
    pub high: Option<f64>,
    /// Measured reading shown next to the target.
    #[setters(strip_option)]
    pub current: Option<f64>,
    /// Accessibility label.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Accessibility label for the low handle.
    #[setters(strip_option, into)]
    pub low_label: Option<String>,
    /// Accessibility label for the high handle.
    #[setters(strip_option, into)]
    pub high_label: Option<String>,
    /// Require a short press before a drag starts. Hosts enable this on touch
    /// screens where the slider sits in a scrollable page.
    pub press_to_activate: bool,
    /// Fired on every drag move, and with `None` once a drag ends.
    #[setters(skip)]
    pub on_changing: CallbackWith<SliderChange>,
    /// Fired once per committed gesture or key release.
    #[setters(skip)]
    pub on_changed: CallbackWith<SliderChange>,
}

impl CircularSliderArgs {
    /// Sets the changing handler.
    pub fn on_changing<F>(mut self, on_changing: F) -> Self
    where
        F: Fn(SliderChange) + Send + Sync + 'static,
    {
        self.on_changing = CallbackWith::new(on_changing);
        self
    }

    /// Sets the changing handler using a shared callback.
    pub fn on_changing_shared(
        mut self,
        on_changing: impl Into<CallbackWith<SliderChange>>,
    ) -> Self {
        self.on_changing = on_changing.into();
        self
    }

    /// Sets the changed handler.
    pub fn on_changed<F>(mut self, on_changed: F) -> Self
    where
        F: Fn(SliderChange) + Send + Sync + 'static,
    {
        self.on_changed = CallbackWith::new(on_changed);
        self
    }

    /// Sets the changed handler using a shared callback.
    pub fn on_changed_shared(
        mut self,
        on_changed: impl Into<CallbackWith<SliderChange>>,
    ) -> Self {
        self.on_changed = on_changed.into();
        self
    }
}

impl Default for CircularSliderArgs {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            dual: false,
            disabled: false,
            readonly: false,
            mode: SliderMode::default(),
            inactive: false,
            value: None,
            low: None,
            high: None,
            current: None,
            label: None,
            low_label: None,
            high_label: None,
            press_to_activate: false,
            on_changing: CallbackWith::noop(),
            on_changed: CallbackWith::noop(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rollback {
    handle: Handle,
    value: Option<f64>,
}

/// Interaction state owned by the slider.
#[derive(Debug, Default)]
struct SliderController {
    value: Option<f64>,
    low: Option<f64>,
    high: Option<f64>,
    pressed: bool,
    /// Handle targeted by the gesture in progress.
    active: Option<Handle>,
    /// Handle of the last gesture, the next keyboard target.
    last: Option<Handle>,
    /// Handle adjusted by the last key down, committed on key up.
    key_handle: Option<Handle>,
    rollback: Option<Rollback>,
    /// Pans are accepted in press-to-activate mode.
    pan_armed: bool,
}

/// The stateful circular slider.
#[derive(Debug)]
pub struct CircularSlider {
    args: CircularSliderArgs,
    range: ValueRange,
    controller: SliderController,
}

impl CircularSlider {
    /// Validates `args` and initialises the local values from them.
    pub fn new(args: CircularSliderArgs) -> Result<Self, ConfigError> {
        let range = ValueRange::new(args.min, args.max, args.step)?;
        let mut slider = Self {
            controller: SliderController {
                value: sanitize(args.value, &range, "value"),
                low: sanitize(args.low, &range, "low"),
                high: sanitize(args.high, &range, "high"),
                ..SliderController::default()
            },
            args,
            range,
        };
        slider.normalize_dual();
        Ok(slider)
    }

    /// Applies fresh arguments from the host.
    ///
    /// Values that changed since the previous args overwrite the local ones,
    /// unless a gesture is in progress, in which case the local values win
    /// until the gesture ends. Turning the slider disabled or readonly
    /// cancels a gesture in progress.
    pub fn apply_args(&mut self, args: CircularSliderArgs) -> Result<(), ConfigError> {
        let range = ValueRange::new(args.min, args.max, args.step)?;
        let previous = std::mem::replace(&mut self.args, args);
        self.range = range;

        if !self.is_interactive() && self.controller.active.is_some() {
            debug!("slider became non-interactive during a gesture");
            self.cancel_gesture();
        }

        if self.controller.active.is_some() {
            debug!("gesture in progress, keeping local values");
            return Ok(());
        }

        if !same_value(previous.value, self.args.value) {
            self.controller.value = self.args.value;
        }
        if !same_value(previous.low, self.args.low) {
            self.controller.low = self.args.low;
        }
        if !same_value(previous.high, self.args.high) {
            self.controller.high = self.args.high;
        }
        let range = self.range;
        self.controller.value = sanitize(self.controller.value, &range, "value");
        self.controller.low = sanitize(self.controller.low, &range, "low");
        self.controller.high = sanitize(self.controller.high, &range, "high");
        self.normalize_dual();
        Ok(())
    }

    /// Current arguments.
    pub fn args(&self) -> &CircularSliderArgs {
        &self.args
    }

    /// Validated range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Local value of a single slider, unstepped while dragging.
    pub fn value(&self) -> Option<f64> {
        self.controller.value
    }

    /// Local low value of a dual slider.
    pub fn low(&self) -> Option<f64> {
        self.controller.low
    }

    /// Local high value of a dual slider.
    pub fn high(&self) -> Option<f64> {
        self.controller.high
    }

    /// Local value of `handle`.
    pub fn handle_value(&self, handle: Handle) -> Option<f64> {
        match handle {
            Handle::Value => self.controller.value,
            Handle::Low => self.controller.low,
            Handle::High => self.controller.high,
        }
    }

    /// `true` while a drag is in progress.
    pub fn is_pressed(&self) -> bool {
        self.controller.pressed
    }

    /// Handle targeted by the gesture in progress.
    pub fn active_handle(&self) -> Option<Handle> {
        self.controller.active
    }

    /// Handle of the most recent gesture, targeted by the next key press.
    pub fn last_handle(&self) -> Option<Handle> {
        self.controller.last
    }

    fn is_interactive(&self) -> bool {
        !self.args.disabled && !self.args.readonly
    }

    fn set_handle_value(&mut self, handle: Handle, value: Option<f64>) {
        match handle {
            Handle::Value => self.controller.value = value,
            Handle::Low => self.controller.low = value,
            Handle::High => self.controller.high = value,
        }
    }

    /// Maps a handle onto the ones this slider actually has.
    fn normalize_handle(&self, handle: Handle) -> Handle {
        match (self.args.dual, handle) {
            (false, _) => Handle::Value,
            (true, Handle::Value) => Handle::Low,
            (true, handle) => handle,
        }
    }

    /// Picks the handle a gesture at raw value `target` manipulates.
    fn find_handle(&self, target: f64) -> Handle {
        if !self.args.dual {
            return Handle::Value;
        }
        let low = self
            .controller
            .low
            .unwrap_or(self.range.min())
            .max(self.range.min());
        let high = self
            .controller
            .high
            .unwrap_or(self.range.max())
            .min(self.range.max());
        if low >= target {
            return Handle::Low;
        }
        if high <= target {
            return Handle::High;
        }
        if (target - low).abs() <= (target - high).abs() {
            Handle::Low
        } else {
            Handle::High
        }
    }

    /// Clamps `value` into the range and keeps dual handles from crossing.
    fn bounded_value(&self, handle: Handle, value: f64) -> f64 {
        let (min, max) = (self.range.min(), self.range.max());
        let (lower, upper) = match handle {
            Handle::Value => (min, max),
            Handle::Low => (min, self.controller.high.unwrap_or(max).min(max)),
            Handle::High => (self.controller.low.unwrap_or(min).max(min), max),
        };
        value.clamp(lower, upper.max(lower))
    }

    /// Steps a bounded value, then bounds it again so rounding cannot push a
    /// handle past its partner or out of range.
    fn quantized_value(&self, handle: Handle, value: f64) -> f64 {
        let bounded = self.bounded_value(handle, value);
        self.bounded_value(handle, self.range.stepped_value(bounded))
    }

    fn cancel_gesture(&mut self) {
        if let Some(rollback) = self.controller.rollback.take() {
            self.set_handle_value(rollback.handle, rollback.value);
            debug!(
                handle = rollback.handle.name(),
                value = ?rollback.value,
                "gesture cancelled, value rolled back"
            );
        }
        self.controller.active = None;
        self.controller.pressed = false;
        self.controller.pan_armed = false;
    }

    fn normalize_dual(&mut self) {
        if !self.args.dual {
            return;
        }
        if let (Some(low), Some(high)) = (self.controller.low, self.controller.high)
            && low > high
        {
            warn!(low, high, "low above high, clamping low");
            self.controller.low = Some(high);
        }
    }

    fn emit_changing(&self, handle: Handle, value: Option<f64>) {
        if value.is_some_and(f64::is_nan) {
            warn!(handle = handle.name(), "suppressing NaN changing notification");
            return;
        }
        self.args.on_changing.call(SliderChange { handle, value });
    }

    fn emit_changed(&self, handle: Handle, value: f64) {
        if value.is_nan() {
            warn!(handle = handle.name(), "suppressing NaN changed notification");
            return;
        }
        debug!(handle = handle.name(), value, "value committed");
        self.args.on_changed.call(SliderChange {
            handle,
            value: Some(value),
        });
    }

    /// Emits the commit pair: `*-changed` with the value, then `*-changing`
    /// with `None` to clear any live preview.
    fn emit_commit(&self, handle: Handle, value: f64) {
        self.emit_changed(handle, value);
        self.emit_changing(handle, None);
    }
}

fn same_value(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
        (None, None) => true,
        _ => false,
    }
}

fn sanitize(value: Option<f64>, range: &ValueRange, field: &'static str) -> Option<f64> {
    let value = value?;
    if value.is_nan() {
        warn!(field, "ignoring NaN slider value");
        return None;
    }
    let clamped = range.clamp(value);
    if clamped != value {
        warn!(field, value, clamped, "slider value out of range, clamping");
    }
    Some(clamped)
}
