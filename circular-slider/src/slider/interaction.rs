use tracing::{debug, trace, warn};

use crate::{
    geometry::percentage_from_point,
    gesture::{GestureEvent, GesturePoint, GestureSource, InputOutcome},
};

use super::{CircularSlider, Handle, Rollback};

impl CircularSlider {
    /// Runs one gesture through the slider's state machine.
    ///
    /// Every gesture is ignored while the slider is disabled or readonly.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> InputOutcome {
        if !self.is_interactive() {
            trace!(event = event.name(), "slider not interactive, ignoring");
            return InputOutcome::Ignored;
        }

        match event {
            GestureEvent::PanStart(point) => self.on_pan_start(&point),
            GestureEvent::PanMove(point) => self.on_pan_move(&point),
            GestureEvent::PanEnd(point) => self.on_pan_end(&point),
            GestureEvent::PanCancel => self.on_pan_cancel(),
            GestureEvent::Tap(point) => self.on_tap(&point),
            GestureEvent::Press(point) => self.on_press(&point),
            GestureEvent::PressUp(point) => self.on_press_up(&point),
        }
    }

    /// Feeds every pending gesture of `source` to the slider and returns how
    /// many were consumed.
    pub fn drive<S>(&mut self, source: &mut S) -> usize
    where
        S: GestureSource + ?Sized,
    {
        let mut consumed = 0;
        while let Some(event) = source.next_gesture() {
            if self.handle_gesture(event).is_consumed() {
                consumed += 1;
            }
        }
        consumed
    }

    /// Raw, unbounded value under the pointer.
    fn raw_value(&self, point: &GesturePoint) -> Option<f64> {
        let percentage = percentage_from_point(point.position, &point.bounds);
        if percentage.is_none() {
            warn!(bounds = ?point.bounds, "cannot map pointer onto degenerate bounds");
        }
        percentage.map(|p| self.range.percentage_to_value(p))
    }

    fn begin_gesture(&mut self, handle: Handle) {
        self.controller.rollback = Some(Rollback {
            handle,
            value: self.handle_value(handle),
        });
        self.controller.active = Some(handle);
        self.controller.last = Some(handle);
        self.controller.pressed = true;
        debug!(handle = handle.name(), "gesture started");
    }

    fn finish_gesture(&mut self) {
        self.controller.active = None;
        self.controller.rollback = None;
        self.controller.pressed = false;
        self.controller.pan_armed = false;
    }

    fn on_pan_start(&mut self, point: &GesturePoint) -> InputOutcome {
        if self.args.press_to_activate && !self.controller.pan_armed {
            trace!("pan ignored until a press arms the slider");
            return InputOutcome::Ignored;
        }
        // A press already selected the handle for this gesture.
        if self.controller.active.is_some() {
            return InputOutcome::Consumed;
        }
        let Some(raw) = self.raw_value(point) else {
            return InputOutcome::Ignored;
        };
        let handle = self.find_handle(raw);
        self.begin_gesture(handle);
        InputOutcome::Consumed
    }

    fn on_pan_move(&mut self, point: &GesturePoint) -> InputOutcome {
        let Some(handle) = self.controller.active else {
            return InputOutcome::Ignored;
        };
        let Some(raw) = self.raw_value(point) else {
            return InputOutcome::Consumed;
        };
        let bounded = self.bounded_value(handle, raw);
        self.set_handle_value(handle, Some(bounded));
        let stepped = self.quantized_value(handle, bounded);
        trace!(handle = handle.name(), raw, stepped, "drag moved");
        self.emit_changing(handle, Some(stepped));
        InputOutcome::Consumed
    }

    fn on_pan_end(&mut self, point: &GesturePoint) -> InputOutcome {
        let Some(handle) = self.controller.active else {
            return InputOutcome::Ignored;
        };
        let target = self.raw_value(point).or_else(|| self.handle_value(handle));
        let Some(target) = target else {
            self.cancel_gesture();
            return InputOutcome::Consumed;
        };
        let stepped = self.quantized_value(handle, target);
        self.set_handle_value(handle, Some(stepped));
        self.finish_gesture();
        self.emit_commit(handle, stepped);
        InputOutcome::Consumed
    }

    fn on_pan_cancel(&mut self) -> InputOutcome {
        if self.controller.active.is_none() {
            return InputOutcome::Ignored;
        }
        self.cancel_gesture();
        InputOutcome::Consumed
    }

    fn on_tap(&mut self, point: &GesturePoint) -> InputOutcome {
        if self.controller.active.is_some() {
            trace!("tap during an active gesture, ignoring");
            return InputOutcome::Ignored;
        }
        let Some(raw) = self.raw_value(point) else {
            return InputOutcome::Ignored;
        };
        let handle = self.find_handle(raw);
        let stepped = self.quantized_value(handle, raw);
        self.set_handle_value(handle, Some(stepped));
        self.controller.last = Some(handle);
        self.finish_gesture();
        debug!(handle = handle.name(), "tap");
        self.emit_commit(handle, stepped);
        InputOutcome::Consumed
    }

    fn on_press(&mut self, point: &GesturePoint) -> InputOutcome {
        if !self.args.press_to_activate || self.controller.active.is_some() {
            return InputOutcome::Ignored;
        }
        let Some(raw) = self.raw_value(point) else {
            return InputOutcome::Ignored;
        };
        let handle = self.find_handle(raw);
        self.begin_gesture(handle);
        self.controller.pan_armed = true;

        let bounded = self.bounded_value(handle, raw);
        self.set_handle_value(handle, Some(bounded));
        self.emit_changing(handle, Some(self.quantized_value(handle, bounded)));
        InputOutcome::Consumed
    }

    fn on_press_up(&mut self, point: &GesturePoint) -> InputOutcome {
        if !self.args.press_to_activate {
            return InputOutcome::Ignored;
        }
        self.on_pan_end(point)
    }
}
