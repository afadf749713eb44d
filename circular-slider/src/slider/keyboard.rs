use accesskit::Action;
use tracing::{debug, trace};

use crate::gesture::InputOutcome;

use super::{CircularSlider, Handle};

/// Keys the slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    PageUp,
    PageDown,
    Home,
    End,
}

impl CircularSlider {
    /// Adjusts a handle from the keyboard and emits a changing notification.
    ///
    /// The handle of the last gesture takes precedence over `focused`, once.
    pub fn handle_key_down(&mut self, key: Key, focused: Handle) -> InputOutcome {
        if !self.is_interactive() || self.controller.active.is_some() {
            trace!(?key, "key down ignored");
            return InputOutcome::Ignored;
        }
        let handle = self
            .controller
            .last
            .take()
            .map(|handle| self.normalize_handle(handle))
            .unwrap_or_else(|| self.normalize_handle(focused));

        let current = self.handle_value(handle).unwrap_or(self.range.min());
        let step = self.range.step();
        let page = self.range.ten_percent_step();
        let next = match key {
            Key::ArrowUp | Key::ArrowRight => current + step,
            Key::ArrowDown | Key::ArrowLeft => current - step,
            Key::PageUp => current + page,
            Key::PageDown => current - page,
            Key::Home => self.range.min(),
            Key::End => self.range.max(),
        };
        let next = self.quantized_value(handle, next);
        self.set_handle_value(handle, Some(next));
        self.controller.key_handle = Some(handle);
        debug!(?key, handle = handle.name(), value = next, "key adjusted value");
        self.emit_changing(handle, Some(next));
        InputOutcome::Consumed
    }

    /// Commits the value adjusted by the matching key down.
    pub fn handle_key_up(&mut self, key: Key, focused: Handle) -> InputOutcome {
        if !self.is_interactive() || self.controller.active.is_some() {
            trace!(?key, "key up ignored");
            return InputOutcome::Ignored;
        }
        let handle = self
            .controller
            .key_handle
            .take()
            .unwrap_or_else(|| self.normalize_handle(focused));
        let Some(value) = self.handle_value(handle) else {
            return InputOutcome::Ignored;
        };
        self.emit_commit(handle, value);
        InputOutcome::Consumed
    }

    /// Handles an assistive technology request on `handle`'s node.
    pub fn handle_accessibility_action(&mut self, action: Action, handle: Handle) -> InputOutcome {
        let key = match action {
            Action::Increment => Key::ArrowUp,
            Action::Decrement => Key::ArrowDown,
            _ => return InputOutcome::Ignored,
        };
        // The request names its node, so the last gesture handle must not win.
        self.controller.last = None;
        if !self.handle_key_down(key, handle).is_consumed() {
            return InputOutcome::Ignored;
        }
        self.handle_key_up(key, handle)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::slider::{CircularSliderArgs, SliderChange};

    use super::*;

    fn recording(args: CircularSliderArgs) -> (CircularSlider, Arc<Mutex<Vec<SliderChange>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let changing = log.clone();
        let changed = log.clone();
        let args = args
            .on_changing(move |c| changing.lock().push(c))
            .on_changed(move |c| changed.lock().push(c));
        (CircularSlider::new(args).unwrap(), log)
    }

    #[test]
    fn arrows_move_by_one_step() {
        let (mut slider, log) = recording(CircularSliderArgs::default().step(0.5).value(20.0));
        slider.handle_key_down(Key::ArrowUp, Handle::Value);
        assert_eq!(slider.value(), Some(20.5));
        slider.handle_key_up(Key::ArrowUp, Handle::Value);
        slider.handle_key_down(Key::ArrowLeft, Handle::Value);
        slider.handle_key_down(Key::ArrowLeft, Handle::Value);
        assert_eq!(slider.value(), Some(19.5));

        let log = log.lock();
        assert_eq!(
            log[0],
            SliderChange {
                handle: Handle::Value,
                value: Some(20.5)
            }
        );
        assert_eq!(log[1].value, Some(20.5));
        assert_eq!(log[2].value, None);
    }

    #[test]
    fn page_keys_use_ten_percent() {
        let (mut slider, _log) = recording(CircularSliderArgs::default().value(50.0));
        slider.handle_key_down(Key::PageUp, Handle::Value);
        assert_eq!(slider.value(), Some(60.0));
        slider.handle_key_down(Key::PageDown, Handle::Value);
        slider.handle_key_down(Key::PageDown, Handle::Value);
        assert_eq!(slider.value(), Some(40.0));
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let (mut slider, _log) = recording(CircularSliderArgs::default().value(50.0));
        slider.handle_key_down(Key::End, Handle::Value);
        assert_eq!(slider.value(), Some(100.0));
        slider.handle_key_down(Key::ArrowUp, Handle::Value);
        assert_eq!(slider.value(), Some(100.0));
        slider.handle_key_down(Key::Home, Handle::Value);
        assert_eq!(slider.value(), Some(0.0));
    }

    #[test]
    fn unset_value_starts_from_min() {
        let (mut slider, _log) = recording(CircularSliderArgs::default().min(10.0));
        slider.handle_key_down(Key::ArrowUp, Handle::Value);
        assert_eq!(slider.value(), Some(11.0));
    }

    #[test]
    fn dual_keys_respect_partner() {
        let (mut slider, log) =
            recording(CircularSliderArgs::default().dual(true).low(40.0).high(41.0));
        slider.handle_key_down(Key::PageUp, Handle::Low);
        assert_eq!(slider.low(), Some(41.0));
        slider.handle_key_up(Key::PageUp, Handle::Low);
        let names: Vec<_> = log
            .lock()
            .iter()
            .map(|c| c.handle.name())
            .collect();
        assert_eq!(names, ["low", "low", "low"]);
    }

    #[test]
    fn last_gesture_handle_wins_once() {
        let (mut slider, _log) =
            recording(CircularSliderArgs::default().dual(true).low(20.0).high(80.0));
        slider.controller.last = Some(Handle::High);
        slider.handle_key_down(Key::ArrowUp, Handle::Low);
        assert_eq!(slider.high(), Some(81.0));
        slider.handle_key_up(Key::ArrowUp, Handle::Low);
        slider.handle_key_down(Key::ArrowUp, Handle::Low);
        assert_eq!(slider.low(), Some(21.0));
    }

    #[test]
    fn readonly_ignores_keys() {
        let (mut slider, log) =
            recording(CircularSliderArgs::default().value(5.0).readonly(true));
        assert_eq!(
            slider.handle_key_down(Key::ArrowUp, Handle::Value),
            InputOutcome::Ignored
        );
        assert_eq!(slider.value(), Some(5.0));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn accessibility_actions_commit() {
        let (mut slider, log) = recording(CircularSliderArgs::default().value(5.0));
        slider.handle_accessibility_action(Action::Increment, Handle::Value);
        slider.handle_accessibility_action(Action::Increment, Handle::Value);
        slider.handle_accessibility_action(Action::Decrement, Handle::Value);
        assert_eq!(slider.value(), Some(6.0));
        assert_eq!(log.lock().len(), 9);
        assert_eq!(
            slider.handle_accessibility_action(Action::Focus, Handle::Value),
            InputOutcome::Ignored
        );
    }
}
