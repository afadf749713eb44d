//! Gesture primitives consumed by the slider.
//!
//! The slider does not recognise gestures itself. A host recogniser (or a
//! script, in tests) feeds it [`GestureEvent`]s through a [`GestureSource`].

use glam::DVec2;

use crate::geometry::Rect;

/// Pointer position together with the bounds of the interactive ring at the
/// time the event fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePoint {
    /// Pointer position in client coordinates.
    pub position: DVec2,
    /// Bounding rectangle of the ring in client coordinates.
    pub bounds: Rect,
}

impl GesturePoint {
    pub fn new(position: DVec2, bounds: Rect) -> Self {
        Self { position, bounds }
    }
}

/// A recognised pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A drag began.
    PanStart(GesturePoint),
    /// The pointer moved during a drag.
    PanMove(GesturePoint),
    /// The drag finished normally.
    PanEnd(GesturePoint),
    /// The recogniser aborted the drag.
    PanCancel,
    /// A single tap without a drag.
    Tap(GesturePoint),
    /// A short hold that arms dragging in press-to-activate mode.
    Press(GesturePoint),
    /// Release after a [`GestureEvent::Press`] without a drag.
    PressUp(GesturePoint),
}

impl GestureEvent {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            GestureEvent::PanStart(_) => "panstart",
            GestureEvent::PanMove(_) => "panmove",
            GestureEvent::PanEnd(_) => "panend",
            GestureEvent::PanCancel => "pancancel",
            GestureEvent::Tap(_) => "singletap",
            GestureEvent::Press(_) => "press",
            GestureEvent::PressUp(_) => "pressup",
        }
    }
}

/// Producer of gesture events, in delivery order.
pub trait GestureSource {
    /// The next pending gesture, or `None` once the source is drained.
    fn next_gesture(&mut self) -> Option<GestureEvent>;
}

impl<I> GestureSource for I
where
    I: Iterator<Item = GestureEvent>,
{
    fn next_gesture(&mut self) -> Option<GestureEvent> {
        self.next()
    }
}

/// Whether the slider acted on an event.
///
/// Hosts suppress default handling (scrolling, text selection) for consumed
/// events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Consumed,
    Ignored,
}

impl InputOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, InputOutcome::Consumed)
    }
}
