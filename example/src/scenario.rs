//! Scenario files: a slider configuration plus a script of host input.

use std::path::Path;

use anyhow::{Context, Result};
use circular_slider::{
    CircularSliderArgs, Handle, SliderMode,
    geometry::{Rect, VIEWBOX_SIZE, point_on_track},
    gesture::{GestureEvent, GesturePoint},
    glam::DVec2,
    range::ValueRange,
    slider::Key,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub slider: SliderConfig,
    #[serde(default)]
    pub bounds: BoundsConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid scenario {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
    #[serde(default)]
    pub dual: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub mode: ModeConfig,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub press_to_activate: bool,
}

impl SliderConfig {
    pub fn to_args(&self) -> CircularSliderArgs {
        let defaults = CircularSliderArgs::default();
        CircularSliderArgs {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
            step: self.step.unwrap_or(defaults.step),
            dual: self.dual,
            disabled: self.disabled,
            readonly: self.readonly,
            mode: self.mode.into(),
            value: self.value,
            low: self.low,
            high: self.high,
            current: self.current,
            label: self.label.clone(),
            press_to_activate: self.press_to_activate,
            ..defaults
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeConfig {
    #[default]
    Start,
    End,
    Full,
}

impl From<ModeConfig> for SliderMode {
    fn from(mode: ModeConfig) -> Self {
        match mode {
            ModeConfig::Start => SliderMode::Start,
            ModeConfig::End => SliderMode::End,
            ModeConfig::Full => SliderMode::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: VIEWBOX_SIZE,
            height: VIEWBOX_SIZE,
        }
    }
}

impl From<BoundsConfig> for Rect {
    fn from(bounds: BoundsConfig) -> Self {
        Rect::new(bounds.left, bounds.top, bounds.width, bounds.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleConfig {
    Value,
    Low,
    High,
}

impl From<HandleConfig> for Handle {
    fn from(handle: HandleConfig) -> Self {
        match handle {
            HandleConfig::Value => Handle::Value,
            HandleConfig::Low => Handle::Low,
            HandleConfig::High => Handle::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyConfig {
    ArrowUp,
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    PageUp,
    PageDown,
    Home,
    End,
}

impl From<KeyConfig> for Key {
    fn from(key: KeyConfig) -> Self {
        match key {
            KeyConfig::ArrowUp => Key::ArrowUp,
            KeyConfig::ArrowRight => Key::ArrowRight,
            KeyConfig::ArrowDown => Key::ArrowDown,
            KeyConfig::ArrowLeft => Key::ArrowLeft,
            KeyConfig::PageUp => Key::PageUp,
            KeyConfig::PageDown => Key::PageDown,
            KeyConfig::Home => Key::Home,
            KeyConfig::End => Key::End,
        }
    }
}

/// Where a pointer step lands on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// The ring position that encodes this value.
    Value { at: f64 },
    /// Raw client coordinates.
    Point { x: f64, y: f64 },
}

impl Target {
    pub fn resolve(&self, range: &ValueRange, bounds: Rect) -> GesturePoint {
        let position = match *self {
            Target::Value { at } => {
                let track = point_on_track(range.value_to_percentage(at));
                bounds.origin + track / VIEWBOX_SIZE * bounds.size
            }
            Target::Point { x, y } => DVec2::new(x, y),
        };
        GesturePoint::new(position, bounds)
    }
}

/// One scripted host input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    PanStart(Target),
    PanMove(Target),
    PanEnd(Target),
    PanCancel,
    Tap(Target),
    Press(Target),
    PressUp(Target),
    KeyDown { key: KeyConfig, handle: HandleConfig },
    KeyUp { key: KeyConfig, handle: HandleConfig },
    /// Fresh state from the backend.
    HostUpdate {
        #[serde(default)]
        value: Option<f64>,
        #[serde(default)]
        low: Option<f64>,
        #[serde(default)]
        high: Option<f64>,
        #[serde(default)]
        current: Option<f64>,
        #[serde(default)]
        disabled: Option<bool>,
    },
}

impl Step {
    /// The gesture this step feeds to the slider, if it is a pointer step.
    pub fn gesture(&self, range: &ValueRange, bounds: Rect) -> Option<GestureEvent> {
        let event = match self {
            Step::PanStart(target) => GestureEvent::PanStart(target.resolve(range, bounds)),
            Step::PanMove(target) => GestureEvent::PanMove(target.resolve(range, bounds)),
            Step::PanEnd(target) => GestureEvent::PanEnd(target.resolve(range, bounds)),
            Step::PanCancel => GestureEvent::PanCancel,
            Step::Tap(target) => GestureEvent::Tap(target.resolve(range, bounds)),
            Step::Press(target) => GestureEvent::Press(target.resolve(range, bounds)),
            Step::PressUp(target) => GestureEvent::PressUp(target.resolve(range, bounds)),
            _ => return None,
        };
        Some(event)
    }
}
