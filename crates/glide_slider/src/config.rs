//! Slider configuration
//!
//! Configuration is immutable input to a slider instance. It can be built
//! in code with the builder methods or loaded from a TOML document; any key
//! left out takes its default.
//!
//! ```rust
//! use glide_slider::SliderConfig;
//!
//! let config = SliderConfig::from_toml_str(
//!     r#"
//!     minimum_value = 0.0
//!     maximum_value = 100.0
//!     step = 10.0
//!     animation_type = "spring"
//!
//!     [animation_config]
//!     tension = 60.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.maximum_value, 100.0);
//! assert_eq!(config.thumb_touch_size.width, 40.0);
//! ```

use glide_animation::{AnimationOverrides, AnimationType, TransitionConfig};
use glide_core::{LayoutDirection, Size};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SliderError};
use crate::mapper::ValueMapper;
use crate::style::SliderStyle;

/// Immutable slider input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Initial value
    pub value: f32,
    pub minimum_value: f32,
    pub maximum_value: f32,
    /// Quantization step; 0 means continuous
    pub step: f32,
    /// Gestures are still claimed but never change the value
    pub disabled: bool,
    pub direction: LayoutDirection,
    /// Hit-test area around the thumb, centered on it
    pub thumb_touch_size: Size,
    /// Render the computed touch area for diagnostics
    pub debug_touch_area: bool,
    /// Animate external value changes instead of jumping
    pub animate_transitions: bool,
    pub animation_type: AnimationType,
    pub animation_config: AnimationOverrides,
    pub style: SliderStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            disabled: false,
            direction: LayoutDirection::Ltr,
            thumb_touch_size: Size::new(40.0, 40.0),
            debug_touch_area: false,
            animate_transitions: false,
            animation_type: AnimationType::Timing,
            animation_config: AnimationOverrides::default(),
            style: SliderStyle::default(),
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Check the range and step
    ///
    /// Sliders never call this themselves; out-of-range configurations are
    /// used as given. Hosts that want to reject them call it up front.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = (self.minimum_value, self.maximum_value);
        if !(max > min) {
            return Err(SliderError::InvalidRange { min, max });
        }
        let span = max - min;
        if !(self.step >= 0.0 && self.step <= span) {
            return Err(SliderError::InvalidStep {
                step: self.step,
                span,
            });
        }
        Ok(())
    }

    /// The transition used for animated external value changes
    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig::resolve(self.animation_type, &self.animation_config)
    }

    pub fn mapper(&self) -> ValueMapper {
        ValueMapper::new(
            self.minimum_value,
            self.maximum_value,
            self.step,
            self.direction,
        )
    }

    /// Set the initial value (default: 0.0)
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set the minimum value (default: 0.0)
    pub fn min(mut self, min: f32) -> Self {
        self.minimum_value = min;
        self
    }

    /// Set the maximum value (default: 1.0)
    pub fn max(mut self, max: f32) -> Self {
        self.maximum_value = max;
        self
    }

    /// Set the step size for discrete values
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn thumb_touch_size(mut self, size: impl Into<Size>) -> Self {
        self.thumb_touch_size = size.into();
        self
    }

    pub fn debug_touch_area(mut self, debug: bool) -> Self {
        self.debug_touch_area = debug;
        self
    }

    pub fn animate_transitions(mut self, animate: bool) -> Self {
        self.animate_transitions = animate;
        self
    }

    pub fn animation_type(mut self, kind: AnimationType) -> Self {
        self.animation_type = kind;
        self
    }

    pub fn animation_config(mut self, overrides: AnimationOverrides) -> Self {
        self.animation_config = overrides;
        self
    }

    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::Easing;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.value, 0.0);
        assert_eq!(config.minimum_value, 0.0);
        assert_eq!(config.maximum_value, 1.0);
        assert_eq!(config.step, 0.0);
        assert!(!config.disabled);
        assert_eq!(config.thumb_touch_size, Size::new(40.0, 40.0));
        assert!(!config.debug_touch_area);
        assert!(!config.animate_transitions);
        assert_eq!(config.animation_type, AnimationType::Timing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = SliderConfig::from_toml_str(
            r##"
            value = 0.5
            direction = "rtl"
            disabled = true
            thumb_touch_size = { width = 48.0, height = 44.0 }
            animate_transitions = true

            [animation_config]
            duration_ms = 300.0
            easing = "linear"

            [style]
            thumb_tint = "#ff0000"
            thumb_image = "thumb.png"
            "##,
        )
        .unwrap();

        assert_eq!(config.value, 0.5);
        assert_eq!(config.direction, LayoutDirection::Rtl);
        assert!(config.disabled);
        assert_eq!(config.thumb_touch_size, Size::new(48.0, 44.0));
        assert_eq!(config.style.thumb_tint.to_hex_string(), "#ff0000ff");
        assert_eq!(config.style.thumb_image.as_deref(), Some("thumb.png"));
        // Untouched style keys keep their defaults
        assert_eq!(config.style.track_height, 4.0);

        match config.transition() {
            TransitionConfig::Timing(p) => {
                assert_eq!(p.duration_ms, 300.0);
                assert_eq!(p.easing, Easing::Linear);
            }
            other => panic!("expected timing, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_errors() {
        let err = SliderConfig::from_toml_str("maximum_value = \"lots\"").unwrap_err();
        assert!(matches!(err, SliderError::Config(_)));

        let err = SliderConfig::from_toml_str("[style]\nthumb_tint = \"red\"").unwrap_err();
        assert!(matches!(err, SliderError::Config(_)));
    }

    #[test]
    fn test_validate() {
        let inverted = SliderConfig::new().min(5.0).max(5.0);
        assert!(matches!(
            inverted.validate(),
            Err(SliderError::InvalidRange { .. })
        ));

        let negative_step = SliderConfig::new().step(-0.1);
        assert!(matches!(
            negative_step.validate(),
            Err(SliderError::InvalidStep { .. })
        ));

        let oversized_step = SliderConfig::new().max(10.0).step(11.0);
        assert!(matches!(
            oversized_step.validate(),
            Err(SliderError::InvalidStep { .. })
        ));

        assert!(SliderConfig::new().max(10.0).step(10.0).validate().is_ok());
    }

    #[test]
    fn test_spring_transition() {
        let config = SliderConfig::new()
            .animation_type(AnimationType::Spring)
            .animation_config(AnimationOverrides {
                friction: Some(10.0),
                ..Default::default()
            });
        match config.transition() {
            TransitionConfig::Spring(p) => {
                assert_eq!(p.friction, 10.0);
                assert_eq!(p.tension, 100.0);
            }
            other => panic!("expected spring, got {other:?}"),
        }
    }
}
