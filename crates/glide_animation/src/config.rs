//! Transition configuration
//!
//! A transition is selected by [`AnimationType`] and parameterized by the
//! defaults for that type with any [`AnimationOverrides`] laid on top.
//! Overrides that do not apply to the selected type are ignored.
//!
//! ```rust
//! use glide_animation::{AnimationOverrides, AnimationType, TransitionConfig};
//!
//! let overrides = AnimationOverrides {
//!     tension: Some(40.0),
//!     ..Default::default()
//! };
//! let TransitionConfig::Spring(spring) = TransitionConfig::resolve(AnimationType::Spring, &overrides)
//! else {
//!     unreachable!()
//! };
//! assert_eq!(spring.friction, 7.0);
//! assert_eq!(spring.tension, 40.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::SpringConfig;

/// Which transition model animates external value changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    Spring,
    #[default]
    Timing,
}

/// Damped-spring transition parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub friction: f32,
    pub tension: f32,
    /// Initial velocity in value units per second
    pub velocity: f32,
    pub delay_ms: f32,
    pub overshoot_clamping: bool,
    pub rest_displacement_threshold: f32,
    pub rest_speed_threshold: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            friction: 7.0,
            tension: 100.0,
            velocity: 0.0,
            delay_ms: 0.0,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
        }
    }
}

impl SpringParams {
    pub fn spring_config(&self) -> SpringConfig {
        SpringConfig::from_tension_friction(self.tension, self.friction)
            .with_rest_thresholds(self.rest_displacement_threshold, self.rest_speed_threshold)
            .with_overshoot_clamping(self.overshoot_clamping)
    }
}

/// Time-based transition parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingParams {
    pub duration_ms: f32,
    pub easing: Easing,
    pub delay_ms: f32,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            duration_ms: 150.0,
            easing: Easing::EaseInOut,
            delay_ms: 0.0,
        }
    }
}

/// Partial parameter set merged over the defaults of the selected type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOverrides {
    pub friction: Option<f32>,
    pub tension: Option<f32>,
    pub velocity: Option<f32>,
    pub overshoot_clamping: Option<bool>,
    pub rest_displacement_threshold: Option<f32>,
    pub rest_speed_threshold: Option<f32>,
    pub duration_ms: Option<f32>,
    pub easing: Option<Easing>,
    pub delay_ms: Option<f32>,
}

/// A fully-resolved transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionConfig {
    Spring(SpringParams),
    Timing(TimingParams),
}

impl TransitionConfig {
    /// Defaults for `kind` with `overrides` applied
    pub fn resolve(kind: AnimationType, overrides: &AnimationOverrides) -> Self {
        match kind {
            AnimationType::Spring => {
                let mut p = SpringParams::default();
                if let Some(v) = overrides.friction {
                    p.friction = v;
                }
                if let Some(v) = overrides.tension {
                    p.tension = v;
                }
                if let Some(v) = overrides.velocity {
                    p.velocity = v;
                }
                if let Some(v) = overrides.delay_ms {
                    p.delay_ms = v;
                }
                if let Some(v) = overrides.overshoot_clamping {
                    p.overshoot_clamping = v;
                }
                if let Some(v) = overrides.rest_displacement_threshold {
                    p.rest_displacement_threshold = v;
                }
                if let Some(v) = overrides.rest_speed_threshold {
                    p.rest_speed_threshold = v;
                }
                TransitionConfig::Spring(p)
            }
            AnimationType::Timing => {
                let mut p = TimingParams::default();
                if let Some(v) = overrides.duration_ms {
                    p.duration_ms = v;
                }
                if let Some(v) = overrides.easing {
                    p.easing = v;
                }
                if let Some(v) = overrides.delay_ms {
                    p.delay_ms = v;
                }
                TransitionConfig::Timing(p)
            }
        }
    }

    pub fn kind(&self) -> AnimationType {
        match self {
            TransitionConfig::Spring(_) => AnimationType::Spring,
            TransitionConfig::Timing(_) => AnimationType::Timing,
        }
    }

    pub fn delay_ms(&self) -> f32 {
        match self {
            TransitionConfig::Spring(p) => p.delay_ms,
            TransitionConfig::Timing(p) => p.delay_ms,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        TransitionConfig::Timing(TimingParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spring = SpringParams::default();
        assert_eq!(spring.friction, 7.0);
        assert_eq!(spring.tension, 100.0);

        let timing = TimingParams::default();
        assert_eq!(timing.duration_ms, 150.0);
        assert_eq!(timing.easing, Easing::EaseInOut);
        assert_eq!(timing.delay_ms, 0.0);

        assert_eq!(TransitionConfig::default().kind(), AnimationType::Timing);
    }

    #[test]
    fn test_overrides_only_touch_their_type() {
        let overrides = AnimationOverrides {
            duration_ms: Some(300.0),
            friction: Some(12.0),
            ..Default::default()
        };

        match TransitionConfig::resolve(AnimationType::Timing, &overrides) {
            TransitionConfig::Timing(p) => {
                assert_eq!(p.duration_ms, 300.0);
                assert_eq!(p.easing, Easing::EaseInOut);
            }
            other => panic!("expected timing, got {other:?}"),
        }

        match TransitionConfig::resolve(AnimationType::Spring, &overrides) {
            TransitionConfig::Spring(p) => {
                assert_eq!(p.friction, 12.0);
                assert_eq!(p.tension, 100.0);
            }
            other => panic!("expected spring, got {other:?}"),
        }
    }

    #[test]
    fn test_delay_applies_to_both() {
        let overrides = AnimationOverrides {
            delay_ms: Some(40.0),
            ..Default::default()
        };
        assert_eq!(
            TransitionConfig::resolve(AnimationType::Spring, &overrides).delay_ms(),
            40.0
        );
        assert_eq!(
            TransitionConfig::resolve(AnimationType::Timing, &overrides).delay_ms(),
            40.0
        );
    }

    #[test]
    fn test_overrides_from_toml() {
        let overrides: AnimationOverrides = toml::from_str(
            r#"
            duration_ms = 250.0
            easing = { cubic_bezier = [0.4, 0.0, 0.2, 1.0] }
            "#,
        )
        .unwrap();
        assert_eq!(overrides.duration_ms, Some(250.0));
        assert_eq!(
            overrides.easing,
            Some(Easing::CubicBezier(0.4, 0.0, 0.2, 1.0))
        );
        assert_eq!(overrides.friction, None);

        let overrides: AnimationOverrides = toml::from_str(r#"easing = "linear""#).unwrap();
        assert_eq!(overrides.easing, Some(Easing::Linear));
    }
}
