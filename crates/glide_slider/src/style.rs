//! Default slider appearance
//!
//! Purely visual. Nothing here feeds the value mapping or hit testing; those
//! use the sizes the layout engine reports back.

use glide_core::{Color, Size};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default track thickness
pub const TRACK_SIZE: f32 = 4.0;

/// Default thumb diameter
pub const THUMB_SIZE: f32 = 20.0;

/// Default container height
pub const CONTAINER_HEIGHT: f32 = 40.0;

/// Visual style for a slider
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Track color on the minimum side of the thumb
    pub minimum_track_tint: Color,
    /// Track color on the maximum side of the thumb
    pub maximum_track_tint: Color,
    pub thumb_tint: Color,
    pub track_height: f32,
    pub thumb_size: Size,
    pub container_height: f32,
    /// Image drawn inside the thumb
    pub thumb_image: Option<String>,
    /// Fill of the touch-rectangle overlay when debugging touch areas
    pub debug_touch_rect_color: Color,
    /// Fill of the whole touch area when debugging touch areas
    pub debug_touch_area_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            minimum_track_tint: Color::from_hex(0x3f3f3f),
            maximum_track_tint: Color::from_hex(0xb3b3b3),
            thumb_tint: Color::from_hex(0x343434),
            track_height: TRACK_SIZE,
            thumb_size: Size::new(THUMB_SIZE, THUMB_SIZE),
            container_height: CONTAINER_HEIGHT,
            thumb_image: None,
            debug_touch_rect_color: Color::GREEN.with_alpha(0.5),
            debug_touch_area_color: Color::ORANGE.with_alpha(0.5),
        }
    }
}

impl SliderStyle {
    /// Fully rounded track ends
    pub fn track_radius(&self) -> f32 {
        self.track_height / 2.0
    }

    /// Circular thumb
    pub fn thumb_radius(&self) -> f32 {
        self.thumb_size.width / 2.0
    }

    /// Apply the three tint colors from `#rrggbb` strings
    pub fn with_tints(mut self, minimum_track: &str, maximum_track: &str, thumb: &str) -> Result<Self> {
        self.minimum_track_tint = minimum_track.parse()?;
        self.maximum_track_tint = maximum_track.parse()?;
        self.thumb_tint = thumb.parse()?;
        Ok(self)
    }

    pub fn minimum_track_tint(mut self, color: Color) -> Self {
        self.minimum_track_tint = color;
        self
    }

    pub fn maximum_track_tint(mut self, color: Color) -> Self {
        self.maximum_track_tint = color;
        self
    }

    pub fn thumb_tint(mut self, color: Color) -> Self {
        self.thumb_tint = color;
        self
    }

    pub fn thumb_image(mut self, source: impl Into<String>) -> Self {
        self.thumb_image = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SliderError;

    #[test]
    fn test_default_style() {
        let style = SliderStyle::default();
        assert_eq!(style.track_height, 4.0);
        assert_eq!(style.track_radius(), 2.0);
        assert_eq!(style.thumb_size, Size::new(20.0, 20.0));
        assert_eq!(style.thumb_radius(), 10.0);
        assert_eq!(style.container_height, 40.0);
        assert_eq!(style.thumb_tint.to_hex_string(), "#343434ff");
        assert_eq!(style.debug_touch_rect_color.a, 0.5);
    }

    #[test]
    fn test_with_tints() {
        let style = SliderStyle::default()
            .with_tints("#ff0000", "#00ff00", "#0000ff")
            .unwrap();
        assert_eq!(style.minimum_track_tint, Color::from_hex(0xff0000));
        assert_eq!(style.maximum_track_tint, Color::from_hex(0x00ff00));
        assert_eq!(style.thumb_tint, Color::from_hex(0x0000ff));

        let err = SliderStyle::default()
            .with_tints("#ff0000", "green", "#0000ff")
            .unwrap_err();
        assert!(matches!(err, SliderError::Color(_)));
    }
}
