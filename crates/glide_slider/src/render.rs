//! Render description
//!
//! A [`SliderFrame`] is a snapshot of everything the host needs to draw the
//! slider for the current value and layout. Rects are in container
//! coordinates unless noted otherwise.

use glide_animation::{AnimatedValue, Interpolation};
use glide_core::{Color, LayoutDirection, Rect, Size};

use crate::config::SliderConfig;
use crate::measure::MeasurementTracker;
use crate::touch_area::{EdgeInsets, TouchArea};

/// A track segment
#[derive(Clone, Debug, PartialEq)]
pub struct TrackFrame {
    pub rect: Rect,
    pub color: Color,
    pub corner_radius: f32,
    pub opacity: f32,
}

/// The thumb, laid out at the container's leading edge and translated
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbFrame {
    pub translate_x: f32,
    pub size: Size,
    pub color: Color,
    pub corner_radius: f32,
    pub opacity: f32,
    pub image: Option<String>,
}

/// The view that receives touches
#[derive(Clone, Debug, PartialEq)]
pub struct TouchAreaFrame {
    pub margins: EdgeInsets,
    /// Only set when debugging touch areas
    pub fill: Option<Color>,
}

/// Overlay showing the thumb hit-test rectangle, in touch-area coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct DebugOverlay {
    pub rect: Rect,
    pub color: Color,
}

/// Everything needed to draw one slider frame
#[derive(Clone, Debug, PartialEq)]
pub struct SliderFrame {
    pub container_height: f32,
    pub maximum_track: TrackFrame,
    pub minimum_track: TrackFrame,
    pub thumb: ThumbFrame,
    pub touch_area: TouchAreaFrame,
    pub debug_overlay: Option<DebugOverlay>,
}

impl SliderFrame {
    /// Describe the slider for `value`
    ///
    /// Until every part has been measured the value-dependent parts are
    /// drawn fully transparent and laid out against zero sizes. The maximum
    /// track always spans the container once it is known.
    pub fn build<V>(
        config: &SliderConfig,
        tracker: &MeasurementTracker,
        touch_area: Option<&TouchArea>,
        value: &V,
    ) -> Self
    where
        V: AnimatedValue + ?Sized,
    {
        let style = &config.style;
        let ready = tracker.is_ready();
        let measured = |size: Option<Size>| match size {
            Some(size) if ready => size,
            _ => Size::ZERO,
        };
        let container = measured(tracker.container());
        let thumb = measured(tracker.thumb());
        let length = container.width - thumb.width;
        let value_opacity = if ready { 1.0 } else { 0.0 };

        let track_y = (container.height - style.track_height) / 2.0;
        // The maximum track spans whatever container is known, ready or not
        let full = tracker.container().unwrap_or_default();
        let maximum_track = TrackFrame {
            rect: Rect::new(
                0.0,
                (full.height - style.track_height) / 2.0,
                full.width,
                style.track_height,
            ),
            color: style.maximum_track_tint,
            corner_radius: style.track_radius(),
            opacity: 1.0,
        };

        let fill = Interpolation::new(
            [config.minimum_value, config.maximum_value],
            [0.0, length],
        );
        let minimum_width = value.interpolate(&fill) + thumb.width / 2.0;
        let minimum_x = match config.direction {
            LayoutDirection::Ltr => 0.0,
            LayoutDirection::Rtl => container.width - minimum_width,
        };
        let minimum_track = TrackFrame {
            rect: Rect::new(minimum_x, track_y, minimum_width, style.track_height),
            color: style.minimum_track_tint,
            corner_radius: style.track_radius(),
            opacity: value_opacity,
        };

        let thumb_frame = ThumbFrame {
            translate_x: config.mapper().value_to_pixel_offset(value.get(), length),
            size: style.thumb_size,
            color: style.thumb_tint,
            corner_radius: style.thumb_radius(),
            opacity: value_opacity,
            image: style.thumb_image.clone(),
        };

        let touch_area_frame = TouchAreaFrame {
            margins: touch_area.map(TouchArea::margins).unwrap_or(EdgeInsets::ZERO),
            fill: config
                .debug_touch_area
                .then_some(style.debug_touch_area_color),
        };

        let debug_overlay = touch_area
            .filter(|_| config.debug_touch_area)
            .map(|area| DebugOverlay {
                rect: area.thumb_rect,
                color: style.debug_touch_rect_color,
            });

        Self {
            container_height: if ready {
                container.height
            } else {
                style.container_height
            },
            maximum_track,
            minimum_track,
            thumb: thumb_frame,
            touch_area: touch_area_frame,
            debug_overlay,
        }
    }

    /// Whether the value-dependent parts are visible
    pub fn is_visible(&self) -> bool {
        self.thumb.opacity > 0.0
    }
}
