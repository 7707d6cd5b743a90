//! Slider component instance
//!
//! A [`Slider`] owns every piece of per-instance state: the measured
//! sizes, the gesture phase, the pan recognizer, and the animated value.
//! The host feeds it layout callbacks, touch or pan events, and external
//! value changes, and reads back a [`SliderFrame`] to draw.
//!
//! # Example
//!
//! ```rust
//! use glide_core::{PanDelta, PanEvent, Point, Size};
//! use glide_slider::{MeasureTarget, Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::new().max(100.0).step(10.0))
//!     .on_value_change(|v| println!("value: {v}"));
//!
//! slider.measure(MeasureTarget::Container, Size::new(200.0, 40.0));
//! slider.measure(MeasureTarget::Track, Size::new(200.0, 4.0));
//! slider.measure(MeasureTarget::Thumb, Size::new(20.0, 20.0));
//!
//! slider.handle_pan(PanEvent::Down { location: Point::new(20.0, 20.0) });
//! slider.handle_pan(PanEvent::Move(PanDelta::new(95.0, 0.0)));
//! assert_eq!(slider.value(), 50.0);
//! ```

use std::sync::Arc;

use glide_animation::{AnimatedValue, ImmediateValue, ScheduledValue, SchedulerHandle};
use glide_core::{PanEvent, PanRecognizer, Point, Rect, Size, TouchEvent};
use smallvec::SmallVec;

use crate::config::SliderConfig;
use crate::gesture::{GestureContext, GestureController, SliderEvent};
use crate::measure::{MeasureOutcome, MeasureTarget, MeasurementTracker};
use crate::render::SliderFrame;
use crate::touch_area::TouchArea;

/// Callback receiving the slider value
pub type ValueCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// A single slider instance
pub struct Slider<V: AnimatedValue = ImmediateValue> {
    config: SliderConfig,
    value: V,
    tracker: MeasurementTracker,
    gesture: GestureController,
    pan: PanRecognizer,
    /// Window-space origin of the container
    container_origin: Point,
    on_value_change: Option<ValueCallback>,
    on_sliding_start: Option<ValueCallback>,
    on_sliding_complete: Option<ValueCallback>,
}

impl Slider<ImmediateValue> {
    /// Create a slider whose external value changes apply instantly
    pub fn new(config: SliderConfig) -> Self {
        let initial = config.mapper().clamp(config.value);
        Self::from_parts(config, ImmediateValue::new(initial))
    }
}

impl Slider<ScheduledValue> {
    /// Create a slider whose transitions run on a frame scheduler
    pub fn with_scheduler(config: SliderConfig, scheduler: SchedulerHandle) -> Self {
        let initial = config.mapper().clamp(config.value);
        Self::from_parts(config, ScheduledValue::new(scheduler, initial))
    }
}

impl<V: AnimatedValue> Slider<V> {
    /// Create a slider around an existing value holder
    ///
    /// The holder's current value is used as is; `config.value` is ignored.
    pub fn from_parts(config: SliderConfig, value: V) -> Self {
        tracing::debug!(
            value = value.get(),
            min = config.minimum_value,
            max = config.maximum_value,
            step = config.step,
            "Slider: created"
        );
        Self {
            config,
            value,
            tracker: MeasurementTracker::new(),
            gesture: GestureController::new(),
            pan: PanRecognizer::default(),
            container_origin: Point::ZERO,
            on_value_change: None,
            on_sliding_start: None,
            on_sliding_complete: None,
        }
    }

    /// Set the callback fired for every value change during a drag
    pub fn on_value_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = Some(Arc::new(callback));
        self
    }

    /// Set the callback fired when a drag is granted
    pub fn on_sliding_start<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_sliding_start = Some(Arc::new(callback));
        self
    }

    /// Set the callback fired when a drag ends
    pub fn on_sliding_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_sliding_complete = Some(Arc::new(callback));
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current value, including any in-flight transition
    pub fn value(&self) -> f32 {
        self.value.get()
    }

    pub fn animated_value(&self) -> &V {
        &self.value
    }

    pub fn is_ready(&self) -> bool {
        self.tracker.is_ready()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn measurements(&self) -> &MeasurementTracker {
        &self.tracker
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Record a layout measurement for one of the slider's parts
    pub fn measure(&mut self, target: MeasureTarget, size: Size) -> MeasureOutcome {
        let outcome = self.tracker.record(target, size);
        if outcome.is_changed() {
            self.sync_pan_origin();
        }
        outcome
    }

    /// Set the container's window-space origin, used by [`Slider::handle_touch`]
    pub fn set_container_origin(&mut self, origin: Point) {
        self.container_origin = origin;
        self.sync_pan_origin();
    }

    fn sync_pan_origin(&mut self) {
        let local = self
            .touch_overflow()
            .map(|overflow| Point::new(-overflow.width / 2.0, -overflow.height / 2.0))
            .unwrap_or(Point::ZERO);
        self.pan.set_origin(Point::new(
            self.container_origin.x + local.x,
            self.container_origin.y + local.y,
        ));
    }

    /// Thumb offset from the container's leading edge; 0 until measured
    pub fn thumb_offset(&self) -> f32 {
        self.tracker
            .track_length()
            .map(|length| {
                self.config
                    .mapper()
                    .value_to_pixel_offset(self.value.get(), length)
            })
            .unwrap_or(0.0)
    }

    /// Touch area for the current layout and value; `None` until measured
    pub fn touch_area(&self) -> Option<TouchArea> {
        let container = self.tracker.container()?;
        let thumb = self.tracker.thumb()?;
        if !self.tracker.is_ready() {
            return None;
        }
        Some(TouchArea::resolve(
            self.config.thumb_touch_size,
            thumb,
            container,
            self.thumb_offset(),
        ))
    }

    /// How far the touch area extends past the container; `None` until measured
    pub fn touch_overflow(&self) -> Option<Size> {
        self.touch_area().map(|area| area.overflow)
    }

    /// Thumb hit-test rectangle in touch-area coordinates
    pub fn thumb_touch_rect(&self) -> Option<Rect> {
        self.touch_area().map(|area| area.thumb_rect)
    }

    /// Describe the slider for drawing
    pub fn frame(&self) -> SliderFrame {
        SliderFrame::build(
            &self.config,
            &self.tracker,
            self.touch_area().as_ref(),
            &self.value,
        )
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    fn gesture_context(&self) -> GestureContext {
        GestureContext {
            mapper: self.config.mapper(),
            track_length: self.tracker.track_length(),
            touch_area: self.touch_area(),
            disabled: self.config.disabled,
        }
    }

    /// Apply one pan event, firing the matching callback
    pub fn handle_pan(&mut self, event: PanEvent) -> Option<SliderEvent> {
        let ctx = self.gesture_context();
        let emitted = self.gesture.handle(event, &ctx, &mut self.value)?;
        self.dispatch(emitted);
        Some(emitted)
    }

    /// Apply pan events in delivery order
    pub fn handle_pan_batch<I>(&mut self, events: I) -> SmallVec<[SliderEvent; 4]>
    where
        I: IntoIterator<Item = PanEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.handle_pan(event))
            .collect()
    }

    /// Apply a raw touch event
    ///
    /// Touch-downs that miss the thumb release the pointer straight away so
    /// a later touch can still grab the thumb.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Option<SliderEvent> {
        let pan = self.pan.handle(event)?;
        let emitted = self.handle_pan(pan);
        if matches!(pan, PanEvent::Down { .. }) && !self.gesture.is_dragging() {
            self.pan.reset();
        }
        emitted
    }

    fn dispatch(&self, event: SliderEvent) {
        let callback = match event {
            SliderEvent::SlidingStart(_) => &self.on_sliding_start,
            SliderEvent::ValueChange(_) => &self.on_value_change,
            SliderEvent::SlidingComplete(_) => &self.on_sliding_complete,
        };
        if let Some(callback) = callback {
            callback(event.value());
        }
    }

    // ========================================================================
    // External input
    // ========================================================================

    /// Apply a value set from outside the slider
    ///
    /// The value is clamped but not quantized. It animates with the
    /// configured transition when `animate_transitions` is set and jumps
    /// otherwise. No callbacks fire.
    pub fn set_value(&mut self, value: f32) {
        let target = self.config.mapper().clamp(value);
        if self.config.animate_transitions {
            self.value.animate_to(target, &self.config.transition());
        } else {
            self.value.set(target);
        }
        tracing::debug!(
            target,
            animated = self.config.animate_transitions,
            "Slider: external value set"
        );
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }
}

impl<V: AnimatedValue + std::fmt::Debug> std::fmt::Debug for Slider<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("tracker", &self.tracker)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}
