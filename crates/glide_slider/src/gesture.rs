//! Drag gesture state machine
//!
//! ```text
//!          Down on thumb touch rect
//!   Idle ─────────────────────────────▶ Dragging
//!    ▲                                    │  Move: set value, ValueChange
//!    └──────── Release / Terminate ◀──────┘
//!                SlidingComplete
//! ```
//!
//! Only a touch-down that lands inside the thumb's touch rectangle claims
//! the gesture. Once claimed it is never handed back voluntarily; the
//! gesture ends on release or when the host terminates it.

use glide_animation::AnimatedValue;
use glide_core::{PanDelta, PanEvent, Point};

use crate::mapper::ValueMapper;
use crate::touch_area::TouchArea;

/// Lifecycle notifications produced by the gesture controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// The gesture was granted; carries the value at grant time
    SlidingStart(f32),
    /// The value changed during a drag
    ValueChange(f32),
    /// The gesture ended; carries the final value
    SlidingComplete(f32),
}

impl SliderEvent {
    pub fn value(&self) -> f32 {
        match *self {
            SliderEvent::SlidingStart(v)
            | SliderEvent::ValueChange(v)
            | SliderEvent::SlidingComplete(v) => v,
        }
    }
}

/// State captured when a drag is granted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Thumb offset at grant time
    pub start_offset: f32,
}

impl DragSession {
    fn offset_for(&self, delta: PanDelta) -> f32 {
        self.start_offset + delta.dx
    }
}

/// Controller phase
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Everything the controller reads from the slider for one event
#[derive(Clone, Copy, Debug)]
pub struct GestureContext {
    pub mapper: ValueMapper,
    /// `None` until all parts have been measured
    pub track_length: Option<f32>,
    /// `None` until all parts have been measured
    pub touch_area: Option<TouchArea>,
    pub disabled: bool,
}

impl GestureContext {
    fn thumb_offset(&self, value: f32) -> f32 {
        self.track_length
            .map(|length| self.mapper.value_to_pixel_offset(value, length))
            .unwrap_or(0.0)
    }

    fn value_at(&self, offset: f32) -> f32 {
        self.mapper
            .pixel_offset_to_value(offset, self.track_length.unwrap_or(0.0))
    }

    /// Whether a touch-down at `location` lands on the thumb
    pub fn hit_test(&self, location: Point) -> bool {
        self.touch_area
            .map(|area| area.hits_thumb(location))
            .unwrap_or(false)
    }
}

/// Idle/Dragging state machine driving the slider value from pan events
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureController {
    phase: GesturePhase,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    /// Moves never claim the gesture; only a touch-down on the thumb does
    pub fn should_claim_on_move(&self) -> bool {
        false
    }

    /// Whether to hand the gesture to another responder that asks for it
    pub fn allow_termination(&self) -> bool {
        false
    }

    /// Apply one pan event
    ///
    /// Drag updates are written to `value` immediately, never animated.
    pub fn handle<V>(
        &mut self,
        event: PanEvent,
        ctx: &GestureContext,
        value: &mut V,
    ) -> Option<SliderEvent>
    where
        V: AnimatedValue + ?Sized,
    {
        match (self.phase, event) {
            (GesturePhase::Idle, PanEvent::Down { location }) => {
                if !ctx.hit_test(location) {
                    tracing::trace!(x = location.x, y = location.y, "touch missed thumb");
                    return None;
                }
                let current = value.get();
                let start_offset = ctx.thumb_offset(current);
                self.phase = GesturePhase::Dragging(DragSession { start_offset });
                tracing::debug!(value = current, start_offset, "GestureController: drag granted");
                Some(SliderEvent::SlidingStart(current))
            }
            (GesturePhase::Idle, _) => None,

            (GesturePhase::Dragging(_), PanEvent::Down { .. }) => {
                tracing::trace!("GestureController: ignoring touch-down while dragging");
                None
            }
            (GesturePhase::Dragging(session), PanEvent::Move(delta)) => {
                if ctx.disabled {
                    return None;
                }
                let next = ctx.value_at(session.offset_for(delta));
                value.set(next);
                tracing::trace!(dx = delta.dx, value = next, "drag move");
                Some(SliderEvent::ValueChange(next))
            }
            (
                GesturePhase::Dragging(session),
                PanEvent::Release(delta) | PanEvent::Terminate(delta),
            ) => {
                self.phase = GesturePhase::Idle;
                if ctx.disabled {
                    tracing::debug!("GestureController: drag ended while disabled");
                    return None;
                }
                let next = ctx.value_at(session.offset_for(delta));
                value.set(next);
                tracing::debug!(value = next, "GestureController: drag complete");
                Some(SliderEvent::SlidingComplete(next))
            }
        }
    }
}
