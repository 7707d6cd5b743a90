//! Touch input
//!
//! Raw touch events arrive in window coordinates, one per pointer. Widgets
//! that track a drag want something simpler: a touch-down location relative
//! to their own touch area, then cumulative displacement until the pointer
//! lifts. [`PanRecognizer`] performs that reduction for a single pointer.

use crate::geometry::Point;

// ============================================================================
// Touch Events
// ============================================================================

/// Touch events for touchscreens
#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// A touch started
    Started {
        /// Unique identifier for this touch
        id: u64,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// A touch moved
    Moved {
        /// Unique identifier for this touch
        id: u64,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// A touch ended
    Ended {
        /// Unique identifier for this touch
        id: u64,
        /// X position when ended
        x: f32,
        /// Y position when ended
        y: f32,
    },
    /// A touch was cancelled (e.g., by system gesture)
    Cancelled {
        /// Unique identifier for this touch
        id: u64,
    },
}

impl TouchEvent {
    /// Get the touch ID
    pub fn id(&self) -> u64 {
        match self {
            TouchEvent::Started { id, .. } => *id,
            TouchEvent::Moved { id, .. } => *id,
            TouchEvent::Ended { id, .. } => *id,
            TouchEvent::Cancelled { id } => *id,
        }
    }

    /// Get the position (returns None for Cancelled)
    pub fn position(&self) -> Option<Point> {
        match self {
            TouchEvent::Started { x, y, .. } => Some(Point::new(*x, *y)),
            TouchEvent::Moved { x, y, .. } => Some(Point::new(*x, *y)),
            TouchEvent::Ended { x, y, .. } => Some(Point::new(*x, *y)),
            TouchEvent::Cancelled { .. } => None,
        }
    }
}

// ============================================================================
// Pan Events
// ============================================================================

/// Cumulative displacement since the touch-down
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PanDelta {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Pan gesture lifecycle as seen by a single widget
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    /// Pointer went down; `location` is relative to the widget's touch area
    Down { location: Point },
    /// Pointer moved; delta is cumulative from the touch-down
    Move(PanDelta),
    /// Pointer lifted
    Release(PanDelta),
    /// The host forcibly ended the gesture (system gesture, view removal)
    Terminate(PanDelta),
}

#[derive(Clone, Copy, Debug)]
struct ActiveTouch {
    id: u64,
    start: Point,
    last: Point,
}

impl ActiveTouch {
    fn delta_to(&self, p: Point) -> PanDelta {
        PanDelta::new(p.x - self.start.x, p.y - self.start.y)
    }
}

/// Reduces raw touch events to a single-pointer pan stream
///
/// The first pointer to go down is tracked until it ends or is cancelled;
/// any other pointers are ignored while it is active.
#[derive(Clone, Debug, Default)]
pub struct PanRecognizer {
    /// Window-space origin of the touch area
    origin: Point,
    active: Option<ActiveTouch>,
}

impl PanRecognizer {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            active: None,
        }
    }

    /// Update the touch area's window-space origin
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Whether a pointer is currently being tracked
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Forget the tracked pointer without emitting anything
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Feed a raw touch event, returning the pan event it produces
    pub fn handle(&mut self, event: &TouchEvent) -> Option<PanEvent> {
        match *event {
            TouchEvent::Started { id, x, y } => {
                if let Some(active) = self.active {
                    tracing::trace!(
                        tracked = active.id,
                        ignored = id,
                        "PanRecognizer: ignoring secondary touch"
                    );
                    return None;
                }
                let start = Point::new(x, y);
                self.active = Some(ActiveTouch {
                    id,
                    start,
                    last: start,
                });
                Some(PanEvent::Down {
                    location: Point::new(x - self.origin.x, y - self.origin.y),
                })
            }
            TouchEvent::Moved { id, x, y } => {
                let active = self.active.as_mut().filter(|a| a.id == id)?;
                active.last = Point::new(x, y);
                Some(PanEvent::Move(active.delta_to(active.last)))
            }
            TouchEvent::Ended { id, x, y } => {
                let active = self.active.filter(|a| a.id == id)?;
                self.active = None;
                Some(PanEvent::Release(active.delta_to(Point::new(x, y))))
            }
            TouchEvent::Cancelled { id } => {
                let active = self.active.filter(|a| a.id == id)?;
                self.active = None;
                Some(PanEvent::Terminate(active.delta_to(active.last)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_location_is_relative_to_origin() {
        let mut pan = PanRecognizer::new(Point::new(100.0, 50.0));
        let event = pan.handle(&TouchEvent::Started {
            id: 1,
            x: 130.0,
            y: 70.0,
        });
        assert_eq!(
            event,
            Some(PanEvent::Down {
                location: Point::new(30.0, 20.0)
            })
        );
        assert!(pan.is_tracking());
    }

    #[test]
    fn test_pan_deltas_are_cumulative() {
        let mut pan = PanRecognizer::default();
        pan.handle(&TouchEvent::Started { id: 7, x: 10.0, y: 10.0 });

        let moved = pan.handle(&TouchEvent::Moved { id: 7, x: 15.0, y: 12.0 });
        assert_eq!(moved, Some(PanEvent::Move(PanDelta::new(5.0, 2.0))));

        let moved = pan.handle(&TouchEvent::Moved { id: 7, x: 40.0, y: 8.0 });
        assert_eq!(moved, Some(PanEvent::Move(PanDelta::new(30.0, -2.0))));

        let ended = pan.handle(&TouchEvent::Ended { id: 7, x: 45.0, y: 10.0 });
        assert_eq!(ended, Some(PanEvent::Release(PanDelta::new(35.0, 0.0))));
        assert!(!pan.is_tracking());
    }

    #[test]
    fn test_pan_ignores_secondary_touches() {
        let mut pan = PanRecognizer::default();
        pan.handle(&TouchEvent::Started { id: 1, x: 0.0, y: 0.0 });

        assert_eq!(pan.handle(&TouchEvent::Started { id: 2, x: 5.0, y: 5.0 }), None);
        assert_eq!(pan.handle(&TouchEvent::Moved { id: 2, x: 9.0, y: 5.0 }), None);
        assert_eq!(pan.handle(&TouchEvent::Ended { id: 2, x: 9.0, y: 5.0 }), None);
        assert!(pan.is_tracking());
    }

    #[test]
    fn test_pan_cancel_uses_last_position() {
        let mut pan = PanRecognizer::default();
        pan.handle(&TouchEvent::Started { id: 3, x: 0.0, y: 0.0 });
        pan.handle(&TouchEvent::Moved { id: 3, x: 12.0, y: 0.0 });

        let cancelled = pan.handle(&TouchEvent::Cancelled { id: 3 });
        assert_eq!(cancelled, Some(PanEvent::Terminate(PanDelta::new(12.0, 0.0))));
        assert!(!pan.is_tracking());
    }

    #[test]
    fn test_touch_event_accessors() {
        let e = TouchEvent::Moved { id: 4, x: 1.0, y: 2.0 };
        assert_eq!(e.id(), 4);
        assert_eq!(e.position(), Some(Point::new(1.0, 2.0)));
        assert_eq!(TouchEvent::Cancelled { id: 4 }.position(), None);
    }
}
