//! Frame-driven transition scheduler
//!
//! The host calls [`FrameScheduler::tick`] (or [`FrameScheduler::advance`]
//! with an explicit frame delta) once per frame; every registered transition
//! steps forward. Components hold a weak [`SchedulerHandle`] and register
//! transitions through it, so dropping the scheduler never leaves a
//! component holding it alive.
//!
//! Finished transitions are NOT removed on tick. They stay readable at their
//! final value until their owner removes them, which lets owners read a
//! settled value without tracking completion themselves.

use std::sync::{Arc, Weak};
use std::time::Instant;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::config::TransitionConfig;
use crate::spring::Spring;
use crate::timing::TimingAnimation;

new_key_type! {
    /// Handle to a registered transition
    pub struct TransitionId;
}

// ============================================================================
// Transition
// ============================================================================

#[derive(Clone, Copy, Debug)]
enum Motion {
    Spring(Spring),
    Timing(TimingAnimation),
}

/// One in-flight value transition (spring or timing) with an optional delay
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    motion: Motion,
    delay_remaining_ms: f32,
}

impl Transition {
    /// Build a transition from `from` to `to`
    ///
    /// `inherited_velocity` replaces the configured initial velocity of a
    /// spring when a running spring is being superseded.
    pub fn new(
        from: f32,
        to: f32,
        config: &TransitionConfig,
        inherited_velocity: Option<f32>,
    ) -> Self {
        let motion = match config {
            TransitionConfig::Spring(params) => {
                let velocity = inherited_velocity.unwrap_or(params.velocity);
                let mut spring = Spring::new(params.spring_config(), from).with_velocity(velocity);
                spring.set_target(to);
                Motion::Spring(spring)
            }
            TransitionConfig::Timing(params) => Motion::Timing(TimingAnimation::new(
                from,
                to,
                params.duration_ms,
                params.easing,
            )),
        };
        Self {
            motion,
            delay_remaining_ms: config.delay_ms().max(0.0),
        }
    }

    pub fn value(&self) -> f32 {
        match &self.motion {
            Motion::Spring(s) => s.value(),
            Motion::Timing(t) => t.value(),
        }
    }

    pub fn target(&self) -> f32 {
        match &self.motion {
            Motion::Spring(s) => s.target(),
            Motion::Timing(t) => t.target(),
        }
    }

    /// Current velocity, or `None` for timing transitions
    pub fn spring_velocity(&self) -> Option<f32> {
        match &self.motion {
            Motion::Spring(s) => Some(s.velocity()),
            Motion::Timing(_) => None,
        }
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_remaining_ms > 0.0
    }

    pub fn is_finished(&self) -> bool {
        if self.is_delayed() {
            return false;
        }
        match &self.motion {
            Motion::Spring(s) => s.is_settled(),
            Motion::Timing(t) => t.is_finished(),
        }
    }

    /// Advance by `dt_ms`, consuming any remaining delay first
    pub fn tick(&mut self, dt_ms: f32) {
        let mut dt_ms = dt_ms.max(0.0);
        if self.delay_remaining_ms > 0.0 {
            let consumed = dt_ms.min(self.delay_remaining_ms);
            self.delay_remaining_ms -= consumed;
            dt_ms -= consumed;
            if dt_ms <= 0.0 {
                return;
            }
        }
        match &mut self.motion {
            Motion::Spring(s) => s.step(dt_ms / 1000.0),
            Motion::Timing(t) => t.tick(dt_ms),
        }
    }
}

// ============================================================================
// Scheduler
// ============================================================================

struct SchedulerInner {
    transitions: SlotMap<TransitionId, Transition>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn step_all(&mut self, dt_ms: f32) -> bool {
        for (_, transition) in self.transitions.iter_mut() {
            transition.tick(dt_ms);
        }
        self.has_active()
    }

    fn has_active(&self) -> bool {
        self.transitions.iter().any(|(_, t)| !t.is_finished())
    }
}

/// Owns all transitions for a UI thread and steps them once per frame
pub struct FrameScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                transitions: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Step all transitions by the wall-clock time since the last frame
    ///
    /// Returns true if any transition still needs frames.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock();
        let now = Instant::now();
        let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
        inner.last_frame = now;
        let active = inner.step_all(dt_ms);
        tracing::trace!(dt_ms, active, "FrameScheduler::tick");
        active
    }

    /// Step all transitions by an explicit frame delta in milliseconds
    pub fn advance(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock();
        inner.last_frame = Instant::now();
        inner.step_all(dt_ms)
    }

    /// Check if any transitions are still running
    pub fn has_active_transitions(&self) -> bool {
        self.inner.lock().has_active()
    }

    /// Number of registered transitions, finished or not
    pub fn transition_count(&self) -> usize {
        self.inner.lock().transitions.len()
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the frame scheduler
///
/// Operations on a handle whose scheduler has been dropped are no-ops that
/// return `None` / `false`.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// A handle that was never attached to a scheduler
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Register a transition and return its ID
    pub fn register(&self, transition: Transition) -> Option<TransitionId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock();
            // Skip the idle gap, but never time owed to running transitions
            if !guard.has_active() {
                guard.last_frame = Instant::now();
            }
            guard.transitions.insert(transition)
        })
    }

    pub fn get(&self, id: TransitionId) -> Option<Transition> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().transitions.get(id).copied())
    }

    pub fn value(&self, id: TransitionId) -> Option<f32> {
        self.get(id).map(|t| t.value())
    }

    /// Returns `true` for finished transitions and for unknown IDs
    pub fn is_finished(&self, id: TransitionId) -> bool {
        self.get(id).map_or(true, |t| t.is_finished())
    }

    pub fn remove(&self, id: TransitionId) -> Option<Transition> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().transitions.remove(id))
    }
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
