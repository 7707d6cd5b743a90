//! Animatable value holders
//!
//! [`AnimatedValue`] is the seam between widget logic and the animation
//! engine: widgets read the current value synchronously, write it
//! immediately while tracking a pointer, and request a transition when the
//! value changes from outside.
//!
//! Two implementations are provided:
//!
//! - [`ImmediateValue`] applies every transition instantly. Use it in tests
//!   and anywhere frames are not being produced.
//! - [`ScheduledValue`] registers transitions with a [`FrameScheduler`]
//!   and reads its value back from there.
//!
//! [`FrameScheduler`]: crate::scheduler::FrameScheduler

use crate::config::TransitionConfig;
use crate::scheduler::{SchedulerHandle, Transition, TransitionId};

/// Linear mapping from an input range to an output range
///
/// Values outside the input range extrapolate; nothing is clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    pub input: [f32; 2],
    pub output: [f32; 2],
}

impl Interpolation {
    pub const fn new(input: [f32; 2], output: [f32; 2]) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f32) -> f32 {
        let [in_lo, in_hi] = self.input;
        let [out_lo, out_hi] = self.output;
        let span = in_hi - in_lo;
        if span == 0.0 {
            return out_lo;
        }
        out_lo + (value - in_lo) / span * (out_hi - out_lo)
    }
}

/// A numeric cell that can be read, written, or transitioned
pub trait AnimatedValue {
    /// Current value, including any in-flight transition
    fn get(&self) -> f32;

    /// Set the value immediately, cancelling any in-flight transition
    fn set(&mut self, value: f32);

    /// Transition to `target`, superseding any in-flight transition
    ///
    /// Fire-and-forget: returns as soon as the transition is started.
    fn animate_to(&mut self, target: f32, transition: &TransitionConfig);

    /// Whether a transition is still running
    fn is_animating(&self) -> bool {
        false
    }

    /// Map the current value through `mapping`
    fn interpolate(&self, mapping: &Interpolation) -> f32 {
        mapping.map(self.get())
    }
}

// ============================================================================
// Immediate Value
// ============================================================================

/// Value holder whose transitions complete instantly
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImmediateValue {
    value: f32,
}

impl ImmediateValue {
    pub fn new(initial: f32) -> Self {
        Self { value: initial }
    }
}

impl AnimatedValue for ImmediateValue {
    fn get(&self) -> f32 {
        self.value
    }

    fn set(&mut self, value: f32) {
        self.value = value;
    }

    fn animate_to(&mut self, target: f32, _transition: &TransitionConfig) {
        self.value = target;
    }
}

// ============================================================================
// Scheduled Value
// ============================================================================

/// Value holder driven by the host's frame scheduler
///
/// At most one transition is registered at a time. Starting another removes
/// the previous one, starting the new transition from wherever the old one
/// had reached (and, spring to spring, at its current velocity).
pub struct ScheduledValue {
    handle: SchedulerHandle,
    transition: Option<TransitionId>,
    /// Value when no transition is registered
    current: f32,
    /// Target of the last request
    target: f32,
}

impl ScheduledValue {
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        Self {
            handle,
            transition: None,
            current: initial,
            target: initial,
        }
    }

    /// Target of the most recent `set` or `animate_to`
    pub fn target(&self) -> f32 {
        self.target
    }

    fn cancel(&mut self) -> Option<Transition> {
        self.transition
            .take()
            .and_then(|id| self.handle.remove(id))
    }
}

impl AnimatedValue for ScheduledValue {
    fn get(&self) -> f32 {
        match self.transition {
            // A transition removed behind our back counts as having arrived
            Some(id) => self.handle.value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    fn set(&mut self, value: f32) {
        self.cancel();
        self.current = value;
        self.target = value;
    }

    fn animate_to(&mut self, target: f32, transition: &TransitionConfig) {
        let from = self.get();
        let previous = self.cancel();
        if previous.is_some() {
            tracing::debug!(from, target, "ScheduledValue: superseding running transition");
        }

        let inherited_velocity = match transition {
            TransitionConfig::Spring(_) => previous.and_then(|p| p.spring_velocity()),
            TransitionConfig::Timing(_) => None,
        };

        self.current = from;
        self.target = target;

        match self
            .handle
            .register(Transition::new(from, target, transition, inherited_velocity))
        {
            Some(id) => {
                tracing::debug!(from, target, kind = ?transition.kind(), "ScheduledValue: transition started");
                self.transition = Some(id);
            }
            None => {
                tracing::debug!(target, "ScheduledValue: scheduler gone, applying immediately");
                self.current = target;
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.transition
            .map(|id| !self.handle.is_finished(id))
            .unwrap_or(false)
    }
}

impl Drop for ScheduledValue {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ScheduledValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledValue")
            .field("value", &self.get())
            .field("target", &self.target)
            .field("animating", &self.is_animating())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SpringParams, TimingParams};
    use crate::easing::Easing;
    use crate::scheduler::FrameScheduler;

    fn linear(duration_ms: f32) -> TransitionConfig {
        TransitionConfig::Timing(TimingParams {
            duration_ms,
            easing: Easing::Linear,
            delay_ms: 0.0,
        })
    }

    #[test]
    fn test_interpolation_extrapolates() {
        let mapping = Interpolation::new([0.0, 100.0], [0.0, 180.0]);
        assert_eq!(mapping.map(50.0), 90.0);
        assert_eq!(mapping.map(150.0), 270.0);
        assert_eq!(mapping.map(-50.0), -90.0);

        let degenerate = Interpolation::new([1.0, 1.0], [3.0, 9.0]);
        assert_eq!(degenerate.map(5.0), 3.0);
    }

    #[test]
    fn test_immediate_value() {
        let mut value = ImmediateValue::new(0.25);
        assert_eq!(value.get(), 0.25);

        value.set(0.5);
        assert_eq!(value.get(), 0.5);

        value.animate_to(0.75, &TransitionConfig::default());
        assert_eq!(value.get(), 0.75);
        assert!(!value.is_animating());

        let mapping = Interpolation::new([0.0, 1.0], [0.0, 200.0]);
        assert_eq!(value.interpolate(&mapping), 150.0);
    }

    #[test]
    fn test_scheduled_value_animates() {
        let scheduler = FrameScheduler::new();
        let mut value = ScheduledValue::new(scheduler.handle(), 0.0);
        assert!(!value.is_animating());

        value.animate_to(10.0, &linear(100.0));
        assert!(value.is_animating());
        assert_eq!(value.get(), 0.0);

        scheduler.advance(50.0);
        assert!((value.get() - 5.0).abs() < 1e-4);

        scheduler.advance(60.0);
        assert_eq!(value.get(), 10.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_new_transition_supersedes_previous() {
        let scheduler = FrameScheduler::new();
        let mut value = ScheduledValue::new(scheduler.handle(), 0.0);

        value.animate_to(10.0, &linear(100.0));
        scheduler.advance(50.0);

        value.animate_to(0.0, &linear(100.0));
        assert_eq!(scheduler.transition_count(), 1);
        // Starts from where the first transition was
        assert!((value.get() - 5.0).abs() < 1e-4);

        scheduler.advance(50.0);
        assert!((value.get() - 2.5).abs() < 1e-4);
        assert_eq!(value.target(), 0.0);
    }

    #[test]
    fn test_spring_supersede_inherits_velocity() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();
        let spring = TransitionConfig::Spring(SpringParams::default());

        let mut value = ScheduledValue::new(handle, 0.0);
        value.animate_to(1.0, &spring);
        for _ in 0..3 {
            scheduler.advance(16.0);
        }
        let before = value.get();

        // Retarget to the current position: a fresh spring would sit still,
        // an inheriting one keeps moving forward.
        value.animate_to(before, &spring);
        scheduler.advance(16.0);
        assert!(value.get() > before);
    }

    #[test]
    fn test_set_cancels_transition() {
        let scheduler = FrameScheduler::new();
        let mut value = ScheduledValue::new(scheduler.handle(), 0.0);

        value.animate_to(10.0, &linear(100.0));
        value.set(3.0);
        assert_eq!(scheduler.transition_count(), 0);
        assert_eq!(value.get(), 3.0);

        scheduler.advance(100.0);
        assert_eq!(value.get(), 3.0);
    }

    #[test]
    fn test_drop_removes_transition() {
        let scheduler = FrameScheduler::new();
        {
            let mut value = ScheduledValue::new(scheduler.handle(), 0.0);
            value.animate_to(10.0, &linear(100.0));
            assert_eq!(scheduler.transition_count(), 1);
        }
        assert_eq!(scheduler.transition_count(), 0);
    }

    #[test]
    fn test_detached_value_jumps() {
        let mut value = ScheduledValue::new(SchedulerHandle::detached(), 0.0);
        value.animate_to(4.0, &linear(100.0));
        assert_eq!(value.get(), 4.0);
        assert!(!value.is_animating());
    }
}
