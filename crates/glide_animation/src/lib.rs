//! Glide Animation System
//!
//! Spring physics, timing curves, and frame-driven animated values.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs configured by friction and tension
//! - **Timing Curves**: Fixed-duration tweens with cubic-bezier easing and delays
//! - **Frame Scheduler**: Host-driven stepping of every in-flight transition
//! - **Animated Values**: One seam (`AnimatedValue`) with immediate and
//!   scheduler-backed implementations
//! - **Interruptible**: A new transition supersedes the running one, and
//!   springs inherit velocity when interrupted by springs

pub mod config;
pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod timing;
pub mod value;

pub use config::{AnimationOverrides, AnimationType, SpringParams, TimingParams, TransitionConfig};
pub use easing::Easing;
pub use scheduler::{FrameScheduler, SchedulerHandle, Transition, TransitionId};
pub use spring::{Spring, SpringConfig};
pub use timing::TimingAnimation;
pub use value::{AnimatedValue, ImmediateValue, Interpolation, ScheduledValue};
