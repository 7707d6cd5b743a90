//! Glide Slider
//!
//! A draggable track-and-thumb widget bound to a numeric value.
//!
//! The crate holds the widget's logic and leaves drawing and layout to the
//! host:
//!
//! - **Measurement**: container, track, and thumb sizes arrive from layout
//!   callbacks in any order; the slider becomes ready once all three are known
//! - **Mapping**: values convert to thumb offsets and back, with step
//!   quantization, clamping, and right-to-left mirroring
//! - **Gestures**: a touch-down on the thumb's enlarged touch rectangle starts
//!   a drag; moves update the value immediately and fire callbacks
//! - **Transitions**: values set from outside can animate with a spring or a
//!   timing curve through `glide_animation`
//! - **Rendering**: [`SliderFrame`] describes what to draw for the current
//!   value and layout
//!
//! # Example
//!
//! ```rust
//! use glide_animation::FrameScheduler;
//! use glide_slider::{Slider, SliderConfig};
//!
//! let scheduler = FrameScheduler::new();
//! let config = SliderConfig::new().animate_transitions(true);
//! let mut slider = Slider::with_scheduler(config, scheduler.handle())
//!     .on_sliding_complete(|v| println!("settled on {v}"));
//!
//! slider.set_value(0.75);
//! scheduler.advance(200.0);
//! assert_eq!(slider.value(), 0.75);
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod mapper;
pub mod measure;
pub mod render;
pub mod slider;
pub mod style;
pub mod touch_area;

pub use config::SliderConfig;
pub use error::{Result, SliderError};
pub use gesture::{DragSession, GestureContext, GestureController, GesturePhase, SliderEvent};
pub use mapper::ValueMapper;
pub use measure::{MeasureOutcome, MeasureState, MeasureTarget, MeasurementTracker};
pub use render::{DebugOverlay, SliderFrame, ThumbFrame, TouchAreaFrame, TrackFrame};
pub use slider::{Slider, ValueCallback};
pub use style::SliderStyle;
pub use touch_area::{touch_overflow, EdgeInsets, TouchArea};
