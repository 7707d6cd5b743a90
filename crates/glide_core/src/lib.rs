//! Glide Core
//!
//! Foundational primitives shared by the Glide widget crates:
//!
//! - **Geometry**: `Point`, `Size`, and `Rect` with point-containment tests
//! - **Color**: RGBA colors parsed from `#rrggbb` / `#rrggbbaa` strings
//! - **Layout Direction**: left-to-right or right-to-left content flow
//! - **Input**: raw touch events and a single-pointer pan recognizer
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Point, Rect};
//!
//! let thumb = Rect::new(10.0, 0.0, 20.0, 20.0);
//! assert!(thumb.contains(Point::new(15.0, 5.0)));
//! assert!(!thumb.contains(Point::new(40.0, 5.0)));
//! ```

pub mod color;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod input;

pub use color::Color;
pub use direction::LayoutDirection;
pub use error::{ColorParseError, Result};
pub use geometry::{Point, Rect, Size};
pub use input::{PanDelta, PanEvent, PanRecognizer, TouchEvent};
