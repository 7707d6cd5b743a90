//! Thumb hit-test geometry
//!
//! Touches are received by a touch area laid over the container. When the
//! configured thumb touch size is larger than the thumb (horizontally) or the
//! container (vertically), the touch area grows past the container by half
//! of that overflow on each side, and hit-test coordinates are relative to
//! the grown area.

use glide_core::{Point, Rect, Size};

/// Per-edge offsets, as applied to a view's margins
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Same horizontal inset left and right, same vertical inset top and bottom
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// How far the touch target extends past the thumb and container
pub fn touch_overflow(touch_size: Size, thumb: Size, container: Size) -> Size {
    Size::new(
        (touch_size.width - thumb.width).max(0.0),
        (touch_size.height - container.height).max(0.0),
    )
}

/// Resolved touch area for one layout and thumb position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchArea {
    pub overflow: Size,
    /// Thumb hit-test rectangle, in touch-area coordinates
    pub thumb_rect: Rect,
}

impl TouchArea {
    /// Compute the touch area for a thumb at `thumb_offset`
    pub fn resolve(
        touch_size: Size,
        thumb: Size,
        container: Size,
        thumb_offset: f32,
    ) -> Self {
        let overflow = touch_overflow(touch_size, thumb, container);
        let thumb_rect = Rect::new(
            overflow.width / 2.0 + thumb_offset + (thumb.width - touch_size.width) / 2.0,
            overflow.height / 2.0 + (container.height - touch_size.height) / 2.0,
            touch_size.width,
            touch_size.height,
        );
        Self {
            overflow,
            thumb_rect,
        }
    }

    /// Negative margins that grow the touch area past the container
    pub fn margins(&self) -> EdgeInsets {
        EdgeInsets::symmetric(-self.overflow.width / 2.0, -self.overflow.height / 2.0)
    }

    /// Top-left of the touch area in container coordinates
    pub fn origin_in_container(&self) -> Point {
        Point::new(-self.overflow.width / 2.0, -self.overflow.height / 2.0)
    }

    /// Frame of the touch area in container coordinates
    pub fn frame_in_container(&self, container: Size) -> Rect {
        Rect::from_origin_size(
            self.origin_in_container(),
            Size::new(
                container.width + self.overflow.width,
                container.height + self.overflow.height,
            ),
        )
    }

    /// Whether a touch at `location` (touch-area coordinates) lands on the thumb
    pub fn hits_thumb(&self, location: Point) -> bool {
        self.thumb_rect.contains(location)
    }
}
