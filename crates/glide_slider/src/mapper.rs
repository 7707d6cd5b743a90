//! Value ↔ pixel offset mapping
//!
//! Offsets are measured from the leading edge of the container to the
//! leading edge of the thumb, along a track of length
//! `container.width - thumb.width`. In right-to-left layouts the ratio is
//! mirrored so that the minimum value sits at the right.

use glide_core::LayoutDirection;

/// Converts between domain values and thumb offsets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueMapper {
    pub min: f32,
    pub max: f32,
    /// Quantization step; 0 means continuous
    pub step: f32,
    pub direction: LayoutDirection,
}

impl ValueMapper {
    pub fn new(min: f32, max: f32, step: f32, direction: LayoutDirection) -> Self {
        Self {
            min,
            max,
            step,
            direction,
        }
    }

    fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Position of `value` in the range as seen on screen, 0 at the left edge
    pub fn value_to_ratio(&self, value: f32) -> f32 {
        let span = self.span();
        let ratio = if span == 0.0 {
            0.0
        } else {
            (value - self.min) / span
        };
        self.direction.apply(ratio)
    }

    /// Thumb offset for `value` on a track of `track_length` pixels
    pub fn value_to_pixel_offset(&self, value: f32, track_length: f32) -> f32 {
        self.value_to_ratio(value) * track_length
    }

    /// Domain value for a thumb offset, quantized to `step` and clamped
    ///
    /// A track with no usable length maps every offset to the leading end.
    pub fn pixel_offset_to_value(&self, offset: f32, track_length: f32) -> f32 {
        let screen_ratio = if track_length > 0.0 {
            offset / track_length
        } else {
            0.0
        };
        let ratio = self.direction.apply(screen_ratio);
        let span = self.span();

        let raw = if self.step > 0.0 {
            self.min + (ratio * span / self.step).round() * self.step
        } else {
            ratio * span + self.min
        };
        self.clamp(raw)
    }

    /// Clamp to `[min, max]`; an inverted range pins to `min`
    pub fn clamp(&self, value: f32) -> f32 {
        value.min(self.max).max(self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTH: f32 = 180.0;

    fn ltr(min: f32, max: f32, step: f32) -> ValueMapper {
        ValueMapper::new(min, max, step, LayoutDirection::Ltr)
    }

    #[test]
    fn test_round_trip_continuous() {
        let mapper = ltr(-20.0, 80.0, 0.0);
        for i in 0..=50 {
            let v = -20.0 + i as f32 * 2.0;
            let offset = mapper.value_to_pixel_offset(v, LENGTH);
            let back = mapper.pixel_offset_to_value(offset, LENGTH);
            assert!((back - v).abs() < 1e-3, "{v} -> {offset} -> {back}");
        }
    }

    #[test]
    fn test_round_trip_rtl() {
        let mapper = ValueMapper::new(0.0, 1.0, 0.0, LayoutDirection::Rtl);
        for v in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let offset = mapper.value_to_pixel_offset(v, LENGTH);
            let back = mapper.pixel_offset_to_value(offset, LENGTH);
            assert!((back - v).abs() < 1e-5);
        }
    }

    #[test]
    fn test_stepped_values_are_members() {
        let mapper = ltr(5.0, 105.0, 12.5);
        for offset in 0..=200 {
            let v = mapper.pixel_offset_to_value(offset as f32 - 10.0, LENGTH);
            let k = (v - 5.0) / 12.5;
            assert!((k - k.round()).abs() < 1e-4, "offset {offset} gave {v}");
            assert!((5.0..=105.0).contains(&v));
        }
    }

    #[test]
    fn test_offsets_beyond_track_clamp() {
        let mapper = ltr(0.0, 10.0, 0.0);
        assert_eq!(mapper.pixel_offset_to_value(-500.0, LENGTH), 0.0);
        assert_eq!(mapper.pixel_offset_to_value(500.0, LENGTH), 10.0);

        let stepped = ltr(0.0, 10.0, 3.0);
        // 10/3 rounds to 3 steps, 9 is in range
        assert_eq!(stepped.pixel_offset_to_value(LENGTH, LENGTH), 9.0);
        assert_eq!(stepped.pixel_offset_to_value(1000.0, LENGTH), 10.0);
    }

    #[test]
    fn test_rtl_mirrors_ltr() {
        let left = ltr(0.0, 100.0, 0.0);
        let right = ValueMapper::new(0.0, 100.0, 0.0, LayoutDirection::Rtl);
        for v in [0.0, 12.5, 50.0, 99.0, 100.0] {
            let mirrored = LENGTH - left.value_to_pixel_offset(v, LENGTH);
            assert!((right.value_to_pixel_offset(v, LENGTH) - mirrored).abs() < 1e-4);
        }
    }

    #[test]
    fn test_drag_to_95px_rounds_to_50() {
        // Container 200 wide, thumb 20 wide
        let mapper = ltr(0.0, 100.0, 10.0);
        let length = 200.0 - 20.0;
        assert_eq!(mapper.pixel_offset_to_value(95.0, length), 50.0);
    }

    #[test]
    fn test_half_step_rounds_away_from_zero() {
        let mapper = ltr(0.0, 2.0, 0.5);
        // 1/8 of the track is exactly half a step
        assert_eq!(mapper.pixel_offset_to_value(1.0, 8.0), 0.5);
    }

    #[test]
    fn test_degenerate_track_length() {
        let mapper = ltr(0.0, 100.0, 0.0);
        assert_eq!(mapper.pixel_offset_to_value(30.0, 0.0), 0.0);
        assert_eq!(mapper.pixel_offset_to_value(30.0, -10.0), 0.0);

        let rtl = ValueMapper::new(0.0, 100.0, 0.0, LayoutDirection::Rtl);
        assert_eq!(rtl.pixel_offset_to_value(30.0, 0.0), 100.0);
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let mapper = ltr(10.0, 0.0, 0.0);
        let v = mapper.pixel_offset_to_value(90.0, LENGTH);
        assert!(v.is_finite());
    }
}
