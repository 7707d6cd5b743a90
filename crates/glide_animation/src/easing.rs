//! Easing curves for timed transitions
//!
//! All curves map `0.0..=1.0` progress to `0.0..=1.0` eased progress, with
//! `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.

use serde::{Deserialize, Serialize};

/// Easing function applied to a timing transition's progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing
    Linear,
    /// Standard `ease` curve, cubic-bezier(0.42, 0, 1, 1)
    Ease,
    /// Quadratic acceleration from zero velocity
    EaseIn,
    /// Quadratic deceleration to zero velocity
    EaseOut,
    /// `Ease` for the first half, mirrored for the second half
    #[default]
    EaseInOut,
    /// Custom cubic-bezier with control points (x1, y1) and (x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the curve to a progress value (clamped to `0.0..=1.0`)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier_easing(t, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => in_out(t, |t| cubic_bezier_easing(t, 0.42, 0.0, 1.0, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_easing(t, x1, y1, x2, y2),
        }
    }
}

/// Run `ease_fn` forward over the first half and mirrored over the second.
fn in_out(t: f32, ease_fn: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        ease_fn(t * 2.0) / 2.0
    } else {
        1.0 - ease_fn((1.0 - t) * 2.0) / 2.0
    }
}

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

/// Solve the curve's x(t) = progress by bisection, then evaluate y(t).
fn cubic_bezier_easing(progress: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x = progress.clamp(0.0, 1.0);
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        let mid_x = cubic_bezier(mid, 0.0, x1, x2, 1.0);
        if mid_x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-5 >= prev, "{easing:?} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-4);
        for i in 0..=10 {
            let t = i as f32 / 20.0;
            let sum = e.apply(t) + e.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-4, "asymmetric at {t}");
        }
        // Slow start
        assert!(e.apply(0.1) < 0.1);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
