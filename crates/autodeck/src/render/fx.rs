//! Timing helpers shared by the slide renderers. Everything here is pure:
//! renderers feed in the slide clock and get back animation progress.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The deck's signature snappy curve.
pub const SNAP: CubicBezier = CubicBezier::new(0.43, 0.13, 0.23, 0.96);
/// A softer landing for text rises.
pub const SOFT: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Linear progress through a window starting `delay` seconds into the
/// timeline and lasting `duration` seconds. Clamped to `[0, 1]`.
pub fn ramp(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= delay { 1.0 } else { 0.0 };
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}

pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic bezier easing with the standard (0,0)..(1,1) endpoints, evaluated
/// by bisection on the x component. Good to ~1e-4, plenty for animation.
#[derive(Debug, Clone, Copy)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    pub fn ease(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        let mut t = x;
        for _ in 0..24 {
            let cx = Self::sample(self.x1, self.x2, t);
            if (cx - x).abs() < 1e-5 {
                break;
            }
            if cx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        Self::sample(self.y1, self.y2, t)
    }

    /// `ramp` then ease, the common per-element pattern.
    pub fn run(&self, elapsed: f32, delay: f32, duration: f32) -> f32 {
        self.ease(ramp(elapsed, delay, duration))
    }
}

/// Deterministic generator for decorative randomness (flash picks, drift),
/// so a given frame always renders the same way.
pub fn decorative_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_windows() {
        assert_eq!(ramp(0.0, 1.0, 2.0), 0.0);
        assert_eq!(ramp(1.0, 1.0, 2.0), 0.0);
        assert_eq!(ramp(2.0, 1.0, 2.0), 0.5);
        assert_eq!(ramp(3.0, 1.0, 2.0), 1.0);
        assert_eq!(ramp(99.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn zero_duration_ramp_is_a_step() {
        assert_eq!(ramp(0.9, 1.0, 0.0), 0.0);
        assert_eq!(ramp(1.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn bezier_hits_its_endpoints() {
        for curve in [SNAP, SOFT] {
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
        }
    }

    #[test]
    fn bezier_is_monotonic_for_the_deck_curves() {
        for curve in [SNAP, SOFT] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let y = curve.ease(i as f32 / 100.0);
                assert!(y >= prev - 1e-4);
                prev = y;
            }
        }
    }

    #[test]
    fn decorative_rng_is_reproducible() {
        use rand::Rng;
        let mut first = decorative_rng(7);
        let mut second = decorative_rng(7);
        let a: Vec<u32> = (0..8).map(|_| first.random()).collect();
        let b: Vec<u32> = (0..8).map(|_| second.random()).collect();
        assert_eq!(a, b);
    }
}
