use std::time::{Duration, Instant};

/// Wheel travel that fires a navigation, matching common trackpad notch size.
pub const WHEEL_THRESHOLD: f32 = 30.0;
/// Quiet period after a wheel navigation; inertial scroll keeps emitting
/// events long after the gesture, and each gesture should move one slide.
pub const WHEEL_COOLDOWN: Duration = Duration::from_millis(600);
/// Pointer below this fraction of the viewport height reveals the tray.
pub const TRAY_REVEAL_FRACTION: f32 = 0.66;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Prev,
    /// 1-based slide number.
    Jump(usize),
}

/// Normalizes raw pointer and wheel input into navigation intents.
#[derive(Debug, Default)]
pub struct InputState {
    wheel_accum: f32,
    cooldown_until: Option<Instant>,
    tray_hover: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one wheel event. Positive `delta_y` scrolls down (next slide).
    /// Deltas accumulate until they cross the threshold; a fired intent
    /// starts the cool-down during which further wheel input is swallowed.
    pub fn on_wheel(&mut self, delta_y: f32, now: Instant) -> Option<NavIntent> {
        if let Some(until) = self.cooldown_until {
            if now < until {
                return None;
            }
            self.cooldown_until = None;
        }
        self.wheel_accum += delta_y;
        if self.wheel_accum.abs() <= WHEEL_THRESHOLD {
            return None;
        }
        let intent = if self.wheel_accum > 0.0 {
            NavIntent::Next
        } else {
            NavIntent::Prev
        };
        self.wheel_accum = 0.0;
        self.cooldown_until = Some(now + WHEEL_COOLDOWN);
        Some(intent)
    }

    /// Track the pointer's vertical position inside the viewport.
    pub fn on_pointer(&mut self, y: f32, viewport_height: f32) {
        self.tray_hover = viewport_height > 0.0 && y > viewport_height * TRAY_REVEAL_FRACTION;
    }

    pub fn pointer_left(&mut self) {
        self.tray_hover = false;
    }

    /// Whether hovering the bottom third should reveal the control tray.
    pub fn tray_hover(&self) -> bool {
        self.tray_hover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn burst_of_wheel_events_yields_one_intent() {
        let t0 = Instant::now();
        let mut input = InputState::new();
        let mut fired = 0;
        // An inertial scroll: 20 events 10 ms apart, well inside the cool-down.
        for i in 0..20 {
            if input.on_wheel(40.0, at(t0, i * 10)).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn cooldown_expiry_allows_the_next_gesture() {
        let t0 = Instant::now();
        let mut input = InputState::new();
        assert_eq!(input.on_wheel(50.0, t0), Some(NavIntent::Next));
        assert_eq!(input.on_wheel(50.0, at(t0, 599)), None);
        assert_eq!(input.on_wheel(50.0, at(t0, 600)), Some(NavIntent::Next));
    }

    #[test]
    fn negative_travel_goes_back() {
        let t0 = Instant::now();
        let mut input = InputState::new();
        assert_eq!(input.on_wheel(-45.0, t0), Some(NavIntent::Prev));
    }

    #[test]
    fn small_deltas_accumulate_to_the_threshold() {
        let t0 = Instant::now();
        let mut input = InputState::new();
        assert_eq!(input.on_wheel(12.0, at(t0, 0)), None);
        assert_eq!(input.on_wheel(12.0, at(t0, 10)), None);
        // 36 > 30: fires on the third notch.
        assert_eq!(input.on_wheel(12.0, at(t0, 20)), Some(NavIntent::Next));
    }

    #[test]
    fn threshold_is_exclusive() {
        let t0 = Instant::now();
        let mut input = InputState::new();
        assert_eq!(input.on_wheel(30.0, t0), None);
        assert_eq!(input.on_wheel(0.1, at(t0, 10)), Some(NavIntent::Next));
    }

    #[test]
    fn pointer_in_the_bottom_third_reveals_the_tray() {
        let mut input = InputState::new();
        input.on_pointer(100.0, 900.0);
        assert!(!input.tray_hover());
        input.on_pointer(700.0, 900.0);
        assert!(input.tray_hover());
        input.pointer_left();
        assert!(!input.tray_hover());
    }
}
