//! Smooth-scroll animation
//!
//! A scroll request with animation enabled becomes a short eased tween
//! between the current and target offsets. A new request retargets the
//! in-flight tween from its current sample, so interrupting an animation
//! never jumps.

use std::time::{Duration, Instant};

/// Eased interpolation between two scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            // A zero duration would divide by zero in sample()
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    /// Final offset the tween is heading toward.
    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Offset at `now`, smoothstep-eased between the endpoints.
    pub fn sample(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start);
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// Redirect toward `new_to`, starting from wherever the tween is now.
    pub fn retarget(&mut self, now: Instant, new_to: f64, duration: Duration) {
        let current = self.sample(now);
        *self = Self::new(current, new_to, now, duration);
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
