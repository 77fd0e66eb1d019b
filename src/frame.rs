//! Per-frame event coalescing
//!
//! Wheel scrolling delivers events far faster than the viewer draws. The
//! gate limits a handler to one run per rendered frame: the first event
//! arms it, further events in the same frame are dropped, and the armed
//! run fires right before the next draw. The handler reads live state at
//! that point, so the settled position is never lost.

/// Run-at-most-once-per-frame gate.
///
/// Drop-not-queue semantics: arming an already armed gate does nothing,
/// and the flag clears only when the pending run is actually taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    armed: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self { armed: false }
    }

    /// Arm the gate. Returns `false` when a run was already pending and
    /// this event was dropped.
    pub fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Consume the pending run, if any. Called once per frame, before the
    /// draw.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
