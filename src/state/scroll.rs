/// Smooth scrolling for the portfolio page
///
/// Programmatic scrolls (menu links, the scroll indicator) glide toward
/// their target with the exponential ease over a fixed duration instead
/// of jumping. The current offset is what the reveal driver reads; the
/// scroll lock freezes the glide entirely while an overlay is open.
///
/// Wheel input goes straight to the native scrollable; when the widget
/// reports a new offset we adopt it. A report that merely echoes our own
/// programmatic step is recognized by proximity and ignored, so a glide
/// is not cancelled by its own feedback.

use std::time::{Duration, Instant};

use crate::anim::easing;

/// Duration of a programmatic glide
pub const SCROLL_DURATION: Duration = Duration::from_millis(1200);

/// Offsets closer than this to our own position are treated as echoes
/// of a programmatic scroll rather than user input.
const ECHO_TOLERANCE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: f32,
    started: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
    max: f32,
    glide: Option<Glide>,
    stopped: bool,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            max: 0.0,
            glide: None,
            stopped: false,
        }
    }

    /// Current page offset in logical pixels
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Update the scrollable extent (content height minus viewport)
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        self.current = self.current.clamp(0.0, self.max);
    }

    /// Freeze the glide (scroll lock engaged)
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Unfreeze (scroll lock released)
    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Begin gliding toward `y`. Ignored while frozen.
    pub fn scroll_to(&mut self, y: f32, now: Instant) {
        if self.stopped {
            return;
        }
        self.target = y.clamp(0.0, self.max);
        self.glide = Some(Glide {
            from: self.current,
            started: now,
        });
    }

    /// The scrollable reported an offset. Adopt it when it is genuine
    /// user input; ignore echoes of our own steps.
    pub fn observe(&mut self, y: f32) {
        if self.glide.is_some() && (y - self.current).abs() <= ECHO_TOLERANCE {
            return;
        }
        self.current = y.clamp(0.0, self.max);
        self.target = self.current;
        self.glide = None;
    }

    /// Advance one frame. Returns the new offset when it moved, so the
    /// caller can push it to the scrollable widget.
    pub fn step(&mut self, now: Instant) -> Option<f32> {
        if self.stopped {
            return None;
        }
        let glide = self.glide?;

        let elapsed = now.saturating_duration_since(glide.started).as_secs_f32();
        let t = elapsed / SCROLL_DURATION.as_secs_f32();
        if t >= 1.0 {
            self.current = self.target;
            self.glide = None;
        } else {
            self.current = glide.from + (self.target - glide.from) * easing::expo_scroll(t);
        }
        Some(self.current)
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}
