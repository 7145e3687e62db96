/// Staged timelines for the portfolio's fixed animations
///
/// Each timeline is an explicit state sampled against a clock passed in
/// by the caller, so the ordering contracts are visible and testable
/// without a frame loop.

use std::time::{Duration, Instant};

use super::easing;

// ---------------------------------------------------------------------
// Lightbox crossfade
// ---------------------------------------------------------------------

/// Duration of the fade-out half of the lightbox crossfade
pub const FADE_OUT: Duration = Duration::from_millis(200);
/// Duration of the fade-in half of the lightbox crossfade
pub const FADE_IN: Duration = Duration::from_millis(300);

/// Where a crossfade currently is, with eased progress for that phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossfadePhase {
    /// Old image shrinking and fading (progress 0..1)
    FadingOut(f32),
    /// New image growing and fading in (progress 0..1)
    FadingIn(f32),
    Finished,
}

/// The two-phase image swap of lightbox navigation.
///
/// Ordering contract: the source swap happens strictly after the
/// fade-out completes and strictly before any fade-in is drawn. The
/// caller drives this by polling `take_swap` every frame and applying
/// the swap the single time it returns true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossfade {
    started: Instant,
    swapped: bool,
}

impl Crossfade {
    pub fn new(started: Instant) -> Self {
        Self {
            started,
            swapped: false,
        }
    }

    /// Current phase with linear in-phase progress
    pub fn phase(&self, now: Instant) -> CrossfadePhase {
        if now <= self.started {
            return CrossfadePhase::FadingOut(0.0);
        }
        let elapsed = now.duration_since(self.started);
        if elapsed < FADE_OUT {
            CrossfadePhase::FadingOut(elapsed.as_secs_f32() / FADE_OUT.as_secs_f32())
        } else if elapsed < FADE_OUT + FADE_IN {
            let into = (elapsed - FADE_OUT).as_secs_f32();
            CrossfadePhase::FadingIn(into / FADE_IN.as_secs_f32())
        } else {
            CrossfadePhase::Finished
        }
    }

    /// True exactly once: the first poll at or after fade-out completion.
    /// The swap must be applied at that moment.
    pub fn take_swap(&mut self, now: Instant) -> bool {
        if self.swapped || now < self.started + FADE_OUT {
            return false;
        }
        self.swapped = true;
        true
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.started + FADE_OUT + FADE_IN
    }

    /// Displayed image opacity at `now` (power2.in out, power2.out in)
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase(now) {
            CrossfadePhase::FadingOut(t) => 1.0 - easing::power2_in(t),
            CrossfadePhase::FadingIn(t) => easing::power2_out(t),
            CrossfadePhase::Finished => 1.0,
        }
    }

    /// Displayed image scale at `now` (1.0 -> 0.95 -> 1.0)
    pub fn scale(&self, now: Instant) -> f32 {
        match self.phase(now) {
            CrossfadePhase::FadingOut(t) => 1.0 - 0.05 * easing::power2_in(t),
            CrossfadePhase::FadingIn(t) => 0.95 + 0.05 * easing::power2_out(t),
            CrossfadePhase::Finished => 1.0,
        }
    }
}

// ---------------------------------------------------------------------
// Preloader
// ---------------------------------------------------------------------

/// Dwell at 100% before the preloader slides away
pub const PRELOADER_HOLD: Duration = Duration::from_millis(800);
/// Duration of the slide-out
pub const PRELOADER_SLIDE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreloaderPhase {
    /// Content still loading; bar tracks real progress
    Loading,
    /// Bar snapped to 100%, dwelling before the slide
    Holding,
    /// Sliding off-screen (progress 0..1)
    SlidingOut(f32),
    Done,
}

/// The intro overlay: load, dwell 800 ms, slide out over 1 s, then fire
/// the one-shot ready signal that registers the reveal bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preloader {
    completed_at: Option<Instant>,
    ready_fired: bool,
}

impl Preloader {
    pub fn new() -> Self {
        Self {
            completed_at: None,
            ready_fired: false,
        }
    }

    /// Mark loading finished. The first call starts the dwell clock;
    /// later calls are ignored.
    pub fn complete(&mut self, now: Instant) {
        if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }

    pub fn phase(&self, now: Instant) -> PreloaderPhase {
        let Some(completed) = self.completed_at else {
            return PreloaderPhase::Loading;
        };
        if now < completed + PRELOADER_HOLD {
            return PreloaderPhase::Holding;
        }
        let slide_start = completed + PRELOADER_HOLD;
        if now < slide_start + PRELOADER_SLIDE {
            let t = now.duration_since(slide_start).as_secs_f32()
                / PRELOADER_SLIDE.as_secs_f32();
            PreloaderPhase::SlidingOut(t)
        } else {
            PreloaderPhase::Done
        }
    }

    /// Vertical offset of the overlay as a fraction of its height
    /// (0.0 on screen, -1.0 fully slid away), power4.inOut
    pub fn offset_fraction(&self, now: Instant) -> f32 {
        match self.phase(now) {
            PreloaderPhase::Loading | PreloaderPhase::Holding => 0.0,
            PreloaderPhase::SlidingOut(t) => -easing::power4_in_out(t),
            PreloaderPhase::Done => -1.0,
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        matches!(self.phase(now), PreloaderPhase::Done)
    }

    /// One-shot ready signal: true the single time the slide has
    /// finished. Reveal bindings are registered on this edge.
    pub fn take_ready(&mut self, now: Instant) -> bool {
        if self.ready_fired || !self.is_done(now) {
            return false;
        }
        self.ready_fired = true;
        true
    }
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}
