/// Scroll-triggered reveal animations
///
/// The page's entrance animations: split-text headlines, text blocks,
/// section headers, staggered gallery tiles, the about image slide-in
/// and footer stagger. Each is a fire-once binding between a document
/// position and an animation; bindings are registered in one batch on
/// the ready signal (after the preloader slides away) and are neither
/// re-entrant nor individually cancellable.
///
/// Scrubbed effects (parallax, the scroll-indicator fade) are pure
/// functions of the scroll offset and have no binding state.

use std::time::{Duration, Instant};

use super::easing;

/// Per-character stagger of the split-text reveal
pub const CHAR_STAGGER: Duration = Duration::from_millis(50);
/// Per-tile stagger of the gallery entrance
pub const GALLERY_STAGGER: Duration = Duration::from_millis(50);
/// Per-child stagger of the footer reveal
pub const FOOTER_STAGGER: Duration = Duration::from_millis(150);

/// The reveal variants the page uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Headline characters rising in with overshoot
    SplitText,
    /// Plain text block rising in
    TextBlock { ordinal: usize },
    /// Section header
    SectionHeader { ordinal: usize },
    /// One gallery tile, staggered by its position in the grid
    GalleryItem { ordinal: usize },
    /// The about-section image sliding in from the right
    AboutImage,
    /// One footer row, staggered top to bottom
    FooterChild { ordinal: usize },
}

impl RevealKind {
    /// Viewport fraction the element's top must cross to trigger
    fn start_fraction(self) -> f32 {
        match self {
            RevealKind::SplitText | RevealKind::TextBlock { .. } => 0.9,
            RevealKind::SectionHeader { .. } => 0.88,
            RevealKind::GalleryItem { .. } => 0.92,
            RevealKind::AboutImage => 0.85,
            RevealKind::FooterChild { .. } => 0.9,
        }
    }

    fn duration(self) -> Duration {
        match self {
            RevealKind::SplitText | RevealKind::TextBlock { .. } | RevealKind::AboutImage => {
                Duration::from_millis(1000)
            }
            RevealKind::SectionHeader { .. }
            | RevealKind::GalleryItem { .. }
            | RevealKind::FooterChild { .. } => Duration::from_millis(800),
        }
    }

    /// Delay after the trigger before this element starts moving
    fn delay(self) -> Duration {
        match self {
            RevealKind::GalleryItem { ordinal } => GALLERY_STAGGER * ordinal as u32,
            RevealKind::FooterChild { ordinal } => FOOTER_STAGGER * ordinal as u32,
            _ => Duration::ZERO,
        }
    }

    fn ease(self, t: f32) -> f32 {
        match self {
            RevealKind::SplitText => easing::back_out(t),
            _ => easing::power3_out(t),
        }
    }

    /// Distance (logical px) the element travels while revealing
    pub fn travel(self) -> f32 {
        match self {
            RevealKind::SplitText => 100.0,
            RevealKind::TextBlock { .. } | RevealKind::FooterChild { .. } => 30.0,
            RevealKind::SectionHeader { .. } => 20.0,
            RevealKind::GalleryItem { .. } => 40.0,
            RevealKind::AboutImage => 60.0,
        }
    }
}

/// One fire-once binding between a document position and a reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealBinding {
    pub kind: RevealKind,
    /// Document y of the element's top edge
    pub element_top: f32,
    triggered_at: Option<Instant>,
}

impl RevealBinding {
    pub fn new(kind: RevealKind, element_top: f32) -> Self {
        Self {
            kind,
            element_top,
            triggered_at: None,
        }
    }

    /// Arm the trigger once the element crosses its viewport threshold.
    /// Play-once: later scrolling never rewinds it.
    pub fn update(&mut self, scroll_y: f32, viewport_h: f32, now: Instant) {
        if self.triggered_at.is_some() {
            return;
        }
        if self.element_top - scroll_y <= viewport_h * self.kind.start_fraction() {
            self.triggered_at = Some(now);
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Eased progress at `now`, with an extra delay on top of the
    /// binding's own (used for the per-character stagger)
    pub fn progress_at(&self, now: Instant, extra_delay: Duration) -> f32 {
        let Some(triggered) = self.triggered_at else {
            return 0.0;
        };
        let begin = triggered + self.kind.delay() + extra_delay;
        if now <= begin {
            return 0.0;
        }
        let t = now.duration_since(begin).as_secs_f32() / self.kind.duration().as_secs_f32();
        self.kind.ease(easing::clamp01(t))
    }

    /// Eased progress at `now` (0.0 until triggered, 1.0 when settled)
    pub fn progress(&self, now: Instant) -> f32 {
        self.progress_at(now, Duration::ZERO)
    }
}

/// The batch of reveal bindings, registered once on the ready signal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealDriver {
    bindings: Vec<RevealBinding>,
    registered: bool,
}

impl RevealDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Register the page's bindings. Fire-once: re-registration is
    /// ignored, matching the single ready signal of the page.
    pub fn register(&mut self, bindings: Vec<RevealBinding>) {
        if self.registered {
            return;
        }
        self.bindings = bindings;
        self.registered = true;
    }

    /// Feed the current scroll position to every binding
    pub fn update(&mut self, scroll_y: f32, viewport_h: f32, now: Instant) {
        for binding in &mut self.bindings {
            binding.update(scroll_y, viewport_h, now);
        }
    }

    /// The binding for `kind`, if registered
    pub fn binding(&self, kind: RevealKind) -> Option<&RevealBinding> {
        self.bindings.iter().find(|b| b.kind == kind)
    }

    /// Progress for `kind`: 0.0 before registration (content still
    /// hidden under the preloader), 1.0 for an unregistered kind
    /// (absence tolerated, element shown plain).
    pub fn progress(&self, kind: RevealKind, now: Instant) -> f32 {
        if !self.registered {
            return 0.0;
        }
        self.binding(kind).map_or(1.0, |b| b.progress(now))
    }
}

// ---------------------------------------------------------------------
// Scrubbed effects
// ---------------------------------------------------------------------

/// Parallax offset for an element with a speed attribute: a slice of the
/// total scroll distance, opposite to the scroll direction.
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    -(scroll_y * speed * 0.1)
}

/// Scrub progress between two viewport thresholds: 0.0 while the element
/// top sits below `start_frac` of the viewport, 1.0 once it has risen to
/// `end_frac`. Drives the scroll-indicator fade (0.6 -> 0.3).
pub fn scrub_progress(
    element_top: f32,
    scroll_y: f32,
    viewport_h: f32,
    start_frac: f32,
    end_frac: f32,
) -> f32 {
    let start = viewport_h * start_frac;
    let end = viewport_h * end_frac;
    if (start - end).abs() < f32::EPSILON {
        return 0.0;
    }
    let position = element_top - scroll_y;
    easing::clamp01((start - position) / (start - end))
}

/// Delay of character `i` within a split-text reveal
pub fn char_delay(i: usize) -> Duration {
    CHAR_STAGGER * i as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_binding_triggers_at_threshold() {
        let now = Instant::now();
        let mut b = RevealBinding::new(RevealKind::TextBlock { ordinal: 0 }, 1800.0);

        // Element top at 1800, viewport 1000, threshold 0.9 -> needs
        // scroll_y >= 900 to cross
        b.update(800.0, 1000.0, now);
        assert!(!b.is_triggered());
        assert_eq!(b.progress(now), 0.0);

        b.update(900.0, 1000.0, now);
        assert!(b.is_triggered());
    }

    #[test]
    fn test_binding_plays_once() {
        let now = Instant::now();
        let mut b = RevealBinding::new(RevealKind::SectionHeader { ordinal: 0 }, 500.0);
        b.update(600.0, 1000.0, now);
        assert!(b.is_triggered());

        // Scrolling back up does not rewind
        b.update(0.0, 1000.0, at(now, 100));
        assert!((b.progress(at(now, 800)) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_stagger_delays_later_ordinals() {
        let now = Instant::now();
        let mut first = RevealBinding::new(RevealKind::GalleryItem { ordinal: 0 }, 0.0);
        let mut fourth = RevealBinding::new(RevealKind::GalleryItem { ordinal: 3 }, 0.0);
        first.update(0.0, 1000.0, now);
        fourth.update(0.0, 1000.0, now);

        let sample = at(now, 100);
        assert!(first.progress(sample) > 0.0);
        // ordinal 3 waits 150 ms before moving
        assert_eq!(fourth.progress(sample), 0.0);
        assert!(fourth.progress(at(now, 300)) > 0.0);
    }

    #[test]
    fn test_char_stagger_via_extra_delay() {
        let now = Instant::now();
        let mut b = RevealBinding::new(RevealKind::SplitText, 0.0);
        b.update(0.0, 1000.0, now);

        let sample = at(now, 120);
        let head = b.progress_at(sample, char_delay(0));
        let tail = b.progress_at(sample, char_delay(5));
        assert!(head > tail);
        assert_eq!(b.progress_at(sample, char_delay(10)), 0.0);
    }

    #[test]
    fn test_driver_registers_once() {
        let now = Instant::now();
        let mut driver = RevealDriver::new();
        assert_eq!(driver.progress(RevealKind::AboutImage, now), 0.0);

        driver.register(vec![RevealBinding::new(RevealKind::AboutImage, 100.0)]);
        driver.register(vec![]);
        assert!(driver.binding(RevealKind::AboutImage).is_some());

        // Registered but absent kind: shown plain
        assert_eq!(driver.progress(RevealKind::TextBlock { ordinal: 9 }, now), 1.0);
    }

    #[test]
    fn test_parallax_direction_and_magnitude() {
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert_eq!(parallax_offset(1000.0, 0.5), -50.0);
        assert!(parallax_offset(400.0, 1.0) < parallax_offset(400.0, 0.2));
    }

    #[test]
    fn test_scrub_progress_clamps_between_thresholds() {
        // Viewport 1000: start at 600, end at 300
        assert_eq!(scrub_progress(800.0, 0.0, 1000.0, 0.6, 0.3), 0.0);
        assert_eq!(scrub_progress(600.0, 0.0, 1000.0, 0.6, 0.3), 0.0);
        let mid = scrub_progress(450.0, 0.0, 1000.0, 0.6, 0.3);
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(scrub_progress(300.0, 0.0, 1000.0, 0.6, 0.3), 1.0);
        assert_eq!(scrub_progress(0.0, 0.0, 1000.0, 0.6, 0.3), 1.0);

        // Scrolling moves the element up the same way
        assert_eq!(scrub_progress(900.0, 600.0, 1000.0, 0.6, 0.3), 1.0);
    }
}
