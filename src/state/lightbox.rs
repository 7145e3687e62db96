/// Lightbox image viewer state machine
///
/// States: closed, open, and open-with-a-crossfade-in-flight. Opening
/// shows the clicked photo immediately (no transition); navigation runs
/// the two-phase crossfade from `anim::timeline`, with the source swap
/// applied strictly between the phases. A navigation request arriving
/// while a crossfade is still running is queued latest-only and applied
/// when the fade-in completes, so rapid arrow presses can never race
/// the animation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::anim::timeline::Crossfade;
use crate::state::gallery::Gallery;

/// A crossfade toward a specific gallery position
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    fade: Crossfade,
    target: usize,
}

/// The lightbox: open/closed flag plus the current index into the
/// gallery. Invariant: whenever the lightbox is open and the gallery is
/// non-empty, `current < gallery.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
    open: bool,
    current: usize,
    source: Option<PathBuf>,
    transition: Option<Transition>,
    /// Latest navigation direction requested mid-transition
    pending: Option<i32>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self {
            open: false,
            current: 0,
            source: None,
            transition: None,
            pending: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Full-resolution source currently displayed, when open
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Open on the photo whose grid thumbnail was clicked.
    ///
    /// Resolves the full-resolution source and looks the photo up in the
    /// gallery by identity; a photo missing from the index leaves the
    /// previous position untouched (the source is still shown). Shows
    /// immediately, with no transition; re-opening while already open
    /// just re-resolves. No-op on an empty gallery.
    ///
    /// Returns true when the lightbox is open afterwards, so the caller
    /// can suspend the scroll lock.
    pub fn open(&mut self, gallery: &Gallery, clicked: &Path) -> bool {
        if gallery.is_empty() {
            return false;
        }

        match gallery.position_of(clicked) {
            Some(position) => {
                self.current = position;
                self.source = gallery
                    .get(position)
                    .map(|img| img.full_source().to_path_buf());
            }
            None => {
                // Unknown thumbnail: index stays where it was, the
                // clicked file itself is shown.
                self.source = Some(clicked.to_path_buf());
            }
        }

        self.open = true;
        self.transition = None;
        self.pending = None;
        true
    }

    /// Step to the previous (−1) or next (+1) photo, wrapping around
    /// both ends. No-op when the gallery is empty or the lightbox is
    /// closed; queued (latest only) while a crossfade is running.
    pub fn navigate(&mut self, gallery: &Gallery, direction: i32, now: Instant) {
        if gallery.is_empty() || !self.open {
            return;
        }

        if self.transition.is_some() {
            self.pending = Some(direction);
            return;
        }

        let len = gallery.len() as i32;
        let target = (self.current as i32 + direction).rem_euclid(len) as usize;
        self.transition = Some(Transition {
            fade: Crossfade::new(now),
            target,
        });
    }

    /// Advance the crossfade. The index and displayed source change at
    /// the single frame where the fade-out has completed, never earlier.
    pub fn tick(&mut self, gallery: &Gallery, now: Instant) {
        let Some(mut transition) = self.transition else {
            return;
        };

        if transition.fade.take_swap(now) {
            self.current = transition.target;
            self.source = gallery
                .get(self.current)
                .map(|img| img.full_source().to_path_buf());
        }

        if transition.fade.is_finished(now) {
            self.transition = None;
            if let Some(direction) = self.pending.take() {
                self.navigate(gallery, direction, now);
            }
        } else {
            self.transition = Some(transition);
        }
    }

    /// Close the viewer. Idempotent; returns true when it was open, so
    /// the caller can release its hold on the scroll lock.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.transition = None;
        self.pending = None;
        true
    }

    /// 1-based "index / total" counter text, e.g. `"3 / 12"`.
    /// None when the gallery is empty.
    pub fn counter_label(&self, gallery: &Gallery) -> Option<String> {
        if gallery.is_empty() {
            return None;
        }
        Some(format!("{} / {}", self.current + 1, gallery.len()))
    }

    /// Opacity of the displayed image at `now` (1.0 outside transitions)
    pub fn image_opacity(&self, now: Instant) -> f32 {
        self.transition
            .map(|t| t.fade.opacity(now))
            .unwrap_or(1.0)
    }

    /// Scale of the displayed image at `now` (1.0 outside transitions)
    pub fn image_scale(&self, now: Instant) -> f32 {
        self.transition.map(|t| t.fade.scale(now)).unwrap_or(1.0)
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::timeline::{FADE_IN, FADE_OUT};
    use crate::state::gallery::GalleryImage;
    use std::time::Duration;

    fn gallery(n: usize) -> Gallery {
        Gallery::from_images(
            (0..n)
                .map(|i| GalleryImage {
                    path: PathBuf::from(format!("img-{}.jpg", i)),
                    full_path: PathBuf::from(format!("full-{}.jpg", i)),
                })
                .collect(),
        )
    }

    /// Run a crossfade to completion
    fn settle(lb: &mut Lightbox, g: &Gallery, from: Instant) -> Instant {
        let end = from + FADE_OUT + FADE_IN;
        lb.tick(g, end);
        end
    }

    #[test]
    fn test_open_sets_index_for_every_position() {
        let g = gallery(5);
        for k in 0..5 {
            let mut lb = Lightbox::new();
            assert!(lb.open(&g, Path::new(&format!("img-{}.jpg", k))));
            assert!(lb.is_open());
            assert_eq!(lb.current_index(), k);
            assert_eq!(lb.source(), Some(Path::new(&format!("full-{}.jpg", k))));
        }
    }

    #[test]
    fn test_open_unknown_path_keeps_previous_index() {
        let g = gallery(3);
        let mut lb = Lightbox::new();
        lb.open(&g, Path::new("img-2.jpg"));
        lb.open(&g, Path::new("not-in-gallery.jpg"));

        assert!(lb.is_open());
        assert_eq!(lb.current_index(), 2);
        // The clicked file is still what gets displayed
        assert_eq!(lb.source(), Some(Path::new("not-in-gallery.jpg")));
    }

    #[test]
    fn test_open_on_empty_gallery_is_noop() {
        let g = Gallery::empty();
        let mut lb = Lightbox::new();
        assert!(!lb.open(&g, Path::new("anything.jpg")));
        assert!(!lb.is_open());
    }

    #[test]
    fn test_navigate_wraps_backwards() {
        // N=3, current=0, direction=-1 -> 2
        let g = gallery(3);
        let now = Instant::now();
        let mut lb = Lightbox::new();
        lb.open(&g, Path::new("img-0.jpg"));

        lb.navigate(&g, -1, now);
        settle(&mut lb, &g, now);
        assert_eq!(lb.current_index(), 2);
    }

    #[test]
    fn test_navigate_round_trip() {
        for n in 1..=4 {
            let g = gallery(n);
            for start in 0..n {
                let mut lb = Lightbox::new();
                lb.open(&g, Path::new(&format!("img-{}.jpg", start)));

                let mut now = Instant::now();
                lb.navigate(&g, 1, now);
                now = settle(&mut lb, &g, now);
                lb.navigate(&g, -1, now);
                settle(&mut lb, &g, now);

                assert_eq!(lb.current_index(), start, "n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_navigate_on_empty_gallery_changes_nothing() {
        let g = Gallery::empty();
        let now = Instant::now();
        let mut lb = Lightbox::new();

        lb.navigate(&g, 1, now);
        assert_eq!(lb.current_index(), 0);
        assert!(!lb.is_transitioning());
    }

    #[test]
    fn test_swap_happens_between_the_phases() {
        let g = gallery(3);
        let now = Instant::now();
        let mut lb = Lightbox::new();
        lb.open(&g, Path::new("img-0.jpg"));

        lb.navigate(&g, 1, now);

        // Still the old image right through the fade-out
        lb.tick(&g, now + Duration::from_millis(100));
        assert_eq!(lb.current_index(), 0);
        lb.tick(&g, now + Duration::from_millis(199));
        assert_eq!(lb.current_index(), 0);

        // Swapped at the boundary, fade-in still running
        lb.tick(&g, now + FADE_OUT);
        assert_eq!(lb.current_index(), 1);
        assert_eq!(lb.source(), Some(Path::new("full-1.jpg")));
        assert!(lb.is_transitioning());

        lb.tick(&g, now + FADE_OUT + FADE_IN);
        assert!(!lb.is_transitioning());
    }

    #[test]
    fn test_mid_transition_navigation_queues_latest_only() {
        let g = gallery(4);
        let now = Instant::now();
        let mut lb = Lightbox::new();
        lb.open(&g, Path::new("img-0.jpg"));

        lb.navigate(&g, 1, now);
        // Two more requests while the crossfade runs; only the last sticks
        lb.navigate(&g, 1, now + Duration::from_millis(50));
        lb.navigate(&g, -1, now + Duration::from_millis(80));

        let end = settle(&mut lb, &g, now);
        // First transition landed on 1, queued -1 starts a new crossfade
        assert_eq!(lb.current_index(), 1);
        assert!(lb.is_transitioning());

        settle(&mut lb, &g, end);
        assert_eq!(lb.current_index(), 0);
        assert!(!lb.is_transitioning());
    }

    #[test]
    fn test_close_is_idempotent() {
        let g = gallery(2);
        let mut lb = Lightbox::new();
        lb.open(&g, Path::new("img-1.jpg"));

        assert!(lb.close());
        assert!(!lb.close());
        assert!(!lb.is_open());
    }

    #[test]
    fn test_counter_label() {
        let g = gallery(12);
        let mut lb = Lightbox::new();
        lb.open(&g, Path::new("img-2.jpg"));
        assert_eq!(lb.counter_label(&g), Some("3 / 12".to_string()));

        assert_eq!(Lightbox::new().counter_label(&Gallery::empty()), None);
    }

    #[test]
    fn test_visuals_are_neutral_outside_transitions() {
        let now = Instant::now();
        let lb = Lightbox::new();
        assert_eq!(lb.image_opacity(now), 1.0);
        assert_eq!(lb.image_scale(now), 1.0);
    }
}
