/// Session context: the one owner of the page's interactive state
///
/// The menu flag, lightbox and gallery index live in a single
/// session-scoped struct constructed once at startup and owned by the
/// application; the keyboard router and the feature controllers all
/// operate through it, and all scroll-lock composition goes through the
/// shared `ScrollLock`.

use std::path::Path;
use std::time::Instant;

use iced::keyboard::Key;

use super::gallery::Gallery;
use super::keys::{self, KeyAction};
use super::lightbox::Lightbox;
use super::scroll_lock::{Holder, ScrollLock};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub gallery: Gallery,
    pub lightbox: Lightbox,
    menu_open: bool,
    scroll_lock: ScrollLock,
    gallery_installed: bool,
}

impl Session {
    /// A fresh session with an empty gallery (pre-scan)
    pub fn new() -> Self {
        Self {
            gallery: Gallery::empty(),
            lightbox: Lightbox::new(),
            menu_open: false,
            scroll_lock: ScrollLock::new(),
            gallery_installed: false,
        }
    }

    /// Install the scanned gallery. The index is built exactly once; a
    /// second call is ignored.
    pub fn install_gallery(&mut self, gallery: Gallery) {
        if self.gallery_installed {
            return;
        }
        self.gallery = gallery;
        self.gallery_installed = true;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether smooth scrolling is currently suspended by any feature
    pub fn scroll_suspended(&self) -> bool {
        self.scroll_lock.is_suspended()
    }

    /// Flip the menu. Opening suspends scrolling; closing releases the
    /// menu's hold (the page stays frozen if the lightbox still needs it).
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.scroll_lock.suspend(Holder::Menu);
        } else {
            self.scroll_lock.resume(Holder::Menu);
        }
    }

    /// Open the lightbox on the clicked thumbnail and suspend scrolling
    pub fn open_lightbox(&mut self, clicked: &Path) {
        if self.lightbox.open(&self.gallery, clicked) {
            self.scroll_lock.suspend(Holder::Lightbox);
        }
    }

    /// Close the lightbox and release its hold on the scroll lock
    pub fn close_lightbox(&mut self) {
        if self.lightbox.close() {
            self.scroll_lock.resume(Holder::Lightbox);
        }
    }

    pub fn navigate_lightbox(&mut self, direction: i32, now: Instant) {
        self.lightbox.navigate(&self.gallery, direction, now);
    }

    /// Advance in-flight lightbox transitions
    pub fn tick(&mut self, now: Instant) {
        self.lightbox.tick(&self.gallery, now);
    }

    /// Route and apply a key press. Returns true when the key did
    /// something, so the caller knows a redraw-worthy change happened.
    pub fn handle_key(&mut self, key: &Key, now: Instant) -> bool {
        match keys::route(key, self.lightbox.is_open(), self.menu_open) {
            Some(KeyAction::CloseLightbox) => {
                self.close_lightbox();
                true
            }
            Some(KeyAction::CloseMenu) => {
                self.toggle_menu();
                true
            }
            Some(KeyAction::Navigate(direction)) => {
                self.navigate_lightbox(direction, now);
                true
            }
            None => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::GalleryImage;
    use iced::keyboard::key::Named;
    use std::path::PathBuf;

    fn session(n: usize) -> Session {
        let mut s = Session::new();
        s.install_gallery(Gallery::from_images(
            (0..n)
                .map(|i| GalleryImage {
                    path: PathBuf::from(format!("img-{}.jpg", i)),
                    full_path: PathBuf::from(format!("img-{}.jpg", i)),
                })
                .collect(),
        ));
        s
    }

    #[test]
    fn test_gallery_installed_once() {
        let mut s = session(3);
        s.install_gallery(Gallery::empty());
        assert_eq!(s.gallery.len(), 3);
    }

    #[test]
    fn test_open_suspends_scrolling() {
        let mut s = session(3);
        s.open_lightbox(Path::new("img-1.jpg"));
        assert!(s.lightbox.is_open());
        assert_eq!(s.lightbox.current_index(), 1);
        assert!(s.scroll_suspended());
    }

    #[test]
    fn test_close_with_menu_open_keeps_scroll_suspended() {
        let mut s = session(3);
        s.toggle_menu();
        s.open_lightbox(Path::new("img-0.jpg"));

        s.close_lightbox();
        assert!(s.scroll_suspended());
    }

    #[test]
    fn test_close_with_menu_closed_resumes_scrolling() {
        let mut s = session(3);
        s.open_lightbox(Path::new("img-0.jpg"));

        s.close_lightbox();
        assert!(!s.scroll_suspended());
    }

    #[test]
    fn test_menu_close_keeps_lightbox_hold() {
        // Closing the menu over an open lightbox must not unfreeze
        // the page.
        let mut s = session(3);
        s.open_lightbox(Path::new("img-0.jpg"));
        s.toggle_menu();
        s.toggle_menu();
        assert!(s.scroll_suspended());
    }

    #[test]
    fn test_escape_closes_lightbox_not_menu() {
        let mut s = session(3);
        s.toggle_menu();
        s.open_lightbox(Path::new("img-2.jpg"));

        assert!(s.handle_key(&Key::Named(Named::Escape), Instant::now()));
        assert!(!s.lightbox.is_open());
        assert!(s.is_menu_open());
        // And the page stays frozen for the still-open menu
        assert!(s.scroll_suspended());
    }

    #[test]
    fn test_escape_then_closes_menu() {
        let mut s = session(3);
        s.toggle_menu();

        assert!(s.handle_key(&Key::Named(Named::Escape), Instant::now()));
        assert!(!s.is_menu_open());
        assert!(!s.scroll_suspended());
    }

    #[test]
    fn test_keys_inert_when_nothing_open() {
        let mut s = session(3);
        assert!(!s.handle_key(&Key::Named(Named::Escape), Instant::now()));
        assert!(!s.handle_key(&Key::Named(Named::ArrowRight), Instant::now()));
        assert_eq!(s.lightbox.current_index(), 0);
    }
}
