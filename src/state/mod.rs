/// Interaction state for the portfolio page
///
/// This module owns everything the page mutates at runtime:
/// - The session context tying the features together (session.rs)
/// - The gallery index built once at startup (gallery.rs)
/// - The lightbox state machine (lightbox.rs)
/// - The shared scroll lock (scroll_lock.rs)
/// - Smooth scrolling (scroll.rs)
/// - Keyboard routing (keys.rs)

pub mod gallery;
pub mod keys;
pub mod lightbox;
pub mod scroll;
pub mod scroll_lock;
pub mod session;
