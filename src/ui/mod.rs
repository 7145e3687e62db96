/// View composition for the portfolio
///
/// - Page sections and layout map (sections.rs)
/// - Gallery grid (gallery.rs)
/// - Lightbox overlay (lightbox.rs)
/// - Menu overlay (menu.rs)
/// - Preloader overlay (preloader.rs)
/// - Custom cursor layer (cursor.rs)

pub mod cursor;
pub mod gallery;
pub mod lightbox;
pub mod menu;
pub mod preloader;
pub mod sections;
