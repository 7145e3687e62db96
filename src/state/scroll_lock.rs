/// Shared scroll-lock for features that need the page frozen underneath them
///
/// Both the menu overlay and the lightbox suspend smooth scrolling while
/// they are open. Instead of each feature peeking at the other's flag
/// before resuming, the lock tracks which holders currently require
/// suspension; scrolling resumes only once every holder has released.

/// A feature that can hold the scroll lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holder {
    /// The full-screen navigation menu
    Menu,
    /// The lightbox image viewer
    Lightbox,
}

/// Exclusive "smooth scroll disabled" resource shared by menu and lightbox
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    menu: bool,
    lightbox: bool,
}

impl ScrollLock {
    /// Create a released lock (scrolling enabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend scrolling on behalf of `holder`. Idempotent per holder.
    pub fn suspend(&mut self, holder: Holder) {
        match holder {
            Holder::Menu => self.menu = true,
            Holder::Lightbox => self.lightbox = true,
        }
    }

    /// Release `holder`'s suspension. Scrolling only actually resumes
    /// once no other holder remains. Idempotent per holder.
    pub fn resume(&mut self, holder: Holder) {
        match holder {
            Holder::Menu => self.menu = false,
            Holder::Lightbox => self.lightbox = false,
        }
    }

    /// Whether any feature currently requires scrolling suspended
    pub fn is_suspended(&self) -> bool {
        self.menu || self.lightbox
    }

    /// Whether a specific feature currently holds the lock
    pub fn holds(&self, holder: Holder) -> bool {
        match holder {
            Holder::Menu => self.menu,
            Holder::Lightbox => self.lightbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lock_is_released() {
        let lock = ScrollLock::new();
        assert!(!lock.is_suspended());
    }

    #[test]
    fn test_single_holder_suspend_resume() {
        let mut lock = ScrollLock::new();
        lock.suspend(Holder::Lightbox);
        assert!(lock.is_suspended());

        lock.resume(Holder::Lightbox);
        assert!(!lock.is_suspended());
    }

    #[test]
    fn test_release_waits_for_all_holders() {
        // Lightbox closed while the menu is still open: stays suspended.
        let mut lock = ScrollLock::new();
        lock.suspend(Holder::Menu);
        lock.suspend(Holder::Lightbox);

        lock.resume(Holder::Lightbox);
        assert!(lock.is_suspended());
        assert!(lock.holds(Holder::Menu));

        lock.resume(Holder::Menu);
        assert!(!lock.is_suspended());
    }

    #[test]
    fn test_menu_release_does_not_unlock_lightbox() {
        // The inverse ordering: closing the menu while the lightbox is
        // open must also keep the page frozen.
        let mut lock = ScrollLock::new();
        lock.suspend(Holder::Lightbox);
        lock.suspend(Holder::Menu);

        lock.resume(Holder::Menu);
        assert!(lock.is_suspended());
    }

    #[test]
    fn test_suspend_is_idempotent() {
        let mut lock = ScrollLock::new();
        lock.suspend(Holder::Menu);
        lock.suspend(Holder::Menu);
        lock.resume(Holder::Menu);
        assert!(!lock.is_suspended());
    }
}
