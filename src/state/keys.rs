/// Keyboard routing for the portfolio's two modal features
///
/// Pure dispatch, no state of its own: the router only decides what a
/// key means given which feature is active. Escape prefers the lightbox
/// over the menu; arrow keys navigate only while the lightbox is open;
/// with both features closed every key is inert.

use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// What a key press should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseLightbox,
    CloseMenu,
    /// Step the lightbox by ±1
    Navigate(i32),
}

/// Map a key to an action, given the current feature states
pub fn route(key: &Key, lightbox_open: bool, menu_open: bool) -> Option<KeyAction> {
    let Key::Named(named) = key else {
        return None;
    };

    match named {
        Named::Escape => {
            if lightbox_open {
                Some(KeyAction::CloseLightbox)
            } else if menu_open {
                Some(KeyAction::CloseMenu)
            } else {
                None
            }
        }
        Named::ArrowRight | Named::ArrowDown if lightbox_open => Some(KeyAction::Navigate(1)),
        Named::ArrowLeft | Named::ArrowUp if lightbox_open => Some(KeyAction::Navigate(-1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(n: Named) -> Key {
        Key::Named(n)
    }

    #[test]
    fn test_escape_prefers_lightbox_over_menu() {
        // Even with the menu also open, Escape targets the lightbox
        assert_eq!(
            route(&named(Named::Escape), true, true),
            Some(KeyAction::CloseLightbox)
        );
        assert_eq!(
            route(&named(Named::Escape), true, false),
            Some(KeyAction::CloseLightbox)
        );
    }

    #[test]
    fn test_escape_closes_menu_when_lightbox_closed() {
        assert_eq!(
            route(&named(Named::Escape), false, true),
            Some(KeyAction::CloseMenu)
        );
    }

    #[test]
    fn test_escape_inert_when_nothing_open() {
        assert_eq!(route(&named(Named::Escape), false, false), None);
    }

    #[test]
    fn test_arrows_navigate_only_while_lightbox_open() {
        assert_eq!(
            route(&named(Named::ArrowRight), true, false),
            Some(KeyAction::Navigate(1))
        );
        assert_eq!(
            route(&named(Named::ArrowDown), true, false),
            Some(KeyAction::Navigate(1))
        );
        assert_eq!(
            route(&named(Named::ArrowLeft), true, false),
            Some(KeyAction::Navigate(-1))
        );
        assert_eq!(
            route(&named(Named::ArrowUp), true, false),
            Some(KeyAction::Navigate(-1))
        );

        // Closed lightbox: arrows are inert, menu or not
        assert_eq!(route(&named(Named::ArrowRight), false, false), None);
        assert_eq!(route(&named(Named::ArrowLeft), false, true), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(route(&named(Named::Enter), true, true), None);
        assert_eq!(
            route(&Key::Character("j".into()), true, false),
            None
        );
    }
}
