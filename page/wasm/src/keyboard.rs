//! Keyboard shortcuts.
//!
//! Exactly two bindings are recognised:
//!
//! - platform modifier + `K` (⌘ on Apple platforms, Ctrl elsewhere) focuses
//!   the search box from anywhere on the page
//! - `Escape` while the search box has focus clears the search
//!
//! Everything else passes through untouched. Resolution is pure so it can
//! be tested without a browser; the widget feeds it from `keydown` events.

/// Action bound to a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Move focus to the search input (default browser action suppressed)
    FocusSearch,
    /// Empty the search input and reset the search filter
    ClearSearch,
}

/// Which key acts as the shortcut modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    /// Apple platforms: ⌘ (meta)
    Apple,
    /// Everything else: Ctrl
    #[default]
    Other,
}

impl Platform {
    /// Classify a `navigator.platform` / user agent string.
    pub fn from_navigator(platform: &str) -> Self {
        const APPLE: [&str; 4] = ["Mac", "iPhone", "iPad", "iPod"];
        if APPLE.iter().any(|p| platform.contains(p)) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }
}

/// The parts of a `KeyboardEvent` that matter for shortcut resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyPress<'a> {
    /// `KeyboardEvent.key`
    pub key: &'a str,
    /// Ctrl held
    pub ctrl: bool,
    /// Meta (⌘ / Windows key) held
    pub meta: bool,
    /// Alt / Option held
    pub alt: bool,
}

impl KeyPress<'_> {
    fn platform_modifier(&self, platform: Platform) -> bool {
        match platform {
            Platform::Apple => self.meta && !self.ctrl,
            Platform::Other => self.ctrl && !self.meta,
        }
    }
}

/// Resolve a key press to a shortcut, if it is one.
pub fn resolve(press: &KeyPress<'_>, platform: Platform, search_focused: bool) -> Option<Shortcut> {
    if press.key.eq_ignore_ascii_case("k") && press.platform_modifier(platform) && !press.alt {
        return Some(Shortcut::FocusSearch);
    }
    if press.key == "Escape" && search_focused {
        return Some(Shortcut::ClearSearch);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str) -> KeyPress<'_> {
        KeyPress {
            key,
            ..Default::default()
        }
    }

    #[test]
    fn cmd_k_on_apple() {
        let cmd_k = KeyPress {
            meta: true,
            ..press("k")
        };
        assert_eq!(resolve(&cmd_k, Platform::Apple, false), Some(Shortcut::FocusSearch));
        // Ctrl+K is not the Apple shortcut
        let ctrl_k = KeyPress {
            ctrl: true,
            ..press("k")
        };
        assert_eq!(resolve(&ctrl_k, Platform::Apple, false), None);
    }

    #[test]
    fn ctrl_k_elsewhere_regardless_of_focus_or_case() {
        let ctrl_k = KeyPress {
            ctrl: true,
            ..press("K")
        };
        assert_eq!(resolve(&ctrl_k, Platform::Other, false), Some(Shortcut::FocusSearch));
        assert_eq!(resolve(&ctrl_k, Platform::Other, true), Some(Shortcut::FocusSearch));
    }

    #[test]
    fn plain_k_and_alt_k_pass_through() {
        assert_eq!(resolve(&press("k"), Platform::Other, true), None);
        let ctrl_alt_k = KeyPress {
            ctrl: true,
            alt: true,
            ..press("k")
        };
        assert_eq!(resolve(&ctrl_alt_k, Platform::Other, false), None);
    }

    #[test]
    fn escape_only_while_search_focused() {
        assert_eq!(resolve(&press("Escape"), Platform::Other, false), None);
        assert_eq!(
            resolve(&press("Escape"), Platform::Other, true),
            Some(Shortcut::ClearSearch)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in ["Enter", "a", "/", "Tab", "ArrowDown"] {
            assert_eq!(resolve(&press(key), Platform::Apple, true), None);
        }
        let ctrl_c = KeyPress {
            ctrl: true,
            ..press("c")
        };
        assert_eq!(resolve(&ctrl_c, Platform::Other, true), None);
    }

    #[test]
    fn platform_detection() {
        assert_eq!(Platform::from_navigator("MacIntel"), Platform::Apple);
        assert_eq!(Platform::from_navigator("iPhone"), Platform::Apple);
        assert_eq!(Platform::from_navigator("Win32"), Platform::Other);
        assert_eq!(Platform::from_navigator("Linux x86_64"), Platform::Other);
        assert_eq!(Platform::from_navigator(""), Platform::Other);
    }
}
