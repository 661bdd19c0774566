//! Dark-mode state shared by the host and its widgets.
//!
//! The host owns a [`ThemeSignal`]; widgets receive a [`ThemeWatch`] at
//! construction and read the theme through it instead of probing any global
//! state themselves.

use std::cell::Cell;
use std::rc::Rc;

/// Terminal colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Colours for a light background.
    #[default]
    Light,
    /// Colours for a dark background.
    Dark,
}

impl Theme {
    /// The theme for a dark-mode flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Parse `dark` or `light`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Default)]
struct ThemeState {
    dark: Cell<bool>,
}

/// An observable dark-mode flag. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ThemeSignal {
    state: Rc<ThemeState>,
}

impl ThemeSignal {
    /// A signal starting at `theme`.
    pub fn new(theme: Theme) -> Self {
        let signal = Self::default();
        signal.state.dark.set(theme.is_dark());
        signal
    }

    /// The current theme.
    pub fn get(&self) -> Theme {
        Theme::from_dark(self.state.dark.get())
    }

    /// Change the theme. Setting the current value again is a no-op.
    pub fn set(&self, theme: Theme) {
        if self.get() == theme {
            return;
        }
        self.state.dark.set(theme.is_dark());
        tracing::debug!(%theme, "theme changed");
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&self) -> Theme {
        let next = Theme::from_dark(!self.get().is_dark());
        self.set(next);
        next
    }

    /// A read-only handle onto this signal.
    pub fn subscribe(&self) -> ThemeWatch {
        ThemeWatch {
            signal: self.clone(),
        }
    }
}

/// A widget's read-only view of a [`ThemeSignal`]. Every read sees the
/// latest value, so holders never cache a theme.
#[derive(Debug, Clone)]
pub struct ThemeWatch {
    signal: ThemeSignal,
}

impl ThemeWatch {
    /// The current theme.
    pub fn current(&self) -> Theme {
        self.signal.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_sees_current_value() {
        let signal = ThemeSignal::new(Theme::Dark);
        let watch = signal.subscribe();
        assert_eq!(watch.current(), Theme::Dark);
        signal.set(Theme::Light);
        assert_eq!(watch.current(), Theme::Light);
    }

    #[test]
    fn watches_taken_earlier_follow_toggles() {
        let signal = ThemeSignal::default();
        let first = signal.subscribe();
        let second = first.clone();
        assert_eq!(signal.toggle(), Theme::Dark);
        assert_eq!(first.current(), Theme::Dark);
        assert_eq!(second.current(), Theme::Dark);
        signal.set(Theme::Dark);
        assert_eq!(first.current(), Theme::Dark);
        assert_eq!(signal.toggle(), Theme::Light);
        assert_eq!(second.current(), Theme::Light);
    }

    #[test]
    fn clones_share_state() {
        let signal = ThemeSignal::default();
        let other = signal.clone();
        assert_eq!(other.toggle(), Theme::Dark);
        assert_eq!(signal.get(), Theme::Dark);
    }

    #[test]
    fn parse_theme() {
        assert_eq!(Theme::parse("Dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
