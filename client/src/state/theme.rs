//! Theme mode state and its pure reducer.
//!
//! DESIGN
//! ======
//! The mode lives in a `RwSignal<ThemeMode>` context. Transitions go through
//! `reduce` so the next state never depends on side effects; applying the
//! mode to the page and persisting it is `util::dark_mode`'s job.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Stored value marking a dark preference. Anything else reads as light.
pub const DARK_SENTINEL: &str = "dark";
pub const LIGHT_SENTINEL: &str = "light";

/// Applied visual variant of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Inputs to the theme reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    /// User activated the toggle control.
    Toggle,
    /// Page load restored a persisted mode.
    Restore(ThemeMode),
}

impl ThemeMode {
    /// Interpret a raw stored preference. Absent or unrecognized means light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(DARK_SENTINEL) => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => DARK_SENTINEL,
            Self::Light => LIGHT_SENTINEL,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Glyph shown on the toggle control: the mode a click would switch to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

/// Compute the next theme mode.
#[must_use]
pub fn reduce(previous: ThemeMode, action: ThemeAction) -> ThemeMode {
    match action {
        ThemeAction::Toggle => previous.flipped(),
        ThemeAction::Restore(mode) => mode,
    }
}
