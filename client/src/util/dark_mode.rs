//! Dark mode restore and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a `dark`
//! class to `<body>`. Toggle writes back to `localStorage` and updates that
//! class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! and unavailable storage safely no-op, which reads back as light mode.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{ThemeAction, ThemeMode, reduce};
use crate::util::page::Page;

pub const STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

/// Key-value storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Browser `localStorage` under `STORAGE_KEY`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(STORAGE_KEY, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}

/// Read the persisted preference and apply it to the page.
pub fn restore(store: &impl PreferenceStore, page: &impl Page) -> ThemeMode {
    let stored = ThemeMode::from_stored(store.load().as_deref());
    let mode = reduce(ThemeMode::default(), ThemeAction::Restore(stored));
    apply(page, mode);
    mode
}

/// Flip the mode the page shows and persist what the page ends up showing.
///
/// `current` only stands in for the page when it cannot be read.
pub fn toggle(store: &impl PreferenceStore, page: &impl Page, current: ThemeMode) -> ThemeMode {
    let shown = applied(page).unwrap_or(current);
    let requested = reduce(shown, ThemeAction::Toggle);
    apply(page, requested);
    let next = applied(page).unwrap_or(requested);
    store.save(next.as_stored());
    next
}

/// Apply the `dark` class.
pub fn apply(page: &impl Page, mode: ThemeMode) {
    page.set_class(DARK_CLASS, mode.is_dark());
}

/// Mode currently applied to the page, if there is one.
pub fn applied(page: &impl Page) -> Option<ThemeMode> {
    page.has_class(DARK_CLASS).map(ThemeMode::from_dark)
}
