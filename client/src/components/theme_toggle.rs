//! Dark mode toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeMode;
use crate::util::dark_mode::{self, LocalStore};
use crate::util::page::BodyPage;

/// Navbar button flipping the page theme and persisting the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeMode>>();

    let on_click = move |_| {
        let next = dark_mode::toggle(&LocalStore, &BodyPage, theme.get_untracked());
        theme.set(next);
    };

    view! {
        <button
            id="theme-toggle"
            class="navbar__toggle"
            on:click=on_click
            title=move || theme.get().toggle_label()
            aria-label=move || theme.get().toggle_label()
        >
            {move || theme.get().toggle_icon()}
        </button>
    }
}
