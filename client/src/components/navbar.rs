//! Top navigation bar with the site title and theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;

#[component]
pub fn Navbar() -> impl IntoView {
    let site = expect_context::<SiteConfig>();

    view! {
        <nav class="navbar">
            <h1 class="navbar__title">{site.title}</h1>
            <ThemeToggle/>
        </nav>
    }
}
