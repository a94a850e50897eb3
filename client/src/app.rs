//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{SITE_CONFIG_META, SiteConfig};
use crate::pages::home::HomePage;
use crate::state::theme::ThemeMode;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `site` is provided as context for the server render and embedded as a
/// `<meta>` tag so the browser sees the same configuration.
pub fn shell(options: LeptosOptions, site: SiteConfig) -> impl IntoView {
    let config_meta = site.to_meta_content();
    provide_context(site);

    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=SITE_CONFIG_META content=config_meta/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides site config and theme contexts and restores the persisted theme
/// once mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = use_context::<SiteConfig>().unwrap_or_else(crate::util::site_config::read);
    let title = site.title.clone();
    provide_context(site);

    let theme = RwSignal::new(ThemeMode::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::dark_mode::{self, LocalStore};
        use crate::util::page::BodyPage;
        Effect::new(move || {
            theme.set(dark_mode::restore(&LocalStore, &BodyPage));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/homepage.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
