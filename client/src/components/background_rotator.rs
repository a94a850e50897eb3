//! Full-page rotating background image.
//!
//! DESIGN
//! ======
//! The image is written to `<body>`'s inline `background-image`, which sits
//! outside the view tree, so the component renders nothing itself. No load
//! failure handling: a broken image leaves the browser's default behavior.

#[cfg(test)]
#[path = "background_rotator_test.rs"]
mod background_rotator_test;

use leptos::prelude::*;

use crate::state::background::{BackgroundState, css_background_image};
use crate::util::page::Page;
#[cfg(feature = "hydrate")]
use crate::{config::SiteConfig, util::page::BodyPage, util::repeating::RepeatingTask};

pub const BACKGROUND_PROPERTY: &str = "background-image";

/// Advance one rotation and apply the new image to `page`.
pub fn rotate(page: &impl Page, state: &mut BackgroundState, base: &str, topics: &[String]) {
    let url = state.advance(base, topics);
    page.set_style(BACKGROUND_PROPERTY, &css_background_image(url));
}

#[component]
pub fn BackgroundRotator() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let site = expect_context::<SiteConfig>();
        let ticker = StoredValue::new_local(None::<RepeatingTask>);
        Effect::new(move || {
            if ticker.with_value(Option::is_some) {
                return;
            }
            let base = site.background_base.clone();
            let topics = site.background_topics.clone();
            let mut state = BackgroundState::default();
            let task = RepeatingTask::start(site.background_period(), move || {
                rotate(&BodyPage, &mut state, &base, &topics);
            });
            ticker.set_value(Some(task));
        });
        on_cleanup(move || ticker.dispose());
    }
}
