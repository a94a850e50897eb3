//! Quote-of-the-moment widget.

use leptos::prelude::*;

use crate::state::widget::{QUOTE_PLACEHOLDER, WidgetView};
#[cfg(feature = "hydrate")]
use crate::{
    config::SiteConfig,
    net::api::HttpFeeds,
    util::{refresh::refresh_quote, repeating::RepeatingTask},
};

/// Quote text plus attribution; fades while a refresh is in flight.
#[component]
pub fn QuoteWidget() -> impl IntoView {
    let quote = RwSignal::new(WidgetView::placeholder(QUOTE_PLACEHOLDER));

    #[cfg(feature = "hydrate")]
    {
        let site = expect_context::<SiteConfig>();
        let ticker = StoredValue::new_local(None::<RepeatingTask>);
        Effect::new(move || {
            if ticker.with_value(Option::is_some) {
                return;
            }
            let feeds = HttpFeeds::new(&site);
            let task = RepeatingTask::start_immediate(site.quote_period(), move || {
                let feeds = feeds.clone();
                leptos::task::spawn_local(async move {
                    refresh_quote(&feeds, Some(&quote)).await;
                });
            });
            ticker.set_value(Some(task));
        });
        on_cleanup(move || ticker.dispose());
    }

    let loading = move || quote.with(|q| q.loading);

    view! {
        <blockquote class="widget widget--quote">
            <p id="hitokoto" class="widget__text" class:hitokoto-fade=loading>
                {move || quote.with(|q| q.text.clone())}
            </p>
            <p id="hitokoto-from" class="widget__source" class:hitokoto-fade=loading>
                {move || quote.with(|q| q.attribution.clone())}
            </p>
        </blockquote>
    }
}
