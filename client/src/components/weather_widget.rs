//! Local weather widget.

use leptos::prelude::*;

use crate::state::widget::{WEATHER_PLACEHOLDER, WidgetView};
#[cfg(feature = "hydrate")]
use crate::{
    config::SiteConfig,
    net::api::HttpFeeds,
    util::{refresh::refresh_weather, repeating::RepeatingTask},
};

/// Visitor's city weather, geolocated by IP and refreshed on an interval.
#[component]
pub fn WeatherWidget() -> impl IntoView {
    let weather = RwSignal::new(WidgetView::placeholder(WEATHER_PLACEHOLDER));

    #[cfg(feature = "hydrate")]
    {
        let site = expect_context::<SiteConfig>();
        let ticker = StoredValue::new_local(None::<RepeatingTask>);
        Effect::new(move || {
            if ticker.with_value(Option::is_some) {
                return;
            }
            let feeds = HttpFeeds::new(&site);
            let task = RepeatingTask::start_immediate(site.weather_period(), move || {
                let feeds = feeds.clone();
                leptos::task::spawn_local(async move {
                    refresh_weather(&feeds, Some(&weather)).await;
                });
            });
            ticker.set_value(Some(task));
        });
        on_cleanup(move || ticker.dispose());
    }

    view! {
        <p id="weather" class="widget widget--weather" class:widget--loading=move || weather.with(|w| w.loading)>
            {move || weather.with(|w| w.text.clone())}
        </p>
    }
}
