//! Refresh cycles: one timer tick's worth of fetch-and-render work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components schedule these with `RepeatingTask` and point them at a
//! `DisplayRegion`. A missing region turns the cycle into a no-op.
//!
//! ERROR HANDLING
//! ==============
//! Fetch errors are logged and rendered as fixed fallback text. Nothing is
//! returned to the caller, so no rejection can go unhandled. Overlapping
//! cycles are neither cancelled nor coalesced: the last one to resolve wins.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use chrono::{Datelike, Timelike};
use leptos::prelude::{RwSignal, Update};

use crate::net::api::{FetchError, QuoteSource, WeatherSource};
use crate::state::clock::clock_text;
use crate::state::widget::{WEATHER_FALLBACK, WEATHER_STATUS_FAILED, WidgetView, weather_line};

/// Somewhere a refresh cycle can render its state.
pub trait DisplayRegion<T> {
    fn render(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> DisplayRegion<T> for RwSignal<T> {
    fn render(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

/// Write the current clock line into `region`.
pub fn refresh_clock<T, R>(region: Option<&R>, now: &T)
where
    T: Datelike + Timelike,
    R: DisplayRegion<String>,
{
    let Some(region) = region else {
        return;
    };
    let text = clock_text(now);
    region.render(|current| *current = text);
}

/// Fetch a quote and render it, falling back on any failure.
pub async fn refresh_quote<S, R>(source: &S, region: Option<&R>)
where
    S: QuoteSource,
    R: DisplayRegion<WidgetView>,
{
    let Some(region) = region else {
        return;
    };
    region.render(WidgetView::begin_refresh);
    match source.fetch_quote().await {
        Ok(quote) => region.render(|view| view.show_quote(&quote)),
        Err(e) => {
            leptos::logging::warn!("quote refresh failed: {e}");
            region.render(WidgetView::show_quote_fallback);
        }
    }
}

/// Locate the visitor, fetch weather for their city, and render it.
pub async fn refresh_weather<S, R>(source: &S, region: Option<&R>)
where
    S: WeatherSource,
    R: DisplayRegion<WidgetView>,
{
    let Some(region) = region else {
        return;
    };
    region.render(WidgetView::begin_refresh);
    match weather_outcome(source).await {
        Ok(Some(line)) => region.render(|view| view.show_line(line)),
        Ok(None) => region.render(|view| view.show_fallback(WEATHER_STATUS_FAILED)),
        Err(e) => {
            leptos::logging::warn!("weather refresh failed: {e}");
            region.render(|view| view.show_fallback(WEATHER_FALLBACK));
        }
    }
}

/// `Ok(None)` when the payload's embedded status reports failure.
async fn weather_outcome<S: WeatherSource>(source: &S) -> Result<Option<String>, FetchError> {
    let geo = source.locate().await?;
    let city = geo.city.trim();
    if city.is_empty() {
        return Err(FetchError::Payload("geolocation returned no city".to_owned()));
    }
    let payload = source.fetch_weather(city).await?;
    Ok(payload.conditions().map(|now| weather_line(city, now)))
}
