//! HTTP helpers for the widget data sources.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every fetch resolves to
//! `FetchError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `FetchError`s instead of panics; the refresh cycles in
//! `util::refresh` turn every error into fallback text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{GeoPayload, QuotePayload, WeatherPayload};
use crate::config::SiteConfig;

/// Why a widget fetch produced no usable payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(String),
    #[error("not available on server")]
    Unavailable,
}

/// Source of quote-of-the-moment payloads.
pub trait QuoteSource {
    fn fetch_quote(&self) -> impl Future<Output = Result<QuotePayload, FetchError>>;
}

/// Source of geolocation and weather payloads.
pub trait WeatherSource {
    fn locate(&self) -> impl Future<Output = Result<GeoPayload, FetchError>>;
    fn fetch_weather(&self, city: &str) -> impl Future<Output = Result<WeatherPayload, FetchError>>;
}

/// Query parameters for a weather-by-city request.
#[must_use]
pub fn weather_query(city: &str, key: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![("location", city.to_owned())];
    if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
        query.push(("key", key.to_owned()));
    }
    query
}

/// Browser-backed widget feeds configured from `SiteConfig`.
#[derive(Clone, Debug)]
pub struct HttpFeeds {
    quote_endpoint: String,
    quote_fade_ms: u32,
    geo_endpoint: String,
    weather_endpoint: String,
    weather_key: Option<String>,
}

impl HttpFeeds {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            quote_endpoint: config.quote_endpoint.clone(),
            quote_fade_ms: config.quote_fade_ms,
            geo_endpoint: config.geo_endpoint.clone(),
            weather_endpoint: config.weather_endpoint.clone(),
            weather_key: config.weather_key.clone(),
        }
    }
}

impl QuoteSource for HttpFeeds {
    /// Waits out the fade delay, then requests a quote.
    async fn fetch_quote(&self) -> Result<QuotePayload, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(self.quote_fade_ms))).await;
            get_json(&self.quote_endpoint, &[]).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.quote_endpoint, self.quote_fade_ms);
            Err(FetchError::Unavailable)
        }
    }
}

impl WeatherSource for HttpFeeds {
    async fn locate(&self) -> Result<GeoPayload, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&self.geo_endpoint, &[]).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.geo_endpoint;
            Err(FetchError::Unavailable)
        }
    }

    async fn fetch_weather(&self, city: &str) -> Result<WeatherPayload, FetchError> {
        let query = weather_query(city, self.weather_key.as_deref());
        #[cfg(feature = "hydrate")]
        {
            get_json(&self.weather_endpoint, &query).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.weather_endpoint, query);
            Err(FetchError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, query: &[(&'static str, String)]) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| FetchError::Payload(e.to_string()))
}
