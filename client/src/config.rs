//! Site configuration shared by the host server and the browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a `SiteConfig` from its environment and embeds it in the
//! rendered shell as a `<meta>` tag; the browser reads it back at hydration.
//! Every field has a default so a missing or partial tag still yields a
//! working page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// `name` of the `<meta>` tag carrying the serialized config.
pub const SITE_CONFIG_META: &str = "homepage-config";

pub const DEFAULT_TITLE: &str = "TangShiMei";
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://v1.hitokoto.cn/?max_length=40";
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co/json/";
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://devapi.qweather.com/v7/weather/now";
pub const DEFAULT_BACKGROUND_BASE: &str = "https://source.unsplash.com/random/1920x1080/";

pub const DEFAULT_CLOCK_INTERVAL_MS: u32 = 1_000;
pub const DEFAULT_QUOTE_INTERVAL_MS: u32 = 15_000;
pub const DEFAULT_QUOTE_FADE_MS: u32 = 500;
pub const DEFAULT_WEATHER_INTERVAL_MS: u32 = 30 * 60 * 1_000;
pub const DEFAULT_BACKGROUND_INTERVAL_MS: u32 = 10 * 60 * 1_000;

/// Endpoints, refresh intervals, and optional API key for the homepage widgets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub quote_endpoint: String,
    pub geo_endpoint: String,
    pub weather_endpoint: String,
    pub weather_key: Option<String>,
    pub background_base: String,
    pub background_topics: Vec<String>,
    pub clock_interval_ms: u32,
    pub quote_interval_ms: u32,
    pub quote_fade_ms: u32,
    pub weather_interval_ms: u32,
    pub background_interval_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_owned(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_owned(),
            weather_endpoint: DEFAULT_WEATHER_ENDPOINT.to_owned(),
            weather_key: None,
            background_base: DEFAULT_BACKGROUND_BASE.to_owned(),
            background_topics: vec!["nature".to_owned(), "light".to_owned()],
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            quote_interval_ms: DEFAULT_QUOTE_INTERVAL_MS,
            quote_fade_ms: DEFAULT_QUOTE_FADE_MS,
            weather_interval_ms: DEFAULT_WEATHER_INTERVAL_MS,
            background_interval_ms: DEFAULT_BACKGROUND_INTERVAL_MS,
        }
    }
}

impl SiteConfig {
    /// Serialize for the `content` attribute of the config `<meta>` tag.
    #[must_use]
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse the `content` attribute of the config `<meta>` tag.
    ///
    /// Malformed content falls back to defaults.
    #[must_use]
    pub fn from_meta_content(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    #[must_use]
    pub fn clock_period(&self) -> Duration {
        period(self.clock_interval_ms)
    }

    #[must_use]
    pub fn quote_period(&self) -> Duration {
        period(self.quote_interval_ms)
    }

    #[must_use]
    pub fn weather_period(&self) -> Duration {
        period(self.weather_interval_ms)
    }

    #[must_use]
    pub fn background_period(&self) -> Duration {
        period(self.background_interval_ms)
    }
}

/// Intervals are floored at 1 ms so a zero value cannot spin the event loop.
fn period(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms.max(1)))
}
