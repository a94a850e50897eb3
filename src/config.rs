//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

use client::config::SiteConfig;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// All optional:
    /// - `PORT`: default 3000
    /// - `HOMEPAGE_TITLE`
    /// - `QUOTE_ENDPOINT`, `GEO_ENDPOINT`, `WEATHER_ENDPOINT`
    /// - `WEATHER_API_KEY`: blank means no key
    /// - `BACKGROUND_BASE`, `BACKGROUND_TOPICS` (comma separated)
    /// - `CLOCK_INTERVAL_MS`, `QUOTE_INTERVAL_MS`, `WEATHER_INTERVAL_MS`,
    ///   `BACKGROUND_INTERVAL_MS`
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if a numeric value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if a numeric value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT, "port number")?;

        let mut site = SiteConfig::default();
        if let Some(title) = get("HOMEPAGE_TITLE") {
            site.title = title;
        }
        if let Some(url) = get("QUOTE_ENDPOINT") {
            site.quote_endpoint = url;
        }
        if let Some(url) = get("GEO_ENDPOINT") {
            site.geo_endpoint = url;
        }
        if let Some(url) = get("WEATHER_ENDPOINT") {
            site.weather_endpoint = url;
        }
        site.weather_key = get("WEATHER_API_KEY");
        if let Some(url) = get("BACKGROUND_BASE") {
            site.background_base = url;
        }
        if let Some(raw) = get("BACKGROUND_TOPICS") {
            site.background_topics = parse_topics(&raw);
        }
        let interval = |var: &'static str, default: u32| parse_or(var, get(var), default, "millisecond interval");
        site.clock_interval_ms = interval("CLOCK_INTERVAL_MS", site.clock_interval_ms)?;
        site.quote_interval_ms = interval("QUOTE_INTERVAL_MS", site.quote_interval_ms)?;
        site.weather_interval_ms = interval("WEATHER_INTERVAL_MS", site.weather_interval_ms)?;
        site.background_interval_ms = interval("BACKGROUND_INTERVAL_MS", site.background_interval_ms)?;

        Ok(Self { port, site })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value, expected }),
    }
}

fn parse_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
