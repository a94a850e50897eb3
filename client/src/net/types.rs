//! Response payloads for the third-party widget endpoints.
//!
//! DESIGN
//! ======
//! Only the fields the widgets render are modeled; unknown fields are
//! ignored. Weather APIs disagree on whether numbers arrive quoted, so
//! numeric readings accept either form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Embedded status code a weather payload reports on success.
pub const WEATHER_SUCCESS_CODE: &str = "200";

/// A scalar that may be sent as a JSON string or number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Text(String),
    Number(f64),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text.trim()),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Quote-of-the-moment response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuotePayload {
    /// Quote text.
    pub hitokoto: String,
    /// Source work or author, when known.
    #[serde(default)]
    pub from: Option<String>,
}

/// IP-geolocation response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPayload {
    pub city: String,
}

/// Current-conditions block of a weather response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherNow {
    /// Human-readable conditions, e.g. "晴".
    pub text: String,
    /// Temperature in °C.
    pub temp: Reading,
    /// Apparent temperature in °C.
    #[serde(rename = "feelsLike")]
    pub feels_like: Reading,
}

/// Weather-by-city response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub code: Reading,
    #[serde(default)]
    pub now: Option<WeatherNow>,
}

impl WeatherPayload {
    /// Current conditions, only when the embedded status reports success.
    #[must_use]
    pub fn conditions(&self) -> Option<&WeatherNow> {
        if self.code.to_string() == WEATHER_SUCCESS_CODE {
            self.now.as_ref()
        } else {
            None
        }
    }
}
