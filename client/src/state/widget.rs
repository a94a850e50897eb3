//! Display model for the fetched-text widgets (quote, weather).
//!
//! DESIGN
//! ======
//! A widget is one line of text, an optional attribution line, and a
//! transient loading flag. Every transition leaves `text` non-empty so the
//! region never renders blank.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::net::types::{QuotePayload, WeatherNow};

pub const QUOTE_PLACEHOLDER: &str = "正在获取一言…";
pub const QUOTE_FALLBACK: &str = "今天也要加油呀~";

pub const WEATHER_PLACEHOLDER: &str = "正在获取天气…";
/// Shown when the weather payload reports a non-success status.
pub const WEATHER_STATUS_FAILED: &str = "天气信息获取失败";
/// Shown when the geolocation or weather request itself fails.
pub const WEATHER_FALLBACK: &str = "天气加载失败，请稍后再试";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetView {
    pub text: String,
    pub attribution: String,
    pub loading: bool,
}

impl WidgetView {
    #[must_use]
    pub fn placeholder(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            attribution: String::new(),
            loading: false,
        }
    }

    /// Mark a refresh cycle as in flight. Current text stays visible.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Render a fetched quote; blank quotes fall back.
    pub fn show_quote(&mut self, quote: &QuotePayload) {
        let text = quote.hitokoto.trim();
        if text.is_empty() {
            self.show_quote_fallback();
            return;
        }
        self.text = text.to_owned();
        self.attribution = quote_attribution(quote.from.as_deref());
        self.loading = false;
    }

    /// Render a successful line with no attribution.
    pub fn show_line(&mut self, line: String) {
        self.text = line;
        self.attribution.clear();
        self.loading = false;
    }

    /// Render the quote fallback. The previous attribution line is left as is.
    pub fn show_quote_fallback(&mut self) {
        self.text = QUOTE_FALLBACK.to_owned();
        self.loading = false;
    }

    /// Render a fixed failure message with no attribution.
    pub fn show_fallback(&mut self, message: &str) {
        self.show_line(message.to_owned());
    }
}

/// `"—— <source>"`, or empty when the source is missing or blank.
#[must_use]
pub fn quote_attribution(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(source) if !source.is_empty() => format!("—— {source}"),
        _ => String::new(),
    }
}

/// `"<city> · <description> <temp>°C · 体感 <feels>°C"`.
#[must_use]
pub fn weather_line(city: &str, now: &WeatherNow) -> String {
    format!(
        "{} · {} {}°C · 体感 {}°C",
        city.trim(),
        now.text.trim(),
        now.temp,
        now.feels_like
    )
}
