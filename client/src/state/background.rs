//! Background rotation state.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

/// Rotation counter plus the URL most recently applied to the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackgroundState {
    pub rotation: u64,
    pub url: Option<String>,
}

impl BackgroundState {
    /// Advance one rotation and return the new image URL.
    pub fn advance(&mut self, base: &str, topics: &[String]) -> &str {
        self.rotation += 1;
        self.url.insert(background_url(base, topics, self.rotation))
    }
}

/// `<base>?<topics>&sig=<rotation>`; the signature makes every URL distinct
/// so the browser refetches instead of reusing its cached image.
#[must_use]
pub fn background_url(base: &str, topics: &[String], rotation: u64) -> String {
    let topics = topics
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    let separator = if base.contains('?') { '&' } else { '?' };
    if topics.is_empty() {
        format!("{base}{separator}sig={rotation}")
    } else {
        format!("{base}{separator}{topics}&sig={rotation}")
    }
}

/// CSS `background-image` value for a URL.
#[must_use]
pub fn css_background_image(url: &str) -> String {
    format!("url('{}')", url.replace('\'', "%27"))
}
