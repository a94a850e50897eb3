//! Browser-side lookup of the server-provided `SiteConfig`.

use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::config::SITE_CONFIG_META;

/// Read the config `<meta>` tag from the current document.
///
/// Falls back to defaults when the tag is missing, malformed, or there is no
/// document (SSR, native tests).
pub fn read() -> SiteConfig {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{SITE_CONFIG_META}\"]");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .map(|raw| SiteConfig::from_meta_content(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SiteConfig::default()
    }
}
