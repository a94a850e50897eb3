use super::*;

#[test]
fn default_intervals_match_widget_cadence() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.clock_period(), Duration::from_secs(1));
    assert_eq!(cfg.quote_period(), Duration::from_secs(15));
    assert_eq!(cfg.weather_period(), Duration::from_secs(30 * 60));
    assert_eq!(cfg.background_period(), Duration::from_secs(10 * 60));
    assert_eq!(cfg.quote_fade_ms, 500);
}

#[test]
fn default_title_and_topics() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.title, "TangShiMei");
    assert_eq!(cfg.background_topics, vec!["nature".to_owned(), "light".to_owned()]);
    assert_eq!(cfg.weather_key, None);
}

#[test]
fn meta_content_round_trips_overrides() {
    let cfg = SiteConfig {
        title: "Home".to_owned(),
        weather_key: Some("k-1".to_owned()),
        quote_interval_ms: 3_000,
        ..SiteConfig::default()
    };
    assert_eq!(SiteConfig::from_meta_content(&cfg.to_meta_content()), cfg);
}

#[test]
fn partial_meta_content_fills_defaults() {
    let cfg = SiteConfig::from_meta_content(r#"{"title":"Partial"}"#);
    assert_eq!(cfg.title, "Partial");
    assert_eq!(cfg.quote_endpoint, DEFAULT_QUOTE_ENDPOINT);
    assert_eq!(cfg.clock_interval_ms, DEFAULT_CLOCK_INTERVAL_MS);
}

#[test]
fn malformed_meta_content_uses_defaults() {
    assert_eq!(SiteConfig::from_meta_content("not json"), SiteConfig::default());
    assert_eq!(SiteConfig::from_meta_content(""), SiteConfig::default());
}

#[test]
fn zero_interval_is_floored() {
    let cfg = SiteConfig { clock_interval_ms: 0, ..SiteConfig::default() };
    assert_eq!(cfg.clock_period(), Duration::from_millis(1));
}
