use super::*;

#[test]
fn weather_query_includes_city() {
    assert_eq!(weather_query("Beijing", None), vec![("location", "Beijing".to_owned())]);
}

#[test]
fn weather_query_appends_key_when_present() {
    assert_eq!(
        weather_query("上海", Some("abc")),
        vec![("location", "上海".to_owned()), ("key", "abc".to_owned())]
    );
}

#[test]
fn weather_query_skips_blank_key() {
    assert_eq!(weather_query("Beijing", Some("  ")).len(), 1);
}

#[test]
fn fetch_error_messages_are_descriptive() {
    assert_eq!(FetchError::Status(503).to_string(), "unexpected status: 503");
    assert_eq!(FetchError::Network("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(FetchError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_feeds_are_unavailable_off_browser() {
    let feeds = HttpFeeds::new(&SiteConfig::default());
    let quote = futures::executor::block_on(feeds.fetch_quote());
    let geo = futures::executor::block_on(feeds.locate());
    let weather = futures::executor::block_on(feeds.fetch_weather("Beijing"));
    assert_eq!(quote, Err(FetchError::Unavailable));
    assert_eq!(geo, Err(FetchError::Unavailable));
    assert_eq!(weather, Err(FetchError::Unavailable));
}
