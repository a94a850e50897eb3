use std::cell::RefCell;

use chrono::NaiveDate;
use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::net::types::{GeoPayload, QuotePayload, Reading, WeatherNow, WeatherPayload};
use crate::state::widget::{QUOTE_FALLBACK, QUOTE_PLACEHOLDER, WEATHER_PLACEHOLDER};

// =============================================================
// Fakes
// =============================================================

impl<T> DisplayRegion<T> for RefCell<T> {
    fn render(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}

/// Region that records the loading flag seen on every render.
struct TracingRegion {
    view: RefCell<WidgetView>,
    loading_seen: RefCell<Vec<bool>>,
}

impl TracingRegion {
    fn new(placeholder: &str) -> Self {
        Self {
            view: RefCell::new(WidgetView::placeholder(placeholder)),
            loading_seen: RefCell::new(Vec::new()),
        }
    }
}

impl DisplayRegion<WidgetView> for TracingRegion {
    fn render(&self, f: impl FnOnce(&mut WidgetView)) {
        let mut view = self.view.borrow_mut();
        f(&mut view);
        self.loading_seen.borrow_mut().push(view.loading);
    }
}

struct FakeQuotes(Result<QuotePayload, FetchError>);

impl QuoteSource for FakeQuotes {
    async fn fetch_quote(&self) -> Result<QuotePayload, FetchError> {
        self.0.clone()
    }
}

/// Quote source that holds its reply until the gate is released.
struct GatedQuotes {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    reply: Result<QuotePayload, FetchError>,
}

impl GatedQuotes {
    fn new(reply: Result<QuotePayload, FetchError>) -> (Self, oneshot::Sender<()>) {
        let (release, gate) = oneshot::channel();
        (Self { gate: RefCell::new(Some(gate)), reply }, release)
    }
}

impl QuoteSource for GatedQuotes {
    async fn fetch_quote(&self) -> Result<QuotePayload, FetchError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.reply.clone()
    }
}

struct FakeWeather {
    geo: Result<GeoPayload, FetchError>,
    weather: Result<WeatherPayload, FetchError>,
    asked_for: RefCell<Vec<String>>,
}

impl FakeWeather {
    fn new(geo: Result<GeoPayload, FetchError>, weather: Result<WeatherPayload, FetchError>) -> Self {
        Self { geo, weather, asked_for: RefCell::new(Vec::new()) }
    }
}

impl WeatherSource for FakeWeather {
    async fn locate(&self) -> Result<GeoPayload, FetchError> {
        self.geo.clone()
    }

    async fn fetch_weather(&self, city: &str) -> Result<WeatherPayload, FetchError> {
        self.asked_for.borrow_mut().push(city.to_owned());
        self.weather.clone()
    }
}

fn beijing() -> Result<GeoPayload, FetchError> {
    Ok(GeoPayload { city: "Beijing".to_owned() })
}

fn weather(code: &str) -> Result<WeatherPayload, FetchError> {
    Ok(WeatherPayload {
        code: Reading::Text(code.to_owned()),
        now: Some(WeatherNow {
            text: "晴".to_owned(),
            temp: Reading::Number(21.0),
            feels_like: Reading::Number(19.0),
        }),
    })
}

// =============================================================
// Clock
// =============================================================

#[test]
fn clock_refresh_renders_time_and_weekday() {
    // 2024-05-15 is a Wednesday.
    let now = NaiveDate::from_ymd_opt(2024, 5, 15)
        .and_then(|d| d.and_hms_opt(8, 9, 10))
        .expect("valid instant");
    let region = RefCell::new(String::new());
    refresh_clock(Some(&region), &now);
    assert_eq!(region.borrow().as_str(), "08:09:10 周三");
}

#[test]
fn clock_refresh_without_region_is_noop() {
    let now = NaiveDate::from_ymd_opt(2024, 5, 15)
        .and_then(|d| d.and_hms_opt(8, 9, 10))
        .expect("valid instant");
    refresh_clock(None::<&RefCell<String>>, &now);
}

// =============================================================
// Quote
// =============================================================

#[test]
fn quote_success_renders_text_and_source() {
    let source = FakeQuotes(Ok(QuotePayload {
        hitokoto: "海内存知己".to_owned(),
        from: Some("送杜少府之任蜀州".to_owned()),
    }));
    let region = TracingRegion::new(QUOTE_PLACEHOLDER);
    block_on(refresh_quote(&source, Some(&region)));
    let view = region.view.borrow();
    assert_eq!(view.text, "海内存知己");
    assert_eq!(view.attribution, "—— 送杜少府之任蜀州");
    assert_eq!(*region.loading_seen.borrow(), vec![true, false]);
}

#[test]
fn quote_rejection_renders_fallback() {
    let source = FakeQuotes(Err(FetchError::Network("offline".to_owned())));
    let region = TracingRegion::new(QUOTE_PLACEHOLDER);
    block_on(refresh_quote(&source, Some(&region)));
    let view = region.view.borrow();
    assert_eq!(view.text, QUOTE_FALLBACK);
    assert!(!view.text.is_empty());
    assert!(!view.loading);
}

#[test]
fn quote_malformed_body_renders_fallback() {
    let source = FakeQuotes(Err(FetchError::Payload("expected value".to_owned())));
    let region = RefCell::new(WidgetView::placeholder(QUOTE_PLACEHOLDER));
    block_on(refresh_quote(&source, Some(&region)));
    assert_eq!(region.borrow().text, QUOTE_FALLBACK);
}

#[test]
fn quote_without_region_skips_fetch() {
    let source = FakeQuotes(Err(FetchError::Unavailable));
    block_on(refresh_quote(&source, None::<&RefCell<WidgetView>>));
}

#[test]
fn overlapping_quote_cycles_last_resolution_wins() {
    let region = RefCell::new(WidgetView::placeholder(QUOTE_PLACEHOLDER));
    let (slow, release_slow) = GatedQuotes::new(Ok(QuotePayload {
        hitokoto: "started first".to_owned(),
        from: Some("slow".to_owned()),
    }));
    let fast = FakeQuotes(Ok(QuotePayload {
        hitokoto: "started second".to_owned(),
        from: Some("fast".to_owned()),
    }));
    let rendered = RefCell::new(Vec::new());

    block_on(async {
        futures::join!(
            async {
                refresh_quote(&slow, Some(&region)).await;
                rendered.borrow_mut().push(region.borrow().text.clone());
            },
            async {
                refresh_quote(&fast, Some(&region)).await;
                rendered.borrow_mut().push(region.borrow().text.clone());
                let _ = release_slow.send(());
            },
        );
    });

    assert_eq!(*rendered.borrow(), vec!["started second".to_owned(), "started first".to_owned()]);
    assert_eq!(region.borrow().text, "started first");
    assert_eq!(region.borrow().attribution, "—— slow");
}

#[test]
fn failed_quote_cycle_keeps_previous_attribution() {
    let region = RefCell::new(WidgetView::placeholder(QUOTE_PLACEHOLDER));
    let ok = FakeQuotes(Ok(QuotePayload { hitokoto: "hello".to_owned(), from: Some("src".to_owned()) }));
    block_on(refresh_quote(&ok, Some(&region)));
    assert_eq!(region.borrow().attribution, "—— src");

    block_on(refresh_quote(&FakeQuotes(Err(FetchError::Network("offline".to_owned()))), Some(&region)));
    assert_eq!(region.borrow().text, QUOTE_FALLBACK);
    assert_eq!(region.borrow().attribution, "—— src");
    assert!(!region.borrow().loading);
}

// =============================================================
// Weather
// =============================================================

#[test]
fn weather_success_renders_all_values_in_order() {
    let source = FakeWeather::new(beijing(), weather("200"));
    let region = TracingRegion::new(WEATHER_PLACEHOLDER);
    block_on(refresh_weather(&source, Some(&region)));

    let text = region.view.borrow().text.clone();
    let city = text.find("Beijing").expect("city rendered");
    let desc = text.find("晴").expect("conditions rendered");
    let temp = text.find("21").expect("temperature rendered");
    let feels = text.find("19").expect("feels-like rendered");
    assert!(city < desc && desc < temp && temp < feels, "unexpected order: {text}");
    assert_eq!(text, "Beijing · 晴 21°C · 体感 19°C");
    assert_eq!(*source.asked_for.borrow(), vec!["Beijing".to_owned()]);
    assert_eq!(*region.loading_seen.borrow(), vec![true, false]);
}

#[test]
fn weather_failure_status_renders_status_message() {
    let source = FakeWeather::new(beijing(), weather("402"));
    let region = RefCell::new(WidgetView::placeholder(WEATHER_PLACEHOLDER));
    block_on(refresh_weather(&source, Some(&region)));
    assert_eq!(region.borrow().text, WEATHER_STATUS_FAILED);
    assert!(!region.borrow().loading);
}

#[test]
fn weather_geolocation_failure_renders_fallback_without_weather_call() {
    let source = FakeWeather::new(Err(FetchError::Network("dns".to_owned())), weather("200"));
    let region = RefCell::new(WidgetView::placeholder(WEATHER_PLACEHOLDER));
    block_on(refresh_weather(&source, Some(&region)));
    assert_eq!(region.borrow().text, WEATHER_FALLBACK);
    assert!(source.asked_for.borrow().is_empty());
}

#[test]
fn weather_blank_city_renders_fallback() {
    let source = FakeWeather::new(Ok(GeoPayload { city: "  ".to_owned() }), weather("200"));
    let region = RefCell::new(WidgetView::placeholder(WEATHER_PLACEHOLDER));
    block_on(refresh_weather(&source, Some(&region)));
    assert_eq!(region.borrow().text, WEATHER_FALLBACK);
}

#[test]
fn weather_request_rejection_renders_fallback() {
    let source = FakeWeather::new(beijing(), Err(FetchError::Status(503)));
    let region = RefCell::new(WidgetView::placeholder(WEATHER_PLACEHOLDER));
    block_on(refresh_weather(&source, Some(&region)));
    assert_eq!(region.borrow().text, WEATHER_FALLBACK);
    assert!(!region.borrow().loading);
}
