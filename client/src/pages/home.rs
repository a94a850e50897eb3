//! Homepage: navbar, hero with live widgets, and card grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Each widget initializes itself on mount and then runs on
//! its own timer; nothing here coordinates them.

use leptos::prelude::*;

use crate::components::{
    background_rotator::BackgroundRotator, card::CardGrid, clock_display::ClockDisplay, navbar::Navbar,
    quote_widget::QuoteWidget, weather_widget::WeatherWidget,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <BackgroundRotator/>
        <div class="home">
            <Navbar/>
            <section class="hero">
                <h2 class="hero__title">"欢迎来到主页"</h2>
                <p class="hero__tagline">"这里是我的个人空间，分享创作与思考"</p>
                <div class="hero__widgets">
                    <ClockDisplay/>
                    <WeatherWidget/>
                    <QuoteWidget/>
                </div>
                <a href="/blog" class="hero__cta">"进入博客"</a>
            </section>
            <CardGrid/>
        </div>
    }
}
