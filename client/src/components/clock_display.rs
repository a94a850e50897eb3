//! Live local clock.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders empty on the server so hydration never fights a stale server
//! timestamp; the browser fills it in on mount and every tick after.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::util::{refresh::refresh_clock, repeating::RepeatingTask};

/// `HH:MM:SS <weekday>`, refreshed once per configured clock interval.
#[component]
pub fn ClockDisplay() -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let period = expect_context::<SiteConfig>().clock_period();
        let ticker = StoredValue::new_local(None::<RepeatingTask>);
        Effect::new(move || {
            if ticker.with_value(Option::is_some) {
                return;
            }
            let task = RepeatingTask::start_immediate(period, move || {
                refresh_clock(Some(&text), &chrono::Local::now());
            });
            ticker.set_value(Some(task));
        });
        on_cleanup(move || ticker.dispose());
    }

    view! {
        <time id="time-display" class="clock">{move || text.get()}</time>
    }
}
