//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static components render literal markup; widget components own their
//! display signal and the repeating task that refreshes it.

pub mod background_rotator;
pub mod card;
pub mod clock_display;
pub mod navbar;
pub mod quote_widget;
pub mod theme_toggle;
pub mod weather_widget;
