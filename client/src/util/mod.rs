//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! `<body>` mutation, config lookup) from component logic to improve reuse
//! and testability.

pub mod dark_mode;
pub mod page;
pub mod refresh;
pub mod repeating;
pub mod site_config;
