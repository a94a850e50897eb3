//! Networking modules for the widget data sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the outbound HTTP calls behind source traits, and `types`
//! defines the third-party response schemas.

pub mod api;
pub mod types;
