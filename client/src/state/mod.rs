//! Transient page state for the homepage widgets.
//!
//! DESIGN
//! ======
//! Each module is a plain value type with pure transitions; components keep
//! these in signals and side effects stay in `util`.

pub mod background;
pub mod clock;
pub mod theme;
pub mod widget;
