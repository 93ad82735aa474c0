//! UI components.

pub mod pattern_lock;
pub mod theme_toggle;
