//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from reactive theme state and hand clicks back to the
//! controller through callbacks; they never touch storage themselves.

pub mod theme_toggle;
