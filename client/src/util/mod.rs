//! Browser capabilities used by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! flows can be tested with recording fakes.

pub mod navigation;
pub mod notify;
