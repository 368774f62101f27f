//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped rendering and delegates event orchestration to
//! a sibling flow module that can be tested without a browser.

pub mod signup;
pub mod signup_flow;
