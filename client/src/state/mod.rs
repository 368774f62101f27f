//! Client-side page state.

pub mod signup;
