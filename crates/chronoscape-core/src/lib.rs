//! Chronoscape Core Types
//!
//! This crate provides the foundational types for the Chronoscape countdown
//! wallpaper. It includes:
//!
//! - **Timers**: The countdown/count-up timer data model ([`timer`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Text**: Text measurement strategies ([`text`] module)

pub mod color;
pub mod geometry;
pub mod text;
pub mod timer;
