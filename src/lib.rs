//! Remuxer - convert a video to MP4 under a standardized movie name
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod error;
pub mod output;
pub mod remux;

pub use error::{Error, Result};
