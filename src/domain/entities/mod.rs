//! Core domain entities.
//!
//! - [`ShortenedUrl`] - A stored shortcode and its visit counters
//! - [`NewShortenedUrl`] - Input for creating a record
//! - [`CreatedShortcode`] - Outcome of shortening (no URL echo)
//! - [`ShortcodeStats`] - Read model for the stats endpoint

pub mod shortened_url;

pub use shortened_url::{CreatedShortcode, NewShortenedUrl, ShortcodeStats, ShortenedUrl};
