//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated with `mockall`
//! for unit tests.

pub mod shortcode_repository;

pub use shortcode_repository::ShortcodeRepository;

#[cfg(test)]
pub use shortcode_repository::MockShortcodeRepository;
