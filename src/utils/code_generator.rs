//! Shortcode generation and validation utilities.
//!
//! Generated codes are drawn from the 62-symbol alphanumeric alphabet.
//! Client-supplied codes may additionally contain underscores.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated shortcodes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Accepted format for client-supplied shortcodes. No upper length bound.
pub const SHORTCODE_PATTERN: &str = r"^[0-9a-zA-Z_]{4,}$";

/// Compiled [`SHORTCODE_PATTERN`].
pub static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHORTCODE_PATTERN).expect("shortcode pattern is valid"));

/// Generates a random shortcode of `length` characters from `[0-9a-zA-Z]`.
///
/// Each character is sampled independently and uniformly from the thread-local
/// CSPRNG, so concurrent callers never share generator state. Uniqueness is not
/// guaranteed here; the store's unique constraint is the source of truth.
///
/// # Examples
///
/// ```
/// use shorty::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a client-supplied shortcode against [`SHORTCODE_PATTERN`].
///
/// # Errors
///
/// Returns [`AppError::InvalidShortcode`] when the code does not match.
pub fn validate_shortcode(code: &str) -> Result<(), AppError> {
    if SHORTCODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(AppError::invalid_shortcode())
    }
}
