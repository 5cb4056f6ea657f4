//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::CreatedShortcode;
use crate::utils::code_generator::SHORTCODE_REGEX;

/// Request to shorten a URL.
///
/// Both fields are optional at the serde level so that a missing `url` is
/// reported as a validation failure rather than a malformed body.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Destination URL. Opaque; only its presence is checked.
    #[validate(required)]
    pub url: Option<String>,

    /// Desired shortcode; generated when absent.
    #[validate(regex(path = *SHORTCODE_REGEX))]
    pub shortcode: Option<String>,
}

/// Response for a created shortcode. Never includes the URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortcode: String,
}

impl From<CreatedShortcode> for ShortenResponse {
    fn from(created: CreatedShortcode) -> Self {
        Self {
            shortcode: created.code,
        }
    }
}
