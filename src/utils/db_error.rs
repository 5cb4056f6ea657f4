//! Classification of driver-level database errors.

/// Name of the unique constraint on `urls.shortcode`.
pub const SHORTCODE_CONSTRAINT: &str = "urls_shortcode_key";

/// Returns true if `e` is a unique violation on the shortcode constraint.
///
/// Relies on the driver's error kind and constraint name rather than the
/// human-readable message.
pub fn is_unique_violation_on_shortcode(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORTCODE_CONSTRAINT))
}
