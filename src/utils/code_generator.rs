//! Short code generation.
//!
//! Codes are random version 4 UUIDs in their hyphenated string form. They are
//! not derived from the URL, so shortening the same URL twice yields two
//! different codes. Collisions are not retried.

use uuid::Uuid;

/// Generates a new random short code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 36);
/// ```
pub fn generate_code() -> String {
    Uuid::new_v4().to_string()
}
