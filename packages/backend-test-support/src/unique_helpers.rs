//! Unique test data built from ULIDs so tests sharing a database never collide.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("contact");
/// assert_ne!(a, unique_str("contact"));
/// assert!(a.starts_with("contact-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique email address in the format `{prefix}-{ulid}@example.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{}@example.test", unique_str(prefix).to_lowercase())
}
