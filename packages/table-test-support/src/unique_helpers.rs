//! ULID-based names so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use table_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("alice");
/// assert!(a.starts_with("alice-"));
/// assert_ne!(a, unique_str("alice"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A fresh room id.
pub fn unique_room() -> String {
    unique_str("room")
}

/// `count` distinct player names sharing `prefix`, e.g. `p1-…`, `p2-…`.
pub fn unique_names(prefix: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| unique_str(&format!("{prefix}{i}")))
        .collect()
}
