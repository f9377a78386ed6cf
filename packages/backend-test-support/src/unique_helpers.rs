//! Unique test data, so tests sharing one store never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("team");
/// assert_ne!(a, unique_str("team"));
/// assert!(a.starts_with("team-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// Two distinct team names that fit the 64 character limit.
///
/// ```
/// use backend_test_support::unique_helpers::unique_team_pair;
///
/// let (a, b) = unique_team_pair();
/// assert_ne!(a.to_lowercase(), b.to_lowercase());
/// assert!(a.chars().count() <= 64);
/// ```
pub fn unique_team_pair() -> (String, String) {
    let id = Ulid::new();
    (format!("Red {id}"), format!("Blue {id}"))
}
