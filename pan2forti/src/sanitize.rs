/// Longest object name FortiOS accepts.
pub const MAX_NAME_LEN: usize = 63;

/// Normalize an object name for FortiOS.
///
/// Spaces become underscores, then the result is cut to [`MAX_NAME_LEN`]
/// characters. Distinct inputs may collide after truncation; callers that
/// need uniqueness must add their own suffix.
pub fn sanitize(name: &str) -> String {
    name.replace(' ', "_").chars().take(MAX_NAME_LEN).collect()
}

/// Sanitize every name and join with single spaces.
pub fn sanitize_joined(names: &[String]) -> String {
    names
        .iter()
        .map(|name| sanitize(name))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{sanitize, sanitize_joined, MAX_NAME_LEN};

    #[test]
    fn replaces_spaces() {
        assert_eq!(sanitize("My Server Name"), "My_Server_Name");
    }

    #[test]
    fn truncates_after_substitution() {
        let long = "a b".repeat(40);
        let out = sanitize(&long);
        assert_eq!(out.chars().count(), MAX_NAME_LEN);
        assert!(!out.contains(' '));
    }

    #[test]
    fn leaves_short_names_alone() {
        assert_eq!(sanitize("x".repeat(63).as_str()).len(), 63);
        assert_eq!(sanitize("web-01"), "web-01");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name = "é".repeat(70);
        assert_eq!(sanitize(&name), "é".repeat(63));
    }

    #[test]
    fn joins_sanitized_members() {
        let names = vec!["Web Servers".to_string(), "db".to_string()];
        assert_eq!(sanitize_joined(&names), "Web_Servers db");
    }
}
