//! Player tag normalization.
//!
//! Tags show up with and without the leading `#` marker depending on the
//! log source, and sometimes in mixed case. All joins in the crate go
//! through the canonical form; loosely-formatted sources are matched via
//! the full variant set.

/// Canonical form of a player tag: trimmed, uppercased, `#`-prefixed.
/// Empty or whitespace-only input has no canonical form.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let bare = raw.trim().trim_start_matches('#');
    if bare.is_empty() {
        return None;
    }
    Some(format!("#{}", bare.to_uppercase()))
}

/// Equivalent lookup keys for a raw tag: the marker-prefixed form and the
/// bare form. Empty input yields no keys (and therefore matches nothing).
pub fn tag_variants(raw: &str) -> Vec<String> {
    match normalize_tag(raw) {
        Some(canonical) => {
            let bare = canonical.trim_start_matches('#').to_string();
            vec![canonical, bare]
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_marker() {
        assert_eq!(normalize_tag("abc123"), Some("#ABC123".to_string()));
    }

    #[test]
    fn test_normalize_keeps_existing_marker() {
        assert_eq!(normalize_tag("#ABC123"), Some("#ABC123".to_string()));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_tag("  #abc  "), Some("#ABC".to_string()));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
        assert_eq!(normalize_tag("#"), None);
    }

    #[test]
    fn test_variants_both_forms() {
        assert_eq!(
            tag_variants("#abc"),
            vec!["#ABC".to_string(), "ABC".to_string()]
        );
    }

    #[test]
    fn test_variants_empty_input_matches_nothing() {
        assert!(tag_variants("").is_empty());
        assert!(tag_variants("#").is_empty());
    }
}
