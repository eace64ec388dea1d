//! Text manipulation utilities

/// Capitalizes the first character of a string
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Joins at most `limit` items with ", "
pub fn join_first<S: AsRef<str>>(items: &[S], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_empty_string() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_lowercase_word() {
        assert_eq!(capitalize_first("hello world"), "Hello world");
    }

    #[test]
    fn test_capitalize_first_leaves_rest_untouched() {
        assert_eq!(capitalize_first("wOrLd"), "WOrLd");
        assert_eq!(capitalize_first("'quoted'"), "'quoted'");
    }

    #[test]
    fn test_join_first_caps_items() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(join_first(&items, 3), "a, b, c");
        assert_eq!(join_first(&items[..1], 3), "a");
        assert_eq!(join_first::<&str>(&[], 3), "");
    }
}
