/// Separator used when a string list is shown in its textarea.
pub const LIST_SEPARATOR: &str = ", ";

/// Split textarea content into list items.
///
/// Items are trimmed; blank entries (a trailing comma, `a,,b`) are dropped.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_items() {
        let lists: Vec<Vec<String>> = vec![
            vec![],
            vec!["almohada extra".into()],
            vec!["sin gluten".into(), "cuna".into(), "planta alta".into()],
            vec!["  espacios  ".trim().into(), "x".into()],
        ];
        for list in lists {
            assert_eq!(split_list(&join_list(&list)), list);
        }
    }

    #[test]
    fn test_trailing_and_double_commas_do_not_create_items() {
        assert_eq!(split_list("a, b,"), vec!["a", "b"]);
        assert_eq!(split_list("a,,b"), vec!["a", "b"]);
        assert_eq!(split_list(" , "), Vec::<String>::new());
        assert_eq!(split_list(""), Vec::<String>::new());
    }

    #[test]
    fn test_newlines_stay_inside_items() {
        assert_eq!(split_list("vista\nmar, cuna"), vec!["vista\nmar", "cuna"]);
    }
}
