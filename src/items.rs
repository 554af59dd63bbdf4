use serde::Serialize;

/// A single list entry as returned by `/list`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub content: String,
}

/// Build the list served by `/list`. Constructed fresh per request.
pub fn build_items() -> Vec<Item> {
    vec![
        Item {
            title: "aaa".to_string(),
            content: "AAA".to_string(),
        },
        Item {
            title: "bbb".to_string(),
            content: "BBB".to_string(),
        },
    ]
}

/// Truncate `items` to its first element when `content` is non-empty.
///
/// The parameter's value is never compared against item fields; any
/// non-empty value truncates. Clients may rely on this, so the rule is
/// kept as-is (see DESIGN.md).
pub fn apply_content_filter(items: &mut Vec<Item>, content: Option<&str>) {
    if content.is_some_and(|c| !c.is_empty()) {
        items.truncate(1);
    }
}
