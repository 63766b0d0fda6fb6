/// `x-smtpapi` metadata merging
///
/// Up to five fragments are combined into one JSON object. Custom metadata is
/// laid down first and the derived fragments (template, categories, single
/// unsubscribe group, preference-page groups) are overlaid in that order, so
/// a derived key always replaces the same top-level key from custom metadata.
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::warn;

/// Merges the metadata fragments, returning `None` when nothing is left
///
/// # Examples
/// ```
/// use gridmail_core::merge_metadata;
///
/// let merged = merge_metadata::<String>(None, &[], None, &[], None);
/// assert!(merged.is_none());
///
/// let merged = merge_metadata(None, &["receipts"], Some(42), &[], None).unwrap();
/// assert_eq!(merged["category"], serde_json::json!(["receipts"]));
/// assert_eq!(merged["asm_group_id"], 42);
/// ```
pub fn merge_metadata<C: Serialize>(
    template_id: Option<&str>,
    categories: &[C],
    unsubscribe_group_id: Option<i64>,
    unsubscribe_group_ids: &[i64],
    custom_metadata: Option<&Map<String, Value>>,
) -> Option<Map<String, Value>> {
    let mut merged = custom_metadata.cloned().unwrap_or_default();

    let derived = [
        template_id.map(template_fragment),
        category_fragment(categories),
        unsubscribe_group_id.map(|id| fragment("asm_group_id", json!(id))),
        (!unsubscribe_group_ids.is_empty())
            .then(|| fragment("asm_groups_to_display", json!(unsubscribe_group_ids))),
    ];

    for fragment in derived.into_iter().flatten() {
        merged.extend(fragment);
    }

    if merged.is_empty() { None } else { Some(merged) }
}

fn fragment(key: &str, value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    map
}

fn template_fragment(template_id: &str) -> Map<String, Value> {
    fragment(
        "filters",
        json!({
            "templates": {
                "settings": {
                    "template_id": template_id,
                    "enable": 1
                }
            }
        }),
    )
}

fn category_fragment<C: Serialize>(categories: &[C]) -> Option<Map<String, Value>> {
    if categories.is_empty() {
        return None;
    }

    match serde_json::to_value(categories) {
        Ok(value) => Some(fragment("category", value)),
        Err(e) => {
            warn!(error = %e, "Dropping categories that failed to serialize");
            None
        }
    }
}
