//! Diff generation for audit logging
//!
//! Summarizes which top-level fields changed between two stored records.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        // Tag lists are short; show them in full
        Value::Array(items) => {
            let shown: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", shown.join(", "))
        }
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let value = json!({"tag": "Food", "amount": "10.00"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_field_changed() {
        let before = json!({"tag": "Food", "amount": "10.00"});
        let after = json!({"tag": "Food", "amount": "60.00"});

        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "amount: \"10.00\" -> \"60.00\""
        );
    }

    #[test]
    fn test_tag_list_changed() {
        let before = json!({"tags": ["Food"]});
        let after = json!({"tags": ["Food", "Work"]});

        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "tags: [\"Food\"] -> [\"Food\", \"Work\"]"
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"remark": "old"});
        let after = json!({"date": "01-01-2021"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("remark: \"old\" -> (removed)"));
        assert!(diff.contains("date: (added) -> \"01-01-2021\""));
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(80);
        let diff = generate_diff(&json!(long), &json!("short")).unwrap();
        assert!(diff.starts_with(&format!("\"{}...\"", "x".repeat(47))));
    }
}
