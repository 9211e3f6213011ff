//! Best-effort extraction of structured fields from completion text.
//!
//! Model replies follow the requested layout only loosely, so nothing here
//! fails: lines that do not match are skipped.

use crate::models::{FieldValue, MissingFields, SeoElements};

const TITLE_PREFIX: &str = "Title:";
const META_DESCRIPTION_PREFIX: &str = "Meta Description:";

/// Keys whose values are comma-separated lists.
const LIST_KEYS: [&str; 4] = ["Features", "Materials", "Colors", "Tags"];

/// Pick `Title:` and `Meta Description:` lines out of an SEO reply. Later
/// lines win when a prefix repeats.
pub fn parse_seo(reply: &str) -> SeoElements {
    let mut seo = SeoElements::default();
    for line in reply.lines() {
        if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
            seo.title = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(META_DESCRIPTION_PREFIX) {
            seo.description = Some(rest.trim().to_string());
        }
    }
    seo
}

/// Parse `Key: value` lines from a missing-field reply.
///
/// Keys are lower-cased. List keys are split on commas with the enclosing
/// brackets removed; other values lose surrounding brackets only when both
/// are present.
pub fn parse_missing_fields(reply: &str) -> MissingFields {
    let mut fields = MissingFields::new();

    for line in reply.trim().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        let parsed = if LIST_KEYS.contains(&key) {
            FieldValue::List(split_list(value).into_iter().map(FieldValue::Text).collect())
        } else {
            let value = value
                .strip_prefix('[')
                .and_then(|v| v.strip_suffix(']'))
                .unwrap_or(value);
            FieldValue::Text(value.to_string())
        };

        fields.insert(key.to_lowercase(), parsed);
    }

    fields
}

fn split_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = value.split(',').map(|s| s.trim().to_string()).collect();

    if let Some(first) = items.first_mut() {
        if let Some(stripped) = first.strip_prefix('[') {
            *first = stripped.to_string();
        }
    }
    if let Some(last) = items.last_mut() {
        if let Some(stripped) = last.strip_suffix(']') {
            *last = stripped.to_string();
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seo_reply_yields_title_and_description() {
        let reply = "Title: Summit Trail Bottle | Stay Cold 24h\nMeta Description:  Keep drinks icy on every hike.  ";

        let seo = parse_seo(reply);

        assert_eq!(seo.title.as_deref(), Some("Summit Trail Bottle | Stay Cold 24h"));
        assert_eq!(seo.description.as_deref(), Some("Keep drinks icy on every hike."));
    }

    #[test]
    fn seo_reply_without_markers_is_empty() {
        let seo = parse_seo("Here is a great title for your product!");
        assert_eq!(seo, SeoElements::default());
    }

    #[test]
    fn seo_prefix_must_start_the_line() {
        let seo = parse_seo("  Title: indented\n**Title:** bold\nMeta Description: ok");

        assert_eq!(seo.title, None);
        assert_eq!(seo.description.as_deref(), Some("ok"));
    }

    #[test]
    fn repeated_seo_prefix_keeps_the_last_line() {
        let seo = parse_seo("Title: first\nTitle: second");
        assert_eq!(seo.title.as_deref(), Some("second"));
    }

    #[test]
    fn missing_fields_split_lists_and_strip_brackets() {
        let reply = "\nCategory: [Home & Living]\nFeatures: [Dimmable, USB port, Clamp]\nColors: Black, White\nTags: lamp\n";

        let fields = parse_missing_fields(reply);

        assert_eq!(fields["category"], FieldValue::Text("Home & Living".to_string()));
        assert_eq!(
            fields["features"],
            FieldValue::List(vec![
                FieldValue::Text("Dimmable".to_string()),
                FieldValue::Text("USB port".to_string()),
                FieldValue::Text("Clamp".to_string()),
            ])
        );
        assert_eq!(fields["colors"].items(), vec!["Black", "White"]);
        assert_eq!(fields["tags"].items(), vec!["lamp"]);
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn missing_fields_split_on_first_colon_only() {
        let fields = parse_missing_fields("Subcategory: Lamps: Desk\nno colon here");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["subcategory"], FieldValue::Text("Lamps: Desk".to_string()));
    }

    #[test]
    fn half_bracketed_scalar_is_left_alone() {
        let fields = parse_missing_fields("Category: [Lighting");
        assert_eq!(fields["category"], FieldValue::Text("[Lighting".to_string()));
    }
}
