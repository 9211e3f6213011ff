use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product attribute as supplied by the caller.
///
/// Callers send whatever JSON their catalogue holds, so every scalar shape
/// is accepted and rendered with its natural text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    List(Vec<FieldValue>),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Scalar rendering; lists are joined with `", "`.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::render)
                .collect::<Vec<_>>()
                .join(", "),
            FieldValue::Other(v) => v.to_string(),
        }
    }

    /// List rendering; a scalar counts as a single item, a blank string as none.
    pub fn items(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items.iter().map(FieldValue::render).collect(),
            FieldValue::Text(s) if s.trim().is_empty() => Vec::new(),
            other => vec![other.render()],
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(FieldValue::from).collect())
    }
}

/// Product attributes for one request. Never persisted; every field is
/// optional and `null` is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_description: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<FieldValue>,
    /// Keys the prompts do not use.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn text(field: &Option<FieldValue>) -> String {
    field.as_ref().map(FieldValue::render).unwrap_or_default()
}

fn list(field: &Option<FieldValue>) -> Vec<String> {
    field.as_ref().map(FieldValue::items).unwrap_or_default()
}

impl Product {
    pub fn name(&self) -> String {
        text(&self.name)
    }

    pub fn brand(&self) -> String {
        text(&self.brand)
    }

    pub fn category(&self) -> String {
        text(&self.category)
    }

    pub fn subcategory(&self) -> String {
        text(&self.subcategory)
    }

    pub fn basic_description(&self) -> String {
        text(&self.basic_description)
    }

    pub fn price(&self) -> String {
        text(&self.price)
    }

    pub fn features(&self) -> Vec<String> {
        list(&self.features)
    }

    pub fn materials(&self) -> Vec<String> {
        list(&self.materials)
    }

    pub fn colors(&self) -> Vec<String> {
        list(&self.colors)
    }

    pub fn tags(&self) -> Vec<String> {
        list(&self.tags)
    }
}
