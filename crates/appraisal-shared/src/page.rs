use anyhow::Context as _;
use serde_json::Value;

/// One page of a paged list endpoint
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

impl<T: serde::de::DeserializeOwned> Page<T> {
    /// Accepts either a bare array (treated as a single page) or a paged object
    /// with `content`, `totalElements` and `totalPages`. Anything else is an
    /// empty page
    pub fn from_json(value: Value) -> anyhow::Result<Self> {
        match value {
            Value::Array(items) => {
                let content = parse_items(items)?;
                Ok(Self {
                    total_elements: content.len() as u64,
                    total_pages: 1,
                    content,
                })
            }
            Value::Object(mut map) => {
                let content = match map.remove("content") {
                    Some(Value::Array(items)) => parse_items(items)?,
                    _ => Vec::new(),
                };
                let total = |key: &str| map.get(key).and_then(Value::as_u64).unwrap_or(0);
                Ok(Self {
                    total_elements: total("totalElements"),
                    total_pages: total("totalPages"),
                    content,
                })
            }
            _ => Ok(Self::default()),
        }
    }
}

fn parse_items<T: serde::de::DeserializeOwned>(items: Vec<Value>) -> anyhow::Result<Vec<T>> {
    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .context("failed to parse page content")
}
