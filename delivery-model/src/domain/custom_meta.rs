//! Custom metadata attached to a content item, in GraphQL connection shape.

use serde::{Deserialize, Serialize};

/// One key/value metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMeta {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

impl CustomMeta {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            value_type: None,
        }
    }

    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMetaEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub node: CustomMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

/// Page of custom metadata entries, in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMetaConnection {
    #[serde(default)]
    edges: Vec<CustomMetaEdge>,
    #[serde(default)]
    page_info: PageInfo,
}

impl CustomMetaConnection {
    pub fn new(edges: Vec<CustomMetaEdge>, page_info: PageInfo) -> Self {
        Self { edges, page_info }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[CustomMetaEdge] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomMeta> {
        self.edges.iter().map(edge_node)
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|m| m.key == key).map(|m| m.value.as_str())
    }

    /// Every value stored under `key`, in order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |m| m.key == key)
            .map(|m| m.value.as_str())
    }

    /// Distinct keys in first-seen order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for meta in self.iter() {
            if !keys.contains(&meta.key.as_str()) {
                keys.push(&meta.key);
            }
        }
        keys
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    pub fn has_next_page(&self) -> bool {
        self.page_info.has_next_page
    }

    pub fn end_cursor(&self) -> Option<&str> {
        self.page_info.end_cursor.as_deref()
    }
}

impl FromIterator<CustomMeta> for CustomMetaConnection {
    fn from_iter<I: IntoIterator<Item = CustomMeta>>(iter: I) -> Self {
        let edges = iter
            .into_iter()
            .map(|node| CustomMetaEdge { cursor: None, node })
            .collect();
        Self::new(edges, PageInfo::default())
    }
}

fn edge_node(edge: &CustomMetaEdge) -> &CustomMeta {
    &edge.node
}

impl<'a> IntoIterator for &'a CustomMetaConnection {
    type Item = &'a CustomMeta;
    type IntoIter =
        std::iter::Map<std::slice::Iter<'a, CustomMetaEdge>, fn(&CustomMetaEdge) -> &CustomMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges
            .iter()
            .map(edge_node as fn(&CustomMetaEdge) -> &CustomMeta)
    }
}
