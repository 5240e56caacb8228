//! Catalog item domain type

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog record to be synchronized into an item group.
///
/// The `external_id` is assigned by the caller and identifies the record
/// across sync runs. All other fields are forwarded to the service as-is;
/// the client never inspects or validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub external_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Item {
    /// Creates an item with only the required fields set
    pub fn new(external_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            title: title.into(),
            description: None,
            label: None,
            label_color: None,
            image_url: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
            url: None,
            custom_fields: HashMap::new(),
            button_label: None,
            position: None,
        }
    }
}
