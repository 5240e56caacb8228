//! Demo item generation
//!
//! Builds a batch of placeholder catalog items, standing in for the
//! payload a real integration would assemble from its own data source.

use std::collections::HashMap;

use catsync_core::domain::item::Item;
use chrono::Utc;

/// Builds `count` demo items with sequential external ids
///
/// Items come back in generation order; external ids start at DEMO-10001.
pub fn demo_items(count: usize) -> Vec<Item> {
    (1..=count).map(demo_item).collect()
}

fn demo_item(index: usize) -> Item {
    let mut custom_fields = HashMap::new();
    custom_fields.insert("price".to_string(), "128,000".to_string());
    custom_fields.insert("address".to_string(), "1-1-1 Example Street".to_string());

    let mut item = Item::new(
        format!("DEMO-{}", 10_000 + index),
        format!("Demo listing {}", index),
    );
    item.description = Some(format!("Placeholder description for listing {}.", index));
    item.label = Some("Featured | Central Station".to_string());
    item.label_color = Some("#E67050".to_string());
    item.image_url = Some("https://cdn.example.com/listings/placeholder.png".to_string());
    item.tags = vec!["demo".to_string(), "central-station".to_string()];
    item.created_at = Some(Utc::now());
    item.updated_at = Some(Utc::now());
    item.url = Some("https://example.com/listings".to_string());
    item.custom_fields = custom_fields;
    item.button_label = Some("View details".to_string());
    item.position = Some(1);
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_items_have_the_requested_count_and_order() {
        let items = demo_items(3);

        assert_eq!(items.len(), 3);
        let ids: Vec<&str> = items
            .iter()
            .map(|item| item.external_id.as_str())
            .collect();
        assert_eq!(ids, vec!["DEMO-10001", "DEMO-10002", "DEMO-10003"]);
    }

    #[test]
    fn test_demo_items_are_distinct() {
        let items = demo_items(2);
        assert_ne!(items[0].title, items[1].title);
        assert_ne!(items[0].description, items[1].description);
    }

    #[test]
    fn test_zero_count_yields_an_empty_batch() {
        assert!(demo_items(0).is_empty());
    }
}
