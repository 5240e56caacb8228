//! Item DTOs for the sync-update endpoint

use serde::{Deserialize, Serialize};

use crate::domain::item::Item;

/// Request body for a batch sync-update
///
/// Items are serialized in the order the caller supplied them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncUpdate {
    pub items: Vec<Item>,
}
