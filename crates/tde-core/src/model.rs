use serde::{Deserialize, Serialize};

/// Sparse summary of the properties an item catalog does not provide.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedItemRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stackable_amount: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_item_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_ammunition_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_slots: Option<Vec<ModSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ricochet_x_value: Option<f64>,
}

impl ExtractedItemRecord {
    /// Whether the record carries anything worth emitting. A stack size of 1
    /// is the default and does not count; the ricochet value alone does not either.
    pub fn is_interesting(&self) -> bool {
        let non_empty = |v: &Option<Vec<_>>| v.as_ref().is_some_and(|v| !v.is_empty());
        non_empty(&self.conflicting_item_ids)
            || self.max_stackable_amount.as_ref().and_then(|n| n.as_f64()).is_some_and(|n| n > 1.0)
            || self.mod_slots.as_ref().is_some_and(|v| !v.is_empty())
            || non_empty(&self.accepted_ammunition_ids)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub required: bool,
    pub compatible_item_ids: Vec<String>,
}

/// One flat entry of a preset's `_items` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresetItemRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_tpl")]
    pub item_id: String,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    #[serde(rename = "slotId", default)]
    pub slot_name: Option<String>,
}

impl PresetItemRecord {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none() && self.slot_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub item_id: String,
    pub mod_slots: Vec<InventoryItemModSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemModSlot {
    pub mod_slot_name: String,
    pub item: InventoryItem,
}
