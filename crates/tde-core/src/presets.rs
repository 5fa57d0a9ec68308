//! Preset reconstruction: flat `_items` lists into nested [`InventoryItem`] trees.
use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::error::{ExtractionError, Result};
use crate::json::decode_section;
use crate::model::{InventoryItem, InventoryItemModSlot, PresetItemRecord};
use crate::section::SectionKind;

#[derive(Debug, Clone, Deserialize)]
pub struct RawPreset {
    #[serde(rename = "_name", default)]
    pub name: String,
    #[serde(rename = "_items", default)]
    pub items: Vec<PresetItemRecord>,
}

/// A preset is canonical when its name ends with "default" (any case) or is
/// listed among the non-standard names.
pub fn is_canonical(name: &str, non_standard_names: &[String]) -> bool {
    name.to_ascii_lowercase().ends_with("default") || non_standard_names.iter().any(|n| n == name)
}

/// Decodes the isolated presets object and builds one tree per canonical
/// preset, in source order. Rejected presets are skipped before validation.
pub fn build_presets(section: &str, non_standard_names: &[String]) -> Result<Vec<InventoryItem>> {
    let entries = decode_section::<RawPreset>(section, SectionKind::Presets)?;
    entries
        .0
        .iter()
        .filter(|(_, preset)| is_canonical(&preset.name, non_standard_names))
        .map(|(_, preset)| build_tree(&preset.name, &preset.items))
        .collect()
}

/// Builds the tree rooted at the single record with neither `parentId` nor `slotId`.
pub fn build_tree(preset: &str, items: &[PresetItemRecord]) -> Result<InventoryItem> {
    let roots: Vec<usize> = (0..items.len()).filter(|&i| items[i].is_root()).collect();
    let &[root] = roots.as_slice() else {
        return Err(ExtractionError::AmbiguousRoot {
            preset: preset.to_string(),
            roots: roots.len(),
        });
    };

    let mut builder = TreeBuilder::new(preset, items)?;
    let tree = builder.node(root)?;

    if let Some(i) = builder.visited.iter().position(|v| !v) {
        return Err(ExtractionError::OrphanedPresetItem {
            preset: preset.to_string(),
            id: items[i].id.clone(),
            parent_id: items[i].parent_id.clone(),
        });
    }
    Ok(tree)
}

struct TreeBuilder<'a> {
    preset: &'a str,
    items: &'a [PresetItemRecord],
    // parent id -> child indices, in source order
    children: HashMap<&'a str, Vec<usize>>,
    visited: Vec<bool>,
}

impl<'a> TreeBuilder<'a> {
    // Ids must be unique; with one parent per record, the walk from the root
    // then reaches every record at most once.
    fn new(preset: &'a str, items: &'a [PresetItemRecord]) -> Result<Self> {
        let mut ids = HashSet::with_capacity(items.len());
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            if !ids.insert(item.id.as_str()) {
                return Err(ExtractionError::DuplicatePresetItem {
                    preset: preset.to_string(),
                    id: item.id.clone(),
                });
            }
            if let Some(parent) = item.parent_id.as_deref() {
                children.entry(parent).or_default().push(i);
            }
        }
        Ok(Self {
            preset,
            items,
            children,
            visited: vec![false; items.len()],
        })
    }

    fn node(&mut self, index: usize) -> Result<InventoryItem> {
        let items = self.items;
        let item = &items[index];
        self.visited[index] = true;

        let child_indices = self.children.get(item.id.as_str()).cloned().unwrap_or_default();
        let mut mod_slots = Vec::with_capacity(child_indices.len());
        for c in child_indices {
            let child = &items[c];
            let Some(slot_name) = child.slot_name.clone() else {
                return Err(ExtractionError::MissingSlotName {
                    preset: self.preset.to_string(),
                    id: child.id.clone(),
                });
            };
            mod_slots.push(InventoryItemModSlot {
                mod_slot_name: slot_name,
                item: self.node(c)?,
            });
        }

        Ok(InventoryItem {
            item_id: item.item_id.clone(),
            mod_slots,
        })
    }
}
