//! Slot, chamber and cartridge definitions and their decoding into [`ModSlot`]s.
use serde::Deserialize;

use crate::error::{ExtractionError, Result};
use crate::model::ModSlot;

/// A `Slots`, `Chambers` or `Cartridges` array element as found in the dump.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSlot {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_required", default)]
    pub required: Option<bool>,
    #[serde(rename = "_props", default)]
    pub props: RawSlotProps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSlotProps {
    #[serde(default)]
    pub filters: Vec<RawFilterGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterGroup {
    #[serde(rename = "Filter", default)]
    pub filter: Vec<String>,
}

impl RawSlot {
    /// Ids listed by the first filter group. A slot without any filter group
    /// is an error: an empty list would read as "accepts nothing".
    pub fn into_compatible_item_ids(self, item_id: &str) -> Result<Vec<String>> {
        match self.props.filters.into_iter().next() {
            Some(group) => Ok(group.filter),
            None => Err(ExtractionError::MissingFilterGroup {
                item_id: item_id.to_string(),
                slot: self.name,
            }),
        }
    }
}

/// Slots and chambers must state `_required`; cartridges only contribute their filter.
pub fn decode_slot(raw: RawSlot, item_id: &str) -> Result<ModSlot> {
    let Some(required) = raw.required else {
        return Err(ExtractionError::MissingSlotRequired {
            item_id: item_id.to_string(),
            slot: raw.name,
        });
    };
    let id = raw.id.clone();
    let name = raw.name.clone();
    let compatible_item_ids = raw.into_compatible_item_ids(item_id)?;
    Ok(ModSlot {
        id,
        name,
        required,
        compatible_item_ids,
    })
}

pub fn decode_slots(raws: Vec<RawSlot>, item_id: &str) -> Result<Vec<ModSlot>> {
    raws.into_iter().map(|raw| decode_slot(raw, item_id)).collect()
}

/// Chambers decode like slots but are renamed `chamber0`, `chamber1`, ... in source order.
pub fn decode_chambers(raws: Vec<RawSlot>, item_id: &str) -> Result<Vec<ModSlot>> {
    let mut chambers = decode_slots(raws, item_id)?;
    for (i, chamber) in chambers.iter_mut().enumerate() {
        chamber.name = format!("chamber{i}");
    }
    Ok(chambers)
}
