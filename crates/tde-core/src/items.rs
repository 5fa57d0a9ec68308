//! Item missing-properties extraction.
//!
//! Each top-level member of the isolated items object is one item record keyed
//! by its id. Only the handful of `_props` fields below are decoded; an item is
//! emitted only when at least one of them is interesting (see
//! [`ExtractedItemRecord::is_interesting`]).
use serde::Deserialize;

use crate::error::{ExtractionError, Result};
use crate::json::decode_section;
use crate::model::ExtractedItemRecord;
use crate::section::SectionKind;
use crate::slots::{RawSlot, decode_chambers, decode_slots};

#[derive(Debug, Deserialize)]
pub struct RawItem {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "_props")]
    pub props: Option<RawItemProps>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawItemProps {
    pub stack_max_size: Option<serde_json::Number>,
    pub conflicting_items: Option<Vec<String>>,
    pub cartridges: Option<Vec<RawSlot>>,
    pub chambers: Option<Vec<RawSlot>>,
    pub slots: Option<Vec<RawSlot>>,
    pub ricochet_params: Option<RawRicochetParams>,
}

#[derive(Debug, Deserialize)]
pub struct RawRicochetParams {
    pub x: Option<f64>,
}

/// Decodes the isolated items object and keeps the interesting records, in source order.
pub fn extract_items(section: &str) -> Result<Vec<ExtractedItemRecord>> {
    let entries = decode_section::<RawItem>(section, SectionKind::Items)?;
    let mut out = Vec::new();
    for (key, raw) in entries.0 {
        if let Some(record) = extract_item(&key, raw)? {
            out.push(record);
        }
    }
    Ok(out)
}

pub fn extract_item(key: &str, raw: RawItem) -> Result<Option<ExtractedItemRecord>> {
    let id = raw.id.ok_or_else(|| ExtractionError::MissingItemId {
        key: key.to_string(),
    })?;
    let Some(props) = raw.props else {
        return Ok(None);
    };

    let accepted_ammunition_ids = match props.cartridges {
        Some(cartridges) => match cartridges.into_iter().next() {
            Some(first) => Some(first.into_compatible_item_ids(&id)?),
            None => None,
        },
        None => None,
    };

    let mod_slots = if props.chambers.is_some() || props.slots.is_some() {
        let mut slots = decode_chambers(props.chambers.unwrap_or_default(), &id)?;
        slots.extend(decode_slots(props.slots.unwrap_or_default(), &id)?);
        Some(slots)
    } else {
        None
    };

    let record = ExtractedItemRecord {
        max_stackable_amount: props.stack_max_size,
        conflicting_item_ids: props.conflicting_items.and_then(non_empty),
        accepted_ammunition_ids: accepted_ammunition_ids.and_then(non_empty),
        mod_slots: mod_slots.and_then(non_empty),
        ricochet_x_value: props.ricochet_params.and_then(|r| r.x),
        id,
    };
    Ok(record.is_interesting().then_some(record))
}

fn non_empty<T>(v: Vec<T>) -> Option<Vec<T>> {
    if v.is_empty() { None } else { Some(v) }
}
