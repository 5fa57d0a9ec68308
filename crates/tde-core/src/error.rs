//! Error types for extraction runs

use std::path::PathBuf;

use thiserror::Error;

use crate::section::SectionKind;

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The resource dump could not be opened or read.
    #[error("cannot read resource file {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A start or end marker was not found, so the section is empty.
    #[error("{section} marker not found: {marker:?}")]
    MarkerNotFound { section: SectionKind, marker: String },
    /// Markers were found but the text between them does not delimit a JSON object.
    #[error("malformed {section} section: {reason}")]
    MalformedSection { section: SectionKind, reason: String },
    #[error("invalid {section} JSON: {source}")]
    Json {
        section: SectionKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("item {key:?} has no _id")]
    MissingItemId { key: String },
    /// A slot, chamber or cartridge definition carries no filter group.
    #[error("item {item_id}: slot {slot:?} has no filter group")]
    MissingFilterGroup { item_id: String, slot: String },
    #[error("item {item_id}: slot {slot:?} has no _required flag")]
    MissingSlotRequired { item_id: String, slot: String },
    #[error("preset {preset:?} has {roots} root items, expected exactly one")]
    AmbiguousRoot { preset: String, roots: usize },
    #[error("preset {preset:?}: item {id} is not attached to the root (parent {parent_id:?})")]
    OrphanedPresetItem {
        preset: String,
        id: String,
        parent_id: Option<String>,
    },
    #[error("preset {preset:?}: item id {id} appears more than once")]
    DuplicatePresetItem { preset: String, id: String },
    #[error("preset {preset:?}: child item {id} has no slotId")]
    MissingSlotName { preset: String, id: String },
    #[error("cannot archive {} to {}: {source}", from.display(), to.display())]
    Archive {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot list archive directory {}: {source}", path.display())]
    ArchiveListing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read configuration {}: {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration {}: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
