//! tde-core: item and preset extraction from Tarkov resource dumps
//!
//! The dump is far too large (and too irregular) to parse as one JSON
//! document, so each data set is pulled out in stages:
//! - scanner: line-by-line capture of the span between two marker lines
//! - section: isolation of the JSON object inside that span
//! - items / slots: sparse "missing properties" records per item
//! - presets: flat preset item lists rebuilt into nested inventory items
//! - archive: previous outputs moved aside before being replaced
//!
pub mod archive;
pub mod config;
pub mod error;
pub mod extract;
pub mod items;
pub mod json;
pub mod model;
pub mod presets;
pub mod report;
pub mod scanner;
pub mod section;
pub mod slots;

pub use archive::{ArchivedFile, Archiver, list_archived};
pub use config::{DataSet, ExtractorConfig};
pub use error::{ExtractionError, Result};
pub use extract::{Extractor, PipelineOutcome, RunReport};
pub use model::{ExtractedItemRecord, InventoryItem, InventoryItemModSlot, ModSlot, PresetItemRecord};
pub use report::{RecordingReporter, Reporter, TracingReporter};
pub use section::{SectionKind, SectionMarkers};
