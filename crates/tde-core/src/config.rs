//! Extractor configuration (TOML)
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ExtractionError, Result};
use crate::section::{SectionKind, SectionMarkers};

/// Data sets written by an extraction run, in upload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSet {
    ItemMissingProperties,
    Presets,
}

impl DataSet {
    pub const ALL: [DataSet; 2] = [DataSet::ItemMissingProperties, DataSet::Presets];

    pub fn section(self) -> SectionKind {
        match self {
            DataSet::ItemMissingProperties => SectionKind::Items,
            DataSet::Presets => SectionKind::Presets,
        }
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataSet::ItemMissingProperties => "item-missing-properties",
            DataSet::Presets => "presets",
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Resource dump to scan.
    pub resources_file_path: PathBuf,
    /// Output directory; archives live in a subdirectory of it.
    pub configurations_directory: PathBuf,
    #[serde(default = "default_archive_directory")]
    pub previous_extractions_archive_directory: String,

    pub items_extraction_start_search_string: String,
    pub items_extraction_end_search_string: String,
    #[serde(default = "default_items_wrapper_key")]
    pub items_wrapper_key: String,

    pub presets_extraction_start_search_string: String,
    pub presets_extraction_end_search_string: String,
    #[serde(default = "default_presets_wrapper_key")]
    pub presets_wrapper_key: String,

    #[serde(default = "default_item_missing_properties_file_name")]
    pub item_missing_properties_file_name: String,
    #[serde(default = "default_presets_file_name")]
    pub presets_file_name: String,

    /// Preset names kept even though they do not end with "default".
    #[serde(default)]
    pub non_standard_preset_names: Vec<String>,
    /// Optional JSON array of extra names, relative to `configurations_directory`.
    #[serde(default)]
    pub non_standard_preset_names_file_name: Option<String>,
}

fn default_archive_directory() -> String {
    "archive".to_string()
}
fn default_items_wrapper_key() -> String {
    "\"data\": {".to_string()
}
fn default_presets_wrapper_key() -> String {
    "\"ItemPresets\": {".to_string()
}
fn default_item_missing_properties_file_name() -> String {
    "raw-item-missing-properties.json".to_string()
}
fn default_presets_file_name() -> String {
    "raw-presets.json".to_string()
}

impl ExtractorConfig {
    /// Reads a TOML configuration file. Relative paths inside it are resolved
    /// against the file's own directory, and the optional preset-name file is
    /// merged into `non_standard_preset_names`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ExtractionError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: ExtractorConfig =
            toml::from_str(&text).map_err(|e| ExtractionError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.resources_file_path = resolve(base, &config.resources_file_path);
        config.configurations_directory = resolve(base, &config.configurations_directory);

        if let Some(name) = config.non_standard_preset_names_file_name.clone() {
            let names_path = config.configurations_directory.join(name);
            let extra = read_preset_names(&names_path)?;
            for n in extra {
                if !config.non_standard_preset_names.contains(&n) {
                    config.non_standard_preset_names.push(n);
                }
            }
        }
        Ok(config)
    }

    pub fn archive_directory(&self) -> PathBuf {
        self.configurations_directory
            .join(&self.previous_extractions_archive_directory)
    }

    pub fn file_name(&self, data_set: DataSet) -> &str {
        match data_set {
            DataSet::ItemMissingProperties => &self.item_missing_properties_file_name,
            DataSet::Presets => &self.presets_file_name,
        }
    }

    pub fn output_path(&self, data_set: DataSet) -> PathBuf {
        self.configurations_directory.join(self.file_name(data_set))
    }

    /// Static data set → file name table consumed by the uploader.
    pub fn output_files(&self) -> Vec<(DataSet, &str)> {
        DataSet::ALL
            .iter()
            .map(|ds| (*ds, self.file_name(*ds)))
            .collect()
    }

    pub fn markers(&self, section: SectionKind) -> SectionMarkers<'_> {
        match section {
            SectionKind::Items => SectionMarkers {
                start: &self.items_extraction_start_search_string,
                end: &self.items_extraction_end_search_string,
                wrapper_key: &self.items_wrapper_key,
            },
            SectionKind::Presets => SectionMarkers {
                start: &self.presets_extraction_start_search_string,
                end: &self.presets_extraction_end_search_string,
                wrapper_key: &self.presets_wrapper_key,
            },
        }
    }
}

fn resolve(base: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() { p.to_path_buf() } else { base.join(p) }
}

fn read_preset_names(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).map_err(|source| ExtractionError::ConfigUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|e| ExtractionError::ConfigInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
