//! Extraction run: the items and presets pipelines, fanned out in parallel.
//!
//! Each pipeline scans the dump for its own section, isolates and decodes it,
//! then archives the previous output and writes the new one. A failure in one
//! pipeline leaves the other's output untouched.
use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::archive::Archiver;
use crate::config::{DataSet, ExtractorConfig};
use crate::error::{ExtractionError, Result};
use crate::items::extract_items;
use crate::json::to_pretty_json;
use crate::presets::build_presets;
use crate::report::Reporter;
use crate::scanner::scan_file;
use crate::section::{SectionKind, isolate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub data_set: DataSet,
    pub path: PathBuf,
    pub records: usize,
    /// Where the previous output went, if there was one.
    pub archived: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunReport {
    pub items: Result<PipelineOutcome>,
    pub presets: Result<PipelineOutcome>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.items.is_ok() && self.presets.is_ok()
    }

    pub fn outcomes(&self) -> [(DataSet, &Result<PipelineOutcome>); 2] {
        [
            (DataSet::ItemMissingProperties, &self.items),
            (DataSet::Presets, &self.presets),
        ]
    }

    pub fn failures(&self) -> Vec<(DataSet, &ExtractionError)> {
        self.outcomes()
            .into_iter()
            .filter_map(|(ds, r)| r.as_ref().err().map(|e| (ds, e)))
            .collect()
    }
}

pub struct Extractor<'r> {
    config: ExtractorConfig,
    archiver: Archiver,
    reporter: &'r dyn Reporter,
}

impl<'r> Extractor<'r> {
    pub fn new(config: ExtractorConfig, reporter: &'r dyn Reporter) -> Self {
        let archiver = Archiver::new(config.archive_directory());
        Self {
            config,
            archiver,
            reporter,
        }
    }

    /// Runs both pipelines concurrently and reports each one's outcome.
    pub fn run(&self) -> RunReport {
        self.reporter.info(&format!(
            "Reading Tarkov resources file {}",
            self.config.resources_file_path.display()
        ));
        let (items, presets) = rayon::join(|| self.run_items(), || self.run_presets());
        let report = RunReport { items, presets };
        for (data_set, err) in report.failures() {
            self.reporter.error(&format!(
                "{data_set} extraction from {} failed: {err}",
                self.config.resources_file_path.display()
            ));
        }
        report
    }

    pub fn run_items(&self) -> Result<PipelineOutcome> {
        let span = self.scan(SectionKind::Items)?;
        let section = isolate(&span, SectionKind::Items, &self.config.markers(SectionKind::Items))?;
        self.reporter.info("Extracting item missing properties");
        let records = extract_items(section)?;
        self.publish(DataSet::ItemMissingProperties, &records)
    }

    pub fn run_presets(&self) -> Result<PipelineOutcome> {
        let span = self.scan(SectionKind::Presets)?;
        let section = isolate(&span, SectionKind::Presets, &self.config.markers(SectionKind::Presets))?;
        self.reporter.info("Extracting presets");
        let presets = build_presets(section, &self.config.non_standard_preset_names)?;
        self.publish(DataSet::Presets, &presets)
    }

    fn scan(&self, section: SectionKind) -> Result<String> {
        let markers = self.config.markers(section);
        scan_file(&self.config.resources_file_path, markers.start, markers.end)
    }

    // Serialize first so nothing is archived unless a replacement is ready.
    fn publish<T: Serialize>(&self, data_set: DataSet, records: &[T]) -> Result<PipelineOutcome> {
        let json = to_pretty_json(records, data_set.section())?;
        let path = self.config.output_path(data_set);

        let archived = self.archiver.archive(&path)?;
        if let Some(dest) = &archived {
            self.reporter.info(&format!(
                "Archived file {} to {}",
                path.display(),
                dest.display()
            ));
        }

        let write_failed = |source| ExtractionError::Write {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        fs::write(&path, json).map_err(write_failed)?;

        self.reporter.success(&format!(
            "{} {data_set} records extracted to {}",
            records.len(),
            path.display()
        ));
        Ok(PipelineOutcome {
            data_set,
            path,
            records: records.len(),
            archived,
        })
    }
}
