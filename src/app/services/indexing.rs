//! Reference grouping and survey file indexing
//!
//! The reference file is grouped by pipeline identifier; each survey file is
//! reduced to its boundary rows plus the identifier from its first row.
//! Reference errors are fatal for the run, survey file errors are isolated
//! per file by the caller.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::models::{FileIndex, IndexedFile, PipelineEntry, RecordSet, ReferenceIndex};
use crate::app::services::survey_reader;
use crate::{Error, Result};

/// Group reference records by the pipeline column.
///
/// For each pipeline value, start is the first row carrying that value in
/// file order and end is the last, regardless of intervening rows of other
/// pipelines. Fails if the pipeline column is absent from the schema; an
/// empty reference with the column present yields an empty index.
pub fn build_reference_index(set: &RecordSet, pipeline_column: &str) -> Result<ReferenceIndex> {
    if !set.has_column(pipeline_column) {
        return Err(Error::missing_column(
            set.path().display().to_string(),
            pipeline_column,
        ));
    }

    let mut entries: HashMap<String, PipelineEntry> = HashMap::new();
    for record in set.records() {
        let id = record.require(pipeline_column, set.path())?.to_string();
        match entries.entry(id) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().end = record.clone();
            }
            Entry::Vacant(vacant) => {
                vacant.insert(PipelineEntry {
                    start: record.clone(),
                    end: record.clone(),
                });
            }
        }
    }

    debug!(
        "Grouped {} reference records into {} pipelines",
        set.len(),
        entries.len()
    );

    Ok(ReferenceIndex::new(entries))
}

/// Index one survey file: identifier from the first row's ID column plus the
/// boundary records of the whole file.
///
/// The identifier is taken strictly from the first row; the rest of the file
/// is assumed to share it and is not validated.
pub fn index_survey_file(path: &Path, id_column: &str) -> Result<IndexedFile> {
    let set = survey_reader::read_record_set(path)?;

    let first = set
        .first()
        .ok_or_else(|| Error::empty_file(path.display().to_string()))?;
    let last = set
        .last()
        .ok_or_else(|| Error::empty_file(path.display().to_string()))?;

    let id = first.require(id_column, path)?.to_string();
    debug!("Indexed {} as segment '{}'", path.display(), id);

    Ok(IndexedFile {
        id,
        entry: PipelineEntry {
            start: first.clone(),
            end: last.clone(),
        },
        source: path.to_path_buf(),
    })
}

/// Index a batch of survey files, isolating per-file failures.
///
/// One malformed input does not abort the others; failures become entries in
/// the returned index, in supply order, and surface in the report.
pub fn index_survey_files(paths: &[PathBuf], id_column: &str) -> FileIndex {
    let mut index = FileIndex::new();
    for path in paths {
        match index_survey_file(path, id_column) {
            Ok(file) => index.push_indexed(file),
            Err(error) => {
                warn!("Could not index {}: {}", path.display(), error);
                index.push_failure(path.clone(), error.to_string());
            }
        }
    }
    index
}
