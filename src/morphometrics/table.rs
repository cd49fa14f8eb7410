//! Measurement table loading, projection, and writing

use crate::io::configuration::{
    AREA_COLUMN, DIAMETER_COLUMN, FILTERED_SUFFIX, GRATIO_COLUMN, SOLIDITY_COLUMN,
};
use crate::io::error::{PipelineError, Result, fs_error};
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Typed projection of one measurement row
///
/// Cells that are absent or do not parse as numbers are carried as NaN; the
/// filter rules treat NaN as out of range, which is how implausible rows are
/// removed rather than reported as errors.
#[derive(Debug, Clone, Copy)]
pub struct MorphRow {
    /// Axon diameter in micrometers
    pub axon_diam: f64,
    /// g-ratio, valid strictly between 0 and 1
    pub gratio: f64,
    /// Axon area in square micrometers
    pub axon_area: f64,
    /// Ratio of shape area to convex hull area
    pub solidity: f64,
}

/// A loaded measurement table
///
/// Keeps the raw records alongside their typed projections so filtering
/// preserves every column the external tool produced, not just the ones the
/// rules inspect.
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
    rows: Vec<MorphRow>,
}

fn parse_cell(record: &StringRecord, index: Option<usize>) -> f64 {
    index
        .and_then(|i| record.get(i))
        .map_or(f64::NAN, |cell| cell.trim().parse().unwrap_or(f64::NAN))
}

impl MeasurementTable {
    /// Load a measurement table from disk
    ///
    /// The diameter column is required; g-ratio, area, and solidity columns
    /// may be absent (unmyelinated tables carry no g-ratio) and project to
    /// NaN when they are.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as CSV or the diameter
    /// column is missing
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| PipelineError::Table {
            path: path.to_path_buf(),
            source: e,
        })?;

        let headers = reader
            .headers()
            .map_err(|e| PipelineError::Table {
                path: path.to_path_buf(),
                source: e,
            })?
            .clone();

        let position = |name: &str| headers.iter().position(|h| h == name);
        let diam_idx = position(DIAMETER_COLUMN).ok_or_else(|| PipelineError::MissingColumn {
            path: path.to_path_buf(),
            column: DIAMETER_COLUMN,
        })?;
        let gratio_idx = position(GRATIO_COLUMN);
        let area_idx = position(AREA_COLUMN);
        let solidity_idx = position(SOLIDITY_COLUMN);

        let mut records = Vec::new();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| PipelineError::Table {
                path: path.to_path_buf(),
                source: e,
            })?;
            rows.push(MorphRow {
                axon_diam: parse_cell(&record, Some(diam_idx)),
                gratio: parse_cell(&record, gratio_idx),
                axon_area: parse_cell(&record, area_idx),
                solidity: parse_cell(&record, solidity_idx),
            });
            records.push(record);
        }

        Ok(Self {
            headers,
            records,
            rows,
        })
    }

    /// Number of measurement rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Typed projections of all rows, in table order
    pub fn rows(&self) -> &[MorphRow] {
        &self.rows
    }

    /// Build a new table keeping only the rows marked true in `keep`
    ///
    /// Entries beyond the length of `keep` are dropped.
    pub fn retained(&self, keep: &[bool]) -> Self {
        let mut records = Vec::new();
        let mut rows = Vec::new();
        for (i, kept) in keep.iter().enumerate() {
            if *kept {
                if let (Some(record), Some(row)) = (self.records.get(i), self.rows.get(i)) {
                    records.push(record.clone());
                    rows.push(*row);
                }
            }
        }
        Self {
            headers: self.headers.clone(),
            records,
            rows,
        }
    }

    /// Write the table to disk with its original headers and columns
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or a record cannot be
    /// written
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| PipelineError::Table {
            path: path.to_path_buf(),
            source: e,
        })?;

        let as_table_error = |e: csv::Error| PipelineError::Table {
            path: path.to_path_buf(),
            source: e,
        };
        writer.write_record(&self.headers).map_err(as_table_error)?;
        for record in &self.records {
            writer.write_record(record).map_err(as_table_error)?;
        }
        writer
            .flush()
            .map_err(|e| fs_error(path, "flush table", e))?;
        Ok(())
    }
}

/// Derive the filtered-output path of a measurement table
///
/// Inserts the filtered suffix between the stem and the extension:
/// `x_axon_morphometrics.csv` becomes `x_axon_morphometrics_filtered.csv`.
pub fn filtered_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = path.extension().unwrap_or_default().to_string_lossy();
    let name = format!("{stem}{FILTERED_SUFFIX}.{extension}");

    if let Some(parent) = path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
