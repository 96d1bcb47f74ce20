use csv::{ReaderBuilder, StringRecord};

use super::error::ConversionError;

/// Lines at the top of the file that never hold data.
pub const HEADER_LINES: usize = 2;

/// Minimum number of comma-separated columns for a data row.
pub const MIN_COLUMNS: usize = 7;

/// Canton name used by the source for Quito's metropolitan district.
pub const QUITO_DISTRICT: &str = "DISTRITO METROPOLITANO DE QUITO";
pub const QUITO_CANTON: &str = "QUITO";

/// One data row of the source CSV, with raw (unnormalized) names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    pub province_code: String,
    pub province_name: String,
    pub canton_code: String,
    pub canton_name: String,
    pub parish_code: String,
    pub parish_name: String,
}

impl FlatRecord {
    /// Builds a record from a split row, or `None` when it has fewer than 7 columns.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        if record.len() < MIN_COLUMNS {
            return None;
        }

        let column = |index: usize| clean_column(record.get(index).unwrap_or_default());

        Some(FlatRecord {
            province_code: column(1),
            province_name: column(2),
            canton_code: column(3),
            canton_name: correct_canton_name(column(4)),
            parish_code: column(5),
            parish_name: column(6),
        })
    }
}

fn clean_column(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

/// Rewrites Quito's metropolitan district to the plain canton name.
pub fn correct_canton_name(name: String) -> String {
    if name == QUITO_DISTRICT {
        QUITO_CANTON.to_string()
    } else {
        name
    }
}

/// Parses the raw CSV text into flat records.
///
/// The first two lines are skipped. Remaining lines are split on every comma
/// (quote characters are stripped, not interpreted) and rows with fewer than
/// seven columns are dropped.
///
/// Quoting is disabled and the input is already a `&str`, so the reader has no
/// I/O or UTF-8 failure to report in practice; `ConversionError::Csv` is kept
/// so a reader error still propagates instead of being swallowed.
pub fn parse_records(content: &str) -> Result<Vec<FlatRecord>, ConversionError> {
    let body = content.splitn(HEADER_LINES + 1, '\n').nth(HEADER_LINES).unwrap_or("");

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(b',')
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        match FlatRecord::from_record(&row) {
            Some(record) => records.push(record),
            None => {
                let line = row
                    .position()
                    .map(|pos| pos.line() + HEADER_LINES as u64)
                    .unwrap_or_default();
                log::debug!(
                    "Skipping line {} with {} columns (need {})",
                    line,
                    row.len(),
                    MIN_COLUMNS
                );
            }
        }
    }

    Ok(records)
}
