use std::fs;

use super::{
    config::ConversionConfig,
    error::ConversionError,
    hierarchy::{aggregate, HierarchyStats, Province},
    records::parse_records,
};

/// Result of one conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub rows_parsed: usize,
    pub provinces: Vec<Province>,
}

impl ConversionReport {
    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats::from_provinces(&self.provinces)
    }
}

/// Parses and aggregates CSV text without touching the filesystem.
pub fn convert_str(content: &str) -> Result<ConversionReport, ConversionError> {
    log::info!("Parsing CSV data...");
    let records = parse_records(content)?;
    log::info!("Parsed {} rows", records.len());

    log::info!("Converting to JSON structure...");
    let provinces = aggregate(&records);

    Ok(ConversionReport {
        rows_parsed: records.len(),
        provinces,
    })
}

/// Reads `config.input`, builds the hierarchy and writes it to `config.output`
/// as JSON with 2-space indentation.
pub fn convert_file(config: &ConversionConfig) -> Result<ConversionReport, ConversionError> {
    log::info!("Reading CSV file {}...", config.input.display());
    let content = fs::read_to_string(&config.input).map_err(|source| ConversionError::ReadInput {
        path: config.input.clone(),
        source,
    })?;

    let report = convert_str(&content)?;

    log::info!("Writing {} file...", config.output.display());
    let json = serde_json::to_string_pretty(&report.provinces)?;
    fs::write(&config.output, json).map_err(|source| ConversionError::WriteOutput {
        path: config.output.clone(),
        source,
    })?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_parsed_rows_before_dedup() {
        let content = "\nheader\n,01,AZUAY,0101,CUENCA,010150,CUENCA\n,01,AZUAY,0101,CUENCA,010150,CUENCA\n,01,AZUAY,0101,CUENCA,010151,\n";
        let report = convert_str(content).unwrap();

        assert_eq!(report.rows_parsed, 3);
        assert_eq!(
            report.stats(),
            HierarchyStats {
                provinces: 1,
                cantons: 1,
                parishes: 1
            }
        );
    }
}
