use std::{env, path::PathBuf};

pub const DEFAULT_INPUT: &str = "codificacion.csv";
pub const DEFAULT_OUTPUT: &str = "provincias.json";

pub const INPUT_ENV: &str = "PROVINCIAS_INPUT";
pub const OUTPUT_ENV: &str = "PROVINCIAS_OUTPUT";

/// Where to read the CSV from and where to write the JSON to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ConversionConfig {
    /// Reads `PROVINCIAS_INPUT` / `PROVINCIAS_OUTPUT`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            input: lookup(INPUT_ENV).map(PathBuf::from).unwrap_or(defaults.input),
            output: lookup(OUTPUT_ENV).map(PathBuf::from).unwrap_or(defaults.output),
        }
    }

    /// Applies explicit overrides (e.g. from CLI flags) on top of this config.
    pub fn with_overrides(self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input: input.unwrap_or(self.input),
            output: output.unwrap_or(self.output),
        }
    }
}
