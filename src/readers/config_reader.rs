use crate::error::{CutoutError, Result};
use crate::models::{ColumnMapping, FetchConfig};
use crate::utils::constants::{
    CONFIG_PARAMETER_COLUMN, CONFIG_VALUE_COLUMN, KEY_BAND, KEY_DEC_COL, KEY_NAME_COL,
    KEY_OUTDIR, KEY_RA_COL, KEY_SIZE_ARCMIN, KEY_SURVEY, REQUIRED_KEYS,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

/// Reads the whitespace-delimited `parameter value` config table.
pub struct ConfigReader;

impl ConfigReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_config(&self, path: &Path) -> Result<FetchConfig> {
        let contents = fs::read_to_string(path)?;
        self.parse_config(&contents)
    }

    /// Parse the table in one pass, then resolve every required key.
    ///
    /// The first row is the header and must name `parameter` and `value`
    /// columns. Quote characters are stripped from every cell. When a key
    /// appears more than once the first occurrence wins.
    pub fn parse_config(&self, contents: &str) -> Result<FetchConfig> {
        let mut lines = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| CutoutError::Config("config table is empty".to_string()))?;
        let header = split_cells(header);

        let param_idx = column_index(&header, CONFIG_PARAMETER_COLUMN)?;
        let value_idx = column_index(&header, CONFIG_VALUE_COLUMN)?;

        let mut values: HashMap<String, String> = HashMap::new();
        for (line_no, line) in lines {
            let cells = split_cells(line);
            let (Some(key), Some(value)) = (cells.get(param_idx), cells.get(value_idx)) else {
                return Err(CutoutError::Config(format!(
                    "line {} has {} column(s), expected at least {}",
                    line_no + 1,
                    cells.len(),
                    param_idx.max(value_idx) + 1
                )));
            };

            if !REQUIRED_KEYS.contains(&key.as_str()) {
                debug!("Ignoring unknown config parameter '{}'", key);
            }
            values.entry(key.clone()).or_insert_with(|| value.clone());
        }

        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !values.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CutoutError::MissingParameters(missing));
        }

        let mut take = |key: &str| values.remove(key).unwrap_or_default();

        let size_raw = take(KEY_SIZE_ARCMIN);
        let size_arcmin = size_raw
            .parse::<f64>()
            .map_err(|_| CutoutError::InvalidParameter {
                key: KEY_SIZE_ARCMIN.to_string(),
                value: size_raw.clone(),
            })?;

        let columns = ColumnMapping {
            name: take(KEY_NAME_COL),
            ra: take(KEY_RA_COL),
            dec: take(KEY_DEC_COL),
        };

        let config = FetchConfig::new(
            columns,
            take(KEY_SURVEY),
            size_arcmin,
            PathBuf::from(take(KEY_OUTDIR)),
            take(KEY_BAND),
        );
        config.validate()?;

        Ok(config)
    }
}

impl Default for ConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a row on whitespace, keeping quoted runs together.
///
/// `'` and `"` both open and close a quoted run and are dropped from the
/// cell, so `outdir "my cutouts"` yields `my cutouts` and `''` an empty cell.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_cell = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (None, '\'' | '"') => {
                quote = Some(c);
                in_cell = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_cell {
                    cells.push(std::mem::take(&mut cell));
                    in_cell = false;
                }
            }
            (_, '\'' | '"') => {}
            (_, c) => {
                cell.push(c);
                in_cell = true;
            }
        }
    }
    if in_cell {
        cells.push(cell);
    }

    cells
}

fn column_index(header: &[String], name: &str) -> Result<usize> {
    header.iter().position(|h| h == name).ok_or_else(|| {
        CutoutError::Config(format!("config table header has no '{}' column", name))
    })
}
