use crate::error::{CutoutError, Result};
use crate::models::{ColumnMapping, Target};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A comma-separated target table held in memory, header plus rows.
#[derive(Debug, Clone, Default)]
pub struct TargetTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl TargetTable {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let rows = csv_reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Extract targets in table order using the configured column names.
    ///
    /// A configured column absent from the header, or a coordinate that is
    /// not a number, aborts the whole extraction.
    pub fn targets(&self, columns: &ColumnMapping) -> Result<Vec<Target>> {
        let name_idx = self.column_index(&columns.name)?;
        let ra_idx = self.column_index(&columns.ra)?;
        let dec_idx = self.column_index(&columns.dec)?;

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let row_no = i + 1;
                let name = row.get(name_idx).unwrap_or_default().to_string();
                let ra = parse_degrees(row, ra_idx, row_no, &columns.ra)?;
                let dec = parse_degrees(row, dec_idx, row_no, &columns.dec)?;
                Ok(Target::new(name, ra, dec))
            })
            .collect()
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| CutoutError::MissingColumn(column.to_string()))
    }
}

fn parse_degrees(row: &StringRecord, idx: usize, row_no: usize, column: &str) -> Result<f64> {
    let raw = row.get(idx).unwrap_or_default();
    raw.parse::<f64>()
        .map_err(|_| CutoutError::InvalidCoordinate {
            row: row_no,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

/// Where the targets of a batch come from.
#[derive(Debug, Clone)]
pub enum TargetSource {
    Path(PathBuf),
    Table(TargetTable),
}

impl TargetSource {
    pub fn load(self) -> Result<TargetTable> {
        match self {
            TargetSource::Path(path) => TargetTable::from_path(&path),
            TargetSource::Table(table) => Ok(table),
        }
    }
}

impl From<PathBuf> for TargetSource {
    fn from(path: PathBuf) -> Self {
        TargetSource::Path(path)
    }
}

impl From<&Path> for TargetSource {
    fn from(path: &Path) -> Self {
        TargetSource::Path(path.to_path_buf())
    }
}

impl From<TargetTable> for TargetSource {
    fn from(table: TargetTable) -> Self {
        TargetSource::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TARGETS: &str = "\
Name,RA,DEC,z
SDSS J120000.00+300000.0,180.0,30.0,0.1
NGC1234, 48.4 ,-7.8,0.02
";

    fn columns() -> ColumnMapping {
        ColumnMapping {
            name: "Name".to_string(),
            ra: "RA".to_string(),
            dec: "DEC".to_string(),
        }
    }

    #[test]
    fn test_targets_in_row_order() -> Result<()> {
        let table = TargetTable::from_reader(TARGETS.as_bytes())?;
        let targets = table.targets(&columns())?;

        assert_eq!(table.len(), 2);
        assert_eq!(
            targets,
            vec![
                Target::new("SDSS J120000.00+300000.0", 180.0, 30.0),
                Target::new("NGC1234", 48.4, -7.8),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_source_from_path() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{}", TARGETS)?;

        let table = TargetSource::from(temp_file.path()).load()?;
        assert_eq!(table.len(), 2);
        assert_eq!(table.headers().len(), 4);

        Ok(())
    }

    #[test]
    fn test_source_from_loaded_table() -> Result<()> {
        let table = TargetTable::new(
            StringRecord::from(vec!["id", "ra_deg", "dec_deg"]),
            vec![StringRecord::from(vec!["M31", "10.6847", "41.2690"])],
        );
        let mapping = ColumnMapping {
            name: "id".to_string(),
            ra: "ra_deg".to_string(),
            dec: "dec_deg".to_string(),
        };

        let targets = TargetSource::from(table).load()?.targets(&mapping)?;
        assert_eq!(targets, vec![Target::new("M31", 10.6847, 41.269)]);

        Ok(())
    }

    #[test]
    fn test_missing_column() {
        let table = TargetTable::from_reader("Name,RA\nx,1.0\n".as_bytes()).unwrap();
        let err = table.targets(&columns()).unwrap_err();
        assert!(matches!(err, CutoutError::MissingColumn(ref c) if c == "DEC"));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let table = TargetTable::from_reader("Name,RA,DEC\na,1.0,2.0\nb,12h30m,2.0\n".as_bytes())
            .unwrap();
        let err = table.targets(&columns()).unwrap_err();
        assert!(matches!(
            err,
            CutoutError::InvalidCoordinate { row: 2, ref column, ref value } if column == "RA" && value == "12h30m"
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = TargetSource::Path(PathBuf::from("does/not/exist.csv")).load();
        assert!(matches!(result, Err(CutoutError::Io(_))));
    }
}
