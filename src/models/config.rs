use std::path::PathBuf;
use validator::Validate;

/// Names of the target table columns holding identifier and position.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ColumnMapping {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub ra: String,

    #[validate(length(min = 1))]
    pub dec: String,
}

/// Settings for one batch run, read from the config table.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct FetchConfig {
    #[validate(nested)]
    pub columns: ColumnMapping,

    #[validate(length(min = 1))]
    pub survey: String,

    pub size_arcmin: f64,

    pub outdir: PathBuf,

    /// Parsed and carried, never used to shape a request.
    pub band: String,
}

impl FetchConfig {
    pub fn new(
        columns: ColumnMapping,
        survey: String,
        size_arcmin: f64,
        outdir: PathBuf,
        band: String,
    ) -> Self {
        Self {
            columns,
            survey,
            size_arcmin,
            outdir,
            band,
        }
    }
}
