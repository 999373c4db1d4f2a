/// Cutout service root; requests go to `{base}/cutout.{format}`.
pub const DEFAULT_BASE_URL: &str = "http://legacysurvey.org/viewer";

/// Output image format
pub const DEFAULT_FORMAT: &str = "fits";

/// Cutout edge length in pixels
pub const DEFAULT_SIZE_PIX: u32 = 512;

/// Retry defaults
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

/// Config table header columns
pub const CONFIG_PARAMETER_COLUMN: &str = "parameter";
pub const CONFIG_VALUE_COLUMN: &str = "value";

/// Config keys
pub const KEY_NAME_COL: &str = "name_col";
pub const KEY_RA_COL: &str = "ra_col";
pub const KEY_DEC_COL: &str = "dec_col";
pub const KEY_SURVEY: &str = "survey";
pub const KEY_SIZE_ARCMIN: &str = "size_arcmin";
pub const KEY_OUTDIR: &str = "outdir";
pub const KEY_BAND: &str = "band";

pub const REQUIRED_KEYS: [&str; 7] = [
    KEY_NAME_COL,
    KEY_RA_COL,
    KEY_DEC_COL,
    KEY_SURVEY,
    KEY_SIZE_ARCMIN,
    KEY_OUTDIR,
    KEY_BAND,
];

/// Rounding applied to request parameters
pub const COORDINATE_DECIMALS: i32 = 5;
pub const PIXSCALE_DECIMALS: i32 = 4;
