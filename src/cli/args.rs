use crate::utils::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, DEFAULT_FORMAT, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_RETRY_DELAY_MS, DEFAULT_SIZE_PIX,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cutout-fetcher")]
#[command(about = "Download survey image cutouts for a list of sky positions")]
#[command(version)]
pub struct Cli {
    #[arg(help = "List of positions [deg] to obtain cutouts for (CSV)")]
    pub target_file: PathBuf,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file")]
    pub config: PathBuf,

    #[arg(long, default_value_t = DEFAULT_SIZE_PIX, help = "Cutout edge length in pixels")]
    pub size_pix: u32,

    #[arg(long, default_value = "", help = "Prefix for output filenames")]
    pub prefix: String,

    #[arg(long, help = "Filename label [default: survey]")]
    pub suffix: Option<String>,

    #[arg(long, default_value = DEFAULT_FORMAT, help = "Image format requested and written")]
    pub format: String,

    #[arg(long, default_value = DEFAULT_BASE_URL, help = "Cutout service root URL")]
    pub base_url: String,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, help = "Download attempts per target")]
    pub max_attempts: u32,

    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_MS, help = "Pause between attempts (ms)")]
    pub retry_delay_ms: u64,

    #[arg(long, help = "Command run on each new cutout, with its path appended")]
    pub post_command: Option<String>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Disable the progress bar")]
    pub no_progress: bool,
}
