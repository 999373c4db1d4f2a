pub mod config_reader;
pub mod target_reader;

pub use config_reader::ConfigReader;
pub use target_reader::{TargetSource, TargetTable};
