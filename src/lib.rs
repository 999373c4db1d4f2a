pub mod cli;
pub mod error;
pub mod fetch;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;

pub use error::{CutoutError, Result};
