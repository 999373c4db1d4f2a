pub mod config;
pub mod request;
pub mod target;

pub use config::{ColumnMapping, FetchConfig};
pub use request::CutoutRequest;
pub use target::Target;
