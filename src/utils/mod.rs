pub mod constants;
pub mod cutout_url;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use cutout_url::{format_decimal, make_url, pixel_scale, round_to};
pub use filename::{base_identifier, make_filename, sanitize_component};
pub use progress::ProgressReporter;
