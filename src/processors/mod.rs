pub mod batch_processor;
pub mod cutout_processor;
pub mod hooks;

pub use batch_processor::{BatchEntry, BatchProcessor, BatchSummary};
pub use cutout_processor::{CutoutOutcome, CutoutProcessor};
pub use hooks::{CommandHook, PostProcess};
