pub mod batch;
pub mod cli;
pub mod constants;
pub mod dimensions;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod processing;
pub mod request;

pub use batch::{list_candidates, run_batch, BatchSummary};
pub use dimensions::compute_dimensions;
pub use dispatch::dispatch;
pub use error::{ResizeError, Result};
pub use processing::{output_path_for, resize_to_dir, resize_to_path};
pub use request::{ChromaSubsampling, ResizeRequest, TargetAxis};
