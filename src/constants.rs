pub const DEFAULT_QUALITY: u8 = 90;
pub const MAX_QUALITY: u8 = 100;

/// Fixed number of concurrent workers for directory batches. Each worker
/// holds at most one decoded image, so this also bounds peak memory.
pub const WORKER_POOL_SIZE: usize = 4;
