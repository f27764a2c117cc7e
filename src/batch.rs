use crate::constants::WORKER_POOL_SIZE;
use crate::error::{ResizeError, Result};
use crate::processing::resize_to_dir;
use crate::request::ResizeRequest;
use glob::glob;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// List files directly inside `source_dir` whose name matches `*.{extension}`.
///
/// Non-recursive. An empty result is not an error; the caller decides what
/// to do with a batch of nothing.
pub fn list_candidates(source_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.{}", source_dir.display(), extension);

    let files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    Ok(files)
}

/// Resize every file in `files` into the request's destination directory on
/// a pool of [`WORKER_POOL_SIZE`] workers.
///
/// A failing file is logged and counted but never takes the rest of the
/// batch down with it. The pool is fully drained before this returns, so
/// every output file is on disk by then.
pub fn run_batch(files: &[PathBuf], request: &ResizeRequest) -> Result<BatchSummary> {
    if files.is_empty() {
        crate::info!("No matching image files found");
        return Ok(BatchSummary::default());
    }

    crate::info!("Resizing {} image files", files.len());

    std::fs::create_dir_all(&request.destination)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKER_POOL_SIZE)
        .build()
        .map_err(|e| ResizeError::Config(format!("failed to build worker pool: {}", e)))?;

    let results: Vec<Result<()>> = pool.install(|| {
        files
            .par_iter()
            .map(|src| {
                resize_to_dir(src, request).inspect_err(|e| {
                    crate::error!("Failed to process {:?}: {}", src, e);
                })
            })
            .collect()
    });

    let failed = results.iter().filter(|r| r.is_err()).count();
    Ok(BatchSummary {
        succeeded: results.len() - failed,
        failed,
    })
}
