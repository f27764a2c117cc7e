use crate::batch::{list_candidates, run_batch, BatchSummary};
use crate::error::{ResizeError, Result};
use crate::processing::resize_to_path;
use crate::request::ResizeRequest;
use std::path::Path;

/// Route the input path to single-file or directory-batch mode.
///
/// Directory inputs need an extension before anything is opened; a missing
/// one fails the whole run up front. Inputs that are neither a regular file
/// nor a directory (broken symlinks, sockets, typos) are an explicit
/// [`ResizeError::NotFound`].
pub fn dispatch(
    input: &Path,
    request: &ResizeRequest,
    extension: Option<&str>,
) -> Result<BatchSummary> {
    if input.is_dir() {
        let ext = extension.ok_or_else(|| {
            ResizeError::Config(
                "specify a file type with --type when sourcing from a directory".to_string(),
            )
        })?;

        let files = list_candidates(input, ext)?;
        run_batch(&files, request)
    } else if input.is_file() {
        resize_to_path(input, &request.destination, request)?;
        Ok(BatchSummary {
            succeeded: 1,
            failed: 0,
        })
    } else {
        Err(ResizeError::NotFound(input.to_path_buf()))
    }
}
