//! Pure dimension math. No I/O, no images.

use crate::error::{ResizeError, Result};
use crate::request::TargetAxis;

/// Compute output dimensions that preserve the source aspect ratio.
///
/// The pinned axis is copied through exactly; the derived axis is scaled in
/// floating point and truncated. Truncation, not rounding, is the contract:
/// a 100x33 image at target height 10 comes out 30x10, never 31x10.
pub fn compute_dimensions(source: (u32, u32), axis: TargetAxis) -> Result<(u32, u32)> {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return Err(ResizeError::ZeroDimension(src_w, src_h));
    }

    Ok(match axis {
        TargetAxis::Height(target) => {
            let scale = target as f64 / src_h as f64;
            ((scale * src_w as f64) as u32, target)
        }
        TargetAxis::Width(target) => {
            let scale = target as f64 / src_w as f64;
            (target, (scale * src_h as f64) as u32)
        }
    })
}
