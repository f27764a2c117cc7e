use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY};
use crate::error::{ResizeError, Result};
use std::path::PathBuf;

/// Which output axis is pinned to a target pixel value. The other axis is
/// derived from the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAxis {
    Height(u32),
    Width(u32),
}

/// Chroma subsampling setting passed through to the JPEG encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromaSubsampling {
    /// 4:4:4, full chroma resolution.
    #[default]
    None,
    /// 4:2:2, chroma halved horizontally.
    Horizontal,
    /// 4:2:0, chroma halved in both directions.
    Both,
}

/// Resize configuration, built once from the command line and passed by
/// reference into every component. Read-only after construction.
#[derive(Debug, Clone)]
pub struct ResizeRequest {
    /// Destination file (single-file mode) or directory (batch mode).
    pub destination: PathBuf,
    pub axis: TargetAxis,
    pub quality: u8,
    pub subsampling: ChromaSubsampling,
}

impl ResizeRequest {
    pub fn new(
        destination: PathBuf,
        axis: TargetAxis,
        quality: Option<u8>,
        subsampling: ChromaSubsampling,
    ) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if quality > MAX_QUALITY {
            return Err(ResizeError::InvalidQuality(quality));
        }

        Ok(Self {
            destination,
            axis,
            quality,
            subsampling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let request = ResizeRequest::new(
            PathBuf::from("/tmp/out"),
            TargetAxis::Width(800),
            Some(75),
            ChromaSubsampling::None,
        )
        .unwrap();
        assert_eq!(request.destination, PathBuf::from("/tmp/out"));
        assert_eq!(request.axis, TargetAxis::Width(800));
        assert_eq!(request.quality, 75);
        assert_eq!(request.subsampling, ChromaSubsampling::None);
    }

    #[test]
    fn test_request_default_quality() {
        let request = ResizeRequest::new(
            PathBuf::from("out.jpg"),
            TargetAxis::Height(600),
            None,
            ChromaSubsampling::default(),
        )
        .unwrap();
        assert_eq!(request.quality, 90);
    }

    #[test]
    fn test_request_invalid_quality() {
        let result = ResizeRequest::new(
            PathBuf::from("out.jpg"),
            TargetAxis::Height(600),
            Some(101),
            ChromaSubsampling::None,
        );
        assert!(matches!(result, Err(ResizeError::InvalidQuality(101))));
    }

    #[test]
    fn test_request_quality_bounds_inclusive() {
        for quality in [0, 100] {
            let request = ResizeRequest::new(
                PathBuf::from("out.jpg"),
                TargetAxis::Width(100),
                Some(quality),
                ChromaSubsampling::None,
            )
            .unwrap();
            assert_eq!(request.quality, quality);
        }
    }
}
