use crate::dimensions::compute_dimensions;
use crate::error::{ResizeError, Result};
use crate::request::{ChromaSubsampling, ResizeRequest};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Decode the image at `src`, scale it to the request's target axis and
/// encode it to `dest`. Any existing file at `dest` is overwritten.
///
/// Stateless: every call is an independent transform, which is what lets the
/// batch workers run without any shared state.
pub fn resize_to_path(src: &Path, dest: &Path, request: &ResizeRequest) -> Result<()> {
    let img = decode_image(src)?;
    let (new_w, new_h) = compute_dimensions(img.dimensions(), request.axis)?;

    // Lanczos costs the most of the common filters but resamples cleanest
    // in both directions.
    let resized = img.resize_exact(new_w, new_h, FilterType::Lanczos3);

    encode_image(&resized, dest, request)
}

/// Resize `src` into the request's destination directory, keeping the source
/// file name and extension verbatim.
pub fn resize_to_dir(src: &Path, request: &ResizeRequest) -> Result<()> {
    let dest = output_path_for(src, &request.destination)?;
    resize_to_path(src, &dest, request)
}

/// Destination path for a batch item: destination directory + source basename.
/// No extension translation happens here.
pub fn output_path_for(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| ResizeError::NotFound(src.to_path_buf()))?;
    Ok(dest_dir.join(name))
}

fn decode_image(src: &Path) -> Result<DynamicImage> {
    ImageReader::open(src)
        .map_err(|e| ResizeError::Decode {
            path: src.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| ResizeError::Decode {
            path: src.to_path_buf(),
            source: e,
        })
}

fn encode_image(img: &DynamicImage, dest: &Path, request: &ResizeRequest) -> Result<()> {
    let format = ImageFormat::from_path(dest).map_err(|e| ResizeError::Encode {
        path: dest.to_path_buf(),
        source: e,
    })?;

    match format {
        ImageFormat::Jpeg => {
            if request.subsampling != ChromaSubsampling::None {
                crate::warn!(
                    "{:?}: JPEG encoder emits 4:4:4; requested chroma subsampling not applied",
                    dest
                );
            }

            let file = File::create(dest).map_err(|e| ResizeError::Encode {
                path: dest.to_path_buf(),
                source: image::ImageError::IoError(e),
            })?;
            let mut writer = BufWriter::new(file);

            // JPEG has no alpha channel
            let rgb = img.to_rgb8();
            JpegEncoder::new_with_quality(&mut writer, request.quality)
                .encode_image(&rgb)
                .map_err(|e| ResizeError::Encode {
                    path: dest.to_path_buf(),
                    source: e,
                })?;
        }
        _ => {
            img.save_with_format(dest, format)
                .map_err(|e| ResizeError::Encode {
                    path: dest.to_path_buf(),
                    source: e,
                })?;
        }
    }

    Ok(())
}
