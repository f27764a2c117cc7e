use image::{DynamicImage, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Write a real, decodable test image with a simple gradient so JPEG
/// encoding has something to chew on.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    DynamicImage::ImageRgb8(img).save(path).unwrap();
}

/// Populate `dir` with `count` small images named `img0.{ext}`..`imgN.{ext}`.
pub fn write_test_images(dir: &Path, count: usize, ext: &str, size: (u32, u32)) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.join(format!("img{}.{}", i, ext));
            write_test_image(&path, size.0, size.1);
            path
        })
        .collect()
}
