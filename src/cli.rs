use crate::error::Result;
use crate::request::{ChromaSubsampling, ResizeRequest, TargetAxis};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-resize",
    about = "Batch-resize images to a target dimension, preserving aspect ratio",
    long_about = "img-resize scales one image or a directory of images to a target height \
                  or width, deriving the other axis from the source aspect ratio. \
                  Directory batches run on a fixed pool of 4 concurrent workers.",
    version,
    group(ArgGroup::new("target").args(["height", "width"]).required(true)),
    after_help = "EXAMPLES:\n  \
    img-resize -i photo.jpg -o small.jpg --width 800\n  \
    img-resize -i ./shoot/ -t jpg -o ./resized/ --height 1080 -q 85"
)]
pub struct Args {
    #[arg(short = 'i', long, help = "Image or directory of images to be resized")]
    pub input: PathBuf,

    #[arg(
        short = 't',
        long = "type",
        help = "Image file type, e.g. jpg png; required when the input is a directory",
        long_help = "File extension used to pick candidates from a directory input. \
                     Matched verbatim as *.{type}, non-recursively. Ignored in \
                     single-file mode."
    )]
    pub file_type: Option<String>,

    #[arg(
        short = 'o',
        long,
        help = "Image or directory of images to save resizes to"
    )]
    pub output: PathBuf,

    #[arg(
        short = 'q',
        long,
        help = "0-100, lowest to highest quality compression (default: 90)"
    )]
    pub quality: Option<u8>,

    #[arg(long, help = "Target height of resized images")]
    pub height: Option<u32>,

    #[arg(long, help = "Target width of resized images")]
    pub width: Option<u32>,

    #[arg(long, help = "Suppress informational output")]
    pub quiet: bool,
}

impl Args {
    /// Build the immutable request every component reads from.
    pub fn to_request(&self) -> Result<ResizeRequest> {
        let axis = match (self.height, self.width) {
            (Some(h), None) => TargetAxis::Height(h),
            (None, Some(w)) => TargetAxis::Width(w),
            // clap's required mutually-exclusive group rules both other cases out
            _ => unreachable!("exactly one of --height/--width is enforced by clap"),
        };

        ResizeRequest::new(
            self.output.clone(),
            axis,
            self.quality,
            ChromaSubsampling::default(),
        )
    }
}
