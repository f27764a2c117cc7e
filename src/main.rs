use clap::Parser;
use img_resize::cli::Args;
use img_resize::{dispatch, error, info, logger, Result};

fn main() {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let request = args.to_request()?;
    let summary = dispatch(&args.input, &request, args.file_type.as_deref())?;

    if summary.failed > 0 {
        info!(
            "Done: {} resized, {} failed",
            summary.succeeded, summary.failed
        );
    } else {
        info!("Done: {} resized", summary.succeeded);
    }

    Ok(())
}
