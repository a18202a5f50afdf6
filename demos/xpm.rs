use std::process::ExitCode;

use clap::Parser;
use code39::Generator;
use tracing_subscriber::EnvFilter;

/// Print a Code 39 barcode as XPM on stdout.
#[derive(Debug, Parser)]
struct Args {
    /// Text to encode (0-9, A-Z, space and - . $ / + %)
    text: String,

    /// Bitmap height in pixels
    #[arg(long, default_value_t = 50)]
    height: u32,

    /// Narrow bar width in pixels
    #[arg(long, default_value_t = 2)]
    narrow: u32,

    /// Wide to narrow bar ratio, clamped to [2, 3]
    #[arg(long, default_value_t = 3.0)]
    ratio: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut generator = Generator::new();
    generator.set_wide_to_narrow_ratio(args.ratio);
    if let Err(err) = generator.generate(&args.text, args.height, args.narrow) {
        eprintln!("error: {err}");
        return ExitCode::from(err.code() as u8);
    }

    match generator.bitmap().to_xpm() {
        Some(xpm) => {
            print!("{xpm}");
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
