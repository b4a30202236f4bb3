use argh::FromArgs;
use log::{info, warn};
use pixpack_core::{Bitmap, byte_len};

use crate::preview::to_gray_image;

mod preview;

#[derive(FromArgs)]
/// Convert a packed column-major monochrome bitmap back into an image
struct Args {
    /// raw packed bitmap path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output image path, the format follows the extension
    #[argh(option, short = 'o')]
    output_path: Option<String>,

    /// width in pixels
    #[argh(option)]
    width: usize,

    /// height in pixels
    #[argh(option)]
    height: usize,

    /// swap black and white
    #[argh(switch)]
    invert: bool,

    /// print an ASCII art preview to stdout
    #[argh(switch, short = 'a')]
    ascii: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let bytes = std::fs::read(&args.input_path).expect("Failed to read raw bitmap file");
    let expected = byte_len(args.width, args.height)
        .unwrap_or_else(|err| panic!("Invalid dimensions: {err}"));
    if bytes.len() > expected {
        warn!(
            "Ignoring {} trailing bytes in {}",
            bytes.len() - expected,
            args.input_path
        );
    }

    let mut bitmap = Bitmap::from_bytes(&bytes, args.width, args.height)
        .unwrap_or_else(|err| panic!("Failed to decode bitmap: {err}"));
    if args.invert {
        bitmap.invert();
    }
    info!("Decoded {}x{} bitmap", bitmap.width(), bitmap.height());

    if args.ascii {
        let art = bitmap.ascii_art(true);
        assert_eq!(art, bitmap.ascii_art(false), "Packed bits disagree with the pixel grid");
        print!("{art}");
    }

    if let Some(path) = &args.output_path {
        to_gray_image(bitmap.grid())
            .save(path)
            .expect("Failed to save image");
        info!("Wrote {path}");
    }
}
