use argh::FromArgs;
use log::{info, trace};
use pixpack_core::{Bitmap, c_source};

use crate::{image_source::DecodedImage, preview::to_gray_image};

mod image_source;
mod preview;

#[derive(FromArgs)]
/// Convert an image into a packed column-major monochrome bitmap
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output C source path, stdout if omitted
    #[argh(option, short = 'o')]
    output_path: Option<String>,

    /// also write the packed bytes to this file
    #[argh(option, short = 'r')]
    raw: Option<String>,

    /// array identifier, emits only the array body if omitted
    #[argh(option, short = 'n')]
    name: Option<String>,

    /// swap black and white
    #[argh(switch)]
    invert: bool,

    /// line prefix for the array body
    #[argh(option, default = "String::from(\"\\t\")")]
    prefix: String,

    /// bytes per line
    #[argh(option, default = "16")]
    line_width: usize,

    /// print an ASCII art preview to stderr
    #[argh(switch, short = 'a')]
    ascii: bool,

    /// save the thresholded image for inspection
    #[argh(option, short = 'p')]
    preview: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input_path).expect("Failed to open input image");
    info!(
        "Loaded {} ({}x{}, {:?})",
        args.input_path,
        image.width(),
        image.height(),
        image.color()
    );

    let mut bitmap = Bitmap::from_image(&DecodedImage(image))
        .unwrap_or_else(|err| panic!("Failed to convert image: {err}"));
    if args.invert {
        trace!("Inverting bitmap");
        bitmap.invert();
    }
    info!(
        "Packed {}x{} into {} bytes (pad height {})",
        bitmap.width(),
        bitmap.height(),
        bitmap.bits().len(),
        bitmap.packed().pad_height()
    );

    if args.ascii {
        let art = bitmap.ascii_art(true);
        assert_eq!(art, bitmap.ascii_art(false), "Packed bits disagree with the pixel grid");
        eprint!("{art}");
    }

    if let Some(path) = &args.preview {
        to_gray_image(bitmap.grid())
            .save(path)
            .expect("Failed to save preview image");
        info!("Wrote preview {path}");
    }

    let text = match &args.name {
        Some(name) => c_source(name, &bitmap, &args.prefix, args.line_width),
        None => bitmap
            .c_array(&args.prefix, args.line_width)
            .map(|body| body + "\n"),
    }
    .unwrap_or_else(|err| panic!("Failed to format C array: {err}"));

    match &args.output_path {
        Some(path) => {
            std::fs::write(path, &text).expect("Failed to write C source file");
            info!("Wrote {path}");
        }
        None => print!("{text}"),
    }

    if let Some(path) = &args.raw {
        std::fs::write(path, bitmap.bits()).expect("Failed to write raw bitmap file");
        info!("Wrote {} raw bytes to {path}", bitmap.bits().len());
    }
}
