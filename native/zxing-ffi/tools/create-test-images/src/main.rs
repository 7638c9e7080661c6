// Tool for creating QR code test images.
// Renders one or more QR codes into a single grayscale image, optionally
// inverted, rotated or scaled, for exercising the decoder by hand.

use image::{GrayImage, Luma, imageops};
use qrcode::{Color, QrCode};
use std::env;
use std::io;
use std::path::Path;

/// Default pixels per QR module
const DEFAULT_SCALE: u32 = 8;

/// Modules of light border around each code
const QUIET_ZONE: u32 = 4;

/// Rendering settings collected from the command line
#[derive(Debug)]
struct Settings {
    texts: Vec<String>,
    scale: u32,
    invert: bool,
    rotate: bool,
}

/// Render a single QR code, black on white
fn render_qr(text: &str, scale: u32) -> io::Result<GrayImage> {
    let code = QrCode::new(text.as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}: {}", text, e)))?;
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * scale;

    Ok(GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / scale) as i64 - QUIET_ZONE as i64;
        let my = (y / scale) as i64 - QUIET_ZONE as i64;
        let inside = mx >= 0 && my >= 0 && (mx as u32) < modules && (my as u32) < modules;
        if inside && colors[my as usize * modules as usize + mx as usize] == Color::Dark {
            Luma([0])
        } else {
            Luma([255])
        }
    }))
}

/// Place codes side by side on a white canvas
fn compose(codes: &[GrayImage]) -> GrayImage {
    let width = codes.iter().map(|c| c.width()).sum::<u32>().max(1);
    let height = codes.iter().map(|c| c.height()).max().unwrap_or(1);
    let mut canvas = GrayImage::from_pixel(width, height, Luma([255]));

    let mut x = 0i64;
    for code in codes {
        imageops::replace(&mut canvas, code, x, 0);
        x += code.width() as i64;
    }
    canvas
}

fn print_usage() {
    eprintln!("Usage: create-test-images <output> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --text <TEXT>     Add a QR code encoding TEXT (repeatable, default \"test\")");
    eprintln!("  --scale <N>       Pixels per module (default {})", DEFAULT_SCALE);
    eprintln!("  --invert          Render light codes on a dark background");
    eprintln!("  --rotate          Rotate the image by 90 degrees");
    eprintln!();
    eprintln!("The output format follows the file extension (.png, .jpg).");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let output_path = &args[1];
    if output_path == "--help" || output_path == "-h" {
        print_usage();
        std::process::exit(0);
    }

    let mut settings = Settings {
        texts: Vec::new(),
        scale: DEFAULT_SCALE,
        invert: false,
        rotate: false,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--text" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --text requires a content argument");
                    std::process::exit(1);
                }
                settings.texts.push(args[i].clone());
            }
            "--scale" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse::<u32>().ok()) {
                    Some(scale) if scale > 0 => settings.scale = scale,
                    _ => {
                        eprintln!("Error: --scale requires a positive integer");
                        std::process::exit(1);
                    }
                }
            }
            "--invert" => {
                settings.invert = true;
            }
            "--rotate" => {
                settings.rotate = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if settings.texts.is_empty() {
        settings.texts.push("test".to_string());
    }

    let codes = settings
        .texts
        .iter()
        .map(|text| render_qr(text, settings.scale))
        .collect::<io::Result<Vec<_>>>()?;

    let mut canvas = compose(&codes);
    if settings.invert {
        imageops::invert(&mut canvas);
    }
    if settings.rotate {
        canvas = imageops::rotate90(&canvas);
    }

    canvas
        .save(Path::new(output_path))
        .map_err(|e| io::Error::other(e.to_string()))?;
    println!(
        "Wrote {}x{} image with {} code(s) to {}",
        canvas.width(),
        canvas.height(),
        codes.len(),
        output_path
    );

    Ok(())
}
