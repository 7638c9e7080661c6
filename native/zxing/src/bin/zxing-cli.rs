// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use zxing::{BarcodeFormat, DecodeOptions, DecodeResult, Decoder};

#[derive(Parser)]
#[command(name = "zxing-cli", version, about = "Decode barcodes and QR codes from image files")]
struct Cli {
    /// Report every symbol in each image instead of the first one
    #[arg(long)]
    multi: bool,

    /// Comma-separated formats to look for, e.g. "qr,ean13" (default: all)
    #[arg(long, value_delimiter = ',')]
    formats: Vec<BarcodeFormat>,

    #[arg(long)]
    no_try_harder: bool,

    #[arg(long)]
    no_try_rotate: bool,

    #[arg(long)]
    try_invert: bool,

    #[arg(long)]
    no_try_downscale: bool,

    /// Image files to decode
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

impl Cli {
    fn apply(&self, defaults: DecodeOptions) -> DecodeOptions {
        let mut options = defaults;
        if !self.formats.is_empty() {
            options.formats = self
                .formats
                .iter()
                .fold(BarcodeFormat::NONE, |mask, format| mask | *format);
        }
        if self.no_try_harder {
            options.try_harder = false;
        }
        if self.no_try_rotate {
            options.try_rotate = false;
        }
        if self.try_invert {
            options.try_invert = true;
        }
        if self.no_try_downscale {
            options.try_downscale = false;
        }
        options
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let decoder = Decoder::linked();
    let options = match decoder.default_options() {
        Ok(defaults) => cli.apply(defaults),
        Err(err) => {
            eprintln!("Failed to create default options: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("decode options: {:?}", options);

    let supported = decoder.supported_formats();
    let undetectable = cli
        .formats
        .iter()
        .filter(|format| **format != BarcodeFormat::ALL && !supported.contains(**format));
    for format in undetectable {
        log::warn!("{} is accepted but cannot be detected by this build", format);
    }

    let mut failures = 0;
    for path in &cli.paths {
        let outcome = if cli.multi {
            decoder.decode_many(path, Some(&options))
        } else {
            decoder.decode_one(path, Some(&options)).map(|result| vec![result])
        };

        match outcome {
            Ok(results) => print_results(path, &results),
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_results(path: &Path, results: &[DecodeResult]) {
    println!("{}: found {} barcode(s)", path.display(), results.len());
    for (i, result) in results.iter().enumerate() {
        println!("  Barcode {}:", i + 1);
        println!("    Text: {}", result.text);
        println!("    Format: {}", result.format);
        println!("    Confidence: {:.2}", result.confidence);
    }
}
