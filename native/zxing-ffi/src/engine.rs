// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Image loading and symbol detection behind the C API.
//!
//! Images are reduced to 8-bit luma and scanned in one or more passes. The
//! first pass always scans the image as loaded; the decode-effort options add
//! further passes over transformed copies.

use crate::formats::*;
use crate::types::*;
use image::GrayImage;
use image::imageops::{self, FilterType};
use std::borrow::Cow;

/// Formats this engine can actually detect.
pub(crate) const SUPPORTED_FORMATS: u32 = ZXING_FORMAT_QR_CODE;

/// Images whose longer side exceeds this are also scanned downscaled.
const DOWNSCALE_THRESHOLD: u32 = 500;

/// Confidence reported for every decoded symbol; the QR decoder either
/// corrects a symbol completely or rejects it.
const DECODED_CONFIDENCE: f32 = 1.0;

/// Scan parameters derived from `ZxingDecodeOptions`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanRequest {
    pub formats: u32,
    pub try_harder: bool,
    pub try_rotate: bool,
    pub try_invert: bool,
    pub try_downscale: bool,
}

impl From<&ZxingDecodeOptions> for ScanRequest {
    fn from(options: &ZxingDecodeOptions) -> Self {
        Self {
            formats: options.Formats,
            try_harder: options.TryHarder,
            try_rotate: options.TryRotate,
            try_invert: options.TryInvert,
            try_downscale: options.TryDownscale,
        }
    }
}

/// How many symbols the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanLimit {
    /// Stop at the first decoded symbol.
    First,
    /// Collect every distinct symbol.
    All,
}

/// A decoded symbol, still owned by Rust.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Symbol {
    pub text: String,
    pub format: u32,
    pub confidence: f32,
}

/// A transformed view of the source image scanned in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    Original,
    /// Both dimensions divided by the factor.
    Downscaled(u32),
    Rotated,
    Inverted,
    Stretched,
}

// ============================================================================
// Loading
// ============================================================================

/// Loads an image file and converts it to 8-bit luma.
pub(crate) fn load_luma(path: &str) -> Result<GrayImage, String> {
    match image::open(path) {
        Ok(img) => Ok(img.to_luma8()),
        Err(e) => Err(format!("Failed to load image: {} ({})", path, e)),
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// Plans the scan passes for an image of the given size.
pub(crate) fn plan_passes(width: u32, height: u32, request: &ScanRequest) -> Vec<Pass> {
    let mut passes = vec![Pass::Original];

    let longest = width.max(height);
    if request.try_downscale && longest > DOWNSCALE_THRESHOLD {
        let mut factor = 2;
        loop {
            passes.push(Pass::Downscaled(factor));
            if longest / factor <= DOWNSCALE_THRESHOLD {
                break;
            }
            factor *= 2;
        }
    }
    if request.try_rotate {
        passes.push(Pass::Rotated);
    }
    if request.try_invert {
        passes.push(Pass::Inverted);
    }
    if request.try_harder {
        passes.push(Pass::Stretched);
    }

    passes
}

/// Scans an image for symbols in the requested formats.
///
/// A payload already reported by an earlier pass is not reported again.
/// Without `try_harder`, scanning stops after the first pass that yields
/// anything.
pub(crate) fn scan(image: &GrayImage, request: &ScanRequest, limit: ScanLimit) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = Vec::new();

    if request.formats & SUPPORTED_FORMATS == 0 {
        log::debug!(
            "zxing: no supported format in mask {:#06x} (supported {:#06x})",
            request.formats,
            SUPPORTED_FORMATS
        );
        return symbols;
    }

    for pass in plan_passes(image.width(), image.height(), request) {
        let view = render(image, pass);
        let found = scan_qr(&view);
        log::debug!(
            "zxing: pass {:?} ({}x{}) found {} symbol(s)",
            pass,
            view.width(),
            view.height(),
            found.len()
        );

        // Later passes only add payloads no earlier pass reported; codes
        // sharing a payload within one pass are distinct symbols.
        let productive = !found.is_empty();
        let earlier = symbols.len();
        for symbol in found {
            if !symbols[..earlier].iter().any(|known| known.text == symbol.text) {
                symbols.push(symbol);
            }
        }

        let done = match limit {
            ScanLimit::First => productive,
            ScanLimit::All => productive && !request.try_harder,
        };
        if done {
            break;
        }
    }

    if limit == ScanLimit::First {
        symbols.truncate(1);
    }
    symbols
}

/// Produces the image scanned in the given pass.
fn render(image: &GrayImage, pass: Pass) -> Cow<'_, GrayImage> {
    match pass {
        Pass::Original => Cow::Borrowed(image),
        Pass::Downscaled(factor) => {
            let width = (image.width() / factor).max(1);
            let height = (image.height() / factor).max(1);
            Cow::Owned(imageops::resize(image, width, height, FilterType::Triangle))
        }
        Pass::Rotated => Cow::Owned(imageops::rotate90(image)),
        Pass::Inverted => {
            let mut inverted = image.clone();
            imageops::invert(&mut inverted);
            Cow::Owned(inverted)
        }
        Pass::Stretched => Cow::Owned(stretch_contrast(image)),
    }
}

/// Linearly stretches luma so the darkest pixel maps to 0 and the brightest to 255.
fn stretch_contrast(image: &GrayImage) -> GrayImage {
    let (lo, hi) = image
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p.0[0]), hi.max(p.0[0])));

    let mut stretched = image.clone();
    if hi <= lo {
        return stretched;
    }

    let range = (hi - lo) as u32;
    for p in stretched.pixels_mut() {
        p.0[0] = ((p.0[0] - lo) as u32 * 255 / range) as u8;
    }
    stretched
}

fn scan_qr(image: &GrayImage) -> Vec<Symbol> {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32).0[0],
    );

    prepared
        .detect_grids()
        .into_iter()
        .filter_map(|grid| match grid.decode() {
            Ok((_, text)) if text.is_empty() => {
                log::debug!("zxing: skipping QR code with empty payload");
                None
            }
            Ok((_, text)) => Some(Symbol {
                text,
                format: ZXING_FORMAT_QR_CODE,
                confidence: DECODED_CONFIDENCE,
            }),
            Err(e) => {
                log::debug!("zxing: QR grid rejected: {:?}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
