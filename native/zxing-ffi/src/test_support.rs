// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! QR fixture images for tests.
//!
//! Built for this crate's unit tests, and for other crates with the
//! `test-util` feature.

use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};
use std::sync::{Mutex, MutexGuard};

/// Pixels per QR module in rendered fixtures.
pub const SCALE: u32 = 8;

/// Modules of light border around each rendered code.
const QUIET_ZONE: u32 = 4;

static SERIAL: Mutex<()> = Mutex::new(());

/// Serializes tests that go through the process-wide last-error slot.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Renders `text` as a black-on-white QR code.
pub fn qr_image(text: &str) -> GrayImage {
    let code = QrCode::new(text.as_bytes()).expect("Failed to encode QR fixture");
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * SCALE;

    GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / SCALE) as i64 - QUIET_ZONE as i64;
        let my = (y / SCALE) as i64 - QUIET_ZONE as i64;
        let inside = mx >= 0 && my >= 0 && (mx as u32) < modules && (my as u32) < modules;
        if inside && colors[my as usize * modules as usize + mx as usize] == Color::Dark {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// Places images side by side on a white canvas.
pub fn side_by_side(images: &[GrayImage]) -> GrayImage {
    let width = images.iter().map(|i| i.width()).sum();
    let height = images.iter().map(|i| i.height()).max().unwrap_or(1);
    let mut canvas = GrayImage::from_pixel(width, height, Luma([255]));

    let mut x = 0;
    for image in images {
        image::imageops::replace(&mut canvas, image, x, 0);
        x += image.width() as i64;
    }
    canvas
}

/// A uniformly light image with nothing to decode.
pub fn blank_image() -> GrayImage {
    GrayImage::from_pixel(200, 200, Luma([255]))
}
