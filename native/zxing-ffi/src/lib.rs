// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! zxing-ffi - C API for barcode and QR code decoding.
//!
//! This crate provides a C-compatible API for decoding barcodes from image
//! files, designed for FFI bindings to languages like C#. Failures are
//! reported by null returns; the message is available from
//! `zxing_get_last_error`.

mod decoder;
mod engine;
mod error;
mod formats;
mod types;

pub use decoder::*;
pub use error::*;
pub use formats::*;
pub use types::*;

/// Returns the library version as a packed integer.
/// Format: (major << 24) | (minor << 16) | (patch << 8)
#[unsafe(no_mangle)]
pub extern "C" fn zxing_version() -> u32 {
    let major: u32 = env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0);
    let minor: u32 = env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0);
    let patch: u32 = env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0);
    (major << 24) | (minor << 16) | (patch << 8)
}

/// Returns the mask of `ZXING_FORMAT_*` flags this build can detect.
///
/// Other flags are accepted in `ZxingDecodeOptions::Formats` but never match.
#[unsafe(no_mangle)]
pub extern "C" fn zxing_supported_formats() -> u32 {
    engine::SUPPORTED_FORMATS
}

#[cfg(any(test, feature = "test-util"))]
pub mod test_support;
