// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Safe Rust bindings for the zxing-ffi barcode decoder.
//!
//! The native library does the image loading and symbol detection. This
//! crate marshals options into it, releases every native allocation it is
//! handed before returning, and turns native failures into [`Error`] values.
//!
//! ```no_run
//! let result = zxing::decode_one("code.png", None)?;
//! println!("{} ({})", result.text, result.format);
//!
//! let options = zxing::default_options()?.with_try_invert(true);
//! for result in zxing::decode_many("codes.png", Some(&options))? {
//!     println!("{}", result.text);
//! }
//! # Ok::<(), zxing::Error>(())
//! ```
//!
//! # Concurrency
//!
//! Decode calls are synchronous and may run on many threads at once. The
//! native last-error slot is shared by the whole process, so when two calls
//! fail at the same time one of them can report the other's message.

mod decoder;
mod error;
mod format;
mod guard;
mod native;
mod options;
mod result;

pub use decoder::Decoder;
pub use error::{Error, Result};
pub use format::{BarcodeFormat, ParseFormatError};
pub use native::NativeApi;
pub use options::DecodeOptions;
pub use result::DecodeResult;

use std::path::Path;

/// Reads the native library's default options.
pub fn default_options() -> Result<DecodeOptions> {
    Decoder::linked().default_options()
}

/// Decodes the first symbol in the image at `path`.
///
/// `None` options are replaced by [`default_options`].
pub fn decode_one(path: impl AsRef<Path>, options: Option<&DecodeOptions>) -> Result<DecodeResult> {
    Decoder::linked().decode_one(path, options)
}

/// Decodes every symbol in the image at `path`. Zero matches is an empty vector.
///
/// `None` options are replaced by [`default_options`].
pub fn decode_many(
    path: impl AsRef<Path>,
    options: Option<&DecodeOptions>,
) -> Result<Vec<DecodeResult>> {
    Decoder::linked().decode_many(path, options)
}

/// Mask of the formats the linked native library can actually detect.
pub fn supported_formats() -> BarcodeFormat {
    Decoder::linked().supported_formats()
}
