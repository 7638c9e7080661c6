// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! C-compatible type definitions.

use crate::formats::ZXING_FORMAT_ALL;
use std::ffi::c_char;

// ============================================================================
// Request / Response Structs
// ============================================================================

/// Decoder options.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_snake_case)]
pub struct ZxingDecodeOptions {
    /// Bit mask of `ZXING_FORMAT_*` flags to look for.
    pub Formats: u32,
    /// Spend more time looking for symbols (extra scan passes).
    pub TryHarder: bool,
    /// Also scan a rotated copy of the image.
    pub TryRotate: bool,
    /// Also scan an inverted (light on dark) copy of the image.
    pub TryInvert: bool,
    /// Also scan downscaled copies of large images.
    pub TryDownscale: bool,
}

impl Default for ZxingDecodeOptions {
    fn default() -> Self {
        Self {
            Formats: ZXING_FORMAT_ALL,
            TryHarder: true,
            TryRotate: true,
            TryInvert: false,
            TryDownscale: true,
        }
    }
}

/// A single decoded symbol.
///
/// Allocated by the library; release with `zxing_free_result`, or with
/// `zxing_free_results` when it is an element of a result array.
#[repr(C)]
#[derive(Debug)]
#[allow(non_snake_case)]
pub struct ZxingDecodeResult {
    /// NUL-terminated UTF-8 text of the symbol. A payload containing a NUL
    /// byte is cut at the first NUL.
    pub Text: *mut c_char,
    /// The matched `ZXING_FORMAT_*` flag (a single flag, never a mask).
    pub Format: u32,
    /// Decoder confidence in `[0, 1]`.
    pub Confidence: f32,
}
