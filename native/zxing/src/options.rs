// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Decoder options.

use crate::format::BarcodeFormat;
use zxing_ffi::ZxingDecodeOptions;

/// Which symbologies to look for and how hard to try.
///
/// There is deliberately no `Default` impl: the defaults belong to the native
/// library and are read from it with [`crate::default_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Symbologies to look for.
    pub formats: BarcodeFormat,
    /// Spend more time looking for symbols.
    pub try_harder: bool,
    /// Also look at a rotated copy of the image.
    pub try_rotate: bool,
    /// Also look for light-on-dark symbols.
    pub try_invert: bool,
    /// Also look at downscaled copies of large images.
    pub try_downscale: bool,
}

impl DecodeOptions {
    /// Options looking for `formats` with every effort toggle off.
    pub const fn new(formats: BarcodeFormat) -> Self {
        Self {
            formats,
            try_harder: false,
            try_rotate: false,
            try_invert: false,
            try_downscale: false,
        }
    }

    /// Sets the symbologies to look for.
    pub const fn with_formats(mut self, formats: BarcodeFormat) -> Self {
        self.formats = formats;
        self
    }

    /// Sets `try_harder`.
    pub const fn with_try_harder(mut self, enabled: bool) -> Self {
        self.try_harder = enabled;
        self
    }

    /// Sets `try_rotate`.
    pub const fn with_try_rotate(mut self, enabled: bool) -> Self {
        self.try_rotate = enabled;
        self
    }

    /// Sets `try_invert`.
    pub const fn with_try_invert(mut self, enabled: bool) -> Self {
        self.try_invert = enabled;
        self
    }

    /// Sets `try_downscale`.
    pub const fn with_try_downscale(mut self, enabled: bool) -> Self {
        self.try_downscale = enabled;
        self
    }

    pub(crate) fn to_native(self) -> ZxingDecodeOptions {
        ZxingDecodeOptions {
            Formats: self.formats.to_native(),
            TryHarder: self.try_harder,
            TryRotate: self.try_rotate,
            TryInvert: self.try_invert,
            TryDownscale: self.try_downscale,
        }
    }

    pub(crate) fn from_native(native: &ZxingDecodeOptions) -> Self {
        Self {
            formats: BarcodeFormat::from_native(native.Formats),
            try_harder: native.TryHarder,
            try_rotate: native.TryRotate,
            try_invert: native.TryInvert,
            try_downscale: native.TryDownscale,
        }
    }
}
