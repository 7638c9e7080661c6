// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Barcode symbology flags.

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;
use zxing_ffi as sys;

/// A barcode symbology flag, or a set of them.
///
/// The numeric values are a stable wire format that maps 1:1 onto the native
/// `ZXING_FORMAT_*` constants. Values outside the known set are kept as-is
/// rather than rejected, since the native library may know formats this
/// binding does not.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BarcodeFormat(u32);

impl BarcodeFormat {
    /// No format.
    pub const NONE: Self = Self(sys::ZXING_FORMAT_NONE);
    /// QR Code.
    pub const QR_CODE: Self = Self(sys::ZXING_FORMAT_QR_CODE);
    /// Aztec.
    pub const AZTEC: Self = Self(sys::ZXING_FORMAT_AZTEC);
    /// Codabar.
    pub const CODABAR: Self = Self(sys::ZXING_FORMAT_CODABAR);
    /// Code 39.
    pub const CODE_39: Self = Self(sys::ZXING_FORMAT_CODE_39);
    /// Code 93.
    pub const CODE_93: Self = Self(sys::ZXING_FORMAT_CODE_93);
    /// Code 128.
    pub const CODE_128: Self = Self(sys::ZXING_FORMAT_CODE_128);
    /// Data Matrix.
    pub const DATA_MATRIX: Self = Self(sys::ZXING_FORMAT_DATA_MATRIX);
    /// EAN-8.
    pub const EAN_8: Self = Self(sys::ZXING_FORMAT_EAN_8);
    /// EAN-13.
    pub const EAN_13: Self = Self(sys::ZXING_FORMAT_EAN_13);
    /// ITF (Interleaved 2 of 5).
    pub const ITF: Self = Self(sys::ZXING_FORMAT_ITF);
    /// MaxiCode.
    pub const MAXICODE: Self = Self(sys::ZXING_FORMAT_MAXICODE);
    /// PDF417.
    pub const PDF_417: Self = Self(sys::ZXING_FORMAT_PDF_417);
    /// UPC-A.
    pub const UPC_A: Self = Self(sys::ZXING_FORMAT_UPC_A);
    /// UPC-E.
    pub const UPC_E: Self = Self(sys::ZXING_FORMAT_UPC_E);

    /// Every individual flag with its display name.
    const NAMED: [(Self, &'static str); 14] = [
        (Self::QR_CODE, "QR Code"),
        (Self::AZTEC, "Aztec"),
        (Self::CODABAR, "Codabar"),
        (Self::CODE_39, "Code 39"),
        (Self::CODE_93, "Code 93"),
        (Self::CODE_128, "Code 128"),
        (Self::DATA_MATRIX, "Data Matrix"),
        (Self::EAN_8, "EAN-8"),
        (Self::EAN_13, "EAN-13"),
        (Self::ITF, "ITF"),
        (Self::MAXICODE, "MaxiCode"),
        (Self::PDF_417, "PDF417"),
        (Self::UPC_A, "UPC-A"),
        (Self::UPC_E, "UPC-E"),
    ];

    /// Union of every individual flag.
    pub const ALL: Self = {
        let mut mask = 0;
        let mut i = 0;
        while i < Self::NAMED.len() {
            mask |= Self::NAMED[i].0.0;
            i += 1;
        }
        Self(mask)
    };

    /// Returns the native integer value.
    pub const fn to_native(self) -> u32 {
        self.0
    }

    /// Wraps a native integer value. Never fails.
    pub const fn from_native(value: u32) -> Self {
        Self(value)
    }

    /// Returns true if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the known individual flags set in `self`.
    pub fn flags(self) -> impl Iterator<Item = BarcodeFormat> {
        Self::NAMED
            .into_iter()
            .map(|(flag, _)| flag)
            .filter(move |flag| self.contains(*flag))
    }

    /// Human-readable name, e.g. `"QR Code"`, `"All"` or `"Unknown(9999)"`.
    pub fn display_name(self) -> Cow<'static, str> {
        match self {
            Self::NONE => Cow::Borrowed("None"),
            Self::ALL => Cow::Borrowed("All"),
            other => match Self::NAMED.iter().find(|(flag, _)| *flag == other) {
                Some((_, name)) => Cow::Borrowed(*name),
                None => Cow::Owned(format!("Unknown({})", other.0)),
            },
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl BitOr for BarcodeFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BarcodeFormat {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<BarcodeFormat> for u32 {
    fn from(format: BarcodeFormat) -> u32 {
        format.0
    }
}

impl From<u32> for BarcodeFormat {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Error returned when parsing an unrecognized format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized barcode format: {0:?}")]
pub struct ParseFormatError(String);

impl FromStr for BarcodeFormat {
    type Err = ParseFormatError;

    /// Parses a display name (`"QR Code"`, `"EAN-13"`) or its compact form
    /// (`"qrcode"`, `"ean13"`), ignoring case, spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = compact(s);
        match key.as_str() {
            "none" => return Ok(Self::NONE),
            "all" => return Ok(Self::ALL),
            "qr" => return Ok(Self::QR_CODE),
            _ => {}
        }

        Self::NAMED
            .iter()
            .find(|(_, name)| compact(name) == key)
            .map(|(flag, _)| *flag)
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

fn compact(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
