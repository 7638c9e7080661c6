// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Barcode format flags.
//!
//! Formats are bit flags so a single `u32` can carry a set of symbologies in
//! `ZxingDecodeOptions::Formats` and exactly one symbology in
//! `ZxingDecodeResult::Format`. The numeric values are part of the ABI.

/// No format.
pub const ZXING_FORMAT_NONE: u32 = 0;
/// QR Code.
pub const ZXING_FORMAT_QR_CODE: u32 = 1 << 0;
/// Aztec.
pub const ZXING_FORMAT_AZTEC: u32 = 1 << 1;
/// Codabar.
pub const ZXING_FORMAT_CODABAR: u32 = 1 << 2;
/// Code 39.
pub const ZXING_FORMAT_CODE_39: u32 = 1 << 3;
/// Code 93.
pub const ZXING_FORMAT_CODE_93: u32 = 1 << 4;
/// Code 128.
pub const ZXING_FORMAT_CODE_128: u32 = 1 << 5;
/// Data Matrix.
pub const ZXING_FORMAT_DATA_MATRIX: u32 = 1 << 6;
/// EAN-8.
pub const ZXING_FORMAT_EAN_8: u32 = 1 << 7;
/// EAN-13.
pub const ZXING_FORMAT_EAN_13: u32 = 1 << 8;
/// ITF (Interleaved 2 of 5).
pub const ZXING_FORMAT_ITF: u32 = 1 << 9;
/// MaxiCode.
pub const ZXING_FORMAT_MAXICODE: u32 = 1 << 10;
/// PDF417.
pub const ZXING_FORMAT_PDF_417: u32 = 1 << 11;
/// UPC-A.
pub const ZXING_FORMAT_UPC_A: u32 = 1 << 12;
/// UPC-E.
pub const ZXING_FORMAT_UPC_E: u32 = 1 << 13;

/// Every individual format flag.
pub const ZXING_FORMATS: [u32; 14] = [
    ZXING_FORMAT_QR_CODE,
    ZXING_FORMAT_AZTEC,
    ZXING_FORMAT_CODABAR,
    ZXING_FORMAT_CODE_39,
    ZXING_FORMAT_CODE_93,
    ZXING_FORMAT_CODE_128,
    ZXING_FORMAT_DATA_MATRIX,
    ZXING_FORMAT_EAN_8,
    ZXING_FORMAT_EAN_13,
    ZXING_FORMAT_ITF,
    ZXING_FORMAT_MAXICODE,
    ZXING_FORMAT_PDF_417,
    ZXING_FORMAT_UPC_A,
    ZXING_FORMAT_UPC_E,
];

/// Union of every individual format flag.
pub const ZXING_FORMAT_ALL: u32 = union_of(&ZXING_FORMATS);

const fn union_of(flags: &[u32]) -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < flags.len() {
        mask |= flags[i];
        i += 1;
    }
    mask
}
