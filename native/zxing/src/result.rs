// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Decoded symbols.

use crate::format::BarcodeFormat;
use std::ffi::CStr;
use zxing_ffi::ZxingDecodeResult;

/// A decoded symbol. Owns all of its data; nothing in it points into native memory.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeResult {
    /// Decoded text.
    ///
    /// The native library hands text over as a C string, so a payload that
    /// contains a NUL byte arrives cut at the first NUL.
    pub text: String,
    /// The matched symbology (a single flag).
    pub format: BarcodeFormat,
    /// Decoder confidence in `[0, 1]`.
    pub confidence: f32,
}

impl DecodeResult {
    /// Copies a native result record into an owned value.
    ///
    /// Text that is not valid UTF-8 is converted lossily. A confidence
    /// outside `[0, 1]` is clamped, NaN becomes 0.
    ///
    /// # Safety
    /// `record.Text` must be null or a valid NUL-terminated string.
    pub(crate) unsafe fn from_native(record: &ZxingDecodeResult) -> Self {
        let text = if record.Text.is_null() {
            String::new()
        } else {
            unsafe { CStr::from_ptr(record.Text) }
                .to_string_lossy()
                .into_owned()
        };

        let confidence = if record.Confidence.is_nan() {
            0.0
        } else {
            record.Confidence.clamp(0.0, 1.0)
        };

        Self {
            text,
            format: BarcodeFormat::from_native(record.Format),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    fn record(text: *mut std::ffi::c_char, confidence: f32) -> ZxingDecodeResult {
        ZxingDecodeResult {
            Text: text,
            Format: 1,
            Confidence: confidence,
        }
    }

    #[test]
    fn test_from_native_copies_record() {
        let text = CString::new(b"abc".to_vec()).unwrap();
        let native = record(text.as_ptr().cast_mut(), 0.75);

        let result = unsafe { DecodeResult::from_native(&native) };

        assert_eq!(result.text, "abc");
        assert_eq!(result.format, BarcodeFormat::QR_CODE);
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn test_from_native_null_text_and_bad_confidence() {
        let result = unsafe { DecodeResult::from_native(&record(ptr::null_mut(), f32::NAN)) };
        assert_eq!(result.text, "");
        assert_eq!(result.confidence, 0.0);

        let result = unsafe { DecodeResult::from_native(&record(ptr::null_mut(), -3.0)) };
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_from_native_invalid_utf8_is_lossy() {
        let text = CString::new(vec![b'o', b'k', 0xff]).unwrap();
        let result = unsafe { DecodeResult::from_native(&record(text.as_ptr().cast_mut(), 1.0)) };
        assert_eq!(result.text, "ok\u{fffd}");
    }
}
