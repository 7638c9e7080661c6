// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Unit tests for the decoder module.

use super::*;
use crate::error::zxing_get_last_error;
use crate::formats::*;
use crate::test_support::{blank_image, qr_image, serial, side_by_side};
use image::GrayImage;
use std::path::Path;
use tempfile::TempDir;

fn last_error() -> String {
    let mut buffer = [0 as c_char; 256];
    let len = unsafe { zxing_get_last_error(buffer.as_mut_ptr(), buffer.len()) };
    let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
    assert_eq!(text.to_bytes().len(), len.min(buffer.len() - 1));
    text.to_string_lossy().into_owned()
}

fn write_fixture(dir: &TempDir, name: &str, image: &GrayImage) -> CString {
    let path = dir.path().join(name);
    image.save(&path).expect("Failed to write fixture");
    path_to_c(&path)
}

fn path_to_c(path: &Path) -> CString {
    CString::new(path.to_str().expect("UTF-8 temp path")).unwrap()
}

fn result_text(result: &ZxingDecodeResult) -> String {
    unsafe { CStr::from_ptr(result.Text) }.to_string_lossy().into_owned()
}

#[test]
fn test_default_options_values() {
    let _guard = serial();

    let options = zxing_create_default_options();
    assert!(!options.is_null());

    let values = unsafe { *options };
    assert_eq!(values.Formats, ZXING_FORMAT_ALL);
    assert!(values.TryHarder);
    assert!(values.TryRotate);
    assert!(!values.TryInvert);
    assert!(values.TryDownscale);

    unsafe { zxing_free_options(options) };
}

#[test]
fn test_decode_null_path() {
    let _guard = serial();
    let options = ZxingDecodeOptions::default();

    let result = unsafe { zxing_decode_barcode(ptr::null(), &options) };

    assert!(result.is_null());
    assert_eq!(last_error(), "Image path is NULL");
}

#[test]
fn test_decode_null_options() {
    let _guard = serial();
    let path = CString::new("whatever.png").unwrap();

    let result = unsafe { zxing_decode_barcode(path.as_ptr(), ptr::null()) };

    assert!(result.is_null());
    assert_eq!(last_error(), "Options is NULL");
}

#[test]
fn test_decode_missing_file() {
    let _guard = serial();
    let path = CString::new("nonexistent.png").unwrap();
    let options = ZxingDecodeOptions::default();

    let result = unsafe { zxing_decode_barcode(path.as_ptr(), &options) };

    assert!(result.is_null());
    assert!(last_error().starts_with("Failed to load image: nonexistent.png"));
}

#[test]
fn test_decode_single_qr_code() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "test.png", &qr_image("test"));
    let options = ZxingDecodeOptions::default();

    let result = unsafe { zxing_decode_barcode(path.as_ptr(), &options) };
    assert!(!result.is_null());

    let record = unsafe { &*result };
    assert_eq!(result_text(record), "test");
    assert_eq!(record.Format, ZXING_FORMAT_QR_CODE);
    assert!((0.0..=1.0).contains(&record.Confidence));
    assert_eq!(last_error(), "");

    unsafe { zxing_free_result(result) };
}

#[test]
fn test_decode_blank_image_reports_no_barcode() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "blank.png", &blank_image());
    let options = ZxingDecodeOptions::default();

    let result = unsafe { zxing_decode_barcode(path.as_ptr(), &options) };

    assert!(result.is_null());
    assert_eq!(last_error(), "No barcode found");
}

#[test]
fn test_decode_multiple_qr_codes() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let image = side_by_side(&[qr_image("left"), qr_image("right")]);
    let path = write_fixture(&dir, "pair.png", &image);
    let options = ZxingDecodeOptions::default();
    let mut count = usize::MAX;

    let results = unsafe { zxing_decode_barcodes(path.as_ptr(), &options, &mut count) };
    assert!(!results.is_null());
    assert_eq!(count, 2);

    let mut texts: Vec<String> = (0..count)
        .map(|i| {
            let element = unsafe { zxing_results_get(results, count, i) };
            assert!(!element.is_null());
            result_text(unsafe { &*element })
        })
        .collect();
    texts.sort();
    assert_eq!(texts, vec!["left", "right"]);

    let past_end = unsafe { zxing_results_get(results, count, count) };
    assert!(past_end.is_null());

    unsafe { zxing_free_results(results, count) };
}

#[test]
fn test_decode_multiple_blank_image_is_empty_success() {
    let _guard = serial();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "blank.png", &blank_image());
    let options = ZxingDecodeOptions::default();
    let mut count = usize::MAX;

    let results = unsafe { zxing_decode_barcodes(path.as_ptr(), &options, &mut count) };

    assert!(!results.is_null());
    assert_eq!(count, 0);
    assert!(unsafe { zxing_results_get(results, count, 0) }.is_null());

    unsafe { zxing_free_results(results, count) };
}

#[test]
fn test_decode_multiple_null_count() {
    let _guard = serial();
    let path = CString::new("whatever.png").unwrap();
    let options = ZxingDecodeOptions::default();

    let results = unsafe { zxing_decode_barcodes(path.as_ptr(), &options, ptr::null_mut()) };

    assert!(results.is_null());
    assert_eq!(last_error(), "Count pointer is NULL");
}

#[test]
fn test_decode_multiple_missing_file_resets_count() {
    let _guard = serial();
    let path = CString::new("nonexistent.png").unwrap();
    let options = ZxingDecodeOptions::default();
    let mut count = 7;

    let results = unsafe { zxing_decode_barcodes(path.as_ptr(), &options, &mut count) };

    assert!(results.is_null());
    assert_eq!(count, 0);
    assert!(last_error().starts_with("Failed to load image: nonexistent.png"));
}

#[test]
fn test_last_error_truncates_to_buffer() {
    let _guard = serial();
    let options = ZxingDecodeOptions::default();
    let result = unsafe { zxing_decode_barcode(ptr::null(), &options) };
    assert!(result.is_null());

    let mut buffer = [0x7f as c_char; 6];
    let len = unsafe { zxing_get_last_error(buffer.as_mut_ptr(), buffer.len()) };

    assert_eq!(len, "Image path is NULL".len());
    let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
    assert_eq!(text.to_str().unwrap(), "Image");

    assert_eq!(unsafe { zxing_get_last_error(ptr::null_mut(), 0) }, len);
}

#[test]
fn test_free_functions_ignore_null() {
    unsafe {
        zxing_free_options(ptr::null_mut());
        zxing_free_result(ptr::null_mut());
        zxing_free_results(ptr::null_mut(), 3);
    }
    assert!(unsafe { zxing_results_get(ptr::null(), 3, 0) }.is_null());
}

#[test]
fn test_guarded_reports_errors_and_panics() {
    let _guard = serial();

    assert!(guarded(|| Err("Failed to load image: x.png (bad header)".to_string())).is_none());
    assert_eq!(last_error(), "Failed to load image: x.png (bad header)");

    assert!(guarded(|| panic!("decoder blew up")).is_none());
    assert_eq!(last_error(), "Decode error: decoder blew up");

    let found = guarded(|| Ok(Vec::new()));
    assert_eq!(found, Some(Vec::new()));
}

#[test]
fn test_to_c_string_cuts_at_nul() {
    let text = to_c_string("abc\0def".to_string());
    assert_eq!(text.as_bytes(), b"abc");
}
