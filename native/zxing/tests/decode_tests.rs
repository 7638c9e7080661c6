// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! End-to-end decoding through the linked native library.

mod common;

use common::Fixtures;
use zxing::{BarcodeFormat, DecodeOptions, Error};

fn assert_valid(result: &zxing::DecodeResult) {
    assert!((0.0..=1.0).contains(&result.confidence), "{:?}", result);
    if result.format != BarcodeFormat::NONE {
        assert!(!result.text.is_empty(), "{:?}", result);
    }
}

#[test]
fn test_default_options_match_native_defaults() {
    let options = zxing::default_options().expect("default options");
    let native = zxing_ffi::ZxingDecodeOptions::default();

    assert_eq!(options.formats.to_native(), native.Formats);
    assert_eq!(options.formats, BarcodeFormat::ALL);
    assert_eq!(options.try_harder, native.TryHarder);
    assert_eq!(options.try_rotate, native.TryRotate);
    assert_eq!(options.try_invert, native.TryInvert);
    assert_eq!(options.try_downscale, native.TryDownscale);
}

#[test]
fn test_decode_one_qr_code() {
    let fixtures = Fixtures::new();
    let path = fixtures.qr("test", "test");

    let result = zxing::decode_one(&path, None).expect("decode");

    assert_eq!(result.text, "test");
    assert_eq!(result.format, BarcodeFormat::QR_CODE);
    assert_valid(&result);
}

#[test]
fn test_decode_many_qr_code() {
    let fixtures = Fixtures::new();
    let path = fixtures.qr("test", "test");

    let results = zxing::decode_many(&path, None).expect("decode");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "test");
    assert_eq!(results[0].format, BarcodeFormat::QR_CODE);
    results.iter().for_each(assert_valid);
}

#[test]
fn test_absent_options_equal_defaults() {
    let fixtures = Fixtures::new();
    let path = fixtures.qr("hello", "hello world");
    let defaults = zxing::default_options().expect("default options");

    assert_eq!(
        zxing::decode_one(&path, None),
        zxing::decode_one(&path, Some(&defaults))
    );
    assert_eq!(
        zxing::decode_many(&path, None),
        zxing::decode_many(&path, Some(&defaults))
    );
}

#[test]
fn test_missing_file_is_decode_error() {
    let fixtures = Fixtures::new();
    let path = fixtures.missing("nonexistent.png");

    match zxing::decode_one(&path, None) {
        Err(Error::Decode(message)) => assert!(!message.is_empty()),
        other => panic!("expected Decode error, got {:?}", other),
    }
    match zxing::decode_many(&path, None) {
        Err(Error::Decode(message)) => assert!(!message.is_empty()),
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[test]
fn test_nothing_found() {
    let fixtures = Fixtures::new();
    let path = fixtures.blank("blank");

    assert!(matches!(
        zxing::decode_one(&path, None),
        Err(Error::Decode(_))
    ));
    assert_eq!(zxing::decode_many(&path, None), Ok(vec![]));
}

#[test]
fn test_format_mask_without_qr_finds_nothing() {
    let fixtures = Fixtures::new();
    let path = fixtures.qr("test", "test");
    let options = DecodeOptions::new(BarcodeFormat::EAN_13 | BarcodeFormat::CODE_128);

    assert_eq!(zxing::decode_many(&path, Some(&options)), Ok(vec![]));
}

#[test]
fn test_minimal_effort_still_decodes_clean_image() {
    let fixtures = Fixtures::new();
    let path = fixtures.qr("plain", "plain");
    let options = DecodeOptions::new(BarcodeFormat::QR_CODE);

    let result = zxing::decode_one(&path, Some(&options)).expect("decode");
    assert_eq!(result.text, "plain");
}

#[test]
fn test_decoder_is_shareable_across_threads() {
    let fixtures = Fixtures::new();
    let path = fixtures.qr("shared", "shared");
    let decoder = zxing::Decoder::linked();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let result = decoder.decode_one(&path, None).expect("decode");
                assert_eq!(result.text, "shared");
            });
        }
    });
}

#[test]
fn test_supported_formats_include_qr() {
    assert!(zxing::supported_formats().contains(BarcodeFormat::QR_CODE));
    assert!(BarcodeFormat::ALL.contains(zxing::supported_formats()));
}
