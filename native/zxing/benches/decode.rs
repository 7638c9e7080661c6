// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use zxing::{BarcodeFormat, DecodeOptions};

#[path = "../tests/common/mod.rs"]
mod common;

fn bench_decode_one_defaults(c: &mut Criterion) {
    let fixtures = common::Fixtures::new();
    let path = fixtures.qr("bench", "https://example.com/benchmark");

    c.bench_function("decode_one_defaults", |b| {
        b.iter(|| zxing::decode_one(black_box(&path), None))
    });
}

fn bench_decode_one_minimal(c: &mut Criterion) {
    let fixtures = common::Fixtures::new();
    let path = fixtures.qr("bench", "https://example.com/benchmark");
    let options = DecodeOptions::new(BarcodeFormat::QR_CODE);

    c.bench_function("decode_one_minimal", |b| {
        b.iter(|| zxing::decode_one(black_box(&path), Some(&options)))
    });
}

fn bench_decode_many_blank(c: &mut Criterion) {
    let fixtures = common::Fixtures::new();
    let path = fixtures.blank("blank");

    c.bench_function("decode_many_blank", |b| {
        b.iter(|| zxing::decode_many(black_box(&path), None))
    });
}

criterion_group!(
    benches,
    bench_decode_one_defaults,
    bench_decode_one_minimal,
    bench_decode_many_blank
);
criterion_main!(benches);
