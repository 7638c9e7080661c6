// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! QR fixtures written to temporary PNG files.

#![allow(dead_code)]

use image::GrayImage;
use std::path::PathBuf;
use tempfile::TempDir;
use zxing_ffi::test_support::{blank_image, qr_image};

/// A directory of fixture images, deleted on drop.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Writes `image` as `<name>.png` and returns its path.
    pub fn write(&self, name: &str, image: &GrayImage) -> PathBuf {
        let path = self.dir.path().join(format!("{}.png", name));
        image.save(&path).expect("Failed to write fixture");
        path
    }

    /// A PNG holding one QR code encoding `text`.
    pub fn qr(&self, name: &str, text: &str) -> PathBuf {
        self.write(name, &qr_image(text))
    }

    /// A white PNG with nothing to decode.
    pub fn blank(&self, name: &str) -> PathBuf {
        self.write(name, &blank_image())
    }

    /// A path inside the fixture directory that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
