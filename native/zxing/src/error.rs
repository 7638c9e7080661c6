// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Errors surfaced by the binding.
//!
//! Every failure reported by the native library becomes one of these values.
//! Nothing is logged or swallowed on the way, and no partial result is ever
//! returned alongside an error.

use thiserror::Error;

/// Errors returned by decode operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The native library could not allocate its default options. Usually
    /// means the library is missing or failed to initialize.
    #[error("native initialization failed: {0}")]
    Init(String),

    /// The native decode call failed. Carries the native message verbatim.
    #[error("{0}")]
    Decode(String),

    /// An argument could not be passed to the native library, or absent
    /// options could not be replaced by the native defaults.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// The native library could not be loaded.
    #[cfg(feature = "dynamic")]
    #[error("failed to load native library: {0}")]
    Load(String),
}

/// Result alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;
