// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Safe decoder over the native C surface.

use crate::error::{Error, Result};
use crate::format::BarcodeFormat;
use crate::guard::{NativeOptions, NativeResult, NativeResults};
use crate::native::NativeApi;
use crate::options::DecodeOptions;
use crate::result::DecodeResult;
use std::ffi::CString;
use std::path::Path;

#[cfg(feature = "dynamic")]
use std::sync::Arc;

/// Error text used when the native library fails without setting a message.
pub(crate) const MISSING_ERROR_TEXT: &str = "native decoder reported failure without a message";

/// Decodes barcodes from image files through a native function table.
///
/// Every call is synchronous and owns its native arguments and results for
/// its own duration only, so one `Decoder` can be shared between threads.
/// The native last-error slot is the exception: it is process-wide, and a
/// failing call on another thread can overwrite the message between this
/// thread's failure and the moment it is read. The resulting
/// [`Error::Decode`] then carries the other call's text.
#[derive(Clone)]
pub struct Decoder {
    api: NativeApi,
    #[cfg(feature = "dynamic")]
    _library: Option<Arc<libloading::Library>>,
}

impl Decoder {
    /// A decoder over the statically linked `zxing_ffi` library.
    pub fn linked() -> Self {
        Self {
            api: NativeApi::linked(),
            #[cfg(feature = "dynamic")]
            _library: None,
        }
    }

    /// A decoder over a custom function table.
    ///
    /// # Safety
    /// Every function in `api` must honor the contract of the `zxing_ffi`
    /// function of the same name, and stay callable for the lifetime of the
    /// decoder and its clones.
    pub unsafe fn from_api(api: NativeApi) -> Self {
        Self {
            api,
            #[cfg(feature = "dynamic")]
            _library: None,
        }
    }

    /// A decoder over a native library loaded from `path` at run time.
    ///
    /// # Safety
    /// See [`NativeApi::load`].
    #[cfg(feature = "dynamic")]
    pub unsafe fn load(path: impl AsRef<std::ffi::OsStr>) -> Result<Self> {
        let (library, api) = unsafe { NativeApi::load(path) }?;
        Ok(Self {
            api,
            _library: Some(Arc::new(library)),
        })
    }

    /// The function table this decoder calls.
    pub fn api(&self) -> &NativeApi {
        &self.api
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Reads the native library's default options.
    ///
    /// The native struct is released before this returns; the value holds
    /// no reference into native memory.
    pub fn default_options(&self) -> Result<DecodeOptions> {
        let Some(native) = NativeOptions::create(&self.api) else {
            let message = self.api.last_error_text();
            return Err(Error::Init(if message.is_empty() {
                "default options allocation returned null".to_string()
            } else {
                message
            }));
        };

        Ok(DecodeOptions::from_native(&native.read()))
    }

    /// Decodes the first symbol found in the image at `path`.
    ///
    /// `None` options are replaced by [`Decoder::default_options`]. Finding
    /// nothing is an [`Error::Decode`].
    pub fn decode_one(
        &self,
        path: impl AsRef<Path>,
        options: Option<&DecodeOptions>,
    ) -> Result<DecodeResult> {
        let path = marshal_path(path.as_ref())?;
        let options = self.resolve_options(options)?.to_native();

        let raw = unsafe { (self.api.decode_barcode)(path.as_ptr(), &options) };
        let Some(result) = (unsafe { NativeResult::from_raw(&self.api, raw) }) else {
            return Err(self.decode_error());
        };

        Ok(unsafe { DecodeResult::from_native(result.record()) })
    }

    /// Decodes every symbol found in the image at `path`.
    ///
    /// Finding nothing is a success with an empty vector. A null element in
    /// the native array is skipped, so the vector can be shorter than the
    /// count the native library reported.
    pub fn decode_many(
        &self,
        path: impl AsRef<Path>,
        options: Option<&DecodeOptions>,
    ) -> Result<Vec<DecodeResult>> {
        let path = marshal_path(path.as_ref())?;
        let options = self.resolve_options(options)?.to_native();

        let mut count = 0usize;
        let raw = unsafe { (self.api.decode_barcodes)(path.as_ptr(), &options, &mut count) };
        let Some(results) = (unsafe { NativeResults::from_raw(&self.api, raw, count) }) else {
            return Err(self.decode_error());
        };

        let decoded = (0..results.len())
            .filter_map(|index| results.get(index))
            .map(|record| unsafe { DecodeResult::from_native(record) })
            .collect();

        Ok(decoded)
    }

    /// Mask of the formats the native library can actually detect. Other
    /// formats are accepted in options but never match.
    pub fn supported_formats(&self) -> BarcodeFormat {
        BarcodeFormat::from_native(unsafe { (self.api.supported_formats)() })
    }

    /// Reads the native last-error message. See [`NativeApi::last_error_text`].
    pub fn last_error_text(&self) -> String {
        self.api.last_error_text()
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn resolve_options(&self, options: Option<&DecodeOptions>) -> Result<DecodeOptions> {
        match options {
            Some(options) => Ok(*options),
            None => self
                .default_options()
                .map_err(|e| Error::Argument(format!("no options given and {}", e))),
        }
    }

    /// Builds the error for a null decode handle. Must run before any other
    /// native call.
    fn decode_error(&self) -> Error {
        let message = self.api.last_error_text();
        if message.is_empty() {
            Error::Decode(MISSING_ERROR_TEXT.to_string())
        } else {
            Error::Decode(message)
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::linked()
    }
}

/// Copies a path into a NUL-terminated UTF-8 string for the native call.
fn marshal_path(path: &Path) -> Result<CString> {
    let Some(text) = path.to_str() else {
        return Err(Error::Argument(format!(
            "image path is not valid UTF-8: {}",
            path.display()
        )));
    };

    CString::new(text)
        .map_err(|_| Error::Argument(format!("image path contains a NUL byte: {:?}", text)))
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
