// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The native C surface, as a table of function pointers.
//!
//! The binding never calls the native library any other way. The table for
//! the statically linked library is [`NativeApi::linked`]; with the
//! `dynamic` feature the same symbols can be resolved from a shared library
//! at run time.

use std::ffi::c_char;
use std::ptr;
use zxing_ffi::{ZxingDecodeOptions, ZxingDecodeResult};

/// Function pointers for every native entry point the binding uses.
///
/// Each pointer must behave as documented on the `zxing_*` function of the
/// same name in `zxing_ffi`; see [`crate::Decoder::from_api`].
#[derive(Clone, Copy)]
pub struct NativeApi {
    /// `zxing_create_default_options`
    pub create_default_options: unsafe extern "C" fn() -> *mut ZxingDecodeOptions,
    /// `zxing_free_options`
    pub free_options: unsafe extern "C" fn(*mut ZxingDecodeOptions),
    /// `zxing_decode_barcode`
    pub decode_barcode:
        unsafe extern "C" fn(*const c_char, *const ZxingDecodeOptions) -> *mut ZxingDecodeResult,
    /// `zxing_decode_barcodes`
    pub decode_barcodes: unsafe extern "C" fn(
        *const c_char,
        *const ZxingDecodeOptions,
        *mut usize,
    ) -> *mut *mut ZxingDecodeResult,
    /// `zxing_results_get`
    pub results_get:
        unsafe extern "C" fn(*const *mut ZxingDecodeResult, usize, usize) -> *mut ZxingDecodeResult,
    /// `zxing_free_result`
    pub free_result: unsafe extern "C" fn(*mut ZxingDecodeResult),
    /// `zxing_free_results`
    pub free_results: unsafe extern "C" fn(*mut *mut ZxingDecodeResult, usize),
    /// `zxing_get_last_error`
    pub get_last_error: unsafe extern "C" fn(*mut c_char, usize) -> usize,
    /// `zxing_supported_formats`
    pub supported_formats: unsafe extern "C" fn() -> u32,
}

impl NativeApi {
    /// The table for the statically linked `zxing_ffi` library.
    pub fn linked() -> Self {
        Self {
            create_default_options: zxing_ffi::zxing_create_default_options,
            free_options: zxing_ffi::zxing_free_options,
            decode_barcode: zxing_ffi::zxing_decode_barcode,
            decode_barcodes: zxing_ffi::zxing_decode_barcodes,
            results_get: zxing_ffi::zxing_results_get,
            free_result: zxing_ffi::zxing_free_result,
            free_results: zxing_ffi::zxing_free_results,
            get_last_error: zxing_ffi::zxing_get_last_error,
            supported_formats: zxing_ffi::zxing_supported_formats,
        }
    }

    /// Reads the native last-error message.
    ///
    /// The slot is process-wide. Call this right after the failing call and
    /// before any other native call; a failure on another thread in between
    /// replaces the message and nothing on this side can prevent that.
    pub fn last_error_text(&self) -> String {
        let len = unsafe { (self.get_last_error)(ptr::null_mut(), 0) };
        if len == 0 {
            return String::new();
        }

        let mut buffer = vec![0u8; len + 1];
        let total = unsafe { (self.get_last_error)(buffer.as_mut_ptr().cast(), buffer.len()) };

        // The message may have changed between the two calls
        let copied = total.min(buffer.len() - 1);
        buffer.truncate(copied);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(feature = "dynamic")]
mod dynamic {
    use super::NativeApi;
    use crate::error::{Error, Result};
    use libloading::Library;
    use std::ffi::OsStr;

    /// Copies a function pointer out of a loaded library.
    ///
    /// # Safety
    /// `T` must be the function pointer type of the exported symbol.
    unsafe fn symbol<T: Copy>(library: &Library, name: &str) -> Result<T> {
        let name_nul = format!("{}\0", name);
        unsafe { library.get::<T>(name_nul.as_bytes()) }
            .map(|symbol| *symbol)
            .map_err(|e| Error::Load(format!("{}: {}", name, e)))
    }

    impl NativeApi {
        /// Loads the native library from `path` and resolves every entry point.
        ///
        /// The returned table is only valid while the returned `Library` is alive.
        ///
        /// # Safety
        /// Loading a library runs its initialization code, and the library
        /// must export the `zxing_*` symbols with the signatures of `zxing_ffi`.
        pub unsafe fn load(path: impl AsRef<OsStr>) -> Result<(Library, NativeApi)> {
            let library = unsafe { Library::new(path.as_ref()) }
                .map_err(|e| Error::Load(e.to_string()))?;

            let api = NativeApi {
                create_default_options: unsafe { symbol(&library, "zxing_create_default_options")? },
                free_options: unsafe { symbol(&library, "zxing_free_options")? },
                decode_barcode: unsafe { symbol(&library, "zxing_decode_barcode")? },
                decode_barcodes: unsafe { symbol(&library, "zxing_decode_barcodes")? },
                results_get: unsafe { symbol(&library, "zxing_results_get")? },
                free_result: unsafe { symbol(&library, "zxing_free_result")? },
                free_results: unsafe { symbol(&library, "zxing_free_results")? },
                get_last_error: unsafe { symbol(&library, "zxing_get_last_error")? },
                supported_formats: unsafe { symbol(&library, "zxing_supported_formats")? },
            };

            Ok((library, api))
        }
    }
}
