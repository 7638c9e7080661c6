// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Decoder entry points for the C API.
//!
//! Every pointer handed out here is owned by the caller until it is passed
//! back to the matching free function:
//!
//! | Allocated by | Released by |
//! |--------------|-------------|
//! | `zxing_create_default_options` | `zxing_free_options` |
//! | `zxing_decode_barcode` | `zxing_free_result` |
//! | `zxing_decode_barcodes` | `zxing_free_results` (array and every element) |

use crate::engine::{self, ScanLimit, ScanRequest, Symbol};
use crate::error::{clear_last_error, set_last_error};
use crate::types::*;
use std::ffi::{CStr, CString, c_char};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Argument Validation Macros
// ============================================================================

/// Reads the image path argument, returning null with an error if invalid.
macro_rules! get_path {
    ($path:expr) => {{
        if $path.is_null() {
            set_last_error("Image path is NULL");
            return ptr::null_mut();
        }
        match unsafe { CStr::from_ptr($path) }.to_str() {
            Ok(path) => path,
            Err(_) => {
                set_last_error("Image path is not valid UTF-8");
                return ptr::null_mut();
            }
        }
    }};
}

/// Gets a reference to the options, returning null with an error if null.
macro_rules! get_options {
    ($options:expr) => {
        match unsafe { $options.as_ref() } {
            Some(options) => options,
            None => {
                set_last_error("Options is NULL");
                return ptr::null_mut();
            }
        }
    };
}

// ============================================================================
// Allocation Tracking
// ============================================================================

/// Option structs, results and result arrays currently owned by callers.
static LIVE_ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

fn track_alloc() {
    let live = LIVE_ALLOCATIONS.fetch_add(1, Ordering::Relaxed) + 1;
    log::trace!("zxing: allocated, {} live", live);
}

fn track_free() {
    let live = LIVE_ALLOCATIONS.fetch_sub(1, Ordering::Relaxed).wrapping_sub(1);
    log::trace!("zxing: freed, {} live", live);
}

/// Returns the number of option structs, results and result arrays that have
/// been handed out and not yet freed.
#[unsafe(no_mangle)]
pub extern "C" fn zxing_live_allocations() -> usize {
    LIVE_ALLOCATIONS.load(Ordering::Relaxed)
}

// ============================================================================
// Options
// ============================================================================

/// Creates a decoder options struct holding the library defaults.
///
/// # Returns
/// A pointer to the options, or null on failure.
/// The options must be released with `zxing_free_options`.
#[unsafe(no_mangle)]
pub extern "C" fn zxing_create_default_options() -> *mut ZxingDecodeOptions {
    clear_last_error();

    track_alloc();
    Box::into_raw(Box::new(ZxingDecodeOptions::default()))
}

/// Releases an options struct created by `zxing_create_default_options`.
///
/// # Safety
/// The pointer must have been created by `zxing_create_default_options` and
/// not freed before. Null is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zxing_free_options(options: *mut ZxingDecodeOptions) {
    if !options.is_null() {
        unsafe {
            drop(Box::from_raw(options));
        }
        track_free();
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes the first symbol found in an image file.
///
/// # Arguments
/// * `image_path` - NUL-terminated UTF-8 path of the image.
/// * `options` - Decoder options (not retained).
///
/// # Returns
/// The decoded symbol, or null on failure (no symbol found, unreadable
/// image, invalid arguments). On failure call `zxing_get_last_error`.
/// The result must be released with `zxing_free_result`.
///
/// # Safety
/// - `image_path` must be null or a valid NUL-terminated string.
/// - `options` must be null or point to a valid `ZxingDecodeOptions`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zxing_decode_barcode(
    image_path: *const c_char,
    options: *const ZxingDecodeOptions,
) -> *mut ZxingDecodeResult {
    let path = get_path!(image_path);
    let options = get_options!(options);

    clear_last_error();

    let Some(mut symbols) = scan_file(path, options, ScanLimit::First) else {
        return ptr::null_mut();
    };

    if symbols.is_empty() {
        set_last_error("No barcode found");
        return ptr::null_mut();
    }

    into_raw_result(symbols.swap_remove(0))
}

/// Decodes every symbol found in an image file.
///
/// Finding nothing is not an error: a valid empty array is returned and
/// `*count` is set to 0.
///
/// # Arguments
/// * `image_path` - NUL-terminated UTF-8 path of the image.
/// * `options` - Decoder options (not retained).
/// * `count` - Receives the number of elements in the returned array.
///
/// # Returns
/// An array of `*count` result pointers, or null on failure. On failure
/// call `zxing_get_last_error`. The array must be released with
/// `zxing_free_results` using the same count.
///
/// # Safety
/// - `image_path` must be null or a valid NUL-terminated string.
/// - `options` must be null or point to a valid `ZxingDecodeOptions`.
/// - `count` must be null or point to a writable `usize`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zxing_decode_barcodes(
    image_path: *const c_char,
    options: *const ZxingDecodeOptions,
    count: *mut usize,
) -> *mut *mut ZxingDecodeResult {
    let path = get_path!(image_path);
    let options = get_options!(options);

    let Some(count) = (unsafe { count.as_mut() }) else {
        set_last_error("Count pointer is NULL");
        return ptr::null_mut();
    };
    *count = 0;

    clear_last_error();

    let Some(symbols) = scan_file(path, options, ScanLimit::All) else {
        return ptr::null_mut();
    };

    let results: Box<[*mut ZxingDecodeResult]> =
        symbols.into_iter().map(into_raw_result).collect();
    *count = results.len();

    track_alloc();
    Box::into_raw(results).cast::<*mut ZxingDecodeResult>()
}

/// Gets one element of a result array.
///
/// # Returns
/// The element at `index`, or null if `results` is null or `index` is out
/// of range. The element stays owned by the array.
///
/// # Safety
/// `results` must be null or an array of at least `count` elements returned
/// by `zxing_decode_barcodes`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zxing_results_get(
    results: *const *mut ZxingDecodeResult,
    count: usize,
    index: usize,
) -> *mut ZxingDecodeResult {
    if results.is_null() || index >= count {
        return ptr::null_mut();
    }

    unsafe { *results.add(index) }
}

/// Releases a result returned by `zxing_decode_barcode`.
///
/// # Safety
/// The pointer must have been returned by `zxing_decode_barcode` and not
/// freed before. Null is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zxing_free_result(result: *mut ZxingDecodeResult) {
    unsafe { drop_raw_result(result) };
}

/// Releases a result array returned by `zxing_decode_barcodes`, including
/// every element in it.
///
/// # Safety
/// The pointer must have been returned by `zxing_decode_barcodes` together
/// with `count`, and not freed before. Null is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zxing_free_results(results: *mut *mut ZxingDecodeResult, count: usize) {
    if results.is_null() {
        return;
    }

    let results = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(results, count)) };
    for &result in results.iter() {
        unsafe { drop_raw_result(result) };
    }
    track_free();
}

// ============================================================================
// Helpers
// ============================================================================

/// Loads and scans an image, recording an error and returning `None` on failure.
fn scan_file(path: &str, options: &ZxingDecodeOptions, limit: ScanLimit) -> Option<Vec<Symbol>> {
    let request = ScanRequest::from(options);
    guarded(|| {
        let image = engine::load_luma(path)?;
        Ok(engine::scan(&image, &request, limit))
    })
}

/// Runs a decode step, turning its error or a panic into the last error.
///
/// Nothing may unwind out of an `extern "C"` function, so every call into the
/// image and QR decoders goes through here.
fn guarded<F>(step: F) -> Option<Vec<Symbol>>
where
    F: FnOnce() -> Result<Vec<Symbol>, String>,
{
    match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(Ok(symbols)) => Some(symbols),
        Ok(Err(e)) => {
            set_last_error(e);
            None
        }
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            set_last_error(format!("Decode error: {}", reason));
            None
        }
    }
}

fn into_raw_result(symbol: Symbol) -> *mut ZxingDecodeResult {
    let result = ZxingDecodeResult {
        Text: to_c_string(symbol.text).into_raw(),
        Format: symbol.format,
        Confidence: symbol.confidence.clamp(0.0, 1.0),
    };

    track_alloc();
    Box::into_raw(Box::new(result))
}

/// # Safety
/// `result` must be null or a pointer produced by `into_raw_result` that has
/// not been freed.
unsafe fn drop_raw_result(result: *mut ZxingDecodeResult) {
    if result.is_null() {
        return;
    }

    let result = unsafe { Box::from_raw(result) };
    if !result.Text.is_null() {
        unsafe {
            drop(CString::from_raw(result.Text));
        }
    }
    track_free();
}

/// Converts decoded text to a C string, cutting it at the first NUL byte.
fn to_c_string(text: String) -> CString {
    CString::new(text).unwrap_or_else(|e| {
        let nul = e.nul_position();
        log::debug!("zxing: decoded text truncated at NUL byte {}", nul);
        let mut bytes = e.into_vec();
        bytes.truncate(nul);
        CString::new(bytes).unwrap_or_default()
    })
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
