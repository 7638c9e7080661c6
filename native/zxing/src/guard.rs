// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Owners for native allocations.
//!
//! Each guard releases its allocation with the matching native free function
//! when dropped, so every exit path out of a decode call (success, error or
//! panic) releases what that call acquired.

use crate::native::NativeApi;
use std::ptr::NonNull;
use zxing_ffi::{ZxingDecodeOptions, ZxingDecodeResult};

// ============================================================================
// Options
// ============================================================================

/// A native options struct, released with `free_options`.
pub(crate) struct NativeOptions<'a> {
    api: &'a NativeApi,
    ptr: NonNull<ZxingDecodeOptions>,
}

impl<'a> NativeOptions<'a> {
    /// Asks the native library for its default options. `None` if it returned null.
    pub(crate) fn create(api: &'a NativeApi) -> Option<Self> {
        let ptr = NonNull::new(unsafe { (api.create_default_options)() })?;
        Some(Self { api, ptr })
    }

    /// Copies the struct out of native memory.
    pub(crate) fn read(&self) -> ZxingDecodeOptions {
        unsafe { *self.ptr.as_ptr() }
    }
}

impl Drop for NativeOptions<'_> {
    fn drop(&mut self) {
        unsafe { (self.api.free_options)(self.ptr.as_ptr()) };
    }
}

// ============================================================================
// Results
// ============================================================================

/// A single native result, released with `free_result`.
pub(crate) struct NativeResult<'a> {
    api: &'a NativeApi,
    ptr: NonNull<ZxingDecodeResult>,
}

impl<'a> NativeResult<'a> {
    /// Takes ownership of a pointer returned by `decode_barcode`. `None` if null.
    ///
    /// # Safety
    /// `ptr` must be null or a live result from `api.decode_barcode`.
    pub(crate) unsafe fn from_raw(api: &'a NativeApi, ptr: *mut ZxingDecodeResult) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { api, ptr })
    }

    pub(crate) fn record(&self) -> &ZxingDecodeResult {
        unsafe { self.ptr.as_ref() }
    }
}

impl Drop for NativeResult<'_> {
    fn drop(&mut self) {
        unsafe { (self.api.free_result)(self.ptr.as_ptr()) };
    }
}

/// A native result array, released with `free_results` together with every
/// element in it.
pub(crate) struct NativeResults<'a> {
    api: &'a NativeApi,
    ptr: NonNull<*mut ZxingDecodeResult>,
    count: usize,
}

impl<'a> NativeResults<'a> {
    /// Takes ownership of an array returned by `decode_barcodes`. `None` if null.
    ///
    /// # Safety
    /// `ptr` must be null or a live array of `count` elements from
    /// `api.decode_barcodes`.
    pub(crate) unsafe fn from_raw(
        api: &'a NativeApi,
        ptr: *mut *mut ZxingDecodeResult,
        count: usize,
    ) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { api, ptr, count })
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    /// The element at `index`, or `None` if the array holds null there.
    /// The element stays owned by the array.
    pub(crate) fn get(&self, index: usize) -> Option<&ZxingDecodeResult> {
        let element = unsafe { (self.api.results_get)(self.ptr.as_ptr(), self.count, index) };
        unsafe { element.as_ref() }
    }
}

impl Drop for NativeResults<'_> {
    fn drop(&mut self) {
        unsafe { (self.api.free_results)(self.ptr.as_ptr(), self.count) };
    }
}
