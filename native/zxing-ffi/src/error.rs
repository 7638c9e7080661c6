// Copyright (c) the zxing-rs Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error handling for the C API.
//!
//! The last-error slot is process-wide, not per thread: a failing call on one
//! thread can overwrite the message of a failing call on another thread
//! before the first caller reads it. Writes are serialized, reads copy the
//! message out under the same lock, but nothing ties a message to the call
//! that produced it. Callers should read the error immediately after the
//! failing call and before issuing any other call.

use std::ffi::c_char;
use std::sync::{Mutex, MutexGuard};

/// Maximum stored message length in bytes.
const MAX_ERROR_LEN: usize = 255;

static LAST_ERROR: Mutex<String> = Mutex::new(String::new());

fn slot() -> MutexGuard<'static, String> {
    // A panic while holding the lock leaves a plain string behind.
    LAST_ERROR.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets the last error message.
pub(crate) fn set_last_error(msg: impl Into<String>) {
    let mut msg = msg.into();
    if msg.len() > MAX_ERROR_LEN {
        let mut end = MAX_ERROR_LEN;
        while !msg.is_char_boundary(end) {
            end -= 1;
        }
        msg.truncate(end);
    }
    log::debug!("zxing: {}", msg);
    *slot() = msg;
}

/// Clears the last error message.
pub(crate) fn clear_last_error() {
    slot().clear();
}

/// Gets the last error message.
///
/// # Arguments
/// * `buffer` - Buffer to write the error message to, or null to query the length.
/// * `buffer_size` - Size of the buffer in bytes.
///
/// # Returns
/// The length of the error message (excluding null terminator).
/// If the buffer is too small, the message is truncated.
/// Returns 0 if there is no error message.
///
/// # Safety
/// The buffer must be valid for writes of `buffer_size` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zxing_get_last_error(buffer: *mut c_char, buffer_size: usize) -> usize {
    let error = slot();

    if buffer.is_null() || buffer_size == 0 {
        return error.len();
    }

    let bytes = error.as_bytes();
    let copy_len = bytes.len().min(buffer_size - 1);

    if copy_len > 0 {
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer as *mut u8, copy_len);
        }
    }

    // Null terminate
    unsafe {
        *buffer.add(copy_len) = 0;
    }

    error.len()
}

/// Clears the last error message.
#[unsafe(no_mangle)]
pub extern "C" fn zxing_clear_last_error() {
    clear_last_error();
}
