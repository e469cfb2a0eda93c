//! C foreign function interface.
//!
//! A single C-compatible entry point for host runtimes that load the library
//! directly instead of going through the Node addon.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

/// Status codes returned by [`dcmcjpeg_convert`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcmcjpegStatus {
    Ok = 0,
    InvalidArgument = 1,
    ConversionFailed = 2,
}

/// Converts the DICOM file at `input` to the JPEG Lossless transfer syntax,
/// writing the result to `output`. On failure the error message is written
/// NUL-terminated into `error_buffer` (truncated to `error_capacity`).
///
/// # Safety
///
/// `input` and `output` must be valid NUL-terminated strings.
/// `error_buffer`, when non-null, must point to `error_capacity` writable
/// bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmcjpeg_convert(
    input: *const c_char,
    output: *const c_char,
    error_buffer: *mut c_char,
    error_capacity: usize,
) -> c_int {
    if input.is_null() || output.is_null() {
        return DcmcjpegStatus::InvalidArgument as c_int;
    }
    let Ok(input) = unsafe { CStr::from_ptr(input) }.to_str() else {
        return DcmcjpegStatus::InvalidArgument as c_int;
    };
    let Ok(output) = unsafe { CStr::from_ptr(output) }.to_str() else {
        return DcmcjpegStatus::InvalidArgument as c_int;
    };

    match crate::convert::convert_file(input, output) {
        Ok(()) => DcmcjpegStatus::Ok as c_int,
        Err(error) => {
            unsafe { write_message(&error.to_string(), error_buffer, error_capacity) };
            DcmcjpegStatus::ConversionFailed as c_int
        }
    }
}

/// # Safety
///
/// `buffer`, when non-null, must point to `capacity` writable bytes.
unsafe fn write_message(message: &str, buffer: *mut c_char, capacity: usize) {
    if buffer.is_null() || capacity == 0 {
        return;
    }
    let bytes = message.as_bytes();
    let length = bytes.len().min(capacity - 1);
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer.cast::<u8>(), length);
        *buffer.add(length) = 0;
    }
}
