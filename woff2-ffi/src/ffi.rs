//! The `extern "C"` surface.
//!
//! Each operation gets exactly one adapter here: preconditions are checked
//! before a slice is ever formed, and the internal `Result` is lowered to
//! the host convention of a null pointer paired with a zero length. No
//! unwind and no partially written buffer ever crosses this boundary.

use std::ffi::{c_char, CString};

use crate::{ops, OwnedBuffer};

#[cfg(any(test, feature = "c-woff2"))]
use crate::BoundaryError;
#[cfg(feature = "c-woff2")]
use woff2_codec::CWoff2Codec;

/// Lower an operation result to the null + zero-length convention.
///
/// The pairing invariant holds in both directions: a null result always
/// comes with `*out_len == 0`, and a non-null result always comes with the
/// nonzero filled length. A success whose length cannot be truthfully
/// reported (zero bytes, or more than the `u32` slot can carry) is
/// lowered as a failure too.
#[cfg(any(test, feature = "c-woff2"))]
unsafe fn lower(
    op: &str,
    result: Result<OwnedBuffer, BoundaryError>,
    out_len: *mut u32,
) -> *mut u8 {
    match result {
        Ok(buffer) if buffer.filled() == 0 || buffer.filled() > u32::MAX as usize => {
            log::warn!("{op}: cannot report an output length of {}", buffer.filled());
            out_len.write(0);
            std::ptr::null_mut()
        }
        Ok(buffer) => {
            let (data, filled) = buffer.into_raw();
            out_len.write(filled as u32);
            data
        }
        Err(err) => {
            log::warn!("{op} failed: {err}");
            out_len.write(0);
            std::ptr::null_mut()
        }
    }
}

/// Compress a source font into a WOFF2 container.
///
/// On success the returned pointer owns `*out_len` bytes of output; the
/// caller releases it with `free_woff2_buffer`, exactly once. Bytes beyond
/// `*out_len` within the allocation are unspecified and must not be read.
/// On failure the result is null, `*out_len` is 0, and nothing needs
/// releasing.
///
/// # Safety
///
/// `data` must be null or point at `length` readable bytes, and `out_len`
/// must point at a writable `u32`.
#[cfg(feature = "c-woff2")]
#[no_mangle]
pub unsafe extern "C" fn compress_woff2(
    data: *const u8,
    length: usize,
    out_len: *mut u32,
) -> *mut u8 {
    if out_len.is_null() {
        return std::ptr::null_mut();
    }
    if data.is_null() || length == 0 {
        out_len.write(0);
        return std::ptr::null_mut();
    }
    let font = std::slice::from_raw_parts(data, length);
    lower("compress_woff2", ops::compress(&CWoff2Codec, font), out_len)
}

/// Decompress a WOFF2 container back into the source font.
///
/// Same contract as `compress_woff2`: the result pointer is null iff
/// `*out_len` is 0, and a non-null result is released with
/// `free_woff2_buffer`, exactly once.
///
/// # Safety
///
/// `data` must be null or point at `length` readable bytes, and `out_len`
/// must point at a writable `u32`.
#[cfg(feature = "c-woff2")]
#[no_mangle]
pub unsafe extern "C" fn decompress_woff2(
    data: *const u8,
    length: usize,
    out_len: *mut u32,
) -> *mut u8 {
    if out_len.is_null() {
        return std::ptr::null_mut();
    }
    if data.is_null() || length == 0 {
        out_len.write(0);
        return std::ptr::null_mut();
    }
    let woff2 = std::slice::from_raw_parts(data, length);
    lower(
        "decompress_woff2",
        ops::decompress(&CWoff2Codec, woff2),
        out_len,
    )
}

/// Describe a buffer that may or may not be WOFF2.
///
/// Always returns an owned, non-null, NUL-terminated string, malformed
/// and null input included. The caller releases it with `free_woff2_info`.
/// Never calls the codec.
///
/// # Safety
///
/// `data` must be null or point at `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn info_woff2(data: *const u8, length: usize) -> *mut c_char {
    let bytes = if data.is_null() {
        &[][..]
    } else {
        std::slice::from_raw_parts(data, length)
    };
    // none of the message shapes contain a NUL byte
    match CString::new(ops::describe(bytes)) {
        Ok(info) => info.into_raw(),
        Err(_) => CString::default().into_raw(),
    }
}

/// Release a buffer returned by `compress_woff2` or `decompress_woff2`.
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `data` must be null or a pointer returned by one of the two transforms
/// whose ownership has not already been returned.
#[no_mangle]
pub unsafe extern "C" fn free_woff2_buffer(data: *mut u8) {
    if !data.is_null() {
        drop(OwnedBuffer::from_raw(data));
    }
}

/// Release a string returned by `info_woff2`.
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `info` must be null or a pointer returned by `info_woff2` whose
/// ownership has not already been returned.
#[no_mangle]
pub unsafe extern "C" fn free_woff2_info(info: *mut c_char) {
    if !info.is_null() {
        drop(CString::from_raw(info));
    }
}
