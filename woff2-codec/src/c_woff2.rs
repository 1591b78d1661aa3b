//! Bindings to the C entry points of the reference woff2 library.

use core::ffi::c_int;

use crate::{CodecError, Woff2Decoder, Woff2Encoder};

// The extern "C" wrapper surface of google/woff2, as exported by its
// emscripten and shared-library builds. The final link must provide these.
extern "C" {
    fn MaxWOFF2CompressedSize(data: *const u8, length: usize) -> usize;
    fn ConvertTTFToWOFF2(
        data: *const u8,
        length: usize,
        result: *mut u8,
        result_length: *mut usize,
    ) -> c_int;
    fn ComputeWOFF2FinalSize(data: *const u8, length: usize) -> usize;
    fn ConvertWOFF2ToTTF(
        result: *mut u8,
        result_length: usize,
        data: *const u8,
        length: usize,
    ) -> c_int;
}

/// The reference woff2 implementation, reached over its C wrapper.
pub struct CWoff2Codec;

impl Woff2Encoder for CWoff2Codec {
    fn max_compressed_size(&self, font: &[u8]) -> usize {
        // Safety: the slice guarantees `length` readable bytes at `data`.
        unsafe { MaxWOFF2CompressedSize(font.as_ptr(), font.len()) }
    }

    fn compress(&self, font: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
        let mut written = out.len();
        // Safety: both slices guarantee their lengths; `written` starts as
        // the output budget and comes back as the bytes actually used.
        let ok = unsafe {
            ConvertTTFToWOFF2(font.as_ptr(), font.len(), out.as_mut_ptr(), &mut written)
        } != 0;
        if ok {
            Ok(written)
        } else {
            Err(CodecError::EncodeFailed)
        }
    }
}

impl Woff2Decoder for CWoff2Codec {
    fn decompressed_size(&self, woff2: &[u8]) -> usize {
        // Safety: the slice guarantees `length` readable bytes at `data`.
        unsafe { ComputeWOFF2FinalSize(woff2.as_ptr(), woff2.len()) }
    }

    fn decompress(&self, woff2: &[u8], out: &mut [u8]) -> Result<(), CodecError> {
        // Safety: both slices guarantee their lengths; the transform fills
        // `out` completely or reports failure.
        let ok = unsafe {
            ConvertWOFF2ToTTF(out.as_mut_ptr(), out.len(), woff2.as_ptr(), woff2.len())
        } != 0;
        if ok {
            Ok(())
        } else {
            Err(CodecError::DecodeFailed)
        }
    }
}
