//! The three boundary operations, in ordinary `Result` form.

use woff2_codec::{Woff2Decoder, Woff2Encoder};
use woff2_header::HeaderInfo;

use crate::{BoundaryError, OwnedBuffer};

/// Compress a source font into a WOFF2 container.
///
/// The encoder is asked for an upper bound first and the output buffer is
/// allocated at exactly that bound; the transform then reports how many of
/// those bytes it actually used. The excess stays allocated; the filled
/// length, not the capacity, is what crosses the boundary.
///
/// On any failure past allocation the buffer is dropped here; a partially
/// written buffer never escapes.
pub fn compress<E: Woff2Encoder>(encoder: &E, font: &[u8]) -> Result<OwnedBuffer, BoundaryError> {
    if font.is_empty() {
        return Err(BoundaryError::EmptyInput);
    }
    let bound = encoder.max_compressed_size(font);
    let mut out = OwnedBuffer::with_capacity(bound)?;
    let written = encoder.compress(font, out.as_mut_slice())?;
    out.set_filled(written);
    Ok(out)
}

/// Decompress a WOFF2 container back into the source font.
///
/// The container's metadata gives the exact decoded size up front, so the
/// allocation is exact and the transform reports no length back: success
/// means the whole buffer is valid output. A declared size of zero is a
/// failure in its own right and short-circuits before any allocation.
pub fn decompress<D: Woff2Decoder>(
    decoder: &D,
    woff2: &[u8],
) -> Result<OwnedBuffer, BoundaryError> {
    if woff2.is_empty() {
        return Err(BoundaryError::EmptyInput);
    }
    let size = decoder.decompressed_size(woff2);
    if size == 0 {
        return Err(BoundaryError::EmptyContainer);
    }
    let mut out = OwnedBuffer::with_capacity(size)?;
    decoder.decompress(woff2, out.as_mut_slice())?;
    out.set_filled(size);
    Ok(out)
}

/// Describe a buffer that may or may not be a WOFF2 file.
///
/// Total over arbitrary input: malformed input selects one of the fixed
/// message shapes rather than an error. The declared length and the actual
/// input length are reported side by side and never reconciled; a mismatch
/// between them is exactly what this output exists to make visible.
pub fn describe(data: &[u8]) -> String {
    match woff2_header::inspect(data) {
        HeaderInfo::TooShort => "Not a valid WOFF2 (too short)".to_owned(),
        HeaderInfo::BadMagic(sig) => format!("Not WOFF2 signature: 0x{sig:08X}"),
        HeaderInfo::Header(header) => format!(
            "WOFF2 file\nflavor: 0x{:08X}\ndeclared total length: {} bytes\ninput buffer length: {} bytes\n",
            header.flavor,
            header.total_length,
            data.len(),
        ),
    }
}
