//! Stand-in codecs for boundary tests.
//!
//! None of these compress anything. [`FramingCodec`] wraps its input in a
//! well-formed WOFF2 header prefix so the boundary's sizing, ownership and
//! round-trip behavior can be exercised without linking the native codec;
//! the other two misbehave in the specific ways failure-path tests need.

#![forbid(unsafe_code)]

use woff2_codec::{CodecError, Woff2Decoder, Woff2Encoder};
use woff2_header::{HeaderInfo, HEADER_PREFIX_LEN, WOFF2_MAGIC};

/// Extra capacity [`FramingCodec`] reports beyond what it writes, so tests
/// can observe a filled length smaller than the allocation.
pub const BOUND_SLACK: usize = 4;

/// The flavor tag [`FramingCodec`] stamps into every container it writes.
pub const FRAMING_FLAVOR: u32 = 0x0001_0000;

/// A reversible non-codec: a header prefix plus a verbatim copy of the input.
///
/// The "containers" it produces start with a real WOFF2 signature and a
/// truthful declared total length, so the decode side can compute the exact
/// payload size from the header alone, the way the real codec does.
pub struct FramingCodec;

impl Woff2Encoder for FramingCodec {
    fn max_compressed_size(&self, font: &[u8]) -> usize {
        HEADER_PREFIX_LEN + font.len() + BOUND_SLACK
    }

    fn compress(&self, font: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
        let total = HEADER_PREFIX_LEN + font.len();
        if out.len() < total {
            return Err(CodecError::EncodeFailed);
        }
        out[..4].copy_from_slice(&WOFF2_MAGIC.to_be_bytes());
        out[4..8].copy_from_slice(&FRAMING_FLAVOR.to_be_bytes());
        out[8..12].copy_from_slice(&(total as u32).to_be_bytes());
        out[HEADER_PREFIX_LEN..total].copy_from_slice(font);
        Ok(total)
    }
}

impl Woff2Decoder for FramingCodec {
    fn decompressed_size(&self, woff2: &[u8]) -> usize {
        match woff2_header::inspect(woff2) {
            HeaderInfo::Header(header) => {
                (header.total_length as usize).saturating_sub(HEADER_PREFIX_LEN)
            }
            _ => 0,
        }
    }

    fn decompress(&self, woff2: &[u8], out: &mut [u8]) -> Result<(), CodecError> {
        let payload = woff2
            .get(HEADER_PREFIX_LEN..HEADER_PREFIX_LEN + out.len())
            .ok_or(CodecError::DecodeFailed)?;
        out.copy_from_slice(payload);
        Ok(())
    }
}

/// A codec whose transforms always fail, for release-on-failure paths.
pub struct FailingCodec;

impl Woff2Encoder for FailingCodec {
    fn max_compressed_size(&self, font: &[u8]) -> usize {
        HEADER_PREFIX_LEN + font.len()
    }

    fn compress(&self, _font: &[u8], _out: &mut [u8]) -> Result<usize, CodecError> {
        Err(CodecError::EncodeFailed)
    }
}

impl Woff2Decoder for FailingCodec {
    fn decompressed_size(&self, woff2: &[u8]) -> usize {
        woff2.len().max(1)
    }

    fn decompress(&self, _woff2: &[u8], _out: &mut [u8]) -> Result<(), CodecError> {
        Err(CodecError::DecodeFailed)
    }
}

/// A codec that asks for more memory than any allocator will grant.
pub struct HugeBoundCodec;

impl Woff2Encoder for HugeBoundCodec {
    fn max_compressed_size(&self, _font: &[u8]) -> usize {
        usize::MAX
    }

    fn compress(&self, _font: &[u8], _out: &mut [u8]) -> Result<usize, CodecError> {
        Err(CodecError::EncodeFailed)
    }
}

impl Woff2Decoder for HugeBoundCodec {
    fn decompressed_size(&self, _woff2: &[u8]) -> usize {
        usize::MAX
    }

    fn decompress(&self, _woff2: &[u8], _out: &mut [u8]) -> Result<(), CodecError> {
        Err(CodecError::DecodeFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_round_trips() {
        let font = b"glyf+loca, allegedly";
        let mut container = vec![0u8; FramingCodec.max_compressed_size(font)];
        let written = FramingCodec.compress(font, &mut container).unwrap();
        assert_eq!(written, HEADER_PREFIX_LEN + font.len());
        assert!(written < container.len());
        container.truncate(written);

        let size = FramingCodec.decompressed_size(&container);
        assert_eq!(size, font.len());
        let mut decoded = vec![0u8; size];
        FramingCodec.decompress(&container, &mut decoded).unwrap();
        assert_eq!(decoded, font);
    }

    #[test]
    fn framing_container_carries_the_woff2_signature() {
        let mut container = vec![0u8; FramingCodec.max_compressed_size(b"x")];
        FramingCodec.compress(b"x", &mut container).unwrap();
        assert_eq!(&container[..4], b"wOF2");
    }

    #[test]
    fn framing_sizes_garbage_to_zero() {
        assert_eq!(FramingCodec.decompressed_size(b"not a container"), 0);
        assert_eq!(FramingCodec.decompressed_size(&[]), 0);
    }

    #[test]
    fn framing_refuses_a_short_budget() {
        let font = b"abcdef";
        let mut out = vec![0u8; HEADER_PREFIX_LEN + font.len() - 1];
        assert_eq!(
            FramingCodec.compress(font, &mut out),
            Err(CodecError::EncodeFailed)
        );
    }
}
