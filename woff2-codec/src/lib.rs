//! The codec seam for the WOFF2 transcoding boundary.
//!
//! The WOFF2 transform itself (table reordering, the glyph transform,
//! Brotli entropy coding) lives in an external library. This crate pins
//! down the four calls the boundary is allowed to make on it: an
//! upper-bound sizing and a forward transform on the encode side, an exact
//! sizing and a backward transform on the decode side. Nothing else about
//! the codec is observable through these traits, and the boundary treats
//! any transform failure as opaque.
//!
//! The `c-woff2` feature provides `CWoff2Codec`, a backend bound to the
//! C entry points of the reference implementation. It is off by default
//! because enabling it obliges the final link to supply those symbols.

#![deny(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "c-woff2")]
mod c_woff2;
mod codec_error;

#[cfg(feature = "c-woff2")]
pub use c_woff2::CWoff2Codec;
pub use codec_error::CodecError;

/// The forward capability pair: source font to WOFF2 container.
pub trait Woff2Encoder {
    /// An upper bound on the compressed size of `font`.
    ///
    /// This is a capacity guarantee, not an exact size: encoding into a
    /// buffer of this many bytes will not run out of room, but the encoder
    /// will usually write fewer.
    fn max_compressed_size(&self, font: &[u8]) -> usize;

    /// Encode `font` into `out`, returning the number of bytes written.
    ///
    /// `out.len()` is the available budget; the write never exceeds it.
    fn compress(&self, font: &[u8], out: &mut [u8]) -> Result<usize, CodecError>;
}

/// The backward capability pair: WOFF2 container to source font.
pub trait Woff2Decoder {
    /// The exact decoded size, computed from the container's own metadata.
    ///
    /// Unlike the encode side this is not a bound, it is the size. Returns
    /// 0 when the container is malformed or declares no content.
    fn decompressed_size(&self, woff2: &[u8]) -> usize;

    /// Decode `woff2` into `out`, filling it exactly.
    ///
    /// No length comes back: `out` must already be sized by
    /// [`decompressed_size`](Self::decompressed_size), and the transform
    /// either fills all of it or fails.
    fn decompress(&self, woff2: &[u8], out: &mut [u8]) -> Result<(), CodecError>;
}
