//! Parsing of the WOFF2 fixed header prefix.
//!
//! A WOFF2 file opens with a fixed-layout header; this crate reads only the
//! first twelve bytes of it (signature, flavor tag, declared total length),
//! which is all the diagnostic surface needs. Everything past
//! that prefix belongs to the codec.
//!
//! Inspection is a total function: input that is too short or carries the
//! wrong signature selects a [`HeaderInfo`] variant rather than an error,
//! because "this is not WOFF2" is a useful answer, not a failure.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use font_types::Tag;

/// The WOFF2 signature, the first four bytes of any well-formed container.
pub const WOFF2_MAGIC: Tag = Tag::new(b"wOF2");

/// The number of leading bytes inspection reads.
pub const HEADER_PREFIX_LEN: usize = 12;

/// The fields read from a well-formed header prefix.
///
/// `total_length` is whatever the header declares. It is deliberately not
/// checked against the length of the buffer it was read from: the two are
/// independent facts, and surfacing both is what makes truncated or padded
/// files visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Woff2Header {
    /// The sfnt version of the font the container was derived from,
    /// e.g. `0x00010000` for TrueType outlines or `OTTO` for CFF.
    pub flavor: u32,
    /// The total container length the header declares.
    pub total_length: u32,
}

/// The outcome of inspecting a buffer that may or may not be WOFF2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderInfo {
    /// Fewer than [`HEADER_PREFIX_LEN`] bytes of input.
    TooShort,
    /// The first four bytes, read big-endian, were not the WOFF2 signature.
    BadMagic(u32),
    /// The signature matched and the rest of the prefix was read.
    Header(Woff2Header),
}

/// Read the header prefix from arbitrary bytes.
///
/// Performs no allocation and never panics.
pub fn inspect(data: &[u8]) -> HeaderInfo {
    let (Some(magic), Some(flavor), Some(total_length)) =
        (read_u32(data, 0), read_u32(data, 4), read_u32(data, 8))
    else {
        return HeaderInfo::TooShort;
    };
    if Tag::from_u32(magic) != WOFF2_MAGIC {
        return HeaderInfo::BadMagic(magic);
    }
    HeaderInfo::Header(Woff2Header {
        flavor,
        total_length,
    })
}

fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    data.get(offset..offset + 4)
        .and_then(|bytes| bytes.try_into().ok())
        .map(u32::from_be_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(magic: &[u8; 4], flavor: u32, total_length: u32) -> Vec<u8> {
        let mut data = magic.to_vec();
        data.extend_from_slice(&flavor.to_be_bytes());
        data.extend_from_slice(&total_length.to_be_bytes());
        data
    }

    #[test]
    fn empty_input_is_too_short() {
        assert_eq!(inspect(&[]), HeaderInfo::TooShort);
    }

    #[test]
    fn eleven_bytes_is_too_short() {
        assert_eq!(inspect(&[0u8; 11]), HeaderInfo::TooShort);
    }

    #[test]
    fn twelve_byte_header_parses() {
        let data = header(b"wOF2", 0x00010000, 48);
        assert_eq!(
            inspect(&data),
            HeaderInfo::Header(Woff2Header {
                flavor: 0x00010000,
                total_length: 48,
            })
        );
    }

    #[test]
    fn wrong_magic_reports_the_observed_bytes() {
        // a WOFF1 signature is long enough but not WOFF2
        let data = header(b"wOFF", 0x00010000, 48);
        assert_eq!(inspect(&data), HeaderInfo::BadMagic(0x774F4646));
    }

    #[test]
    fn declared_length_is_independent_of_input_length() {
        // the header claims 100 bytes but only 12 are present; that is the
        // header's problem to report, not the parser's to reconcile
        let data = header(b"wOF2", 0xAABBCCDD, 100);
        assert_eq!(
            inspect(&data),
            HeaderInfo::Header(Woff2Header {
                flavor: 0xAABBCCDD,
                total_length: 100,
            })
        );
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut data = header(b"wOF2", 0x4F54544F, 1024);
        data.extend_from_slice(&[0xFF; 64]);
        assert_eq!(
            inspect(&data),
            HeaderInfo::Header(Woff2Header {
                flavor: 0x4F54544F,
                total_length: 1024,
            })
        );
    }
}
