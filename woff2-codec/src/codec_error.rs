/// A transform the external codec could not complete.
///
/// The codec does not report why; malformed font, corrupted container
/// and exceeded budget all look the same from here, so neither do we.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    EncodeFailed,
    DecodeFailed,
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::EncodeFailed => {
                write!(f, "The encoder could not produce a WOFF2 container.")
            }
            CodecError::DecodeFailed => {
                write!(f, "The WOFF2 container could not be decoded.")
            }
        }
    }
}

impl std::error::Error for CodecError {}
