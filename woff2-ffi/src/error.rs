use woff2_codec::CodecError;

/// Why a boundary operation failed.
///
/// The host never sees these: the FFI adapters lower every variant to the
/// same null result and zero length. They exist so the internal logic and
/// its tests can tell the failure points apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The input pointer was null or the input length was zero.
    EmptyInput,
    /// The container declares a decoded size of zero.
    EmptyContainer,
    /// The allocator declined the requested capacity.
    AllocationFailed(usize),
    /// The codec reported that it could not complete the transform.
    Codec(CodecError),
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::EmptyInput => write!(f, "Input buffer is null or empty."),
            BoundaryError::EmptyContainer => {
                write!(f, "Container declares a decoded size of zero.")
            }
            BoundaryError::AllocationFailed(capacity) => {
                write!(f, "Could not allocate an output buffer of {capacity} bytes.")
            }
            BoundaryError::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BoundaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoundaryError::Codec(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodecError> for BoundaryError {
    fn from(err: CodecError) -> Self {
        BoundaryError::Codec(err)
    }
}
