//! The FFI boundary for WOFF2 transcoding.
//!
//! Three stateless operations cross this boundary: compress a source font
//! into a WOFF2 container, decompress a container back into the font, and
//! describe a container's header. The transforms themselves belong to the
//! codec the boundary is built against (see [`woff2_codec`]); what this
//! crate owns is the contract around them: exact allocation sizing,
//! one-directional transfer of buffer ownership to the host, and failure
//! signaled as a null result paired with a zero length rather than an
//! unwind.
//!
//! Internally every operation is an ordinary `Result`. The null + zero
//! convention exists only in [`ffi`], one thin adapter per operation, so
//! everything else stays testable without a pointer in sight.
//!
//! Each call is synchronous and reentrant; no state is shared between
//! invocations except the global allocator.

#![deny(rustdoc::broken_intra_doc_links)]

mod buffer;
mod error;
pub mod ffi;
mod ops;

pub use buffer::OwnedBuffer;
pub use error::BoundaryError;
pub use ops::{compress, decompress, describe};
