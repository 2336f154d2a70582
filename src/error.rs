use std::io::{self, ErrorKind};
use thiserror::Error;

/// Errors produced while parsing or decoding a Yay0 container.
///
/// This is the complete, stable taxonomy: callers may match on these variants
/// without worrying about new ones appearing for existing failure modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// A read from the flag, token, or raw stream ran off the end of its region,
    /// or the container is missing header bytes.
    #[error("input was truncated before decoding could finish")]
    Truncated,
    /// The magic number didn't match, or the header offsets are inconsistent.
    #[error("input is not a well-formed Yay0 container")]
    Format,
    /// The caller-supplied output buffer is smaller than the declared decompressed size.
    #[error("output buffer is smaller than the declared decompressed size")]
    OutputSmall,
    /// A back-reference names a distance further back than any byte already emitted.
    #[error("back-reference distance exceeds the number of bytes emitted so far")]
    BackRef,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

// `ByteCursor`/`BitFlagReader` are built on top of `std::io::Cursor`, whose reads
// fail with `UnexpectedEof`. That's the only io::Error this code can ever produce,
// since every reader here is backed by an in-memory slice.
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        assert_eq!(e.kind(), ErrorKind::UnexpectedEof);
        Error::Truncated
    }
}
