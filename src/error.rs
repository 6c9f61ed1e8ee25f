use crate::TypeTag;

/// Result type used by every encode and decode operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported while encoding or decoding a buffer.
///
/// Any error aborts the enclosing decode. Most `read_*` functions advance the cursor before they
/// detect a problem, so the reader should be discarded after a failure rather than resumed.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    /// The tag at the cursor does not name the kind being decoded. `found` is the raw byte, which
    /// may not be a valid tag at all.
    #[error("type mismatch: expected {expected} tag, found byte {found:#04x}")]
    TypeMismatch {
        /// The kind the caller asked for.
        expected: TypeTag,
        /// The byte actually present in the buffer.
        found: u8,
    },

    /// A decoded string length was zero or negative, or a container count was negative.
    #[error("invalid length {len}")]
    InvalidLength {
        /// The decoded length or count.
        len: i64,
    },

    /// A read would go past the end of the buffer. The buffer is truncated or corrupt.
    #[error("read of {requested} bytes at offset {pos} exceeds buffer length {len}")]
    OutOfBounds {
        /// Cursor position at the time of the read.
        pos: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Total length of the buffer.
        len: usize,
    },

    /// A `bool` payload was neither 0 nor 1.
    #[error("invalid bool payload {0:#04x}")]
    InvalidBool(u8),

    /// A string payload decoded as a Rust `String` was not well-formed UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,

    /// Containers and aggregates are nested deeper than the reader allows.
    #[error("nesting depth exceeds limit {limit}")]
    DepthLimitExceeded {
        /// The reader's nesting limit.
        limit: u32,
    },

    /// A value cannot be encoded. This is used for strings whose length does not fit the `Int32`
    /// length prefix.
    #[error("the data cannot be encoded")]
    CannotEncode,
}
