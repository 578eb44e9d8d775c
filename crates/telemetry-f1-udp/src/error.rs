//! Decode error types.
//!
//! Every error is scoped to the datagram being decoded: callers drop the
//! offending datagram and continue with the next one.

/// Errors produced while decoding a single F1 UDP datagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A read or skip would run past the end of the buffer.
    #[error("read of {needed} bytes at offset {offset} exceeds buffer of {len} bytes")]
    OutOfRange {
        /// Cursor position when the operation was attempted
        offset: usize,
        /// Number of bytes the operation required
        needed: usize,
        /// Total buffer length
        len: usize,
    },

    /// A record decoder read more bytes than its declared stride.
    #[error("{record} record consumed {consumed} bytes, exceeding its {stride}-byte stride")]
    StrideOverrun {
        /// Record layout name
        record: &'static str,
        /// Bytes actually consumed
        consumed: usize,
        /// Declared stride for the record
        stride: usize,
    },
}

/// A specialized `Result` type for packet decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;
