use thiserror::Error;

/// Failure of a bounds-checked binary read.
///
/// Reads never advance the caller's cursor when they fail, so the buffer can
/// be refilled and the read retried from the same offset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("need {needed} bytes at offset {offset}, only {available} available")]
    InsufficientBytes {
        /// Cursor position at which the read was attempted.
        offset: usize,
        /// Width of the value being decoded, in bytes.
        needed: usize,
        /// Bytes remaining after `offset` (zero if the cursor is past the end).
        available: usize,
    },
}
