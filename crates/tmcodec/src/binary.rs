//! Bounds-checked big-endian integer reads at a caller-owned cursor.
//!
//! ```rust
//! use tmcodec::{ReadError, binary::parse};
//!
//! let buf = [0xFF, 0x01, 0x02];
//! let mut pos = 0;
//! assert_eq!(parse::<i8>(&buf, &mut pos), Ok(-1));
//! assert_eq!(parse::<u16>(&buf, &mut pos), Ok(0x0102));
//! assert_eq!(
//!     parse::<i32>(&buf, &mut pos),
//!     Err(ReadError::InsufficientBytes { offset: 3, needed: 4, available: 0 })
//! );
//! assert_eq!(pos, 3);
//! ```

use alloc::vec::Vec;

use crate::error::ReadError;

/// Fixed-width integer stored big-endian.
pub trait Primitive: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decodes from exactly [`Self::WIDTH`] bytes.
    fn from_be_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Primitive for $t {
                const WIDTH: usize = core::mem::size_of::<$t>();

                fn from_be_slice(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_be_bytes)
                }
            }
        )*
    };
}

impl_primitive!(i8, u8, i16, u16, i32, u32);

fn take(buf: &[u8], pos: usize, needed: usize) -> Result<&[u8], ReadError> {
    buf.get(pos..)
        .and_then(|rest| rest.get(..needed))
        .ok_or(ReadError::InsufficientBytes {
            offset: pos,
            needed,
            available: buf.len().saturating_sub(pos),
        })
}

/// Reads one value at `*pos` and advances the cursor past it.
///
/// # Errors
///
/// [`ReadError::InsufficientBytes`] if fewer than `T::WIDTH` bytes remain;
/// the cursor is not moved.
pub fn parse<T: Primitive>(buf: &[u8], pos: &mut usize) -> Result<T, ReadError> {
    let bytes = take(buf, *pos, T::WIDTH)?;
    let value = T::from_be_slice(bytes).ok_or(ReadError::InsufficientBytes {
        offset: *pos,
        needed: T::WIDTH,
        available: bytes.len(),
    })?;
    *pos += T::WIDTH;
    Ok(value)
}

/// Reads `len` consecutive values.
///
/// # Errors
///
/// [`ReadError::InsufficientBytes`] if the whole array does not fit; nothing
/// is consumed in that case.
pub fn parse_array<T: Primitive>(
    buf: &[u8],
    pos: &mut usize,
    len: usize,
) -> Result<Vec<T>, ReadError> {
    let needed = T::WIDTH.saturating_mul(len);
    take(buf, *pos, needed)?;
    let mut cursor = *pos;
    let values = (0..len)
        .map(|_| parse(buf, &mut cursor))
        .collect::<Result<Vec<T>, _>>()?;
    *pos = cursor;
    Ok(values)
}
