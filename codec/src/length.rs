//! Length prefixes for variable-size values.
//!
//! Lengths are always varint encoded, regardless of [`Mode`](crate::Mode). When decoding,
//! the length is checked against an upper bound before it is used to size an allocation or
//! to drive further reads. Types that read a length manually (for example from a
//! [`DecodeHook`](crate::DecodeHook)) bypass this check and must bound the value themselves.

use crate::{varint, Error};
use bytes::{Buf, BufMut};
use tracing::debug;

/// Writes a length prefix.
#[inline]
pub fn write_length(len: usize, buf: &mut impl BufMut) {
    varint::write(len as u64, buf);
}

/// Reads a length prefix, failing if it exceeds `max`.
#[inline]
pub fn read_length(buf: &mut impl Buf, max: usize) -> Result<usize, Error> {
    let found = varint::read::<u64>(buf)?;
    if found > max as u64 {
        debug!(found, max, "rejected length prefix");
        return Err(Error::LengthBoundExceeded { found, max });
    }

    // `found <= max`, so it fits in a `usize`.
    Ok(found as usize)
}

/// Returns the encoded size of a length prefix.
#[inline]
pub fn length_size(len: usize) -> usize {
    varint::size(len as u64)
}
