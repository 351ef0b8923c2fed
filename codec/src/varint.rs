//! Variable-length integer encoding and decoding
//!
//! This module implements Bitcoin's `CompactSize` encoding. The first byte is either the
//! value itself or a tag selecting a big-endian payload:
//!
//! | value                  | encoding                    |
//! |------------------------|-----------------------------|
//! | `0..=0xFC`             | 1 byte: the value           |
//! | `0xFD..=0xFFFF`        | `0xFD` + 2 bytes big-endian |
//! | `0x1_0000..=u32::MAX`  | `0xFE` + 4 bytes big-endian |
//! | above `u32::MAX`       | `0xFF` + 8 bytes big-endian |
//!
//! Encoding always produces the shortest form. Decoding accepts any form whose value fits the
//! requested type.

use crate::{io::at_least, Error};
use bytes::{Buf, BufMut};

/// Largest value encoded as a single byte.
const MAX_SINGLE_BYTE: u8 = 0xFC;
const TAG_U16: u8 = 0xFD;
const TAG_U32: u8 = 0xFE;
const TAG_U64: u8 = 0xFF;

/// A trait for unsigned integers that can be varint encoded.
pub trait UInt: Copy + Into<u64> + TryFrom<u64> {}

impl UInt for u8 {}
impl UInt for u16 {}
impl UInt for u32 {}
impl UInt for u64 {}

/// Encodes an unsigned integer as a varint.
pub fn write<T: UInt>(value: T, buf: &mut impl BufMut) {
    let value: u64 = value.into();
    if value <= MAX_SINGLE_BYTE as u64 {
        buf.put_u8(value as u8);
    } else if value <= u16::MAX as u64 {
        buf.put_u8(TAG_U16);
        buf.put_u16(value as u16);
    } else if value <= u32::MAX as u64 {
        buf.put_u8(TAG_U32);
        buf.put_u32(value as u32);
    } else {
        buf.put_u8(TAG_U64);
        buf.put_u64(value);
    }
}

/// Decodes a varint, failing if the value does not fit in `T`.
pub fn read<T: UInt>(buf: &mut impl Buf) -> Result<T, Error> {
    let value = read_u64(buf)?;
    T::try_from(value).map_err(|_| Error::InvalidEncoding("varint", "value exceeds target width"))
}

fn read_u64(buf: &mut impl Buf) -> Result<u64, Error> {
    at_least(buf, 1)?;
    match buf.get_u8() {
        TAG_U16 => {
            at_least(buf, 2)?;
            Ok(buf.get_u16() as u64)
        }
        TAG_U32 => {
            at_least(buf, 4)?;
            Ok(buf.get_u32() as u64)
        }
        TAG_U64 => {
            at_least(buf, 8)?;
            Ok(buf.get_u64())
        }
        value => Ok(value as u64),
    }
}

/// Calculates the number of bytes needed to encode an unsigned integer as a varint.
pub fn size<T: UInt>(value: T) -> usize {
    let value: u64 = value.into();
    if value <= MAX_SINGLE_BYTE as u64 {
        1
    } else if value <= u16::MAX as u64 {
        3
    } else if value <= u32::MAX as u64 {
        5
    } else {
        9
    }
}
