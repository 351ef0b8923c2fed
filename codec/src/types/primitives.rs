//! Codec implementations for Rust primitive types.
//!
//! # Fixed-size vs Variable-size
//!
//! Signed integers, floats and `bool` are always written big-endian at the width of the
//! type. They are treated as high-entropy values that would not benefit from a compact form,
//! and implement [`FixedSize`].
//!
//! Unsigned integers wider than a byte (`u16`, `u32`, `u64`, `usize`) usually hold lengths,
//! counts or indices biased towards small values. In [`Mode::Compact`] they are varint
//! encoded (see [`crate::varint`]); in [`Mode::Fixed`] they are written big-endian at the
//! width of the type. `u8` is already minimal and is always copied verbatim.
//!
//! ## Safety & portability
//! * `usize` is written as a 64-bit quantity to keep the on-wire format identical across
//!   32-bit and 64-bit architectures. Decoding a value the host cannot represent fails.
//! * Any nonzero byte decodes to `true`.
//! * An `Option` presence flag other than `0` or `1` is rejected.

use crate::{
    io::{at_least, pull},
    varint, Config, Error, FixedSize, Mode, Read, Shape, Write,
};
use bytes::{Buf, BufMut};
use tracing::debug;

// Single-byte implementations
impl Write for u8 {
    const SHAPE: Shape = Shape::Byte;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, _: &Config) {
        buf.put_u8(*self);
    }

    #[inline]
    fn write_slice(items: &[Self], buf: &mut impl BufMut, _: &Config) {
        buf.put_slice(items);
    }
}

impl Read for u8 {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &Config) -> Result<Self, Error> {
        at_least(buf, 1)?;
        Ok(buf.get_u8())
    }

    #[inline]
    fn read_many(buf: &mut impl Buf, len: usize, _: &Config) -> Result<Vec<Self>, Error> {
        pull(buf, len)
    }
}

impl FixedSize for u8 {
    const SIZE: usize = 1;
}

impl Write for i8 {
    const SHAPE: Shape = Shape::Scalar;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, _: &Config) {
        buf.put_i8(*self);
    }
}

impl Read for i8 {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &Config) -> Result<Self, Error> {
        at_least(buf, 1)?;
        Ok(buf.get_i8())
    }

    #[inline]
    fn read_many(buf: &mut impl Buf, len: usize, _: &Config) -> Result<Vec<Self>, Error> {
        Ok(pull(buf, len)?.into_iter().map(|b| b as i8).collect())
    }
}

impl FixedSize for i8 {
    const SIZE: usize = 1;
}

// Fixed-width implementation
macro_rules! impl_fixed {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            const SHAPE: Shape = Shape::Scalar;

            #[inline]
            fn write(&self, buf: &mut impl BufMut, _: &Config) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &Config) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_fixed!(i16, get_i16, put_i16);
impl_fixed!(i32, get_i32, put_i32);
impl_fixed!(i64, get_i64, put_i64);
impl_fixed!(i128, get_i128, put_i128);
impl_fixed!(f32, get_f32, put_f32);
impl_fixed!(f64, get_f64, put_f64);

// Unsigned implementation
macro_rules! impl_unsigned {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            const SHAPE: Shape = Shape::Unsigned;

            #[inline]
            fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
                match cfg.mode() {
                    Mode::Compact => varint::write(*self, buf),
                    Mode::Fixed => buf.$write_method(*self),
                }
            }
        }

        impl Read for $type {
            #[inline]
            fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
                match cfg.mode() {
                    Mode::Compact => varint::read(buf),
                    Mode::Fixed => {
                        at_least(buf, std::mem::size_of::<$type>())?;
                        Ok(buf.$read_method())
                    }
                }
            }
        }
    };
}

impl_unsigned!(u16, get_u16, put_u16);
impl_unsigned!(u32, get_u32, put_u32);
impl_unsigned!(u64, get_u64, put_u64);

// Usize implementation
impl Write for usize {
    const SHAPE: Shape = Shape::Unsigned;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        (*self as u64).write(buf, cfg);
    }
}

impl Read for usize {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let value = u64::read_cfg(buf, cfg)?;
        usize::try_from(value)
            .map_err(|_| Error::InvalidEncoding("usize", "value exceeds host width"))
    }
}

// Bool implementation
impl Write for bool {
    const SHAPE: Shape = Shape::Scalar;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, _: &Config) {
        buf.put_u8(u8::from(*self));
    }
}

impl Read for bool {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &Config) -> Result<Self, Error> {
        at_least(buf, 1)?;
        Ok(buf.get_u8() != 0)
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

// Option implementation
impl<T: Write> Write for Option<T> {
    const SHAPE: Shape = Shape::Optional;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        match self {
            Some(inner) => {
                buf.put_u8(1);
                inner.write(buf, cfg);
            }
            None => buf.put_u8(0),
        }
    }
}

impl<T: Read> Read for Option<T> {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        at_least(buf, 1)?;
        match buf.get_u8() {
            0 => Ok(None),
            1 => Ok(Some(T::read_cfg(buf, cfg)?)),
            flag => {
                debug!(flag, "rejected presence flag");
                Err(Error::InvalidEncoding(
                    Shape::Optional.name(),
                    "presence flag must be 0 or 1",
                ))
            }
        }
    }
}

// Box implementation
impl<T: Write + ?Sized> Write for Box<T> {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        (**self).write(buf, cfg);
    }
}

impl<T: Read> Read for Box<T> {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        T::read_cfg(buf, cfg).map(Box::new)
    }
}

impl<T: Write + ?Sized> Write for &T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        (**self).write(buf, cfg);
    }
}
