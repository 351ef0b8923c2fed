//! Codec implementations for sequences.
//!
//! Slices and `Vec<T>` carry a length prefix; fixed-size arrays `[T; N]` do not, since `N`
//! is part of the type. In both cases elements are encoded one after another through
//! [`Write::write_slice`], which single-byte element types turn into a verbatim copy.

use crate::{
    length::{read_length, write_length},
    Config, Error, FixedSize, Read, Shape, Write,
};
use bytes::{Buf, BufMut};

// Slice implementation
impl<T: Write> Write for [T] {
    const SHAPE: Shape = Shape::Array;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        write_length(self.len(), buf);
        T::write_slice(self, buf, cfg);
    }
}

// Vec implementation
impl<T: Write> Write for Vec<T> {
    const SHAPE: Shape = Shape::Array;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        self.as_slice().write(buf, cfg);
    }
}

impl<T: Read> Read for Vec<T> {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let len = read_length(buf, cfg.max_length())?;
        T::read_many(buf, len, cfg)
    }
}

// Constant-size array implementation
impl<T: Write, const N: usize> Write for [T; N] {
    const SHAPE: Shape = Shape::FixedArray;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        T::write_slice(self, buf, cfg);
    }
}

impl<T: Read, const N: usize> Read for [T; N] {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let items = T::read_many(buf, N, cfg)?;
        items
            .try_into()
            .map_err(|_| Error::InvalidEncoding(Shape::FixedArray.name(), "element count"))
    }
}

impl<T: FixedSize, const N: usize> FixedSize for [T; N] {
    const SIZE: usize = T::SIZE * N;
}
