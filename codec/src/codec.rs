//! Core codec traits and top-level entry points

use crate::{hook::Qualifier, Config, Error, Shape};
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// The static shape of this type's encoding.
    const SHAPE: Shape;

    /// Encodes this value by writing to a buffer.
    ///
    /// Writing never fails. Implementations should panic if the buffer cannot grow to hold
    /// the encoding.
    fn write(&self, buf: &mut impl BufMut, cfg: &Config);

    /// Encodes a contiguous run of values, without a length prefix.
    ///
    /// Single-byte types override this to copy the run verbatim. The bytes written must be
    /// identical to writing each value in turn.
    fn write_slice(items: &[Self], buf: &mut impl BufMut, cfg: &Config)
    where
        Self: Sized,
    {
        for item in items {
            item.write(buf, cfg);
        }
    }
}

/// Trait for types that can be read/decoded from a buffer.
///
/// Decoded values never borrow from the buffer: every value, and every value nested inside
/// it, is backed by freshly allocated storage.
pub trait Read: Sized {
    /// Reads a value from the buffer using the provided configuration `cfg`, consuming the
    /// necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g., invalid data, not enough bytes initially).
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error>;

    /// Reads `len` consecutive values, the counterpart of [`Write::write_slice`].
    ///
    /// `len` must already be bounded by the caller.
    fn read_many(buf: &mut impl Buf, len: usize, cfg: &Config) -> Result<Vec<Self>, Error> {
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(Self::read_cfg(buf, cfg)?);
        }
        Ok(items)
    }

    /// Reads a value under the qualification `Q`.
    ///
    /// Types with a [`DecodeHook`](crate::DecodeHook) forward `Q` to the hook; all other types decode
    /// normally and wrap the result.
    fn read_as<Q: Qualifier>(buf: &mut impl Buf, cfg: &Config) -> Result<Q::Output<Self>, Error> {
        Self::read_cfg(buf, cfg).map(Q::qualify)
    }
}

/// Trait for types with a known, fixed encoded length.
///
/// The length must not depend on [`Mode`](crate::Mode), so varint-capable unsigned integers
/// do not implement it.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Extension trait for encoding values to an owned buffer.
pub trait Encode: Write {
    /// Encodes a value with the default [`Config`].
    fn encode(&self) -> BytesMut {
        encode_to_bytes(self, &Config::default())
    }

    /// Encodes a value with the provided [`Config`].
    fn encode_cfg(&self, cfg: &Config) -> BytesMut {
        encode_to_bytes(self, cfg)
    }
}

// Automatically implement `Encode` for types that implement `Write`.
impl<T: Write + ?Sized> Encode for T {}

/// Trait for types that can be encoded to a fixed-size byte array.
pub trait EncodeFixed: Write + FixedSize {
    /// Encodes a value to a fixed-size byte array.
    ///
    /// The caller MUST ensure `N` is equal to `Self::SIZE`.
    /// Panics if the `write` implementation does not write exactly `N` bytes.
    fn encode_fixed<const N: usize>(&self) -> [u8; N] {
        assert_eq!(
            N,
            Self::SIZE,
            "array of {} bytes for a {} byte value",
            N,
            Self::SIZE
        );

        let mut array = [0u8; N];
        let mut buf = &mut array[..];
        self.write(&mut buf, &Config::default());
        assert_eq!(buf.len(), 0);
        array
    }
}

// Automatically implement `EncodeFixed` for types that implement `Write` and `FixedSize`.
impl<T: Write + FixedSize> EncodeFixed for T {}

/// Extension trait providing an ergonomic read method using the default [`Config`].
pub trait ReadExt: Read {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Self::read_cfg(buf, &Config::default())
    }
}

// Automatically implement `ReadExt` for types that implement `Read`.
impl<T: Read> ReadExt for T {}

/// Trait for decoding a value from a buffer, ensuring the entire buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value with the default [`Config`].
    fn decode(buf: impl Buf) -> Result<Self, Error> {
        Self::decode_cfg(buf, &Config::default())
    }

    /// Decodes a value, failing with [`Error::ExtraData`] if any bytes remain.
    fn decode_cfg(mut buf: impl Buf, cfg: &Config) -> Result<Self, Error> {
        let result = Self::read_cfg(&mut buf, cfg)?;

        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }

        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Encodes `value` into `sink`.
pub fn encode_to_sink<T: Write + ?Sized>(value: &T, sink: &mut impl BufMut, cfg: &Config) {
    value.write(sink, cfg);
}

/// Encodes `value` into a newly allocated buffer.
pub fn encode_to_bytes<T: Write + ?Sized>(value: &T, cfg: &Config) -> BytesMut {
    let mut buf = BytesMut::new();
    value.write(&mut buf, cfg);
    buf
}

/// Encodes `value` into `buf`, discarding its previous contents but keeping its capacity.
///
/// Returns the encoded bytes, which remain valid until `buf` is next modified.
pub fn encode_into<'a, T: Write + ?Sized>(
    value: &T,
    buf: &'a mut BytesMut,
    cfg: &Config,
) -> &'a [u8] {
    buf.clear();
    value.write(buf, cfg);
    &buf[..]
}

/// Decodes a `T` from `source`, leaving any bytes that follow it unread.
pub fn decode_from_source<T: Read>(source: &mut impl Buf, cfg: &Config) -> Result<T, Error> {
    T::read_cfg(source, cfg)
}

/// Decodes a `T` from the front of `bytes`.
///
/// Trailing bytes are ignored. Use [`Decode::decode_cfg`] to reject them.
pub fn decode_from_bytes<T: Read>(bytes: &[u8], cfg: &Config) -> Result<T, Error> {
    let mut source = bytes;
    decode_from_source(&mut source, cfg)
}

/// Decodes a `T` from `source` with the given qualification.
pub fn decode_as<T: Read, Q: Qualifier>(
    source: &mut impl Buf,
    cfg: &Config,
) -> Result<Q::Output<T>, Error> {
    T::read_as::<Q>(source, cfg)
}
