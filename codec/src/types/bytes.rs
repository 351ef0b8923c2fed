//! Codec implementation for raw byte sequences.
//!
//! [`Bytes`] is written as a length prefix followed by the bytes verbatim. When decoding, the
//! length is bounded by [`Config::max_length`] and the bytes are copied into a new
//! allocation, even if the source is itself a [`Bytes`].

use crate::{
    io::pull,
    length::{read_length, write_length},
    Config, Error, Read, Shape, Write,
};
use bytes::{Buf, BufMut, Bytes};

impl Write for Bytes {
    const SHAPE: Shape = Shape::Blob;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, _: &Config) {
        write_length(self.len(), buf);
        buf.put_slice(self);
    }
}

impl Read for Bytes {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let len = read_length(buf, cfg.max_length())?;
        Ok(Bytes::from(pull(buf, len)?))
    }
}
