//! Codec implementation for UTF-8 text.

use crate::{
    io::pull,
    length::{read_length, write_length},
    Config, Error, Read, Shape, Write,
};
use bytes::{Buf, BufMut};
use tracing::debug;

impl Write for str {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, _: &Config) {
        write_length(self.len(), buf);
        buf.put_slice(self.as_bytes());
    }
}

impl Write for String {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
        self.as_str().write(buf, cfg);
    }
}

impl Read for String {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let len = read_length(buf, cfg.max_length())?;
        String::from_utf8(pull(buf, len)?).map_err(|err| {
            debug!(len, valid_up_to = err.utf8_error().valid_up_to(), "rejected text");
            Error::InvalidEncoding(Shape::Text.name(), "invalid utf-8")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode, DEFAULT_MAX_LENGTH};

    #[test]
    fn test_string() {
        let values = ["", "69", "héllo wörld", "日本語"];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded[0] as usize, value.len());
            assert_eq!(&encoded[1..], value.as_bytes());
            assert_eq!(String::from(value).encode(), encoded);
            assert_eq!(String::decode(encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let encoded: &[u8] = &[3, 0xA7, 0x85, 0xAF];
        assert!(matches!(
            String::decode(encoded),
            Err(Error::InvalidEncoding("text", _))
        ));
    }

    #[test]
    fn test_length_bound() {
        let value = "x".repeat(DEFAULT_MAX_LENGTH + 1);
        assert!(matches!(
            String::decode(value.encode()),
            Err(Error::LengthBoundExceeded {
                max: DEFAULT_MAX_LENGTH,
                ..
            })
        ));

        let cfg = Config::default().with_max_length(DEFAULT_MAX_LENGTH + 1);
        assert_eq!(String::decode_cfg(value.encode(), &cfg).unwrap(), value);
    }

    #[test]
    fn test_length_checked_before_payload() {
        // Declares 65535 bytes but carries none.
        let encoded: &[u8] = &[0xFD, 0xFF, 0xFF];
        assert!(matches!(
            String::decode(encoded),
            Err(Error::LengthBoundExceeded {
                found: 65535,
                max: 31184
            })
        ));
    }
}
