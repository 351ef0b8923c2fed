//! Codec implementation for fieldless enumerations.
//!
//! An enumeration is written as its integer discriminant, always in [`Mode::Fixed`]
//! regardless of the ambient configuration: a `u16`-backed enumeration is always two
//! big-endian bytes. Decoding an integer that names no variant fails.
//!
//! [`Mode::Fixed`]: crate::Mode::Fixed

use crate::{Error, Read, Write};
use tracing::debug;

/// Implements [`Write`](crate::Write), [`Read`](crate::Read) and
/// [`FixedSize`](crate::FixedSize) for a fieldless enumeration, encoded as the listed integer
/// type.
///
/// Every variant must be listed. The integer type must implement [`Discriminant`], which
/// excludes `usize` and `isize` since their width depends on the host.
///
/// # Example
///
/// ```
/// use ledger_codec::{enumeration, Config, Decode, Encode, Mode};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Kind {
///     Transfer = 1,
///     Stake = 2,
/// }
/// enumeration!(Kind: u16 { Transfer, Stake });
///
/// // Compact mode does not apply to enumerations.
/// assert_eq!(&Kind::Transfer.encode()[..], &[0x00, 0x01]);
/// assert_eq!(&Kind::Stake.encode_cfg(&Config::from(Mode::Fixed))[..], &[0x00, 0x02]);
/// assert_eq!(Kind::decode(&[0x00, 0x02][..]).unwrap(), Kind::Stake);
/// assert!(Kind::decode(&[0x00, 0x03][..]).is_err());
/// ```
///
/// ```compile_fail
/// use ledger_codec::enumeration;
///
/// #[derive(Clone, Copy)]
/// enum Wide {
///     A,
/// }
/// enumeration!(Wide: usize { A });
/// ```
#[macro_export]
macro_rules! enumeration {
    ($ty:ident : $repr:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::Write for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::Enum;

            #[inline]
            fn write(&self, buf: &mut impl $crate::bytes::BufMut, cfg: &$crate::Config) {
                let raw: $repr = match self {
                    $( $ty::$variant => $ty::$variant as $repr, )+
                };
                $crate::Write::write(&raw, buf, &cfg.with_mode($crate::Mode::Fixed));
            }
        }

        impl $crate::Read for $ty {
            #[inline]
            fn read_cfg(
                buf: &mut impl $crate::bytes::Buf,
                cfg: &$crate::Config,
            ) -> ::core::result::Result<Self, $crate::Error> {
                let raw = <$repr as $crate::Read>::read_cfg(
                    buf,
                    &cfg.with_mode($crate::Mode::Fixed),
                )?;
                $(
                    if raw == $ty::$variant as $repr {
                        return ::core::result::Result::Ok($ty::$variant);
                    }
                )+
                ::core::result::Result::Err($crate::types::enumeration::unknown(stringify!($ty)))
            }
        }

        impl $crate::FixedSize for $ty {
            const SIZE: usize = <$repr as $crate::types::enumeration::Discriminant>::WIDTH;
        }
    };
}

/// Integer types that can carry an enumeration's discriminant.
pub trait Discriminant: Write + Read + Copy + PartialEq {
    /// Encoded width in bytes, always written in [`Mode::Fixed`](crate::Mode::Fixed).
    const WIDTH: usize;
}

macro_rules! impl_discriminant {
    ($($type:ty),+) => {
        $(
            impl Discriminant for $type {
                const WIDTH: usize = std::mem::size_of::<$type>();
            }
        )+
    };
}

impl_discriminant!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Builds the error for a discriminant that names no variant of `name`.
#[doc(hidden)]
pub fn unknown(name: &'static str) -> Error {
    debug!(enumeration = name, "rejected unknown discriminant");
    Error::InvalidEncoding(name, "unknown discriminant")
}
