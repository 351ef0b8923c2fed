//! Type-supplied encodings.
//!
//! A type that owns its wire representation implements [`EncodeHook`], [`DecodeHook`] or
//! both, and registers them with [`hook!`](crate::hook!). Each direction is taken over
//! independently: a hook replaces any structural encoding in its own direction, while the
//! other direction can still traverse a listed set of fields. A type with a hook in either
//! direction has [`Shape::Hook`](crate::Shape).
//!
//! Nothing checks that the two directions agree. A hook that reads a length prefix itself
//! must also bound it (see [`read_length`](crate::length::read_length)).
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use ledger_codec::{
//!     check_hook, hook, io::pull_array, Config, Decode, DecodeHook, Encode, EncodeHook, Error,
//!     Qualifier,
//! };
//!
//! /// A 24-bit height, stored in three bytes.
//! #[derive(Debug, PartialEq)]
//! struct Height(u32);
//!
//! impl EncodeHook for Height {
//!     fn encode_hook(&self, buf: &mut impl BufMut) {
//!         buf.put_slice(&self.0.to_be_bytes()[1..]);
//!     }
//! }
//!
//! impl DecodeHook for Height {
//!     fn decode_hook<Q: Qualifier>(
//!         buf: &mut impl Buf,
//!         _: &Config,
//!     ) -> Result<Q::Output<Self>, Error> {
//!         let [a, b, c] = pull_array::<3>(buf)?;
//!         Ok(Q::qualify(Height(u32::from_be_bytes([0, a, b, c]))))
//!     }
//! }
//!
//! hook!(Height);
//! check_hook::<Height>();
//!
//! let encoded = Height(0x010203).encode();
//! assert_eq!(&encoded[..], &[1, 2, 3]);
//! assert_eq!(Height::decode(encoded).unwrap(), Height(0x010203));
//! ```

use crate::{Config, Error};
use bytes::{Buf, BufMut};
use std::sync::Arc;

/// How a decoded value is handed to the caller.
///
/// Decoding code that is generic over `Qualifier` builds a plain value and passes it to
/// [`Qualifier::qualify`]; it cannot observe or depend on the form the caller receives.
pub trait Qualifier {
    /// The qualified form of `T`.
    type Output<T>;

    /// Wraps a freshly decoded value.
    fn qualify<T>(value: T) -> Self::Output<T>;
}

/// The value itself.
#[derive(Clone, Copy, Debug)]
pub enum Owned {}

/// An exclusively owned heap allocation.
#[derive(Clone, Copy, Debug)]
pub enum Boxed {}

/// An immutable, shareable allocation.
#[derive(Clone, Copy, Debug)]
pub enum Shared {}

impl Qualifier for Owned {
    type Output<T> = T;

    #[inline]
    fn qualify<T>(value: T) -> T {
        value
    }
}

impl Qualifier for Boxed {
    type Output<T> = Box<T>;

    #[inline]
    fn qualify<T>(value: T) -> Box<T> {
        Box::new(value)
    }
}

impl Qualifier for Shared {
    type Output<T> = Arc<T>;

    #[inline]
    fn qualify<T>(value: T) -> Arc<T> {
        Arc::new(value)
    }
}

/// A custom encoding that takes precedence over every structural rule when writing.
pub trait EncodeHook {
    /// Writes the value's representation.
    fn encode_hook(&self, buf: &mut impl BufMut);
}

/// A custom decoding that takes precedence over every structural rule when reading.
pub trait DecodeHook: Sized {
    /// Reads a value and returns it under the qualification `Q`.
    fn decode_hook<Q: Qualifier>(buf: &mut impl Buf, cfg: &Config)
        -> Result<Q::Output<Self>, Error>;
}

/// Implements [`Write`](crate::Write) and [`Read`](crate::Read) for types with hooks.
///
/// - `hook!(A, B)` delegates both directions to [`EncodeHook`] and [`DecodeHook`].
/// - `hook!(encode A { f1, f2 })` writes through [`EncodeHook`] and reads the listed fields
///   in order, as [`aggregate!`](crate::aggregate!) would.
/// - `hook!(decode A { f1, f2 })` reads through [`DecodeHook`] and writes the listed fields.
///
/// Decoding a hooked value consumes one level of [`Config::max_depth`].
///
/// # Example
///
/// ```
/// use bytes::BufMut;
/// use ledger_codec::{hook, Decode, Encode, EncodeHook};
///
/// /// Written as a single byte, read back as a compact `u16`.
/// #[derive(Debug, PartialEq)]
/// struct Legacy {
///     id: u16,
/// }
///
/// impl EncodeHook for Legacy {
///     fn encode_hook(&self, buf: &mut impl BufMut) {
///         buf.put_u8(self.id as u8);
///     }
/// }
/// hook!(encode Legacy { id });
///
/// assert_eq!(&Legacy { id: 7 }.encode()[..], &[7]);
/// assert_eq!(Legacy::decode(&[0xFD, 0x01, 0x00][..]).unwrap(), Legacy { id: 256 });
/// ```
#[macro_export]
macro_rules! hook {
    (encode $ty:ident { $($field:tt),* $(,)? }) => {
        $crate::hook!(@write $ty);
        $crate::aggregate!(@read $ty { $($field),* });
    };
    (decode $ty:ident { $($field:tt),* $(,)? }) => {
        $crate::aggregate!(@write $ty Hook { $($field),* });
        $crate::hook!(@read $ty);
    };
    (@write $ty:ty) => {
        impl $crate::Write for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::Hook;

            #[inline]
            fn write(&self, buf: &mut impl $crate::bytes::BufMut, _: &$crate::Config) {
                <$ty as $crate::EncodeHook>::encode_hook(self, buf);
            }
        }
    };
    (@read $ty:ty) => {
        impl $crate::Read for $ty {
            #[inline]
            fn read_cfg(
                buf: &mut impl $crate::bytes::Buf,
                cfg: &$crate::Config,
            ) -> ::core::result::Result<Self, $crate::Error> {
                <$ty as $crate::DecodeHook>::decode_hook::<$crate::Owned>(buf, &cfg.nested()?)
            }

            #[inline]
            fn read_as<Q: $crate::Qualifier>(
                buf: &mut impl $crate::bytes::Buf,
                cfg: &$crate::Config,
            ) -> ::core::result::Result<Q::Output<Self>, $crate::Error> {
                <$ty as $crate::DecodeHook>::decode_hook::<Q>(buf, &cfg.nested()?)
            }
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::hook!(@write $ty);
            $crate::hook!(@read $ty);
        )+
    };
}

type DecodeFn<T, Q> = fn(&mut &[u8], &Config) -> Result<<Q as Qualifier>::Output<T>, Error>;

fn bind<T: DecodeHook, Q: Qualifier>() -> DecodeFn<T, Q> {
    |buf, cfg| T::decode_hook::<Q>(buf, cfg)
}

/// Instantiates `T`'s decode hook for every [`Qualifier`].
///
/// A hook that only compiles for some qualifications fails to build at the call site. The
/// function does nothing at runtime.
pub fn check_hook<T: DecodeHook>() {
    let _ = bind::<T, Owned>();
    let _ = bind::<T, Boxed>();
    let _ = bind::<T, Shared>();
}
