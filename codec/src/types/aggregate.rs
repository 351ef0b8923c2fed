//! Codec implementations for aggregates: tuples and structs.
//!
//! An aggregate is encoded as the concatenation of its fields in declaration order, with no
//! field names, tags or count. The decoder must expect exactly the same fields in the same
//! order, so reordering, adding or removing a field changes the wire format.

use crate::{Config, Error, FixedSize, Read, Shape, Write};
use bytes::{Buf, BufMut};
use paste::paste;

/// Implements [`Write`](crate::Write) and [`Read`](crate::Read) for a struct by encoding the
/// listed fields in the listed order.
///
/// The list must name every field of the struct exactly once, in declaration order. Tuple
/// structs list their field indices. Generic parameters are listed after the type name and
/// must themselves implement the codec traits.
///
/// Decoding a struct consumes one level of [`Config::max_depth`](crate::Config::max_depth),
/// so self-referential types (through `Box`, `Option` or `Vec`) fail cleanly on deep input.
///
/// # Example
///
/// ```
/// use ledger_codec::{aggregate, Decode, Encode};
///
/// #[derive(Debug, PartialEq)]
/// struct Transfer {
///     from: u32,
///     to: u32,
///     memo: Option<String>,
/// }
/// aggregate!(Transfer { from, to, memo });
///
/// #[derive(Debug, PartialEq)]
/// struct Pair<A, B>(A, B);
/// aggregate!(Pair<A, B> { 0, 1 });
///
/// let value = Pair(Transfer { from: 1, to: 2, memo: None }, -1i8);
/// let encoded = value.encode();
/// assert_eq!(&encoded[..], &[1, 2, 0, 0xFF]);
/// assert_eq!(Pair::<Transfer, i8>::decode(encoded).unwrap(), value);
/// ```
#[macro_export]
macro_rules! aggregate {
    (@write $ty:ident $shape:ident { $($field:tt),* }) => {
        impl $crate::Write for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::$shape;

            #[inline]
            #[allow(unused_variables)]
            fn write(&self, buf: &mut impl $crate::bytes::BufMut, cfg: &$crate::Config) {
                $( $crate::Write::write(&self.$field, buf, cfg); )*
            }
        }
    };
    (@read $ty:ident { $($field:tt),* }) => {
        impl $crate::Read for $ty {
            #[inline]
            #[allow(unused_variables)]
            fn read_cfg(
                buf: &mut impl $crate::bytes::Buf,
                cfg: &$crate::Config,
            ) -> ::core::result::Result<Self, $crate::Error> {
                let cfg = &cfg.nested()?;
                ::core::result::Result::Ok(Self {
                    $( $field: $crate::Read::read_cfg(buf, cfg)?, )*
                })
            }
        }
    };
    ($ty:ident { $($field:tt),* $(,)? }) => {
        $crate::aggregate!(@write $ty Aggregate { $($field),* });
        $crate::aggregate!(@read $ty { $($field),* });
    };
    ($ty:ident < $($gen:ident),+ $(,)? > { $($field:tt),* $(,)? }) => {
        impl<$($gen: $crate::Write),+> $crate::Write for $ty<$($gen),+> {
            const SHAPE: $crate::Shape = $crate::Shape::Aggregate;

            #[inline]
            #[allow(unused_variables)]
            fn write(&self, buf: &mut impl $crate::bytes::BufMut, cfg: &$crate::Config) {
                $( $crate::Write::write(&self.$field, buf, cfg); )*
            }
        }

        impl<$($gen: $crate::Read),+> $crate::Read for $ty<$($gen),+> {
            #[inline]
            #[allow(unused_variables)]
            fn read_cfg(
                buf: &mut impl $crate::bytes::Buf,
                cfg: &$crate::Config,
            ) -> ::core::result::Result<Self, $crate::Error> {
                let cfg = &cfg.nested()?;
                ::core::result::Result::Ok(Self {
                    $( $field: $crate::Read::read_cfg(buf, cfg)?, )*
                })
            }
        }
    };
}

// Unit implementation
impl Write for () {
    const SHAPE: Shape = Shape::Aggregate;

    #[inline]
    fn write(&self, _: &mut impl BufMut, _: &Config) {}
}

impl Read for () {
    #[inline]
    fn read_cfg(_: &mut impl Buf, _: &Config) -> Result<Self, Error> {
        Ok(())
    }
}

impl FixedSize for () {
    const SIZE: usize = 0;
}

// Tuple implementation
macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                const SHAPE: Shape = Shape::Aggregate;

                #[inline]
                fn write(&self, buf: &mut impl BufMut, cfg: &Config) {
                    $( self.$index.write(buf, cfg); )*
                }
            }

            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                #[inline]
                fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read_cfg(buf, cfg)?, )* ))
                }
            }

            impl<$( [<T $index>]: FixedSize ),*> FixedSize for ( $( [<T $index>], )* ) {
                const SIZE: usize = 0 $( + [<T $index>]::SIZE )*;
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
