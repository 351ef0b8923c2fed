//! Helpers enforcing the pull contract of a byte source.
//!
//! Encoding writes through any [`BufMut`](bytes::BufMut), which copies each chunk before
//! returning. Decoding pulls from any [`Buf`]: a request for `n` bytes either yields exactly
//! `n` bytes or fails with [`Error::TruncatedInput`] without consuming anything.

use crate::Error;
use bytes::Buf;

/// Checks that at least `len` bytes remain in the buffer.
#[inline]
pub fn at_least(buf: &impl Buf, len: usize) -> Result<(), Error> {
    let remaining = buf.remaining();
    if remaining < len {
        return Err(Error::TruncatedInput {
            needed: len,
            remaining,
        });
    }
    Ok(())
}

/// Pulls exactly `len` bytes into freshly allocated storage.
///
/// The returned bytes never alias the source, so they remain valid after the source is
/// advanced or dropped.
#[inline]
pub fn pull(buf: &mut impl Buf, len: usize) -> Result<Vec<u8>, Error> {
    at_least(buf, len)?;
    let mut out = vec![0u8; len];
    buf.copy_to_slice(&mut out);
    Ok(out)
}

/// Pulls exactly `N` bytes into an array.
#[inline]
pub fn pull_array<const N: usize>(buf: &mut impl Buf) -> Result<[u8; N], Error> {
    at_least(buf, N)?;
    let mut out = [0u8; N];
    buf.copy_to_slice(&mut out);
    Ok(out)
}
