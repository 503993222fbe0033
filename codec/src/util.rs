//! Buffer helpers shared by the decoders.

use crate::Error;
use bytes::Buf;
use std::cell::Cell;

/// Maximum number of variants and records that may be nested within one another while decoding.
pub const MAX_DEPTH: usize = 128;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Checks that at least `len` bytes remain in the buffer without consuming any of them.
///
/// `Buf` getters panic on short buffers, so every fixed-width read goes through here first.
#[inline]
pub fn at_least<B: Buf + ?Sized>(buf: &B, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Returns the number of bytes occupied by `count` items of `size` bytes each, if it is
/// representable.
///
/// An unrepresentable total can never be satisfied by a buffer, so callers report it as
/// [`Error::EndOfBuffer`].
#[inline]
pub fn packed_len(count: usize, size: usize) -> Result<usize, Error> {
    count.checked_mul(size).ok_or(Error::EndOfBuffer)
}

/// Holds one level of variant or record nesting on the current thread.
///
/// Released when dropped, including when decoding fails.
#[must_use]
#[derive(Debug)]
pub struct DepthGuard(());

impl DepthGuard {
    /// Enters one more level of nesting, failing with [`Error::DepthExceeded`] past [MAX_DEPTH].
    pub fn enter() -> Result<Self, Error> {
        DEPTH.with(|depth| {
            let next = depth.get() + 1;
            if next > MAX_DEPTH {
                return Err(Error::DepthExceeded(MAX_DEPTH));
            }
            depth.set(next);
            Ok(Self(()))
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}
