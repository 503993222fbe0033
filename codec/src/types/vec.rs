//! Read implementation for sequences.
//!
//! A sequence is a length prefix followed by its elements. The width of the prefix depends on the
//! element type:
//! - Sequences of primitives ([Read::PRIMITIVE]) use a `varuint64` prefix on 64-bit targets, so
//!   raw blobs larger than 4 GiB can be carried, and a `varuint32` prefix elsewhere.
//! - All other sequences use a `varuint32` prefix.
//!
//! Primitive elements are packed back to back and read after a single bounds check against the
//! decoded length, before anything is allocated. Other elements are decoded one at a time.

use crate::{varint, Error, RangeCfg, Read};
use bytes::Buf;

/// Reads the length prefix of a sequence of `T`.
fn read_len<T: Read>(buf: &mut impl Buf) -> Result<usize, Error> {
    if T::PRIMITIVE && cfg!(target_pointer_width = "64") {
        let len = varint::read_varuint64(buf)?;
        usize::try_from(len).map_err(|_| Error::InvalidVarint)
    } else {
        let len = varint::read_varuint32(buf)?;
        usize::try_from(len).map_err(|_| Error::InvalidVarint)
    }
}

impl<T: Read> Read for Vec<T> {
    type Cfg = (RangeCfg<usize>, T::Cfg);

    #[inline]
    fn read_into(&mut self, buf: &mut impl Buf, (range, cfg): &Self::Cfg) -> Result<(), Error> {
        let len = read_len::<T>(buf)?;
        if !range.contains(&len) {
            return Err(Error::InvalidLength(len));
        }
        T::read_seq(self, len, buf, cfg)
    }
}
