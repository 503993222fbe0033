//! Read implementations for text.
//!
//! Text is a `varuint32` length followed by that many raw bytes, with no terminator. [`Bytes`]
//! accepts any content. [`String`] additionally requires the bytes to be valid UTF-8.

use crate::{util::at_least, varint, Error, RangeCfg, Read};
use bytes::{Buf, Bytes};

/// Reads a text length prefix and checks that the body is present.
fn read_len(buf: &mut impl Buf, range: &RangeCfg<usize>) -> Result<usize, Error> {
    let len32 = varint::read_varuint32(buf)?;
    let len = usize::try_from(len32).map_err(|_| Error::InvalidVarint)?;
    if !range.contains(&len) {
        return Err(Error::InvalidLength(len));
    }
    at_least(buf, len)?;
    Ok(len)
}

impl Read for Bytes {
    type Cfg = RangeCfg<usize>;

    #[inline]
    fn read_into(&mut self, buf: &mut impl Buf, range: &Self::Cfg) -> Result<(), Error> {
        let len = read_len(buf, range)?;
        *self = buf.copy_to_bytes(len);
        Ok(())
    }
}

impl Read for String {
    type Cfg = RangeCfg<usize>;

    fn read_into(&mut self, buf: &mut impl Buf, range: &Self::Cfg) -> Result<(), Error> {
        let len = read_len(buf, range)?;
        let mut raw = std::mem::take(self).into_bytes();
        raw.clear();
        raw.resize(len, 0);
        buf.copy_to_slice(&mut raw);
        *self = String::from_utf8(raw).map_err(|_| Error::Invalid("String", "invalid utf-8"))?;
        Ok(())
    }
}
