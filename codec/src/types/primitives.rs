//! Read implementations for Rust primitive types.
//!
//! # Fixed-width arithmetic values
//!
//! Integers, floats, and `bool` are read as exactly `size_of::<T>()` bytes with no tag. All
//! multi-byte values are little-endian on the wire and converted explicitly, so decoding does not
//! depend on the host's byte order. A `bool` is a single byte where any nonzero value is `true`.
//!
//! These types mark themselves [Read::PRIMITIVE], so a `Vec` of them is read as one packed region
//! (see [crate::types::vec]).
//!
//! # Optional values
//!
//! `Option<T>` is a one-byte presence flag followed, if present, by `T`.

use crate::{
    util::{at_least, packed_len},
    Error, FixedSize, Read, ReadExt,
};
use bytes::Buf;

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident) => {
        impl Read for $type {
            type Cfg = ();
            const PRIMITIVE: bool = true;

            #[inline]
            fn read_into(&mut self, buf: &mut impl Buf, _: &()) -> Result<(), Error> {
                at_least(buf, <$type>::SIZE)?;
                *self = buf.$read_method();
                Ok(())
            }

            fn read_seq(
                dst: &mut Vec<Self>,
                len: usize,
                buf: &mut impl Buf,
                _: &(),
            ) -> Result<(), Error> {
                at_least(buf, packed_len(len, <$type>::SIZE)?)?;
                dst.clear();
                dst.reserve_exact(len);
                dst.extend((0..len).map(|_| buf.$read_method()));
                Ok(())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u16, get_u16_le);
impl_numeric!(u32, get_u32_le);
impl_numeric!(u64, get_u64_le);
impl_numeric!(u128, get_u128_le);
impl_numeric!(i8, get_i8);
impl_numeric!(i16, get_i16_le);
impl_numeric!(i32, get_i32_le);
impl_numeric!(i64, get_i64_le);
impl_numeric!(i128, get_i128_le);
impl_numeric!(f32, get_f32_le);
impl_numeric!(f64, get_f64_le);

// Byte implementation (sequences of bytes are copied in one pass)
impl Read for u8 {
    type Cfg = ();
    const PRIMITIVE: bool = true;

    #[inline]
    fn read_into(&mut self, buf: &mut impl Buf, _: &()) -> Result<(), Error> {
        at_least(buf, 1)?;
        *self = buf.get_u8();
        Ok(())
    }

    fn read_seq(dst: &mut Vec<Self>, len: usize, buf: &mut impl Buf, _: &()) -> Result<(), Error> {
        at_least(buf, len)?;
        dst.clear();
        dst.resize(len, 0);
        buf.copy_to_slice(dst);
        Ok(())
    }
}

impl FixedSize for u8 {
    const SIZE: usize = 1;
}

// Bool implementation
impl Read for bool {
    type Cfg = ();
    const PRIMITIVE: bool = true;

    #[inline]
    fn read_into(&mut self, buf: &mut impl Buf, _: &()) -> Result<(), Error> {
        *self = u8::read(buf)? != 0;
        Ok(())
    }

    fn read_seq(dst: &mut Vec<Self>, len: usize, buf: &mut impl Buf, _: &()) -> Result<(), Error> {
        at_least(buf, len)?;
        dst.clear();
        dst.reserve_exact(len);
        dst.extend((0..len).map(|_| buf.get_u8() != 0));
        Ok(())
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

// Unit implementation
impl Read for () {
    type Cfg = ();

    #[inline]
    fn read_into(&mut self, _: &mut impl Buf, _: &()) -> Result<(), Error> {
        Ok(())
    }
}

impl FixedSize for () {
    const SIZE: usize = 0;
}

// Option implementation
impl<T: Read> Read for Option<T> {
    type Cfg = T::Cfg;

    #[inline]
    fn read_into(&mut self, buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<(), Error> {
        if !bool::read(buf)? {
            *self = None;
            return Ok(());
        }
        self.insert(T::default()).read_into(buf, cfg)
    }
}
