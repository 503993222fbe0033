//! Variable-length integer decoding
//!
//! Each byte uses:
//! - 7 bits for the value
//! - 1 "continuation" bit to indicate if more bytes follow
//!
//! Groups are ordered least-significant first. A varint of an `N`-bit type may span at most
//! `ceil(N / 7)` bytes (5 for `u32`, 10 for `u64`); a longer sequence is rejected with
//! [Error::InvalidVarint]. Data bits in the final permitted byte that do not fit in `N` bits are
//! discarded rather than rejected, so encoders that emit them remain readable.
//!
//! Signed 32-bit values are carried as a `varuint32` whose lowest bit selects the sign (see
//! [read_varint32]).

use crate::{Error, Read};
use bytes::Buf;
use std::ops::{BitOrAssign, Shl};

const DATA_BITS_PER_BYTE: usize = 7;
const DATA_BITS_MASK: u8 = 0x7F;
const CONTINUATION_BIT_MASK: u8 = 0x80;

/// A trait for unsigned integers that can be varint decoded.
pub trait UInt: Copy + From<u8> + Shl<usize, Output = Self> + BitOrAssign<Self> {
    /// Width of the integer in bits.
    const BITS: usize;

    /// Shift at which a varint of this width becomes overlong.
    const SHIFT_LIMIT: usize = Self::BITS.div_ceil(DATA_BITS_PER_BYTE) * DATA_BITS_PER_BYTE;
}

// Implements the `UInt` trait for all unsigned integer types.
macro_rules! impl_uint {
    ($($type:ty),*) => {
        $(
            impl UInt for $type {
                const BITS: usize = <$type>::BITS as usize;
            }
        )*
    };
}
impl_uint!(u8, u16, u32, u64, u128);

/// Decodes an unsigned integer from a varint.
pub fn read<T: UInt>(buf: &mut impl Buf) -> Result<T, Error> {
    let mut result = T::from(0);
    let mut shift = 0;

    loop {
        // The shift never exceeds `BITS - 1` below this limit, so `<<` cannot overflow.
        if shift >= T::SHIFT_LIMIT {
            return Err(Error::InvalidVarint);
        }

        if !buf.has_remaining() {
            return Err(Error::EndOfBuffer);
        }
        let byte = buf.get_u8();

        // Write the 7 bits of data to the result.
        result |= T::from(byte & DATA_BITS_MASK) << shift;

        // If the continuation bit is not set, return.
        if byte & CONTINUATION_BIT_MASK == 0 {
            return Ok(result);
        }

        shift += DATA_BITS_PER_BYTE;
    }
}

/// Decodes a `varuint32`.
#[inline]
pub fn read_varuint32(buf: &mut impl Buf) -> Result<u32, Error> {
    read::<u32>(buf)
}

/// Decodes a `varuint64`.
#[inline]
pub fn read_varuint64(buf: &mut impl Buf) -> Result<u64, Error> {
    read::<u64>(buf)
}

/// Decodes a signed `varint32`.
///
/// The value is carried as a `varuint32` `v`. If the low bit of `v` is set the value is negative
/// and its bits are `(!v >> 1) | 0x8000_0000`; otherwise they are `v >> 1`.
pub fn read_varint32(buf: &mut impl Buf) -> Result<i32, Error> {
    let v = read_varuint32(buf)?;
    let bits = if v & 1 == 1 {
        (!v >> 1) | 0x8000_0000
    } else {
        v >> 1
    };
    Ok(bits as i32)
}

/// A `u32` encoded as a `varuint32` rather than as a fixed-width integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarUint32(pub u32);

/// A `u64` encoded as a `varuint64` rather than as a fixed-width integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarUint64(pub u64);

/// An `i32` encoded as a signed `varint32` rather than as a fixed-width integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarInt32(pub i32);

macro_rules! impl_var {
    ($type:ident, $inner:ty, $read:ident) => {
        impl Read for $type {
            type Cfg = ();

            #[inline]
            fn read_into(&mut self, buf: &mut impl Buf, _: &()) -> Result<(), Error> {
                self.0 = $read(buf)?;
                Ok(())
            }
        }

        impl From<$type> for $inner {
            fn from(value: $type) -> Self {
                value.0
            }
        }

        impl From<$inner> for $type {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}
impl_var!(VarUint32, u32, read_varuint32);
impl_var!(VarUint64, u64, read_varuint64);
impl_var!(VarInt32, i32, read_varint32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{util::tests::varuint, DecodeExt, ReadExt};
    use bytes::Bytes;
    use test_case::test_case;

    #[test_case(0, &[0x00]; "zero")]
    #[test_case(1, &[0x01]; "one")]
    #[test_case(127, &[0x7F]; "largest single byte")]
    #[test_case(128, &[0x80, 0x01]; "smallest two bytes")]
    #[test_case(300, &[0xAC, 0x02]; "three hundred")]
    #[test_case(0x3FFF, &[0xFF, 0x7F]; "largest two bytes")]
    #[test_case(u32::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]; "max")]
    fn test_varuint32_conformity(value: u32, encoded: &[u8]) {
        let mut buf = encoded;
        assert_eq!(read_varuint32(&mut buf).unwrap(), value);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_varuint32_roundtrip() {
        let mut cases = vec![0u32, u32::MAX, u32::MAX - 1];
        for shift in 0..32 {
            cases.push(1 << shift);
            cases.push((1 << shift) - 1);
            cases.push((1u32 << shift).wrapping_add(1));
        }
        for value in cases {
            let encoded = varuint(value as u64);
            let mut buf = &encoded[..];
            assert_eq!(read_varuint32(&mut buf).unwrap(), value);
            assert!(buf.is_empty(), "trailing bytes for {value}");
        }
    }

    #[test]
    fn test_varuint64_roundtrip() {
        let mut cases = vec![0u64, u64::MAX];
        for shift in 0..64 {
            cases.push(1 << shift);
            cases.push((1 << shift) - 1);
        }
        for value in cases {
            let encoded = varuint(value);
            let mut buf = &encoded[..];
            assert_eq!(read_varuint64(&mut buf).unwrap(), value);
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn test_varuint32_overlong() {
        // The 5th byte still has its continuation bit set.
        let mut buf = Bytes::from_static(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]);
        assert!(matches!(read_varuint32(&mut buf), Err(Error::InvalidVarint)));

        // The limit is reached before the 6th byte is read, even if there is none.
        let mut buf = Bytes::from_static(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(matches!(read_varuint32(&mut buf), Err(Error::InvalidVarint)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_varuint64_overlong() {
        let mut buf = Bytes::from_static(&[0xFF; 10]);
        assert!(matches!(read_varuint64(&mut buf), Err(Error::InvalidVarint)));

        // Ten bytes terminated by the last one are fine.
        let mut buf =
            Bytes::from_static(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
        assert_eq!(read_varuint64(&mut buf).unwrap(), u64::MAX);
    }

    #[test]
    fn test_varuint32_discards_excess_bits() {
        // 0x7F in the 5th byte contributes only its low 4 bits.
        let mut buf = &[0xFF, 0xFF, 0xFF, 0xFF, 0x7F][..];
        assert_eq!(read_varuint32(&mut buf).unwrap(), u32::MAX);

        // A varuint64 value that does not fit in 32 bits still decodes as a truncated varuint32.
        let encoded = varuint(1 << 33 | 5);
        assert_eq!(encoded.len(), 5);
        assert_eq!(read_varuint32(&mut &encoded[..]).unwrap(), 5);
    }

    #[test]
    fn test_varint_insufficient_buffer() {
        let mut buf = Bytes::from_static(&[0x80]);
        assert!(matches!(read::<u64>(&mut buf), Err(Error::EndOfBuffer)));

        let mut buf = Bytes::new();
        assert!(matches!(read_varuint32(&mut buf), Err(Error::EndOfBuffer)));
    }

    #[test]
    fn test_small_widths() {
        assert_eq!(read::<u8>(&mut &[0x81, 0x01][..]).unwrap(), 0x81);
        assert!(matches!(
            read::<u8>(&mut &[0x81, 0x81, 0x01][..]),
            Err(Error::InvalidVarint)
        ));
        assert_eq!(read::<u16>(&mut &[0xFF, 0xFF, 0x03][..]).unwrap(), u16::MAX);
    }

    #[test_case(4, 2; "even raw value")]
    #[test_case(5, ((!5u32 >> 1) | 0x8000_0000) as i32; "odd raw value")]
    #[test_case(0, 0; "zero")]
    #[test_case(1, -1; "minus one")]
    #[test_case(3, -2; "minus two")]
    #[test_case(u32::MAX - 1, i32::MAX; "max")]
    #[test_case(u32::MAX, i32::MIN; "min")]
    fn test_varint32(raw: u32, expected: i32) {
        let encoded = varuint(raw as u64);
        let mut buf = &encoded[..];
        assert_eq!(read_varint32(&mut buf).unwrap(), expected);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_varint32_odd_is_negative() {
        assert_eq!(read_varint32(&mut &[0x05][..]).unwrap(), -3);
        for raw in (1u32..10_000).step_by(2) {
            let encoded = varuint(raw as u64);
            assert!(read_varint32(&mut &encoded[..]).unwrap() < 0);
        }
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(VarUint32::read(&mut &[0xAC, 0x02][..]).unwrap(), VarUint32(300));
        assert_eq!(
            VarUint64::decode(&varuint(u64::MAX)[..]).unwrap(),
            VarUint64(u64::MAX)
        );
        assert_eq!(i32::from(VarInt32::decode(&[0x03][..]).unwrap()), -2);
        assert!(matches!(
            VarUint32::decode(&[0x01, 0x00][..]),
            Err(Error::ExtraData(1))
        ));
    }
}
