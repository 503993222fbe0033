//! Core decode traits

use crate::error::Error;
use bytes::Buf;

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Trait for types that can be read (decoded) from a buffer into an existing value.
///
/// The `Cfg` associated type allows for configuration during the read process. For example, it
/// can be used to limit the maximum length of sequences when decoding untrusted data. Use `()`
/// for types that do not require configuration.
///
/// Destinations are populated in place. If a read fails, the destination holds whatever was
/// decoded before the failure and must be discarded by the caller.
pub trait Read: Default {
    /// Configuration consumed while reading.
    type Cfg: Clone + Send + Sync + 'static;

    /// Whether the type is a fixed-width arithmetic value whose sequences are packed.
    ///
    /// Packed sequences use a wider length prefix on 64-bit targets and are read with a single
    /// bounds check (see [Read::read_seq]).
    const PRIMITIVE: bool = false;

    /// Reads a value from the buffer into `self` using the provided configuration `cfg`,
    /// consuming the necessary bytes.
    fn read_into(&mut self, buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<(), Error>;

    /// Reads a freshly default-constructed value from the buffer.
    ///
    /// (Provided method).
    fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        let mut value = Self::default();
        value.read_into(buf, cfg)?;
        Ok(value)
    }

    /// Replaces the contents of `dst` with `len` values read from the buffer.
    ///
    /// The provided implementation decodes each element in order and stops at the first failure.
    /// Every element must consume at least one byte, so a sequence of zero-width elements (such
    /// as `()`) must be empty. Primitives override it to read the whole region at once.
    fn read_seq(
        dst: &mut Vec<Self>,
        len: usize,
        buf: &mut impl Buf,
        cfg: &Self::Cfg,
    ) -> Result<(), Error> {
        dst.clear();

        // The declared length is untrusted: reserve no more memory than the remaining input.
        let fits = buf.remaining() / std::mem::size_of::<Self>().max(1);
        dst.reserve_exact(len.min(fits));
        for _ in 0..len {
            let before = buf.remaining();
            let mut item = Self::default();
            item.read_into(buf, cfg)?;
            if buf.remaining() == before {
                return Err(Error::Invalid("Vec", "zero-width element"));
            }
            dst.push(item);
        }
        Ok(())
    }
}

/// Extension trait providing ergonomic read methods for types whose configuration has a default.
pub trait ReadExt: Read {
    /// Reads a value using the default config.
    fn read(buf: &mut impl Buf) -> Result<Self, Error>;

    /// Reads into `self` using the default config.
    fn read_from(&mut self, buf: &mut impl Buf) -> Result<(), Error>;
}

// Automatically implement `ReadExt` for types whose config can be defaulted.
impl<T: Read> ReadExt for T
where
    T::Cfg: Default,
{
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Self::read_cfg(buf, &Default::default())
    }

    fn read_from(&mut self, buf: &mut impl Buf) -> Result<(), Error> {
        self.read_into(buf, &Default::default())
    }
}

/// Trait for types that can be decoded from a buffer, ensuring the entire buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode_cfg(mut buf: impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        let result = Self::read_cfg(&mut buf, cfg)?;

        // Check that the buffer is fully consumed.
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }

        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Extension trait providing an ergonomic decode method for types whose configuration has a
/// default.
pub trait DecodeExt: Decode {
    /// Decodes a value using the default config.
    fn decode(buf: impl Buf) -> Result<Self, Error>;
}

// Automatically implement `DecodeExt` for types whose config can be defaulted.
impl<T: Decode> DecodeExt for T
where
    T::Cfg: Default,
{
    fn decode(buf: impl Buf) -> Result<Self, Error> {
        Self::decode_cfg(buf, &Default::default())
    }
}

/// Decodes `value` from `buf`, advancing `buf` past its encoding.
///
/// This is the single entry point for every supported shape: primitives, text, sequences,
/// optionals, tuples, variants, and records.
pub fn decode<T: Read>(value: &mut T, buf: &mut impl Buf) -> Result<(), Error>
where
    T::Cfg: Default,
{
    value.read_into(buf, &Default::default())
}

/// Decodes `value` from `buf` with an explicit configuration.
pub fn decode_cfg<T: Read>(value: &mut T, buf: &mut impl Buf, cfg: &T::Cfg) -> Result<(), Error> {
    value.read_into(buf, cfg)
}
