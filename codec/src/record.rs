//! Aggregate (record) types.
//!
//! A record is the concatenation of its fields' encodings in declared order, with no field tags.
//! The engine does not discover fields on its own: each record type supplies an ordered list of
//! [Field] descriptors, either through [Record::FIELDS] or by handing a list to [read_with] on each
//! call. The order of that list must match the order in which the encoder emitted the fields.
//!
//! Fields are decoded in place. When a field fails, decoding stops: earlier fields keep their
//! decoded values, later fields are left untouched, and the error is returned unchanged.
//!
//! Each record entered counts one level against [MAX_DEPTH](crate::util::MAX_DEPTH).
//!
//! # Example
//!
//! ```
//! use binwire_codec::{record, DecodeExt};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Transfer {
//!     amount: u64,
//!     memo: String,
//! }
//!
//! record!(Transfer { amount, memo });
//!
//! let transfer = Transfer::decode(&[0x05, 0, 0, 0, 0, 0, 0, 0, 0x02, b'h', b'i'][..]).unwrap();
//! assert_eq!(transfer, Transfer { amount: 5, memo: "hi".to_string() });
//! ```

use crate::{util::DepthGuard, variant::DynBuf, Error, Read, ReadExt};
use bytes::Buf;
use tracing::trace;

/// Decodes one field of `T` from the buffer into the destination record.
pub type FieldFn<T> = fn(&mut T, &mut DynBuf<'_>) -> Result<(), Error>;

/// Describes one field of a record: its name and how to decode into it.
pub struct Field<T> {
    /// Name of the field, used for diagnostics.
    pub name: &'static str,

    /// Decodes the field into a record.
    pub read: FieldFn<T>,
}

impl<T> Field<T> {
    /// Creates a new field descriptor.
    pub const fn new(name: &'static str, read: FieldFn<T>) -> Self {
        Self { name, read }
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// A record type with a registered, ordered list of fields.
pub trait Record: Sized + 'static {
    /// The fields of the record, in encoding order.
    const FIELDS: &'static [Field<Self>];
}

/// Decodes every field of `dst` using its registered field list.
pub fn read<T: Record>(dst: &mut T, buf: &mut impl Buf) -> Result<(), Error> {
    read_with(dst, T::FIELDS, buf)
}

/// Decodes the fields of `dst` using the provided field list.
pub fn read_with<T>(dst: &mut T, fields: &[Field<T>], buf: &mut impl Buf) -> Result<(), Error> {
    let _depth = DepthGuard::enter()?;
    let mut buf: DynBuf<'_> = buf;
    for field in fields {
        if let Err(err) = (field.read)(dst, &mut buf) {
            trace!(field = field.name, ?err, "failed to decode field");
            return Err(err);
        }
    }
    Ok(())
}

/// Decodes a single field value in place using its default configuration.
///
/// Used to build [Field] descriptors.
pub fn field<F: Read>(value: &mut F, buf: &mut impl Buf) -> Result<(), Error>
where
    F::Cfg: Default,
{
    value.read_from(buf)
}

/// Implements [Record] and [Read](crate::Read) for a struct from the ordered list of its field
/// names.
///
/// The struct must implement [Default] and every listed field must implement
/// [Read](crate::Read) with a configuration that implements [Default].
#[macro_export]
macro_rules! record {
    ($type:ty { $($field:ident),* $(,)? }) => {
        impl $crate::record::Record for $type {
            const FIELDS: &'static [$crate::record::Field<Self>] = &[
                $(
                    $crate::record::Field::new(
                        ::core::stringify!($field),
                        |dst: &mut Self, buf| $crate::record::field(&mut dst.$field, buf),
                    ),
                )*
            ];
        }

        impl $crate::Read for $type {
            type Cfg = ();

            fn read_into(
                &mut self,
                buf: &mut impl $crate::bytes::Buf,
                _: &(),
            ) -> ::core::result::Result<(), $crate::Error> {
                $crate::record::read(self, buf)
            }
        }
    };
}
