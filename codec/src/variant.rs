//! Tagged unions.
//!
//! A tagged union is a `varuint32` tag followed by the encoding of the alternative at that
//! position in the union's declared order. Each union type provides a dispatch table
//! ([Variant::ALTERNATIVES]) holding one decode function per alternative; the tag indexes that
//! table directly, so a tag outside the table fails with [Error::BadVariantIndex] before any
//! alternative is constructed.
//!
//! Unions may be recursive (for example through a `Vec` of themselves). Each union entered while
//! decoding counts against [MAX_DEPTH](crate::util::MAX_DEPTH), shared with records, and input
//! nested deeper than that fails with [Error::DepthExceeded].
//!
//! # Example
//!
//! ```
//! use binwire_codec::{variant, DecodeExt};
//!
//! variant! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Action {
//!         Transfer(u64),
//!         Memo(String),
//!         Noop(()),
//!     }
//! }
//!
//! let action = Action::decode(&[0x01, 0x02, b'h', b'i'][..]).unwrap();
//! assert_eq!(action, Action::Memo("hi".to_string()));
//! ```

use crate::{util::DepthGuard, varint, Error, Read, ReadExt};
use bytes::Buf;
use tracing::debug;

/// A type-erased buffer, as handed to dispatch functions.
pub type DynBuf<'a> = &'a mut dyn Buf;

/// Decodes one alternative from the buffer and installs it in the destination.
pub type Alternative<V> = fn(&mut V, &mut DynBuf<'_>) -> Result<(), Error>;

/// A tagged union over a fixed, ordered list of alternatives.
pub trait Variant: Sized + 'static {
    /// Decoders for each alternative, in declaration order. The position of an entry is its tag.
    const ALTERNATIVES: &'static [Alternative<Self>];
}

/// Reads a tag and decodes the selected alternative into `dst`.
pub fn read<V: Variant>(dst: &mut V, buf: &mut impl Buf) -> Result<(), Error> {
    let _depth = DepthGuard::enter()?;
    let tag = varint::read_varuint32(buf)?;
    let Some(alternative) = usize::try_from(tag)
        .ok()
        .and_then(|index| V::ALTERNATIVES.get(index))
    else {
        debug!(
            tag,
            alternatives = V::ALTERNATIVES.len(),
            "rejected variant tag"
        );
        return Err(Error::BadVariantIndex(tag));
    };
    let mut buf: DynBuf<'_> = buf;
    alternative(dst, &mut buf)
}

/// Default-constructs an alternative of type `T`, decodes into it, and installs it in `dst` via
/// `wrap`.
///
/// Used to build [Variant::ALTERNATIVES] entries.
pub fn emplace<V, T: Read>(dst: &mut V, buf: &mut impl Buf, wrap: fn(T) -> V) -> Result<(), Error>
where
    T::Cfg: Default,
{
    let value = T::read(buf)?;
    *dst = wrap(value);
    Ok(())
}

/// Declares an enum whose variants each wrap a single type and implements [Variant] and
/// [Read](crate::Read) for it.
///
/// Tags follow declaration order starting at 0. The first alternative (default-constructed) is
/// the enum's [Default].
#[macro_export]
macro_rules! variant {
    (@default $name:ident, $first:ident($first_ty:ty) $(, $alt:ident($ty:ty))*) => {
        $name::$first(<$first_ty as ::core::default::Default>::default())
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$alt_meta:meta])* $alt:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$alt_meta])* $alt($ty), )+
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                $crate::variant!(@default $name, $( $alt($ty) ),+)
            }
        }

        impl $crate::variant::Variant for $name {
            const ALTERNATIVES: &'static [$crate::variant::Alternative<Self>] = &[
                $( |dst, buf| $crate::variant::emplace::<Self, $ty>(dst, buf, $name::$alt), )+
            ];
        }

        impl $crate::Read for $name {
            type Cfg = ();

            fn read_into(
                &mut self,
                buf: &mut impl $crate::bytes::Buf,
                _: &(),
            ) -> ::core::result::Result<(), $crate::Error> {
                $crate::variant::read(self, buf)
            }
        }
    };
}
