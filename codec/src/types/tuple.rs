//! Read implementation for tuples.
//!
//! A tuple is the encoding of each component back to back, with no tag. A pair `(A, B)` is the
//! two-element case. Each component is configured independently, so the configuration of a tuple
//! is the tuple of its components' configurations.

use crate::{Error, Read};
use bytes::Buf;
use paste::paste;

macro_rules! impl_read_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                type Cfg = ( $( [<T $index>]::Cfg, )* );

                #[inline]
                fn read_into(&mut self, buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<(), Error> {
                    $( self.$index.read_into(buf, &cfg.$index)?; )*
                    Ok(())
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_read_for_tuple!(0);
impl_read_for_tuple!(0, 1);
impl_read_for_tuple!(0, 1, 2);
impl_read_for_tuple!(0, 1, 2, 3);
impl_read_for_tuple!(0, 1, 2, 3, 4);
impl_read_for_tuple!(0, 1, 2, 3, 4, 5);
impl_read_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_read_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_read_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_read_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_read_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_read_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
