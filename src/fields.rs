//! Aggregate records as D-Bus structs, implemented for tuples.

use crate::buf::{Body, BodyBuf};
use crate::error::Result;
use crate::load::Loadable;
use crate::marker::Marker;
use crate::signature::{SignatureBuilder, SignatureError};
use crate::store::Storable;

macro_rules! tuple_fields {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first, $($rest),*> Marker for ($first, $($rest,)*)
        where
            $first: Marker,
            $($rest: Marker,)*
        {
            const ALIGNMENT: usize = 8;

            #[inline]
            fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
                builder.open_struct()?;
                <$first>::write_signature(builder)?;
                $(<$rest>::write_signature(builder)?;)*
                builder.close_struct()
            }
        }

        /// Store a tuple as a struct: aligned to 8, fields in declaration
        /// order, no trailing padding.
        impl<$first, $($rest),*> Storable for ($first, $($rest,)*)
        where
            $first: Storable,
            $($rest: Storable,)*
        {
            #[inline]
            fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
                #[allow(non_snake_case)]
                let ($first, $($rest,)*) = self;
                buf.align(8);
                $first.store_to(buf)?;
                $($rest.store_to(buf)?;)*
                Ok(())
            }
        }

        impl<$first, $($rest),*> Loadable for ($first, $($rest,)*)
        where
            $first: Loadable,
            $($rest: Loadable,)*
        {
            #[inline]
            fn load_from(buf: &mut Body<'_>) -> Result<Self> {
                buf.align(8)?;
                Ok((<$first>::load_from(buf)?, $(<$rest>::load_from(buf)?,)*))
            }
        }
    }
}

repeat!(tuple_fields);
