use std::mem::size_of;

use crate::buf::{Body, BodyBuf};
use crate::error::Result;
use crate::load::Loadable;
use crate::marker::{Basic, Marker};
use crate::proto::Endianness;
use crate::signature::{Signature, SignatureBuilder, SignatureError};
use crate::store::Storable;

macro_rules! impl_number {
    ($($ty:ty, $signature:ident),* $(,)?) => {
        $(
            impl Marker for $ty {
                const ALIGNMENT: usize = size_of::<$ty>();

                #[inline]
                fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
                    builder.extend_from_signature(Signature::$signature)
                }
            }

            impl Basic for $ty {}

            impl Storable for $ty {
                #[inline]
                fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
                    buf.align(Self::ALIGNMENT);

                    let bytes = match buf.endianness() {
                        Endianness::BIG => self.to_be_bytes(),
                        _ => self.to_le_bytes(),
                    };

                    buf.extend_from_slice(&bytes);
                    Ok(())
                }
            }

            impl Loadable for $ty {
                #[inline]
                fn load_from(buf: &mut Body<'_>) -> Result<Self> {
                    buf.align(Self::ALIGNMENT)?;
                    let bytes = buf.load_array::<{ size_of::<$ty>() }>()?;

                    Ok(match buf.endianness() {
                        Endianness::BIG => <$ty>::from_be_bytes(bytes),
                        _ => <$ty>::from_le_bytes(bytes),
                    })
                }
            }
        )*
    }
}

impl_number!(u8, BYTE, i16, INT16, u16, UINT16, i32, INT32, u32, UINT32);
impl_number!(i64, INT64, u64, UINT64, f64, DOUBLE);

impl Marker for bool {
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::BOOLEAN)
    }
}

impl Basic for bool {}

/// Store a boolean as a 32-bit 0 or 1.
impl Storable for bool {
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        u32::from(*self).store_to(buf)
    }
}

impl Loadable for bool {
    #[inline]
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        Ok(u32::load_from(buf)? != 0)
    }
}
