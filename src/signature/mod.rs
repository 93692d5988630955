//! The D-Bus signature grammar: parsing, validation and composition.

#[cfg(test)]
mod tests;

pub use self::iter::{Iter, Token};
mod iter;

use self::validation::validate;
mod validation;

pub use self::signature::Signature;
mod signature;

pub use self::signature_buf::SignatureBuf;
mod signature_buf;

pub use self::signature_builder::SignatureBuilder;
mod signature_builder;

pub use self::signature_error::SignatureError;
pub(crate) use self::signature_error::SignatureErrorKind;
mod signature_error;

use crate::buf::{Body, BodyBuf};
use crate::error::{Error, Result};
use crate::load::Loadable;
use crate::marker::{Basic, Marker};
use crate::store::Storable;

/// The size of the inline storage backing an owned signature.
pub(crate) const MAX_SIGNATURE: usize = 256;

/// The maximum depth of containers of one kind.
pub(crate) const MAX_CONTAINER_DEPTH: usize = 32;

/// The maximum total depth of nested containers.
pub(crate) const MAX_DEPTH: usize = MAX_CONTAINER_DEPTH * 2;

impl Marker for Signature {
    const ALIGNMENT: usize = 1;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::SIGNATURE)
    }
}

impl Basic for Signature {}

/// Store a [`Signature`]: a one-byte length, the signature bytes, and a NUL
/// terminator, with no alignment.
impl Storable for Signature {
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        buf.extend_from_slice(&[self.len() as u8]);
        buf.extend_from_slice_nul(self.as_bytes());
        Ok(())
    }
}

impl Marker for SignatureBuf {
    const ALIGNMENT: usize = 1;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::SIGNATURE)
    }
}

impl Basic for SignatureBuf {}

impl Storable for SignatureBuf {
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        Signature::store_to(self, buf)
    }
}

impl Loadable for SignatureBuf {
    #[inline]
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let at = buf.pos();
        let len = buf.load_u8()? as usize;
        let bytes = buf.load_slice_nul(len)?;
        SignatureBuf::new(bytes).map_err(|error| Error::new(error.into(), at))
    }
}
