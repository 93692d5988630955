//! The D-Bus object path type.

use self::validation::validate;
mod validation;

pub use self::object_path::ObjectPath;
mod object_path;

pub use self::object_path_buf::ObjectPathBuf;
mod object_path_buf;

#[cfg(test)]
mod tests;

use crate::buf::{Body, BodyBuf};
use crate::error::{Error, ErrorKind, Result};
use crate::load::Loadable;
use crate::marker::{Basic, Marker};
use crate::signature::{Signature, SignatureBuilder, SignatureError};
use crate::store::Storable;

/// An error constructing an object path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid D-Bus object path")]
#[non_exhaustive]
pub struct ObjectPathError;

impl Marker for ObjectPath {
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::OBJECT_PATH)
    }
}

impl Basic for ObjectPath {}

/// Store an [`ObjectPath`]: the same wire form as a string.
impl Storable for ObjectPath {
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        buf.store_u32(self.len() as u32);
        buf.extend_from_slice_nul(self.as_bytes());
        Ok(())
    }
}

impl Marker for ObjectPathBuf {
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::OBJECT_PATH)
    }
}

impl Basic for ObjectPathBuf {}

impl Storable for ObjectPathBuf {
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        ObjectPath::store_to(self, buf)
    }
}

impl Loadable for ObjectPathBuf {
    #[inline]
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let len = buf.load_u32()? as usize;
        let at = buf.pos();
        let bytes = buf.load_slice_nul(len)?;

        if !validate(bytes) {
            return Err(Error::new(ErrorKind::InvalidObjectPath, at));
        }

        Ok(ObjectPathBuf::from_vec(bytes.to_vec()))
    }
}
