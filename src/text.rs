use std::str::from_utf8;

use crate::buf::{Body, BodyBuf, MAX_STRING_LENGTH};
use crate::error::{Error, ErrorKind, Result};
use crate::load::Loadable;
use crate::marker::{Basic, Marker};
use crate::signature::{Signature, SignatureBuilder, SignatureError};
use crate::store::Storable;

impl Marker for str {
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::STRING)
    }
}

impl Basic for str {}

/// Store a string: a 32-bit length, the bytes, and a NUL terminator.
///
/// # Examples
///
/// ```
/// use dbus_codec::write_dbus_binary;
///
/// let mut buf = Vec::new();
/// write_dbus_binary("foo", &mut buf)?;
///
/// assert_eq!(buf, [3, 0, 0, 0, 102, 111, 111, 0]);
/// # Ok::<_, dbus_codec::Error>(())
/// ```
impl Storable for str {
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        if self.len() as u64 > MAX_STRING_LENGTH {
            return Err(Error::new(ErrorKind::StringTooLong(self.len()), buf.len()));
        }

        if self.as_bytes().contains(&0) {
            return Err(Error::new(ErrorKind::EmbeddedNul, buf.len()));
        }

        buf.store_u32(self.len() as u32);
        buf.extend_from_slice_nul(self.as_bytes());
        Ok(())
    }
}

impl Marker for String {
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::STRING)
    }
}

impl Basic for String {}

impl Storable for String {
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        self.as_str().store_to(buf)
    }
}

impl Loadable for String {
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let len = buf.load_u32()? as usize;
        let at = buf.pos();
        let bytes = buf.load_slice_nul(len)?;

        if bytes.contains(&0) {
            return Err(Error::new(ErrorKind::EmbeddedNul, at));
        }

        let string = from_utf8(bytes).map_err(|error| Error::new(error.into(), at))?;
        Ok(string.to_owned())
    }
}
