use crate::buf::BodyBuf;
use crate::error::Result;
use crate::marker::Marker;

/// A value which can be stored into a body buffer.
///
/// Storing a value aligns the buffer to [`Marker::ALIGNMENT`] and appends
/// the wire representation. The buffer is append-only; a failed store may
/// leave a partial value behind and the buffer should be discarded.
///
/// # Examples
///
/// ```
/// use dbus_codec::write_dbus_binary;
///
/// let mut buf = Vec::new();
/// write_dbus_binary(&true, &mut buf)?;
///
/// assert_eq!(buf, [1, 0, 0, 0]);
/// # Ok::<_, dbus_codec::Error>(())
/// ```
pub trait Storable: Marker {
    /// Store `self` into `buf`.
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()>;
}

impl<T> Storable for &T
where
    T: ?Sized + Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        (**self).store_to(buf)
    }
}
