use crate::buf::Body;
use crate::error::Result;
use crate::marker::Marker;

/// A value which can be loaded from a body.
///
/// Loading aligns the cursor to [`Marker::ALIGNMENT`], verifying that the
/// skipped padding bytes are zero, and consumes the wire representation. On
/// success the cursor has advanced past the last byte of the value; on
/// failure its position is unspecified.
///
/// # Examples
///
/// ```
/// use dbus_codec::read_dbus_binary;
///
/// let value: u16 = read_dbus_binary(&[0x34, 0x12])?;
/// assert_eq!(value, 0x1234);
/// # Ok::<_, dbus_codec::Error>(())
/// ```
pub trait Loadable: Marker + Sized {
    /// Load a value of this type from `buf`.
    fn load_from(buf: &mut Body<'_>) -> Result<Self>;
}
