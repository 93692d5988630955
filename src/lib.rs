//! A codec for the [D-Bus wire format].
//!
//! This crate maps values of statically known shape to and from the
//! marshalled byte layout used by D-Bus message bodies, and derives the
//! corresponding [`Signature`] strings. It deliberately does not speak to a
//! bus: there is no transport, no authentication, and no message header
//! handling here. The codec operates over in-memory byte buffers which a
//! higher layer is free to frame however it wants.
//!
//! Values are written with [`write_dbus_binary`] and read back with
//! [`read_dbus_binary`]. Both operate in little-endian byte order, the
//! default body encoding declared by this crate; big-endian buffers can be
//! produced and consumed through [`BodyBuf::with_endianness`] and
//! [`Body::with_endianness`].
//!
//! [D-Bus wire format]: https://dbus.freedesktop.org/doc/dbus-specification.html#message-protocol-marshaling
//!
//! # Examples
//!
//! ```
//! use dbus_codec::{read_dbus_binary, signature_of, write_dbus_binary};
//!
//! let value = (10u8, "Hello World!".to_string(), vec![1u32, 2, 3]);
//!
//! assert_eq!(signature_of::<(u8, String, Vec<u32>)>()?, "(ysau)");
//!
//! let mut buf = Vec::new();
//! write_dbus_binary(&value, &mut buf)?;
//!
//! let back: (u8, String, Vec<u32>) = read_dbus_binary(&buf)?;
//! assert_eq!(back, value);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
mod macros;

#[doc(inline)]
pub use self::error::{Error, ErrorKind, Result};
mod error;

#[doc(inline)]
pub use self::proto::Endianness;
mod proto;

#[doc(inline)]
pub use self::marker::{Basic, Marker};
mod marker;

#[doc(inline)]
pub use self::store::Storable;
mod store;

#[doc(inline)]
pub use self::load::Loadable;
mod load;

pub use self::buf::{Body, BodyBuf};
pub mod buf;

#[doc(inline)]
pub use self::signature::{Signature, SignatureBuf, SignatureBuilder, SignatureError, Token};
pub mod signature;

#[doc(inline)]
pub use self::object_path::{ObjectPath, ObjectPathBuf, ObjectPathError};
mod object_path;

mod frame;

mod text;

mod collections;

mod fields;

#[doc(inline)]
pub use self::variant::Variant;
mod variant;

#[cfg(test)]
mod tests;

/// Append a value to the given buffer in the D-Bus wire format.
///
/// The buffer is treated as an append-only sink: alignment is computed
/// relative to the length the buffer has when this is called, so values can
/// be written after an existing prefix, such as a message header, and still
/// come out correctly aligned.
///
/// The output is little-endian. Use [`BodyBuf::with_endianness`] for the
/// big-endian variant.
///
/// # Examples
///
/// ```
/// use dbus_codec::write_dbus_binary;
///
/// let mut buf = Vec::new();
/// write_dbus_binary(&10u16, &mut buf)?;
/// write_dbus_binary(&10u32, &mut buf)?;
///
/// assert_eq!(buf, [10, 0, 0, 0, 10, 0, 0, 0]);
/// # Ok::<_, dbus_codec::Error>(())
/// ```
pub fn write_dbus_binary<T>(value: &T, buf: &mut Vec<u8>) -> Result<()>
where
    T: ?Sized + Storable,
{
    let mut buf = BodyBuf::new(buf);
    value.store_to(&mut buf)
}

/// Read a value in the D-Bus wire format from the start of the given buffer.
///
/// Trailing bytes after the value are not an error. To read from a non-zero
/// offset, construct a [`Body`] and [`advance`] it first; alignment remains
/// relative to the start of the buffer.
///
/// The input is interpreted as little-endian. Use [`Body::with_endianness`]
/// for the big-endian variant.
///
/// [`advance`]: Body::advance
///
/// # Examples
///
/// ```
/// use dbus_codec::read_dbus_binary;
///
/// let buf = [17, 0, 0, 0, b't', b'h', b'i', b's', b' ', b'i', b's', b' ',
///     b'a', b' ', b'm', b'e', b's', b's', b'a', b'g', b'e', 0];
///
/// let value: String = read_dbus_binary(&buf)?;
/// assert_eq!(value, "this is a message");
/// # Ok::<_, dbus_codec::Error>(())
/// ```
pub fn read_dbus_binary<T>(buf: &[u8]) -> Result<T>
where
    T: Loadable,
{
    let mut buf = Body::new(buf);
    T::load_from(&mut buf)
}

/// Derive the D-Bus signature of the type `T`.
///
/// # Examples
///
/// ```
/// use dbus_codec::signature_of;
///
/// assert_eq!(signature_of::<u32>()?, "u");
/// assert_eq!(signature_of::<Vec<(String, u64)>>()?, "a(st)");
/// # Ok::<_, dbus_codec::SignatureError>(())
/// ```
pub fn signature_of<T>() -> Result<SignatureBuf, SignatureError>
where
    T: ?Sized + Marker,
{
    let mut builder = SignatureBuilder::new();
    T::write_signature(&mut builder)?;
    builder.finish()
}
