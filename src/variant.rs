use crate::buf::{Body, BodyBuf};
use crate::error::{Error, ErrorKind, Result};
use crate::load::Loadable;
use crate::marker::Marker;
use crate::object_path::ObjectPathBuf;
use crate::proto::Type;
use crate::signature::{
    Signature, SignatureBuf, SignatureBuilder, SignatureError, SignatureErrorKind, Token,
};
use crate::store::Storable;

/// A dynamically typed D-Bus value.
///
/// On the wire a variant carries its own signature followed by the value the
/// signature describes. Arrays and dict arrays keep their element signatures
/// explicitly so that empty containers round-trip with their type intact.
///
/// # Examples
///
/// ```
/// use dbus_codec::{read_dbus_binary, write_dbus_binary, Variant};
///
/// let value = Variant::String(String::from("foo"));
///
/// let mut buf = Vec::new();
/// write_dbus_binary(&value, &mut buf)?;
///
/// assert_eq!(buf, [1, b's', 0, 0, 3, 0, 0, 0, b'f', b'o', b'o', 0]);
/// assert_eq!(read_dbus_binary::<Variant>(&buf)?, value);
/// # Ok::<_, dbus_codec::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    /// An unsigned 8-bit integer.
    Byte(u8),
    /// A boolean.
    Bool(bool),
    /// A signed 16-bit integer.
    Int16(i16),
    /// An unsigned 16-bit integer.
    Uint16(u16),
    /// A signed 32-bit integer.
    Int32(i32),
    /// An unsigned 32-bit integer.
    Uint32(u32),
    /// A signed 64-bit integer.
    Int64(i64),
    /// An unsigned 64-bit integer.
    Uint64(u64),
    /// A double-precision floating point number.
    Double(f64),
    /// A string.
    String(String),
    /// An object path.
    ObjectPath(ObjectPathBuf),
    /// A signature.
    Signature(SignatureBuf),
    /// An array holding the element signature and the elements.
    Array(SignatureBuf, Vec<Variant>),
    /// A struct over the given fields.
    Struct(Vec<Variant>),
    /// A dict entry; only valid directly inside an array.
    DictEntry(Box<Variant>, Box<Variant>),
    /// A nested variant.
    Variant(Box<Variant>),
}

impl Variant {
    /// The D-Bus signature describing the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_codec::{SignatureBuf, Variant};
    ///
    /// let value = Variant::Struct(vec![
    ///     Variant::Uint32(42),
    ///     Variant::String(String::from("foo")),
    /// ]);
    ///
    /// assert_eq!(value.signature()?, "(us)");
    /// # Ok::<_, dbus_codec::SignatureError>(())
    /// ```
    pub fn signature(&self) -> Result<SignatureBuf, SignatureError> {
        let mut builder = SignatureBuilder::new();
        self.write_signature_dyn(&mut builder)?;
        builder.finish()
    }

    fn write_signature_dyn(&self, builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        match self {
            Variant::Byte(..) => builder.extend_from_signature(Signature::BYTE),
            Variant::Bool(..) => builder.extend_from_signature(Signature::BOOLEAN),
            Variant::Int16(..) => builder.extend_from_signature(Signature::INT16),
            Variant::Uint16(..) => builder.extend_from_signature(Signature::UINT16),
            Variant::Int32(..) => builder.extend_from_signature(Signature::INT32),
            Variant::Uint32(..) => builder.extend_from_signature(Signature::UINT32),
            Variant::Int64(..) => builder.extend_from_signature(Signature::INT64),
            Variant::Uint64(..) => builder.extend_from_signature(Signature::UINT64),
            Variant::Double(..) => builder.extend_from_signature(Signature::DOUBLE),
            Variant::String(..) => builder.extend_from_signature(Signature::STRING),
            Variant::ObjectPath(..) => builder.extend_from_signature(Signature::OBJECT_PATH),
            Variant::Signature(..) => builder.extend_from_signature(Signature::SIGNATURE),
            Variant::Array(element, ..) => {
                builder.open_array()?;
                builder.extend_from_signature(element.as_ref())?;
                builder.close_array();
                Ok(())
            }
            Variant::Struct(fields) => {
                builder.open_struct()?;

                for field in fields {
                    field.write_signature_dyn(builder)?;
                }

                builder.close_struct()
            }
            Variant::DictEntry(key, value) => {
                builder.open_dict()?;
                key.write_signature_dyn(builder)?;
                value.write_signature_dyn(builder)?;
                builder.close_dict()
            }
            Variant::Variant(..) => builder.extend_from_signature(Signature::VARIANT),
        }
    }

    /// Test if the value's signature matches the expected one.
    fn matches_signature(&self, expected: &Signature) -> bool {
        let mut builder = SignatureBuilder::new();

        if self.write_signature_dyn(&mut builder).is_err() {
            return false;
        }

        builder.as_bytes() == expected.as_bytes()
    }

    /// Store the value itself, without the leading signature.
    fn store_payload(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        match self {
            Variant::Byte(value) => value.store_to(buf),
            Variant::Bool(value) => value.store_to(buf),
            Variant::Int16(value) => value.store_to(buf),
            Variant::Uint16(value) => value.store_to(buf),
            Variant::Int32(value) => value.store_to(buf),
            Variant::Uint32(value) => value.store_to(buf),
            Variant::Int64(value) => value.store_to(buf),
            Variant::Uint64(value) => value.store_to(buf),
            Variant::Double(value) => value.store_to(buf),
            Variant::String(value) => value.store_to(buf),
            Variant::ObjectPath(value) => value.store_to(buf),
            Variant::Signature(value) => value.store_to(buf),
            Variant::Array(element, items) => {
                let mut array = buf.write_array(element.alignment());

                for item in items {
                    if !item.matches_signature(element) {
                        let at = array.buf().len();
                        return Err(Error::new(ErrorKind::UnsupportedShape, at));
                    }

                    item.store_payload(array.buf())?;
                }

                array.finish()
            }
            Variant::Struct(fields) => {
                buf.align(8);

                for field in fields {
                    field.store_payload(buf)?;
                }

                Ok(())
            }
            Variant::DictEntry(key, value) => {
                buf.align(8);
                key.store_payload(buf)?;
                value.store_payload(buf)?;
                Ok(())
            }
            Variant::Variant(value) => value.store_to(buf),
        }
    }
}

impl Marker for Variant {
    const ALIGNMENT: usize = 1;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        builder.extend_from_signature(Signature::VARIANT)
    }
}

/// Store a variant: the value's own signature followed by the value.
impl Storable for Variant {
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        if matches!(self, Variant::DictEntry(..)) {
            return Err(Error::new(ErrorKind::UnsupportedShape, buf.len()));
        }

        let signature = self
            .signature()
            .map_err(|error| Error::new(error.into(), buf.len()))?;

        signature.store_to(buf)?;
        self.store_payload(buf)
    }
}

impl Loadable for Variant {
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let at = buf.pos();
        let signature = SignatureBuf::load_from(buf)?;

        let mut it = signature.iter();

        let Some(token) = it.next() else {
            return Err(not_single_complete_type(at));
        };

        if it.next().is_some() {
            return Err(not_single_complete_type(at));
        }

        load_token(token, buf)
    }
}

fn not_single_complete_type(at: usize) -> Error {
    let error = SignatureError::new(SignatureErrorKind::NotSingleCompleteType);
    Error::new(error.into(), at)
}

/// Load one value described by the given signature token.
fn load_token(token: Token<'_>, buf: &mut Body<'_>) -> Result<Variant> {
    match token {
        Token::Basic(signature) => load_basic(signature, buf),
        Token::Array(element) => {
            let end = buf.load_array_end(element.alignment())?;

            let Some(token) = element.iter().next() else {
                return Err(not_single_complete_type(buf.pos()));
            };

            let mut items = Vec::new();

            while buf.pos() < end {
                items.push(load_token(token, buf)?);

                if buf.pos() > end {
                    return Err(Error::new(ErrorKind::ArrayLengthMismatch, buf.pos()));
                }
            }

            Ok(Variant::Array(element.to_owned(), items))
        }
        Token::Struct(fields) => {
            buf.align(8)?;

            let mut items = Vec::new();

            for token in fields.iter() {
                items.push(load_token(token, buf)?);
            }

            Ok(Variant::Struct(items))
        }
        Token::Dict(key, value) => {
            buf.align(8)?;

            let Some(key) = key.iter().next() else {
                return Err(not_single_complete_type(buf.pos()));
            };

            let Some(value) = value.iter().next() else {
                return Err(not_single_complete_type(buf.pos()));
            };

            let key = load_token(key, buf)?;
            let value = load_token(value, buf)?;
            Ok(Variant::DictEntry(Box::new(key), Box::new(value)))
        }
    }
}

fn load_basic(signature: &Signature, buf: &mut Body<'_>) -> Result<Variant> {
    let Some(&code) = signature.as_bytes().first() else {
        return Err(not_single_complete_type(buf.pos()));
    };

    match Type::new(code) {
        Type::BYTE => Ok(Variant::Byte(u8::load_from(buf)?)),
        Type::BOOLEAN => Ok(Variant::Bool(bool::load_from(buf)?)),
        Type::INT16 => Ok(Variant::Int16(i16::load_from(buf)?)),
        Type::UINT16 => Ok(Variant::Uint16(u16::load_from(buf)?)),
        Type::INT32 => Ok(Variant::Int32(i32::load_from(buf)?)),
        Type::UINT32 => Ok(Variant::Uint32(u32::load_from(buf)?)),
        Type::INT64 => Ok(Variant::Int64(i64::load_from(buf)?)),
        Type::UINT64 => Ok(Variant::Uint64(u64::load_from(buf)?)),
        Type::DOUBLE => Ok(Variant::Double(f64::load_from(buf)?)),
        Type::STRING => Ok(Variant::String(String::load_from(buf)?)),
        Type::OBJECT_PATH => Ok(Variant::ObjectPath(ObjectPathBuf::load_from(buf)?)),
        Type::SIGNATURE => Ok(Variant::Signature(SignatureBuf::load_from(buf)?)),
        Type::VARIANT => Ok(Variant::Variant(Box::new(Variant::load_from(buf)?))),
        _ => Err(Error::new(ErrorKind::UnsupportedShape, buf.pos())),
    }
}
