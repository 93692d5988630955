use std::fmt;
use std::str::from_utf8_unchecked;

use crate::proto::Type;

use super::{validate, Iter, SignatureBuf, SignatureError};

/// A validated D-Bus signature.
///
/// This is the borrowed form; [`SignatureBuf`] is the owned variant which
/// dereferences to it. A signature is a sequence of single complete types
/// and is at most 255 bytes long.
///
/// # Examples
///
/// ```
/// use dbus_codec::Signature;
///
/// const SIG: &Signature = Signature::new_const(b"a(st)");
///
/// assert!(Signature::new(b"aai").is_ok());
/// assert!(Signature::new(b"a").is_err());
/// ```
#[derive(Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Signature([u8]);

impl Signature {
    /// The empty signature.
    pub const EMPTY: &'static Signature = Signature::new_const(b"");

    /// Unsigned 8-bit integer.
    pub const BYTE: &'static Signature = Signature::new_const(b"y");

    /// Boolean, encoded as a 32-bit 0 or 1.
    pub const BOOLEAN: &'static Signature = Signature::new_const(b"b");

    /// Signed (two's complement) 16-bit integer.
    pub const INT16: &'static Signature = Signature::new_const(b"n");

    /// Unsigned 16-bit integer.
    pub const UINT16: &'static Signature = Signature::new_const(b"q");

    /// Signed (two's complement) 32-bit integer.
    pub const INT32: &'static Signature = Signature::new_const(b"i");

    /// Unsigned 32-bit integer.
    pub const UINT32: &'static Signature = Signature::new_const(b"u");

    /// Signed (two's complement) 64-bit integer.
    pub const INT64: &'static Signature = Signature::new_const(b"x");

    /// Unsigned 64-bit integer.
    pub const UINT64: &'static Signature = Signature::new_const(b"t");

    /// IEEE 754 double-precision floating point.
    pub const DOUBLE: &'static Signature = Signature::new_const(b"d");

    /// UTF-8 string.
    pub const STRING: &'static Signature = Signature::new_const(b"s");

    /// Object path.
    pub const OBJECT_PATH: &'static Signature = Signature::new_const(b"o");

    /// Signature.
    pub const SIGNATURE: &'static Signature = Signature::new_const(b"g");

    /// Variant.
    pub const VARIANT: &'static Signature = Signature::new_const(b"v");

    /// Unsigned 32-bit index into an out-of-band array of file descriptors.
    ///
    /// Acknowledged by the signature grammar only; the codec does not map
    /// values to or from this type.
    pub const UNIX_FD: &'static Signature = Signature::new_const(b"h");

    /// Construct a new signature with validation inside of a constant
    /// context.
    ///
    /// This will panic in case the signature is invalid.
    ///
    /// ```compile_fail
    /// use dbus_codec::Signature;
    ///
    /// const BAD: &Signature = Signature::new_const(b"(a)");
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_codec::Signature;
    ///
    /// const SIG: &Signature = Signature::new_const(b"i(ai)");
    /// ```
    #[inline]
    #[track_caller]
    pub const fn new_const(signature: &[u8]) -> &Signature {
        if validate(signature).is_err() {
            panic!("Invalid D-Bus signature")
        };

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Self::new_unchecked(signature) }
    }

    /// Try to construct a new signature with validation.
    ///
    /// # Errors
    ///
    /// Errors if the signature does not satisfy the grammar in the D-Bus
    /// specification.
    #[inline]
    pub const fn new(signature: &[u8]) -> Result<&Signature, SignatureError> {
        if let Err(error) = validate(signature) {
            return Err(error);
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Ok(Self::new_unchecked(signature)) }
    }

    /// Construct a new signature without validation. The caller is
    /// responsible for ensuring that the signature is valid.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the signature is a valid signature.
    #[inline]
    pub(crate) const unsafe fn new_unchecked(signature: &[u8]) -> &Self {
        &*(signature as *const _ as *const Signature)
    }

    /// Test if the signature is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The length of the signature in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the signature as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: Validation ensures that the signature is ASCII.
        unsafe { from_utf8_unchecked(&self.0) }
    }

    /// Get the signature as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Iterate over the single complete types of the signature.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_codec::{Signature, Token};
    ///
    /// let signature = Signature::new(b"ua(st)")?;
    /// let mut it = signature.iter();
    ///
    /// assert_eq!(it.next(), Some(Token::Basic(Signature::UINT32)));
    ///
    /// let Some(Token::Array(element)) = it.next() else {
    ///     panic!("expected array");
    /// };
    ///
    /// assert_eq!(element, "(st)");
    /// assert_eq!(it.next(), None);
    /// # Ok::<_, dbus_codec::SignatureError>(())
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// The wire alignment of the leading complete type.
    ///
    /// The empty signature has alignment 1.
    pub fn alignment(&self) -> usize {
        let Some(&first) = self.0.first() else {
            return 1;
        };

        match Type::new(first) {
            Type::INT16 | Type::UINT16 => 2,
            Type::BOOLEAN
            | Type::INT32
            | Type::UINT32
            | Type::STRING
            | Type::OBJECT_PATH
            | Type::UNIX_FD
            | Type::ARRAY => 4,
            Type::INT64 | Type::UINT64 | Type::DOUBLE | Type::OPEN_PAREN | Type::OPEN_BRACE => 8,
            _ => 1,
        }
    }
}

impl fmt::Debug for Signature {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signature").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Signature {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<Signature> for Signature {
    #[inline]
    fn as_ref(&self) -> &Signature {
        self
    }
}

impl ToOwned for Signature {
    type Owned = SignatureBuf;

    #[inline]
    fn to_owned(&self) -> Self::Owned {
        // SAFETY: This signature is valid by construction.
        unsafe { SignatureBuf::from_slice_unchecked(&self.0) }
    }
}

impl PartialEq<str> for Signature {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.0 == other.as_bytes()
    }
}

impl PartialEq<Signature> for str {
    #[inline]
    fn eq(&self, other: &Signature) -> bool {
        self.as_bytes() == &other.0
    }
}

impl PartialEq<[u8]> for Signature {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        &self.0 == other
    }
}
