use std::fmt;
use std::str::from_utf8_unchecked;

use super::{validate, ObjectPathBuf, ObjectPathError};

/// A validated D-Bus object path.
///
/// The following rules define a [valid object path]:
///
/// * The path must begin with an ASCII `/` character and consist of elements
///   separated by slash characters.
/// * Each element must only contain the ASCII characters `[A-Z][a-z][0-9]_`.
/// * No element may be the empty string, so multiple `/` characters cannot
///   occur in sequence.
/// * A trailing `/` character is not allowed unless the path is the root
///   path, a single `/` character.
///
/// [valid object path]: https://dbus.freedesktop.org/doc/dbus-specification.html#message-protocol-marshaling-object-path
///
/// # Examples
///
/// ```
/// use dbus_codec::ObjectPath;
///
/// const PATH: &ObjectPath = ObjectPath::new_const(b"/org/freedesktop/DBus");
///
/// assert!(ObjectPath::new("/").is_ok());
/// assert!(ObjectPath::new("/org//freedesktop").is_err());
/// ```
#[derive(Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct ObjectPath([u8]);

impl ObjectPath {
    /// The special `"/"` object path.
    pub const ROOT: &'static Self = Self::new_const(b"/");

    /// Construct a new object path inside of a constant context.
    ///
    /// # Panics
    ///
    /// Panics if the argument is not a valid object path.
    #[inline]
    #[track_caller]
    pub const fn new_const(path: &[u8]) -> &Self {
        if !validate(path) {
            panic!("Invalid D-Bus object path");
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Self::new_unchecked(path) }
    }

    /// Construct a new validated object path.
    ///
    /// # Errors
    ///
    /// Errors if the argument is not a valid object path.
    pub fn new<P>(path: &P) -> Result<&Self, ObjectPathError>
    where
        P: ?Sized + AsRef<[u8]>,
    {
        let path = path.as_ref();

        if !validate(path) {
            return Err(ObjectPathError);
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Ok(Self::new_unchecked(path)) }
    }

    /// Construct a new object path without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the path is a valid object path.
    #[inline]
    pub(super) const unsafe fn new_unchecked(path: &[u8]) -> &Self {
        &*(path as *const _ as *const ObjectPath)
    }

    /// The length of the object path in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Test if the object path is empty.
    ///
    /// Always `false` for a validated path, provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the object path as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: Validation ensures that the path is ASCII.
        unsafe { from_utf8_unchecked(&self.0) }
    }

    /// Get the object path as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ObjectPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectPath").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ObjectPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<ObjectPath> for ObjectPath {
    #[inline]
    fn as_ref(&self) -> &ObjectPath {
        self
    }
}

impl ToOwned for ObjectPath {
    type Owned = ObjectPathBuf;

    #[inline]
    fn to_owned(&self) -> Self::Owned {
        ObjectPathBuf::from_vec(self.0.to_vec())
    }
}

impl PartialEq<str> for ObjectPath {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.0 == other.as_bytes()
    }
}

impl PartialEq<ObjectPath> for str {
    #[inline]
    fn eq(&self, other: &ObjectPath) -> bool {
        self.as_bytes() == &other.0
    }
}
