use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use super::{ObjectPath, ObjectPathError};

/// An owned D-Bus object path.
///
/// Dereferences to [`ObjectPath`], which documents the validation rules.
///
/// # Examples
///
/// ```
/// use dbus_codec::{ObjectPath, ObjectPathBuf};
///
/// let path = ObjectPathBuf::new("/org/freedesktop/DBus")?;
/// assert_eq!(path, *ObjectPath::new("/org/freedesktop/DBus")?);
/// # Ok::<_, dbus_codec::ObjectPathError>(())
/// ```
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct ObjectPathBuf(Vec<u8>);

impl ObjectPathBuf {
    /// Construct a new validated owned object path.
    ///
    /// # Errors
    ///
    /// Errors if the argument is not a valid object path.
    pub fn new<P>(path: &P) -> Result<Self, ObjectPathError>
    where
        P: ?Sized + AsRef<[u8]>,
    {
        Ok(ObjectPath::new(path)?.to_owned())
    }

    /// Construct an owned object path from its raw underlying vector.
    ///
    /// The vector must hold a valid object path.
    #[inline]
    pub(super) fn from_vec(data: Vec<u8>) -> Self {
        Self(data)
    }

    #[inline]
    fn as_object_path(&self) -> &ObjectPath {
        // SAFETY: This type ensures during construction that the object path
        // it contains is valid.
        unsafe { ObjectPath::new_unchecked(&self.0) }
    }
}

impl fmt::Debug for ObjectPathBuf {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectPathBuf").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ObjectPathBuf {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for ObjectPathBuf {
    type Target = ObjectPath;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_object_path()
    }
}

impl Borrow<ObjectPath> for ObjectPathBuf {
    #[inline]
    fn borrow(&self) -> &ObjectPath {
        self
    }
}

impl AsRef<ObjectPath> for ObjectPathBuf {
    #[inline]
    fn as_ref(&self) -> &ObjectPath {
        self
    }
}

impl PartialEq<ObjectPath> for ObjectPathBuf {
    #[inline]
    fn eq(&self, other: &ObjectPath) -> bool {
        self.as_object_path() == other
    }
}

impl PartialEq<ObjectPathBuf> for ObjectPath {
    #[inline]
    fn eq(&self, other: &ObjectPathBuf) -> bool {
        self == other.as_object_path()
    }
}
