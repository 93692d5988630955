use std::str::Utf8Error;

use crate::object_path::ObjectPathError;
use crate::signature::{SignatureError, SignatureErrorKind};

/// Result alias using an [`Error`] as the error type by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error raised by the codec.
///
/// Every error carries the [`ErrorKind`] describing the failure together
/// with the byte offset at which it was observed. For reads this is the
/// cursor position, for writes the length of the buffer at the point of
/// failure.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (at byte {offset})")]
pub struct Error {
    #[source]
    kind: ErrorKind,
    offset: usize,
}

impl Error {
    /// Construct a new error observed at the given byte offset.
    #[inline]
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The byte offset at which the error was observed.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The kinds of errors raised by the codec.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Attempted to read past the end of the buffer.
    #[error("Read past the end of the buffer")]
    OutOfBounds,
    /// A padding byte was not zero.
    #[error("Padding byte is not zero")]
    NonZeroPadding,
    /// A string exceeded the wire length limit.
    #[error("String of length {0} is too long (max is 4294967294)")]
    StringTooLong(usize),
    /// A signature exceeded 255 bytes.
    #[error("Signature is too long (max is 255)")]
    SignatureTooLong,
    /// An array payload exceeded the wire length limit.
    #[error("Array of length {0} is too long (max is 67108864)")]
    ArrayTooLong(usize),
    /// The array length word does not match the bytes consumed by its
    /// elements.
    #[error("Array length does not match its elements")]
    ArrayLengthMismatch,
    /// A string was not valid UTF-8.
    #[error("String is not valid utf-8")]
    InvalidUtf8(
        #[from]
        #[source]
        Utf8Error,
    ),
    /// A string contained an interior NUL byte.
    #[error("String contains an interior NUL byte")]
    EmbeddedNul,
    /// A string was not terminated by a NUL byte.
    #[error("String is not null terminated")]
    MissingNulTerminator,
    /// An object path did not satisfy the object path grammar.
    #[error("Invalid D-Bus object path")]
    InvalidObjectPath,
    /// A signature did not satisfy the signature grammar.
    #[error("Invalid D-Bus signature")]
    InvalidSignature(#[source] SignatureError),
    /// A value did not match any known enumerator.
    #[error("Value does not match a known enumerator")]
    UnknownEnumerator,
    /// A value shape has no D-Bus representation.
    #[error("Value shape has no D-Bus representation")]
    UnsupportedShape,
}

/// Length-cap violations keep their dedicated kind; grammar failures are
/// wrapped as [`ErrorKind::InvalidSignature`].
impl From<SignatureError> for ErrorKind {
    fn from(error: SignatureError) -> Self {
        match error.kind {
            SignatureErrorKind::SignatureTooLong => ErrorKind::SignatureTooLong,
            _ => ErrorKind::InvalidSignature(error),
        }
    }
}

impl From<ObjectPathError> for ErrorKind {
    #[inline]
    fn from(_: ObjectPathError) -> Self {
        ErrorKind::InvalidObjectPath
    }
}
