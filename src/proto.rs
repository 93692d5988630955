//! Low level constants for the D-Bus wire format.

use std::fmt;

macro_rules! raw_enum {
    (
        $(#[doc = $doc:literal])*
        #[repr($repr:ty)]
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $variant_doc:literal])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[doc = $variant_doc])*
                $vis const $variant: Self = Self($value);
            )*
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match *self {
                    $(Self::$variant => f.write_str(stringify!($variant)),)*
                    Self(other) => write!(f, "{}(0x{other:02x})", stringify!($name)),
                }
            }
        }
    }
}

raw_enum! {
    /// The byte order of a body buffer.
    ///
    /// The values are the byte-order flags used by the D-Bus message header.
    #[repr(u8)]
    pub struct Endianness {
        /// Little endian.
        LITTLE = b'l',
        /// Big endian.
        BIG = b'B',
    }
}

raw_enum! {
    /// A single D-Bus type code as it appears in a signature.
    #[repr(u8)]
    pub(crate) struct Type {
        /// Unsigned 8-bit integer.
        BYTE = b'y',
        /// Boolean, 32-bit 0 or 1 on the wire.
        BOOLEAN = b'b',
        /// Signed 16-bit integer.
        INT16 = b'n',
        /// Unsigned 16-bit integer.
        UINT16 = b'q',
        /// Signed 32-bit integer.
        INT32 = b'i',
        /// Unsigned 32-bit integer.
        UINT32 = b'u',
        /// Signed 64-bit integer.
        INT64 = b'x',
        /// Unsigned 64-bit integer.
        UINT64 = b't',
        /// IEEE 754 double-precision floating point.
        DOUBLE = b'd',
        /// UTF-8 string.
        STRING = b's',
        /// Object path.
        OBJECT_PATH = b'o',
        /// Signature.
        SIGNATURE = b'g',
        /// Variant.
        VARIANT = b'v',
        /// File descriptor index.
        UNIX_FD = b'h',
        /// Array marker.
        ARRAY = b'a',
        /// Start of a struct.
        OPEN_PAREN = b'(',
        /// End of a struct.
        CLOSE_PAREN = b')',
        /// Start of a dict entry.
        OPEN_BRACE = b'{',
        /// End of a dict entry.
        CLOSE_BRACE = b'}',
    }
}

impl Type {
    /// Wrap a raw signature byte.
    #[inline]
    pub(crate) const fn new(byte: u8) -> Self {
        Self(byte)
    }
}
