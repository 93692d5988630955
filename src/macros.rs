/// Helper to efficiently repeat type parameters.
macro_rules! repeat {
    ($macro:path) => {
        $macro!(A);
        $macro!(A, B);
        $macro!(A, B, C);
        $macro!(A, B, C, D);
        $macro!(A, B, C, D, E);
        $macro!(A, B, C, D, E, F);
        $macro!(A, B, C, D, E, F, G);
        $macro!(A, B, C, D, E, F, G, H);
        $macro!(A, B, C, D, E, F, G, H, I);
        $macro!(A, B, C, D, E, F, G, H, I, J);
        $macro!(A, B, C, D, E, F, G, H, I, J, K);
        $macro!(A, B, C, D, E, F, G, H, I, J, K, L);
        $macro!(A, B, C, D, E, F, G, H, I, J, K, L, M);
        $macro!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
        $macro!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
        $macro!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
    };
}

/// Map a fieldless enum with an integer representation to its underlying
/// D-Bus type.
///
/// The discriminant is written verbatim; reading a value which does not
/// match any enumerator fails with [`UnknownEnumerator`].
///
/// [`UnknownEnumerator`]: crate::ErrorKind::UnknownEnumerator
///
/// # Examples
///
/// ```
/// use dbus_codec::{read_dbus_binary, signature_of, write_dbus_binary};
///
/// dbus_codec::int_enum! {
///     /// The state of a job.
///     #[repr(u32)]
///     pub enum State {
///         Pending = 1,
///         Running = 2,
///         Done = 3,
///     }
/// }
///
/// assert_eq!(signature_of::<State>()?, "u");
///
/// let mut buf = Vec::new();
/// write_dbus_binary(&State::Running, &mut buf)?;
/// assert_eq!(buf, [2, 0, 0, 0]);
///
/// assert_eq!(read_dbus_binary::<State>(&buf)?, State::Running);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! int_enum {
    (
        $(#[doc = $meta:expr])*
        #[repr($repr:ty)]
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[doc = $meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl $crate::Marker for $name {
            const ALIGNMENT: usize = <$repr as $crate::Marker>::ALIGNMENT;

            #[inline]
            fn write_signature(
                builder: &mut $crate::SignatureBuilder,
            ) -> ::core::result::Result<(), $crate::SignatureError> {
                <$repr as $crate::Marker>::write_signature(builder)
            }
        }

        impl $crate::Basic for $name {}

        impl $crate::Storable for $name {
            #[inline]
            fn store_to(&self, buf: &mut $crate::BodyBuf<'_>) -> $crate::Result<()> {
                $crate::Storable::store_to(&(*self as $repr), buf)
            }
        }

        impl $crate::Loadable for $name {
            fn load_from(buf: &mut $crate::Body<'_>) -> $crate::Result<Self> {
                let at = buf.pos();
                let value = <$repr as $crate::Loadable>::load_from(buf)?;

                $(
                    if value == $name::$variant as $repr {
                        return Ok($name::$variant);
                    }
                )*

                Err($crate::Error::new($crate::ErrorKind::UnknownEnumerator, at))
            }
        }
    }
}

/// Map a fieldless enum with a string representation to the D-Bus string
/// type.
///
/// Each enumerator carries one canonical string form; reading a string which
/// does not match any enumerator fails with [`UnknownEnumerator`].
///
/// [`UnknownEnumerator`]: crate::ErrorKind::UnknownEnumerator
///
/// # Examples
///
/// ```
/// use dbus_codec::{read_dbus_binary, signature_of, write_dbus_binary};
///
/// dbus_codec::str_enum! {
///     /// The access mode of a mount.
///     pub enum Mode {
///         Read = "read",
///         Write = "write",
///     }
/// }
///
/// assert_eq!(signature_of::<Mode>()?, "s");
/// assert_eq!(Mode::Read.as_str(), "read");
///
/// let mut buf = Vec::new();
/// write_dbus_binary(&Mode::Write, &mut buf)?;
/// assert_eq!(buf, [5, 0, 0, 0, b'w', b'r', b'i', b't', b'e', 0]);
///
/// assert_eq!(read_dbus_binary::<Mode>(&buf)?, Mode::Write);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $string:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The canonical string form of the enumerator.
            $vis fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $string,)*
                }
            }
        }

        impl $crate::Marker for $name {
            const ALIGNMENT: usize = 4;

            #[inline]
            fn write_signature(
                builder: &mut $crate::SignatureBuilder,
            ) -> ::core::result::Result<(), $crate::SignatureError> {
                <str as $crate::Marker>::write_signature(builder)
            }
        }

        impl $crate::Basic for $name {}

        impl $crate::Storable for $name {
            #[inline]
            fn store_to(&self, buf: &mut $crate::BodyBuf<'_>) -> $crate::Result<()> {
                $crate::Storable::store_to(self.as_str(), buf)
            }
        }

        impl $crate::Loadable for $name {
            fn load_from(buf: &mut $crate::Body<'_>) -> $crate::Result<Self> {
                let at = buf.pos();
                let value = <::std::string::String as $crate::Loadable>::load_from(buf)?;

                $(
                    if value == $string {
                        return Ok($name::$variant);
                    }
                )*

                Err($crate::Error::new($crate::ErrorKind::UnknownEnumerator, at))
            }
        }
    }
}
