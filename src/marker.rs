use crate::signature::{SignatureBuilder, SignatureError};

/// The shape of a value which maps to a single complete D-Bus type.
///
/// This carries the two static properties every supported shape has: its
/// wire alignment and its signature. The signature is composed into a
/// [`SignatureBuilder`] so that container shapes can be derived bottom-up;
/// use [`signature_of`] to obtain it as an owned value.
///
/// [`signature_of`]: crate::signature_of
pub trait Marker {
    /// The alignment of the type on the wire.
    const ALIGNMENT: usize;

    /// Append the D-Bus signature of this shape to the given builder.
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError>;
}

/// Marker trait for shapes which map to a D-Bus *basic* type.
///
/// Dictionary keys are constrained to basic types by the D-Bus type system,
/// so map implementations bound their key parameter with this trait.
pub trait Basic: Marker {}

impl<T> Marker for &T
where
    T: ?Sized + Marker,
{
    const ALIGNMENT: usize = T::ALIGNMENT;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        T::write_signature(builder)
    }
}

impl<T> Basic for &T where T: ?Sized + Basic {}
