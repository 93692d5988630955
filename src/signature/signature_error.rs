use crate::proto::Type;

/// Detailed errors raised when validation of a [`Signature`] fails.
///
/// [`Signature`]: crate::Signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct SignatureError {
    pub(crate) kind: SignatureErrorKind,
}

impl SignatureError {
    /// Construct a new signature error.
    #[inline]
    pub(crate) const fn new(kind: SignatureErrorKind) -> Self {
        Self { kind }
    }

    /// Indicate that a signature is too long.
    #[inline]
    pub const fn too_long() -> Self {
        Self::new(SignatureErrorKind::SignatureTooLong)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SignatureErrorKind {
    #[error("Unknown type code {0:?}")]
    UnknownTypeCode(Type),
    #[error("Signature is longer than 255 bytes")]
    SignatureTooLong,
    #[error("Missing array element type")]
    MissingArrayElementType,
    #[error("Struct ended but not started")]
    StructEndedButNotStarted,
    #[error("Dict entry ended but not started")]
    DictEndedButNotStarted,
    #[error("Struct started but not ended")]
    StructStartedButNotEnded,
    #[error("Dict entry started but not ended")]
    DictStartedButNotEnded,
    #[error("Struct has no fields")]
    StructHasNoFields,
    #[error("Dict entry key must be a basic type")]
    DictKeyMustBeBasicType,
    #[error("Dict entry has no fields")]
    DictEntryHasNoFields,
    #[error("Dict entry has only one field")]
    DictEntryHasOnlyOneField,
    #[error("Dict entry has too many fields")]
    DictEntryHasTooManyFields,
    #[error("Dict entry is only valid inside an array")]
    DictEntryNotInsideArray,
    #[error("Exceeded maximum array recursion")]
    ExceededMaximumArrayRecursion,
    #[error("Exceeded maximum struct recursion")]
    ExceededMaximumStructRecursion,
    #[error("Exceeded maximum dict recursion")]
    ExceededMaximumDictRecursion,
    #[error("Signature is not a single complete type")]
    NotSingleCompleteType,
}
