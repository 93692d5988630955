use crate::proto::Type;

use super::{SignatureError, SignatureErrorKind, MAX_CONTAINER_DEPTH, MAX_DEPTH, MAX_SIGNATURE};

/// Validate a signature against the D-Bus grammar.
///
/// Containers under construction are tracked on a fixed-size stack holding
/// the opening code of each container and the number of complete types seen
/// directly inside it.
pub(super) const fn validate(bytes: &[u8]) -> Result<(), SignatureError> {
    use SignatureErrorKind::*;

    if bytes.len() >= MAX_SIGNATURE {
        return Err(SignatureError::new(SignatureTooLong));
    }

    let mut kinds = [0u8; MAX_DEPTH];
    let mut counts = [0u8; MAX_DEPTH];
    let mut depth = 0;
    let mut arrays = 0;
    let mut structs = 0;

    let mut n = 0;

    while n < bytes.len() {
        let b = bytes[n];
        n += 1;

        let mut is_basic = match Type::new(b) {
            Type::BYTE
            | Type::BOOLEAN
            | Type::INT16
            | Type::UINT16
            | Type::INT32
            | Type::UINT32
            | Type::INT64
            | Type::UINT64
            | Type::DOUBLE
            | Type::STRING
            | Type::OBJECT_PATH
            | Type::SIGNATURE
            | Type::UNIX_FD => true,
            Type::VARIANT => false,
            Type::ARRAY => {
                if depth == MAX_DEPTH || arrays == MAX_CONTAINER_DEPTH {
                    return Err(SignatureError::new(ExceededMaximumArrayRecursion));
                }

                kinds[depth] = b'a';
                counts[depth] = 0;
                depth += 1;
                arrays += 1;
                continue;
            }
            Type::OPEN_PAREN => {
                if depth == MAX_DEPTH || structs == MAX_CONTAINER_DEPTH {
                    return Err(SignatureError::new(ExceededMaximumStructRecursion));
                }

                kinds[depth] = b'(';
                counts[depth] = 0;
                depth += 1;
                structs += 1;
                continue;
            }
            Type::CLOSE_PAREN => {
                if depth == 0 {
                    return Err(SignatureError::new(StructEndedButNotStarted));
                }

                match kinds[depth - 1] {
                    b'(' => {}
                    b'a' => return Err(SignatureError::new(MissingArrayElementType)),
                    _ => return Err(SignatureError::new(StructEndedButNotStarted)),
                }

                depth -= 1;
                structs -= 1;

                if counts[depth] == 0 {
                    return Err(SignatureError::new(StructHasNoFields));
                }

                false
            }
            Type::OPEN_BRACE => {
                if depth == MAX_DEPTH {
                    return Err(SignatureError::new(ExceededMaximumDictRecursion));
                }

                // A dict entry is only valid as an array element type.
                if depth == 0 || kinds[depth - 1] != b'a' {
                    return Err(SignatureError::new(DictEntryNotInsideArray));
                }

                kinds[depth] = b'{';
                counts[depth] = 0;
                depth += 1;
                continue;
            }
            Type::CLOSE_BRACE => {
                if depth == 0 {
                    return Err(SignatureError::new(DictEndedButNotStarted));
                }

                match kinds[depth - 1] {
                    b'{' => {}
                    b'a' => return Err(SignatureError::new(MissingArrayElementType)),
                    _ => return Err(SignatureError::new(DictEndedButNotStarted)),
                }

                depth -= 1;

                match counts[depth] {
                    0 => return Err(SignatureError::new(DictEntryHasNoFields)),
                    1 => return Err(SignatureError::new(DictEntryHasOnlyOneField)),
                    2 => {}
                    _ => return Err(SignatureError::new(DictEntryHasTooManyFields)),
                }

                false
            }
            other => return Err(SignatureError::new(UnknownTypeCode(other))),
        };

        // A complete type also completes every array directly wrapping it.
        while depth > 0 && kinds[depth - 1] == b'a' {
            depth -= 1;
            arrays -= 1;
            is_basic = false;
        }

        if depth > 0 {
            if kinds[depth - 1] == b'{' && counts[depth - 1] == 0 && !is_basic {
                return Err(SignatureError::new(DictKeyMustBeBasicType));
            }

            counts[depth - 1] += 1;
        }
    }

    if depth > 0 {
        return match kinds[depth - 1] {
            b'a' => Err(SignatureError::new(MissingArrayElementType)),
            b'(' => Err(SignatureError::new(StructStartedButNotEnded)),
            _ => Err(SignatureError::new(DictStartedButNotEnded)),
        };
    }

    Ok(())
}
