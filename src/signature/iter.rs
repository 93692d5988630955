use crate::proto::Type;

use super::Signature;

/// A single complete type yielded by [`Iter`].
///
/// Container tokens carry the signatures of their interior: an array its
/// element type, a struct its field sequence, and a dict entry its key and
/// value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A basic type, or `v`.
    Basic(&'a Signature),
    /// An array; the signature is the element type.
    Array(&'a Signature),
    /// A struct; the signature is the field sequence without parentheses.
    Struct(&'a Signature),
    /// A dict entry; the signatures are the key and value types.
    Dict(&'a Signature, &'a Signature),
}

/// An iterator over a signature which yields one [`Token`] at a time.
///
/// Constructed through [`Signature::iter`].
pub struct Iter<'a> {
    data: &'a [u8],
    at: usize,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(super) fn new(signature: &'a Signature) -> Iter<'a> {
        Iter {
            data: signature.as_bytes(),
            at: 0,
        }
    }

    /// The number of bytes spanned by the complete type starting at `from`.
    fn complete_len(&self, from: usize) -> Option<usize> {
        let mut n = from;

        while let Some(&b'a') = self.data.get(n) {
            n += 1;
        }

        match *self.data.get(n)? {
            b'(' | b'{' => {
                let mut depth = 0usize;

                loop {
                    match *self.data.get(n)? {
                        b'(' | b'{' => depth += 1,
                        b')' | b'}' => {
                            depth -= 1;

                            if depth == 0 {
                                n += 1;
                                break;
                            }
                        }
                        _ => {}
                    }

                    n += 1;
                }
            }
            _ => n += 1,
        }

        Some(n - from)
    }

    /// Take the complete type starting at the cursor.
    fn next_complete(&mut self) -> Option<&'a Signature> {
        let len = self.complete_len(self.at)?;
        let slice = &self.data[self.at..self.at + len];
        self.at += len;
        // SAFETY: A complete type of a validated signature is itself a valid
        // signature.
        Some(unsafe { Signature::new_unchecked(slice) })
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Token<'a>;

    #[inline]
    fn next(&mut self) -> Option<Token<'a>> {
        let b = *self.data.get(self.at)?;

        Some(match Type::new(b) {
            Type::ARRAY => {
                self.at += 1;
                Token::Array(self.next_complete()?)
            }
            Type::OPEN_PAREN => {
                let len = self.complete_len(self.at)?;
                let slice = &self.data[self.at + 1..self.at + len - 1];
                self.at += len;
                // SAFETY: The field sequence of a validated struct is a
                // valid signature.
                Token::Struct(unsafe { Signature::new_unchecked(slice) })
            }
            Type::OPEN_BRACE => {
                self.at += 1;
                let key = self.next_complete()?;
                let value = self.next_complete()?;

                if self.data.get(self.at) != Some(&b'}') {
                    return None;
                }

                self.at += 1;
                Token::Dict(key, value)
            }
            _ => {
                let slice = &self.data[self.at..self.at + 1];
                self.at += 1;
                // SAFETY: A single basic code of a validated signature is a
                // valid signature.
                Token::Basic(unsafe { Signature::new_unchecked(slice) })
            }
        })
    }
}
