use super::{
    validate, Signature, SignatureBuf, SignatureError, SignatureErrorKind, MAX_CONTAINER_DEPTH,
    MAX_DEPTH, MAX_SIGNATURE,
};

/// Bottom-up composition of a D-Bus signature.
///
/// The builder enforces the maximum length and container depth limits
/// imposed by the D-Bus specification while a signature is being composed;
/// [`finish`] validates the final result against the full grammar.
///
/// [`finish`]: SignatureBuilder::finish
///
/// # Examples
///
/// ```
/// use dbus_codec::SignatureBuilder;
/// use dbus_codec::Signature;
///
/// let mut builder = SignatureBuilder::new();
/// builder.open_array()?;
/// builder.open_dict()?;
/// builder.extend_from_signature(Signature::STRING)?;
/// builder.extend_from_signature(Signature::VARIANT)?;
/// builder.close_dict()?;
/// builder.close_array();
///
/// assert_eq!(builder.finish()?, "a{sv}");
/// # Ok::<_, dbus_codec::SignatureError>(())
/// ```
pub struct SignatureBuilder {
    data: [u8; MAX_SIGNATURE],
    init: usize,
    arrays: usize,
    structs: usize,
    dicts: usize,
}

impl SignatureBuilder {
    /// Construct a new empty builder.
    pub const fn new() -> Self {
        Self {
            data: [0; MAX_SIGNATURE],
            init: 0,
            arrays: 0,
            structs: 0,
            dicts: 0,
        }
    }

    /// Open an array, prepending the element type which follows.
    pub fn open_array(&mut self) -> Result<(), SignatureError> {
        if self.arrays == MAX_CONTAINER_DEPTH || self.depth() == MAX_DEPTH {
            return Err(SignatureError::new(
                SignatureErrorKind::ExceededMaximumArrayRecursion,
            ));
        }

        self.push(b'a')?;
        self.arrays += 1;
        Ok(())
    }

    /// Close an array opened with [`open_array`].
    ///
    /// [`open_array`]: SignatureBuilder::open_array
    pub fn close_array(&mut self) {
        self.arrays -= 1;
    }

    /// Open a struct.
    pub fn open_struct(&mut self) -> Result<(), SignatureError> {
        if self.structs == MAX_CONTAINER_DEPTH || self.depth() == MAX_DEPTH {
            return Err(SignatureError::new(
                SignatureErrorKind::ExceededMaximumStructRecursion,
            ));
        }

        self.push(b'(')?;
        self.structs += 1;
        Ok(())
    }

    /// Close a struct opened with [`open_struct`].
    ///
    /// [`open_struct`]: SignatureBuilder::open_struct
    pub fn close_struct(&mut self) -> Result<(), SignatureError> {
        self.push(b')')?;
        self.structs -= 1;
        Ok(())
    }

    /// Open a dict entry.
    pub fn open_dict(&mut self) -> Result<(), SignatureError> {
        if self.dicts == MAX_CONTAINER_DEPTH || self.depth() == MAX_DEPTH {
            return Err(SignatureError::new(
                SignatureErrorKind::ExceededMaximumDictRecursion,
            ));
        }

        self.push(b'{')?;
        self.dicts += 1;
        Ok(())
    }

    /// Close a dict entry opened with [`open_dict`].
    ///
    /// [`open_dict`]: SignatureBuilder::open_dict
    pub fn close_dict(&mut self) -> Result<(), SignatureError> {
        self.push(b'}')?;
        self.dicts -= 1;
        Ok(())
    }

    /// Extend the signature under construction with another signature.
    pub fn extend_from_signature<S>(&mut self, other: S) -> Result<(), SignatureError>
    where
        S: AsRef<Signature>,
    {
        let bytes = other.as_ref().as_bytes();

        if self.init + bytes.len() > MAX_SIGNATURE {
            return Err(SignatureError::too_long());
        }

        self.data[self.init..self.init + bytes.len()].copy_from_slice(bytes);
        self.init += bytes.len();
        Ok(())
    }

    /// Validate the composed signature and return it as an owned value.
    pub fn finish(self) -> Result<SignatureBuf, SignatureError> {
        validate(self.as_bytes())?;
        // SAFETY: The signature was just validated.
        unsafe { Ok(SignatureBuf::from_slice_unchecked(self.as_bytes())) }
    }

    /// The raw bytes composed so far.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data[..self.init]
    }

    fn depth(&self) -> usize {
        self.arrays + self.structs + self.dicts
    }

    fn push(&mut self, byte: u8) -> Result<(), SignatureError> {
        if self.init == MAX_SIGNATURE {
            return Err(SignatureError::too_long());
        }

        self.data[self.init] = byte;
        self.init += 1;
        Ok(())
    }
}

impl Default for SignatureBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
