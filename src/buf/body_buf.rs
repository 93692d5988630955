use crate::buf::{padding_to, MAX_ARRAY_LENGTH};
use crate::error::{Error, ErrorKind, Result};
use crate::proto::Endianness;

/// An append-only writer over a caller-supplied byte buffer.
///
/// The writer does not assume it owns the head of the buffer: alignment is
/// computed relative to the current buffer length, so a body can be written
/// after an existing prefix such as a message header. The buffer is borrowed
/// for the duration of one top-level write.
///
/// # Examples
///
/// ```
/// use dbus_codec::{BodyBuf, Storable};
///
/// let mut buf = vec![0xaa];
/// let mut body = BodyBuf::new(&mut buf);
///
/// 0x1234u64.store_to(&mut body)?;
///
/// assert_eq!(buf.len(), 16);
/// assert_eq!(&buf[1..8], &[0, 0, 0, 0, 0, 0, 0]);
/// # Ok::<_, dbus_codec::Error>(())
/// ```
pub struct BodyBuf<'a> {
    buf: &'a mut Vec<u8>,
    endianness: Endianness,
}

impl<'a> BodyBuf<'a> {
    /// Construct a little-endian writer over the given buffer.
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        Self::with_endianness(buf, Endianness::LITTLE)
    }

    /// Construct a writer with the specified endianness.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_codec::{BodyBuf, Endianness, Storable};
    ///
    /// let mut buf = Vec::new();
    /// let mut body = BodyBuf::with_endianness(&mut buf, Endianness::BIG);
    ///
    /// 0x1234u16.store_to(&mut body)?;
    ///
    /// assert_eq!(buf, [0x12, 0x34]);
    /// # Ok::<_, dbus_codec::Error>(())
    /// ```
    pub fn with_endianness(buf: &'a mut Vec<u8>, endianness: Endianness) -> Self {
        Self { buf, endianness }
    }

    /// Get the endianness of the writer.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// The current length of the underlying buffer.
    ///
    /// This is the offset against which the next value is aligned.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Test if the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Insert zero padding up to the given power-of-two alignment.
    pub fn align(&mut self, align: usize) {
        let padding = padding_to(align, self.buf.len());
        let len = self.buf.len() + padding;
        self.buf.resize(len, 0);
    }

    /// Extend the buffer with a slice.
    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Extend the buffer with a slice ending with a NUL byte.
    #[inline]
    pub fn extend_from_slice_nul(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        self.buf.push(0);
    }

    /// Align to and append a 32-bit word in the buffer's endianness.
    pub(crate) fn store_u32(&mut self, value: u32) {
        self.align(4);
        let bytes = match self.endianness {
            Endianness::BIG => value.to_be_bytes(),
            _ => value.to_le_bytes(),
        };
        self.buf.extend_from_slice(&bytes);
    }

    /// Begin writing an array with elements of the given alignment.
    ///
    /// This reserves the length word and unconditionally pads to the element
    /// alignment, empty arrays included. The length is patched in by
    /// [`ArrayWriter::finish`].
    pub(crate) fn write_array(&mut self, element_alignment: usize) -> ArrayWriter<'_, 'a> {
        ArrayWriter::new(self, element_alignment)
    }

    fn patch_u32(&mut self, at: usize, value: u32) {
        let bytes = match self.endianness {
            Endianness::BIG => value.to_be_bytes(),
            _ => value.to_le_bytes(),
        };
        self.buf[at..at + 4].copy_from_slice(&bytes);
    }
}

/// Writer for a single array, patching the length word on completion.
///
/// The length word counts the element payload only: the padding between the
/// length and the first element is excluded.
pub(crate) struct ArrayWriter<'a, 'b> {
    buf: &'a mut BodyBuf<'b>,
    len_at: usize,
    start: usize,
}

impl<'a, 'b> ArrayWriter<'a, 'b> {
    fn new(buf: &'a mut BodyBuf<'b>, element_alignment: usize) -> Self {
        buf.align(4);
        let len_at = buf.len();
        buf.extend_from_slice(&[0, 0, 0, 0]);
        buf.align(element_alignment);
        let start = buf.len();

        Self {
            buf,
            len_at,
            start,
        }
    }

    /// Access the underlying writer to store elements.
    #[inline]
    pub(crate) fn buf(&mut self) -> &mut BodyBuf<'b> {
        self.buf
    }

    /// Finish writing the array and patch the length word.
    pub(crate) fn finish(self) -> Result<()> {
        let payload = self.buf.len() - self.start;

        if payload > MAX_ARRAY_LENGTH as usize {
            return Err(Error::new(ErrorKind::ArrayTooLong(payload), self.len_at));
        }

        self.buf.patch_u32(self.len_at, payload as u32);
        Ok(())
    }
}
