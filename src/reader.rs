#[cfg(feature = "std")]
use std::borrow::Cow;

extern crate alloc;
use alloc::string::String;

use core::fmt;
use core::mem::size_of;

use tracing::trace;
use zerocopy::FromBytes;

use crate::aggregate::{FieldListMut, Serializable};
use crate::byte_order::from_wire;
use crate::{Decode, Error, Result, TypeTag};

/// Deepest nesting of containers and aggregates that a [`BinaryReader`] will decode.
pub const MAX_DEPTH: u32 = 128;

/// Reads tagged values from a slice of bytes.
///
/// The reader keeps a cursor, a logical offset into `data` that only moves forward. Every value
/// is preceded by a one-byte [`TypeTag`]; the `read_*` functions check that tag before they
/// interpret the payload, and fail with [`Error::TypeMismatch`] if it names a different kind.
///
/// Reads never go past the end of `data`. A truncated or corrupt buffer produces
/// [`Error::OutOfBounds`] instead of a panic.
///
/// This type only supports reading values from a slice of bytes. If you need to read values from
/// a file or `Read` implementation, then you should copy the data into an in-memory buffer first
/// (see [`crate::io::BufferSource`]).
///
/// Containers and aggregates may nest at most [`MAX_DEPTH`] levels deep. Past that, decoding
/// fails with [`Error::DepthLimitExceeded`] instead of exhausting the stack.
#[derive(Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
    depth: u32,
}

impl<'a> BinaryReader<'a> {
    /// Constructor. The cursor starts at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            depth: 0,
        }
    }

    /// The current cursor offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` if the cursor has reached the end of the buffer.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The bytes after the cursor.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    fn out_of_bounds(&self, requested: usize) -> Error {
        trace!(pos = self.pos, requested, len = self.data.len(), "read out of bounds");
        Error::OutOfBounds {
            pos: self.pos,
            requested,
            len: self.data.len(),
        }
    }

    /// Reads a single raw byte.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        if let Some(&value) = self.data.get(self.pos) {
            self.pos += 1;
            Ok(value)
        } else {
            Err(self.out_of_bounds(1))
        }
    }

    /// Reads a slice of bytes whose length is `len` and advances the cursor past it. This
    /// function returns a slice reference to the bytes; it does not copy them.
    ///
    /// If fewer than `len` bytes remain, the cursor does not move.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.data.len() - self.pos < len {
            Err(self.out_of_bounds(len))
        } else {
            let bytes = &self.data[self.pos..self.pos + len];
            self.pos += len;
            Ok(bytes)
        }
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Returns the byte at the cursor without advancing.
    pub fn peek_tag(&self) -> Result<u8> {
        match self.data.get(self.pos) {
            Some(&b) => Ok(b),
            None => Err(self.out_of_bounds(1)),
        }
    }

    /// Returns the tag at the cursor, if it names a known kind, without advancing.
    pub fn peek_type(&self) -> Result<Option<TypeTag>> {
        Ok(TypeTag::from_u8(self.peek_tag()?))
    }

    /// Reads a tag and checks that it is `expected`.
    ///
    /// On a mismatch the cursor is left just past the tag that was read.
    pub fn expect_tag(&mut self, expected: TypeTag) -> Result<()> {
        let found = self.read_u8()?;
        if found == expected.as_u8() {
            Ok(())
        } else {
            trace!(%expected, found, pos = self.pos - 1, "type tag mismatch");
            Err(Error::TypeMismatch { expected, found })
        }
    }

    /// Reads a tagged, fixed-size scalar whose payload is in wire order.
    pub(crate) fn read_wire<T: FromBytes>(&mut self, tag: TypeTag) -> Result<T> {
        self.expect_tag(tag)?;
        let n = size_of::<T>();
        let mut buf = [0u8; 8];
        let buf = &mut buf[..n];
        buf.copy_from_slice(self.read_bytes(n)?);
        from_wire(buf);
        T::read_from_bytes(buf).map_err(|_| self.out_of_bounds(n))
    }

    /// Reads a tagged `bool`. Payloads other than 0 and 1 are rejected.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.expect_tag(TypeTag::Bool)?;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(Error::InvalidBool(b)),
        }
    }

    /// Reads a tagged single-byte character.
    pub fn read_char(&mut self) -> Result<u8> {
        self.read_wire(TypeTag::Char)
    }

    /// Reads a tagged `i32`.
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_wire(TypeTag::Int32)
    }

    /// Reads a tagged `i64`.
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_wire(TypeTag::Int64)
    }

    /// Reads a tagged `f32`.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_wire(TypeTag::Float)
    }

    /// Reads a tagged `f64`.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_wire(TypeTag::Double)
    }

    /// Reads a tagged string and returns its payload.
    ///
    /// This does not copy any data. It checks the `String` tag, reads the `Int32` length, then
    /// returns the payload as a `&[u8]`. A length of zero or less is [`Error::InvalidLength`].
    ///
    /// The caller must handle validating that the string is well-formed UTF-8, if necessary.
    pub fn read_str_bytes(&mut self) -> Result<&'a [u8]> {
        self.expect_tag(TypeTag::String)?;
        let len_i32 = self.read_i32()?;
        if len_i32 <= 0 {
            trace!(len = len_i32, "invalid string length");
            return Err(Error::InvalidLength {
                len: i64::from(len_i32),
            });
        }
        self.read_bytes(len_i32 as usize)
    }

    /// Reads a tagged string and returns it as `&str`, without copying.
    pub fn read_str(&mut self) -> Result<&'a str> {
        core::str::from_utf8(self.read_str_bytes()?).map_err(|_| Error::InvalidUtf8)
    }

    /// Reads a tagged string and returns it as an owned `String`.
    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(String::from)
    }

    /// Reads a tagged string and returns it as `Cow<str>`, replacing byte sequences that are not
    /// valid UTF-8 with the Unicode replacement character.
    #[cfg(feature = "std")]
    pub fn read_string_lossy(&mut self) -> Result<Cow<'a, str>> {
        Ok(String::from_utf8_lossy(self.read_str_bytes()?))
    }

    /// Reads a tagged string and returns the payload as a `bstr::BStr`, without validation.
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_str_bytes()?))
    }

    /// Reads the header shared by all containers: checks `tag`, then reads the element count as a
    /// tagged `Int64`. A negative count is [`Error::InvalidLength`].
    pub fn read_container_header(&mut self, tag: TypeTag) -> Result<usize> {
        self.expect_tag(tag)?;
        let count = self.read_i64()?;
        usize::try_from(count).map_err(|_| {
            trace!(count, %tag, "invalid container count");
            Error::InvalidLength { len: count }
        })
    }

    /// Runs `f` one nesting level deeper. Container and aggregate decoders wrap their body in this
    /// so that a buffer of deeply nested headers fails with [`Error::DepthLimitExceeded`].
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            trace!(pos = self.pos, limit = MAX_DEPTH, "nesting too deep");
            return Err(Error::DepthLimitExceeded { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Upper bound on how many elements can still be decoded. Every element takes at least two
    /// bytes (tag and payload), so this bounds pre-allocation for a corrupt count.
    pub(crate) fn capacity_hint(&self, count: usize) -> usize {
        count.min((self.data.len() - self.pos) / 2)
    }

    /// Decodes any value that implements [`Decode`].
    pub fn read<T: Decode>(&mut self) -> Result<T> {
        T::decode(self)
    }

    /// Decodes a value into `dest`. If decoding fails, `dest` is left unchanged.
    pub fn read_into<T: Decode>(&mut self, dest: &mut T) -> Result<()> {
        *dest = T::decode(self)?;
        Ok(())
    }

    /// Hands the reader to `value`, which reads itself. The reader does no tag bookkeeping of
    /// its own here.
    pub fn read_object(&mut self, value: &mut dyn Serializable) -> Result<()> {
        value.deserialize_from(self)
    }

    /// Decodes each field of `fields` in order. `fields` is a tuple of mutable references, such
    /// as `(&mut a, &mut b)`.
    ///
    /// Decoding stops at the first failure. Fields before the failing one keep their newly
    /// decoded values; the failing field and those after it are not written.
    pub fn read_args<F: FieldListMut>(&mut self, fields: F) -> Result<()> {
        fields.decode_fields(self)
    }
}

impl fmt::Debug for BinaryReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryReader")
            .field("pos", &self.pos)
            .field("len", &self.data.len())
            .field("depth", &self.depth)
            .finish()
    }
}
