use core::fmt;

use tracing::trace;
use zerocopy::{Immutable, IntoBytes};

use crate::aggregate::{FieldList, Serializable};
use crate::byte_order::to_wire;
use crate::{BinaryReader, Encode, Error, Result, TypeTag};

extern crate alloc;
use alloc::vec::Vec;

/// Encodes tagged values into an owned, growable buffer.
///
/// Every `write_*` method that encodes a value first appends the value's [`TypeTag`], then the
/// payload. Multi-byte scalars are written in little-endian order regardless of the host.
///
/// The buffer grows geometrically: when an append does not fit, the capacity is doubled until it
/// does. Appends that fit never reallocate.
pub struct BinaryWriter {
    /// The output data.
    pub out: Vec<u8>,
}

impl BinaryWriter {
    /// Creates a new, empty `BinaryWriter`
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Creates a new `BinaryWriter` with the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Current capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.out.capacity()
    }

    /// Accesses the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }

    /// Creates a reader positioned at the start of the bytes written so far.
    pub fn reader(&self) -> BinaryReader<'_> {
        BinaryReader::new(&self.out)
    }

    /// Ensures that at least `additional` more bytes fit without reallocating. The capacity
    /// doubles (starting from 1) until the request fits.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.out.len().saturating_add(additional);
        let old_cap = self.out.capacity();
        if needed <= old_cap {
            return;
        }

        let cap = grown_capacity(old_cap, needed);
        trace!(from = old_cap, to = cap, "growing buffer");
        self.out.reserve_exact(cap - self.out.len());
    }

    /// Appends raw `bytes` to the output. No tag is written.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.out.extend_from_slice(bytes);
    }

    /// Appends a small, fixed-size array of raw bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) {
        self.write_bytes(&value)
    }

    /// Appends a single raw byte. No tag is written.
    pub fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value])
    }

    /// Writes a type tag.
    pub fn write_tag(&mut self, tag: TypeTag) {
        self.write_u8(tag.as_u8())
    }

    /// Writes a tag followed by the wire-order bytes of a fixed-size scalar.
    pub(crate) fn write_wire<T: IntoBytes + Immutable>(&mut self, tag: TypeTag, value: T) {
        let raw = value.as_bytes();
        let mut buf = [0u8; 8];
        let buf = &mut buf[..raw.len()];
        buf.copy_from_slice(raw);
        to_wire(buf);

        self.reserve(1 + buf.len());
        self.write_tag(tag);
        self.write_bytes(buf);
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) {
        self.write_tag(TypeTag::Bool);
        self.write_u8(value as u8)
    }

    /// Writes a single-byte character value.
    pub fn write_char(&mut self, value: u8) {
        self.write_wire(TypeTag::Char, value)
    }

    /// Writes an `i32` value.
    pub fn write_i32(&mut self, value: i32) {
        self.write_wire(TypeTag::Int32, value)
    }

    /// Writes an `i64` value.
    pub fn write_i64(&mut self, value: i64) {
        self.write_wire(TypeTag::Int64, value)
    }

    /// Writes an `f32` value using its IEEE-754 representation.
    pub fn write_f32(&mut self, value: f32) {
        self.write_wire(TypeTag::Float, value)
    }

    /// Writes an `f64` value using its IEEE-754 representation.
    pub fn write_f64(&mut self, value: f64) {
        self.write_wire(TypeTag::Double, value)
    }

    /// Writes a string: the `String` tag, the length as a tagged `Int32`, then the raw bytes.
    ///
    /// This function does not validate that the input is well-formed UTF-8. Note that readers
    /// reject a zero length, so an empty string can be written but not read back.
    pub fn write_str_bytes(&mut self, s: &[u8]) -> Result<()> {
        let len_i32 = i32::try_from(s.len()).map_err(|_| Error::CannotEncode)?;
        self.reserve(1 + 5 + s.len());
        self.write_tag(TypeTag::String);
        self.write_i32(len_i32);
        self.write_bytes(s);
        Ok(())
    }

    /// Writes a UTF-8 string. See [`Self::write_str_bytes`].
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_str_bytes(s.as_bytes())
    }

    /// Writes the header shared by all containers: the container's tag, then the element count as
    /// a tagged `Int64`.
    pub fn write_container_header(&mut self, tag: TypeTag, count: usize) -> Result<()> {
        let count_i64 = i64::try_from(count).map_err(|_| Error::CannotEncode)?;
        self.write_tag(tag);
        self.write_i64(count_i64);
        Ok(())
    }

    /// Encodes any value that implements [`Encode`].
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }

    /// Hands the writer to `value`, which writes itself. The writer does no tag bookkeeping of
    /// its own here.
    pub fn write_object(&mut self, value: &dyn Serializable) -> Result<()> {
        value.serialize_into(self)
    }

    /// Encodes each field of `fields` in order. `fields` is a tuple of references, such as
    /// `(&a, &b, &c)`. The empty tuple writes nothing.
    pub fn write_args<F: FieldList>(&mut self, fields: F) -> Result<()> {
        fields.encode_fields(self)
    }

    /// Formats the buffer as a hex dump, for debugging.
    #[cfg(feature = "pretty-hex")]
    pub fn hex_dump(&self) -> alloc::string::String {
        use pretty_hex::PrettyHex;
        alloc::format!("{}", self.out.hex_dump())
    }

    /// Hands the finished buffer to `sink`.
    #[cfg(feature = "std")]
    pub fn flush_to<S: crate::io::BufferSink + ?Sized>(&self, sink: &mut S) -> std::io::Result<()> {
        sink.write_buffer(&self.out)
    }
}

/// Doubles `cap` (starting from 1) until it holds `needed` bytes.
pub(crate) fn grown_capacity(mut cap: usize, needed: usize) -> usize {
    while needed > cap {
        cap = if cap == 0 { 1 } else { cap.saturating_mul(2) };
    }
    cap
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BinaryWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryWriter")
            .field("len", &self.out.len())
            .field("capacity", &self.out.capacity())
            .finish()
    }
}
