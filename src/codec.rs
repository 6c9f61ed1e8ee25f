//! The `Encode` and `Decode` traits, implemented by every type that can be written to and read
//! from a tagged buffer.

extern crate alloc;
use alloc::boxed::Box;

use crate::{BinaryReader, BinaryWriter, Result};

/// A value that can append its tagged encoding to a [`BinaryWriter`].
pub trait Encode {
    /// Writes the value's tag and payload.
    fn encode(&self, w: &mut BinaryWriter) -> Result<()>;
}

/// A value that can be decoded from a [`BinaryReader`].
pub trait Decode: Sized {
    /// Reads and checks the value's tag, then its payload.
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        (**self).encode(w)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        (**self).encode(w)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        T::decode(r).map(Box::new)
    }
}
