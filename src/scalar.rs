//! Codecs for the scalar kinds: `Bool`, `Char`, `Int32`, `Int64`, `Float`, `Double` and `String`.

extern crate alloc;
use alloc::string::String;

use crate::{BinaryReader, BinaryWriter, Decode, Encode, Result, TypeTag};

impl Encode for bool {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        w.write_bool(*self);
        Ok(())
    }
}

impl Decode for bool {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        r.read_bool()
    }
}

// Fixed-size scalars whose native bytes are put into wire order.
macro_rules! wire_scalar {
    ($($ty:ty => $tag:ident,)*) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
                    w.write_wire(TypeTag::$tag, *self);
                    Ok(())
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
                    r.read_wire(TypeTag::$tag)
                }
            }
        )*
    };
}

wire_scalar! {
    u8 => Char,
    i8 => Char,
    i32 => Int32,
    i64 => Int64,
    f32 => Float,
    f64 => Double,
}

impl Encode for str {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        w.write_str(self)
    }
}

impl Encode for String {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        w.write_str(self)
    }
}

impl Decode for String {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        r.read_string()
    }
}

#[cfg(feature = "bstr")]
mod bstr_impls {
    use super::*;
    use bstr::{BStr, BString, ByteSlice};

    impl Encode for BStr {
        fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
            w.write_str_bytes(self.as_bytes())
        }
    }

    impl Encode for BString {
        fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
            w.write_str_bytes(self.as_bytes())
        }
    }

    impl Decode for BString {
        fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
            Ok(BString::from(r.read_str_bytes()?))
        }
    }
}
