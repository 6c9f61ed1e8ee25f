//! User-defined aggregates.
//!
//! An aggregate is written as the `Aggregate` tag followed by each of its fields, in declared
//! order, with no field count or names. The reader has to know which type it is decoding.
//!
//! There are two layers:
//!
//! * [`Serializable`] is an object-safe capability. [`BinaryWriter::write_object`] and
//!   [`BinaryReader::read_object`] forward to it without knowing the concrete type.
//! * [`FieldList`] and [`FieldListMut`] are implemented for tuples of field references, so a
//!   type can write `w.write_args((&self.a, &self.b))` instead of one call per field. The
//!   [`aggregate!`](crate::aggregate!) macro builds on both.

use crate::{BinaryReader, BinaryWriter, Decode, Encode, Result};

/// A type that writes itself to, and reads itself from, a tagged buffer.
///
/// The stream does no tag bookkeeping for these calls. An implementation that wants its
/// encoding to carry the `Aggregate` tag writes and checks that tag itself.
pub trait Serializable {
    /// Appends the encoding of `self` to `w`.
    fn serialize_into(&self, w: &mut BinaryWriter) -> Result<()>;

    /// Overwrites `self` with a value decoded from `r`.
    fn deserialize_from(&mut self, r: &mut BinaryReader<'_>) -> Result<()>;
}

/// An ordered list of fields that can be encoded one after another.
///
/// Implemented for tuples of shared references, from `()` up to 12 elements.
pub trait FieldList {
    /// Encodes every field, in order.
    fn encode_fields(self, w: &mut BinaryWriter) -> Result<()>;
}

/// An ordered list of field destinations that can be decoded one after another.
///
/// Implemented for tuples of mutable references, from `()` up to 12 elements. Decoding stops at
/// the first field that fails; no field after it is written.
pub trait FieldListMut {
    /// Decodes every field, in order.
    fn decode_fields(self, r: &mut BinaryReader<'_>) -> Result<()>;
}

impl FieldList for () {
    #[inline(always)]
    fn encode_fields(self, _w: &mut BinaryWriter) -> Result<()> {
        Ok(())
    }
}

impl FieldListMut for () {
    #[inline(always)]
    fn decode_fields(self, _r: &mut BinaryReader<'_>) -> Result<()> {
        Ok(())
    }
}

macro_rules! field_list_tuple {
    ($($ty:ident $var:ident),+) => {
        impl<'f, $($ty: Encode + ?Sized),+> FieldList for ($(&'f $ty,)+) {
            fn encode_fields(self, w: &mut BinaryWriter) -> Result<()> {
                let ($($var,)+) = self;
                $($var.encode(w)?;)+
                Ok(())
            }
        }

        impl<'f, $($ty: Decode),+> FieldListMut for ($(&'f mut $ty,)+) {
            fn decode_fields(self, r: &mut BinaryReader<'_>) -> Result<()> {
                let ($($var,)+) = self;
                $(*$var = $ty::decode(r)?;)+
                Ok(())
            }
        }
    };
}

field_list_tuple!(A a);
field_list_tuple!(A a, B b);
field_list_tuple!(A a, B b, C c);
field_list_tuple!(A a, B b, C c, D d);
field_list_tuple!(A a, B b, C c, D d, E e);
field_list_tuple!(A a, B b, C c, D d, E e, F f);
field_list_tuple!(A a, B b, C c, D d, E e, F f, G g);
field_list_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);
field_list_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
field_list_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
field_list_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
field_list_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);

/// Implements [`Serializable`], [`Encode`] and [`Decode`] for a struct from an ordered list of
/// its fields.
///
/// The encoding is the `Aggregate` tag followed by each listed field. Fields that are not listed
/// are neither written nor read. [`Decode`] starts from `Default::default()`, so the type must
/// implement `Default`.
///
/// ```
/// use tagged_binary_io::{aggregate, BinaryWriter};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
///     label: String,
/// }
///
/// aggregate!(Point { x, y, label });
///
/// let p = Point { x: 3, y: -4, label: "origin-ish".into() };
/// let mut w = BinaryWriter::new();
/// w.write(&p).unwrap();
///
/// let q: Point = w.reader().read().unwrap();
/// assert_eq!(p, q);
/// ```
#[macro_export]
macro_rules! aggregate {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Serializable for $ty {
            fn serialize_into(&self, w: &mut $crate::BinaryWriter) -> $crate::Result<()> {
                w.write_tag($crate::TypeTag::Aggregate);
                w.write_args(($(&self.$field,)*))
            }

            fn deserialize_from(
                &mut self,
                r: &mut $crate::BinaryReader<'_>,
            ) -> $crate::Result<()> {
                r.expect_tag($crate::TypeTag::Aggregate)?;
                r.nested(|r| r.read_args(($(&mut self.$field,)*)))
            }
        }

        impl $crate::Encode for $ty {
            fn encode(&self, w: &mut $crate::BinaryWriter) -> $crate::Result<()> {
                $crate::Serializable::serialize_into(self, w)
            }
        }

        impl $crate::Decode for $ty {
            fn decode(r: &mut $crate::BinaryReader<'_>) -> $crate::Result<Self> {
                let mut value = <$ty as ::core::default::Default>::default();
                $crate::Serializable::deserialize_from(&mut value, r)?;
                ::core::result::Result::Ok(value)
            }
        }
    };
}
