use core::fmt;

/// The one-byte discriminant written immediately before every encoded value.
///
/// The numeric values are part of the wire format and must not change.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TypeTag {
    /// `bool`, payload is a single `0` or `1` byte.
    Bool = 0,
    /// A single byte (`u8` or `i8`).
    Char = 1,
    /// `i32`, 4 bytes little-endian.
    Int32 = 2,
    /// `i64`, 8 bytes little-endian.
    Int64 = 3,
    /// `f32`, 4 bytes little-endian.
    Float = 4,
    /// `f64`, 8 bytes little-endian.
    Double = 5,
    /// Length-prefixed byte string.
    String = 6,
    /// Ordered sequence (`Vec`, `VecDeque`, slices).
    Sequence = 7,
    /// Linked sequence (`LinkedList`).
    LinkedSequence = 8,
    /// Key-value mapping.
    Mapping = 9,
    /// Unique-element set.
    Set = 10,
    /// User-defined aggregate, followed by its fields in declared order.
    Aggregate = 11,
}

impl TypeTag {
    /// Every tag, in wire order.
    pub const ALL: [TypeTag; 12] = [
        TypeTag::Bool,
        TypeTag::Char,
        TypeTag::Int32,
        TypeTag::Int64,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::String,
        TypeTag::Sequence,
        TypeTag::LinkedSequence,
        TypeTag::Mapping,
        TypeTag::Set,
        TypeTag::Aggregate,
    ];

    /// Returns the wire byte for this tag.
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a wire byte back into a tag, if it names one.
    pub const fn from_u8(b: u8) -> Option<TypeTag> {
        if (b as usize) < Self::ALL.len() {
            Some(Self::ALL[b as usize])
        } else {
            None
        }
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> u8 {
        tag.as_u8()
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = u8;

    fn try_from(b: u8) -> Result<Self, u8> {
        Self::from_u8(b).ok_or(b)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::LinkedSequence => "linked sequence",
            Self::Mapping => "mapping",
            Self::Set => "set",
            Self::Aggregate => "aggregate",
        };
        f.write_str(name)
    }
}
