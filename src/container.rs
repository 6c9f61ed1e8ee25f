//! Codecs for containers: sequences, linked sequences, mappings and sets.
//!
//! Every container is written as its tag, the element count as a tagged `Int64`, then each
//! element's own tagged encoding. Elements may be any type that implements [`Encode`] and
//! [`Decode`], including other containers and aggregates.
//!
//! Mappings and sets are written in whatever order the collection iterates. That order is not
//! part of the format; only the decoded contents are guaranteed to match.

extern crate alloc;
use alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
use alloc::vec::Vec;

use crate::{BinaryReader, BinaryWriter, Decode, Encode, Result, TypeTag};

fn encode_elements<'e, T, I>(w: &mut BinaryWriter, tag: TypeTag, count: usize, items: I) -> Result<()>
where
    T: Encode + 'e + ?Sized,
    I: IntoIterator<Item = &'e T>,
{
    w.write_container_header(tag, count)?;
    for item in items {
        item.encode(w)?;
    }
    Ok(())
}

fn encode_entries<'e, K, V, I>(w: &mut BinaryWriter, count: usize, entries: I) -> Result<()>
where
    K: Encode + 'e,
    V: Encode + 'e,
    I: IntoIterator<Item = (&'e K, &'e V)>,
{
    w.write_container_header(TypeTag::Mapping, count)?;
    for (k, v) in entries {
        k.encode(w)?;
        v.encode(w)?;
    }
    Ok(())
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        encode_elements(w, TypeTag::Sequence, self.len(), self)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        self.as_slice().encode(w)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        self.as_slice().encode(w)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        r.nested(|r| {
            let count = r.read_container_header(TypeTag::Sequence)?;
            let mut out = Vec::with_capacity(r.capacity_hint(count));
            for _ in 0..count {
                out.push(T::decode(r)?);
            }
            Ok(out)
        })
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        encode_elements(w, TypeTag::Sequence, self.len(), self)
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        Vec::<T>::decode(r).map(VecDeque::from)
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        encode_elements(w, TypeTag::LinkedSequence, self.len(), self)
    }
}

impl<T: Decode> Decode for LinkedList<T> {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        r.nested(|r| {
            let count = r.read_container_header(TypeTag::LinkedSequence)?;
            let mut out = LinkedList::new();
            for _ in 0..count {
                out.push_back(T::decode(r)?);
            }
            Ok(out)
        })
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        encode_entries(w, self.len(), self)
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        r.nested(|r| {
            let count = r.read_container_header(TypeTag::Mapping)?;
            let mut out = BTreeMap::new();
            for _ in 0..count {
                let k = K::decode(r)?;
                let v = V::decode(r)?;
                out.insert(k, v);
            }
            Ok(out)
        })
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
        encode_elements(w, TypeTag::Set, self.len(), self)
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
        r.nested(|r| {
            let count = r.read_container_header(TypeTag::Set)?;
            let mut out = BTreeSet::new();
            for _ in 0..count {
                out.insert(T::decode(r)?);
            }
            Ok(out)
        })
    }
}

#[cfg(feature = "std")]
mod hash_impls {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::hash::{BuildHasher, Hash};

    impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
        fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
            encode_entries(w, self.len(), self)
        }
    }

    impl<K, V, S> Decode for HashMap<K, V, S>
    where
        K: Decode + Eq + Hash,
        V: Decode,
        S: BuildHasher + Default,
    {
        fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
            r.nested(|r| {
                let count = r.read_container_header(TypeTag::Mapping)?;
                let hint = r.capacity_hint(count);
                let mut out = HashMap::with_capacity_and_hasher(hint, S::default());
                for _ in 0..count {
                    let k = K::decode(r)?;
                    let v = V::decode(r)?;
                    out.insert(k, v);
                }
                Ok(out)
            })
        }
    }

    impl<T: Encode, S> Encode for HashSet<T, S> {
        fn encode(&self, w: &mut BinaryWriter) -> Result<()> {
            encode_elements(w, TypeTag::Set, self.len(), self)
        }
    }

    impl<T, S> Decode for HashSet<T, S>
    where
        T: Decode + Eq + Hash,
        S: BuildHasher + Default,
    {
        fn decode(r: &mut BinaryReader<'_>) -> Result<Self> {
            r.nested(|r| {
                let count = r.read_container_header(TypeTag::Set)?;
                let hint = r.capacity_hint(count);
                let mut out = HashSet::with_capacity_and_hasher(hint, S::default());
                for _ in 0..count {
                    out.insert(T::decode(r)?);
                }
                Ok(out)
            })
        }
    }
}
