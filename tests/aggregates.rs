use std::collections::{BTreeMap, HashSet};

use tagged_binary_io::{aggregate, BinaryReader, BinaryWriter, Error, Serializable, TypeTag};

#[derive(Default, Debug, PartialEq, Clone)]
struct Record {
    id: i32,
    name: String,
    values: Vec<i32>,
}

aggregate!(Record { id, name, values });

#[derive(Default, Debug, PartialEq)]
struct Catalog {
    title: String,
    by_id: BTreeMap<i64, Record>,
    tags: HashSet<String>,
    featured: Record,
}

aggregate!(Catalog {
    title,
    by_id,
    tags,
    featured,
});

#[derive(Default, Debug, PartialEq)]
struct Empty {}

aggregate!(Empty {});

fn sample() -> Record {
    Record {
        id: 7,
        name: "bob".into(),
        values: vec![1, 2, 3],
    }
}

#[test]
fn record_round_trip() {
    let rec = sample();
    let mut w = BinaryWriter::new();
    w.write(&rec).unwrap();
    assert_eq!(w.as_bytes()[0], TypeTag::Aggregate.as_u8());

    let mut r = w.reader();
    assert_eq!(r.read::<Record>(), Ok(rec));
    assert!(r.is_empty());
}

#[test]
fn corrupt_third_field_stops_decode() {
    let rec = sample();
    let mut w = BinaryWriter::new();
    w.write_object(&rec).unwrap();
    let mut bytes = w.into_inner();

    // Offset of the third field's tag: aggregate tag plus the first two fields.
    let offset = {
        let mut prefix = BinaryWriter::new();
        prefix.write_tag(TypeTag::Aggregate);
        prefix.write_args((&rec.id, &rec.name)).unwrap();
        prefix.len()
    };
    assert_eq!(bytes[offset], TypeTag::Sequence.as_u8());
    bytes[offset] = TypeTag::Set.as_u8();

    let mut dest = Record {
        id: 0,
        name: String::new(),
        values: vec![99],
    };
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(
        r.read_object(&mut dest),
        Err(Error::TypeMismatch {
            expected: TypeTag::Sequence,
            found: TypeTag::Set.as_u8(),
        })
    );

    // Fields before the failure were written, the failing one was not.
    assert_eq!(dest.id, 7);
    assert_eq!(dest.name, "bob");
    assert_eq!(dest.values, [99]);
}

#[test]
fn nested_aggregates_in_containers() {
    let a = sample();
    let b = Record {
        id: -1,
        name: "åsa".into(),
        values: vec![],
    };
    let catalog = Catalog {
        title: "people".into(),
        by_id: BTreeMap::from([(1, a.clone()), (2, b)]),
        tags: ["x".to_string(), "y".to_string()].into_iter().collect(),
        featured: a,
    };

    let mut w = BinaryWriter::with_capacity(16);
    w.write(&catalog).unwrap();
    w.write(&Empty {}).unwrap();

    let mut r = w.reader();
    let decoded: Catalog = r.read().unwrap();
    assert_eq!(decoded, catalog);
    assert_eq!(r.read::<Empty>(), Ok(Empty {}));
    assert!(r.is_empty());
}

#[test]
fn empty_aggregate_is_just_a_tag() {
    let mut w = BinaryWriter::new();
    Empty {}.serialize_into(&mut w).unwrap();
    assert_eq!(w.as_bytes(), [TypeTag::Aggregate.as_u8()]);
}

#[test]
fn sequence_of_aggregates() {
    let records: Vec<Record> = (0..50)
        .map(|i| Record {
            id: i,
            name: format!("r{i}"),
            values: (0..i).collect(),
        })
        .collect();

    let mut w = BinaryWriter::new();
    w.write(&records).unwrap();
    let decoded: Vec<Record> = w.reader().read().unwrap();
    assert_eq!(decoded.len(), 50);
    assert_eq!(decoded, records);
}

#[test]
fn truncated_aggregate() {
    let mut w = BinaryWriter::new();
    w.write(&sample()).unwrap();
    let bytes = w.as_bytes();

    for cut in 0..bytes.len() {
        let mut r = BinaryReader::new(&bytes[..cut]);
        assert!(
            matches!(r.read::<Record>(), Err(Error::OutOfBounds { .. })),
            "cut at {cut}"
        );
    }
}
