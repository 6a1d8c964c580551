use iltag::id::*;
use iltag::*;

fn decode_all(factory: &StandardTagFactory, data: &[u8]) -> Result<Box<dyn Tag>> {
    let mut cursor = data;
    let tag = factory.deserialize(&mut cursor)?;
    assert!(cursor.is_empty(), "{} bytes left over", cursor.len());
    Ok(tag)
}

#[test]
fn array_of_int_and_string() {
    let mut array = TagArrayTag::new();
    array.push(Box::new(Int32Tag::new(-5))).unwrap();
    array.push(Box::new(StringTag::new("ok"))).unwrap();

    let data = array.to_vec();
    assert_eq!(
        data,
        vec![0x15, 0x0A, 0x02, 0x06, 0xFF, 0xFF, 0xFF, 0xFB, 0x11, 0x02, 0x6F, 0x6B]
    );
    assert_eq!(array.encoded_size(), 12);

    let tag = decode_all(&StandardTagFactory::default(), &data).unwrap();
    assert_eq!(tag.id(), TAG_ILTAG_ARRAY);
    let back = tag.downcast_ref::<TagArrayTag>().unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].downcast_ref::<Int32Tag>().unwrap().value(), -5);
    assert_eq!(back[1].downcast_ref::<StringTag>().unwrap().value(), "ok");
    assert!(tag_eq(tag.as_ref(), &array));
}

#[test]
fn implicit_and_explicit_sizes() {
    let implicit: Vec<Box<dyn Tag>> = vec![
        Box::new(NullTag::default()),
        Box::new(BoolTag::new(true)),
        Box::new(UInt16Tag::new(7)),
        Box::new(Binary64Tag::new(0.5)),
        Box::new(ILIntTag::new(1 << 20)),
    ];
    for tag in implicit.iter() {
        assert!(tag.is_implicit());
        let data = tag.to_vec();
        assert_eq!(data.len() as u64, 1 + tag.value_size());
    }

    let explicit: Vec<Box<dyn Tag>> = vec![
        Box::new(StringTag::new("x".repeat(300))),
        Box::new(ByteArrayTag::from_bytes(&[9; 10])),
        Box::new(ILIntArrayTag::from(vec![1, 2, 3])),
        Box::new(RawTag::from_bytes(1000, &[1, 2])),
    ];
    for tag in explicit.iter() {
        assert!(!tag.is_implicit());
        let data = tag.to_vec();
        let mut header = Vec::new();
        varint::encode_vec(tag.id(), &mut header);
        varint::encode_vec(tag.value_size(), &mut header);
        assert_eq!(&data[..header.len()], &header[..]);
        assert_eq!(data.len() as u64, tag.encoded_size());

        let back = decode_all(&StandardTagFactory::default(), &data).unwrap();
        assert_eq!(back.to_vec(), data);
    }
}

fn with_declared_len(id: TagId, len: u64, value: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    varint::encode_vec(id, &mut data);
    varint::encode_vec(len, &mut data);
    data.extend_from_slice(value);
    data
}

fn assert_size_mismatch(factory: &StandardTagFactory, id: TagId, data: &[u8]) {
    let mut cursor = data;
    match factory.deserialize(&mut cursor) {
        Err(Error::ValueSizeMismatch { id: found, .. }) => assert_eq!(found, id),
        other => panic!("expected a size mismatch for id {}, got {:?}", id, other),
    }
    assert_eq!(cursor.len(), data.len());
}

#[test]
fn container_must_be_exact() {
    let mut array = TagArrayTag::new();
    array.push(Box::new(Int32Tag::new(1))).unwrap();
    array.push(Box::new(NullTag::default())).unwrap();
    let mut value = Vec::new();
    array.serialize_value(&mut value);
    let declared = value.len() as u64;
    let factory = StandardTagFactory::default();

    // Any byte past the counted entries is refused, including a complete null or bool prefix.
    for extra in 0..=255u8 {
        let mut padded = value.clone();
        padded.push(extra);
        let data = with_declared_len(TAG_ILTAG_ARRAY, declared + 1, &padded);
        assert_size_mismatch(&factory, TAG_ILTAG_ARRAY, &data);
    }

    // Declaring one byte fewer cuts the null tag off.
    let data = with_declared_len(TAG_ILTAG_ARRAY, declared - 1, &value);
    assert_size_mismatch(&factory, TAG_ILTAG_ARRAY, &data);

    let data = with_declared_len(TAG_ILTAG_ARRAY, declared, &value);
    let tag = decode_all(&factory, &data).unwrap();
    assert_eq!(tag.downcast_ref::<TagArrayTag>().unwrap().len(), 2);
}

#[test]
fn ilint_array_must_be_exact() {
    let array = ILIntArrayTag::from(vec![1, 2, 300]);
    let mut value = Vec::new();
    array.serialize_value(&mut value);
    assert_eq!(value, [0x03, 0x01, 0x02, 0xF8, 0x34]);
    let declared = value.len() as u64;
    let factory = StandardTagFactory::default();

    for extra in 0..=255u8 {
        let mut padded = value.clone();
        padded.push(extra);
        let data = with_declared_len(TAG_ILINT64_ARRAY, declared + 1, &padded);
        assert_size_mismatch(&factory, TAG_ILINT64_ARRAY, &data);
    }

    // One byte short splits the last entry.
    let data = with_declared_len(TAG_ILINT64_ARRAY, declared - 1, &value);
    assert_size_mismatch(&factory, TAG_ILINT64_ARRAY, &data);

    let data = with_declared_len(TAG_ILINT64_ARRAY, declared, &value);
    let tag = decode_all(&factory, &data).unwrap();
    assert_eq!(
        tag.downcast_ref::<ILIntArrayTag>().unwrap().as_slice(),
        &[1, 2, 300]
    );
}

#[test]
fn tag_sequence_reads_to_the_end() {
    let mut seq = TagSequenceTag::new();
    seq.push(Box::new(NullTag::default())).unwrap();
    seq.push(Box::new(Int32Tag::new(1))).unwrap();
    let mut value = Vec::new();
    seq.serialize_value(&mut value);
    let declared = value.len() as u64;
    let factory = StandardTagFactory::default();

    // A trailing null is one more entry.
    let mut padded = value.clone();
    padded.push(0x00);
    let data = with_declared_len(TAG_ILTAG_SEQ, declared + 1, &padded);
    let tag = decode_all(&factory, &data).unwrap();
    assert_eq!(tag.downcast_ref::<TagSequenceTag>().unwrap().len(), 3);

    // A trailing bool id has no byte left for its value.
    let mut padded = value.clone();
    padded.push(0x01);
    let data = with_declared_len(TAG_ILTAG_SEQ, declared + 1, &padded);
    assert_size_mismatch(&factory, TAG_ILTAG_SEQ, &data);

    // One byte short splits the Int32.
    let data = with_declared_len(TAG_ILTAG_SEQ, declared - 1, &value);
    assert_size_mismatch(&factory, TAG_ILTAG_SEQ, &data);
}

#[test]
fn unknown_id_policy() {
    let raw = RawTag::from_bytes(9999, &[0xDE, 0xAD, 0xBE, 0xEF]);
    let data = raw.to_vec();

    let lenient = StandardTagFactory::new(false, false);
    let tag = decode_all(&lenient, &data).unwrap();
    assert!(tag.is::<RawTag>());
    assert_eq!(tag.id(), 9999);
    assert_eq!(tag.to_vec(), data);

    let strict = StandardTagFactory::new(false, true);
    let mut cursor = &data[..];
    assert_eq!(strict.deserialize(&mut cursor), Err(Error::UnknownTagId(9999)));

    // Unknown ids inside a container follow the same policy.
    let mut array = TagArrayTag::new();
    array.push(Box::new(raw)).unwrap();
    let data = array.to_vec();
    assert!(decode_all(&lenient, &data).is_ok());
    let mut cursor = &data[..];
    assert_eq!(strict.deserialize(&mut cursor), Err(Error::UnknownTagId(9999)));
}

#[test]
fn secure_factory() {
    let data = ByteArrayTag::from_bytes(b"secret").to_vec();
    let factory = StandardTagFactory::with_config(FactoryConfig::new(true, false));
    let tag = decode_all(&factory, &data).unwrap();
    let bytes = tag.downcast_ref::<ByteArrayTag>().unwrap();
    assert!(bytes.secure());
    assert_eq!(bytes.value().as_slice(), b"secret");
}

#[test]
fn ilint_boundaries() {
    let mut buf = [0u8; varint::MAX_SIZE];
    for (v, expect) in [
        (0u64, &[0x00][..]),
        (247, &[0xF7][..]),
        (248, &[0xF8, 0x00][..]),
        (503, &[0xF8, 0xFF][..]),
        (504, &[0xF9, 0x01, 0x00][..]),
        (
            u64::MAX,
            &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x07][..],
        ),
    ] {
        let len = varint::encode(v, &mut buf).unwrap();
        assert_eq!(&buf[..len], expect);
        assert_eq!(varint::decode(expect).unwrap(), (v, len));
    }

    // 0xF8 followed by a byte is always 248 more than that byte.
    assert_eq!(varint::decode(&[0xF8, 0x05]).unwrap(), (253, 2));
    assert!(matches!(
        varint::decode(&[0xF9, 0x00, 0x05]),
        Err(Error::NonCanonicalEncoding { .. })
    ));
    assert_eq!(
        varint::decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x08]),
        Err(Error::Overflow)
    );
}

#[test]
fn header_sizes() {
    let flag = BoolTag::new(true);
    assert_eq!(flag.encoded_size(), varint::size(TAG_BOOL) as u64 + 1);
    let text = StringTag::new("ab");
    assert_eq!(
        text.encoded_size(),
        (varint::size(TAG_STRING) + varint::size(2)) as u64 + 2
    );
}

#[test]
fn empty_values() {
    let factory = StandardTagFactory::default();
    // Arrays still write their zero count.
    let empties: Vec<(Box<dyn Tag>, usize)> = vec![
        (Box::new(StringTag::default()), 2),
        (Box::new(ByteArrayTag::default()), 2),
        (Box::new(BigIntTag::default()), 2),
        (Box::new(TagSequenceTag::new()), 2),
        (Box::new(ILIntArrayTag::new()), 3),
        (Box::new(TagArrayTag::new()), 3),
    ];
    for (tag, len) in empties.iter() {
        let data = tag.to_vec();
        assert_eq!(data.len(), *len, "tag id {}", tag.id());
        let back = decode_all(&factory, &data).unwrap();
        assert_eq!(&back, tag);
    }
}
