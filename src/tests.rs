use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use crate::error::ErrorKind;
use crate::{
    read_dbus_binary, signature_of, write_dbus_binary, Body, BodyBuf, Endianness, Loadable,
    SignatureBuf, Storable, Variant,
};

fn round_trip<T>(value: T)
where
    T: Storable + Loadable + PartialEq + fmt::Debug,
{
    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf).expect("write");

    let back: T = read_dbus_binary(&buf).expect("read");
    assert_eq!(back, value);

    // Writing after an arbitrary prefix must produce the same value when
    // read back from the same offset.
    let mut buf = vec![0xaa, 0xbb, 0xcc];
    write_dbus_binary(&value, &mut buf).expect("write at offset");

    let mut body = Body::new(&buf);
    body.advance(3).expect("advance");
    let back = T::load_from(&mut body).expect("read at offset");
    assert_eq!(back, value);
}

#[test]
fn number_scenarios() -> crate::Result<()> {
    let mut buf = Vec::new();
    write_dbus_binary(&0x12u8, &mut buf)?;
    assert_eq!(buf, [0x12]);

    let mut buf = Vec::new();
    write_dbus_binary(&0x1234u16, &mut buf)?;
    assert_eq!(buf, [0x34, 0x12]);

    let mut buf = Vec::new();
    write_dbus_binary(&0x12345678u32, &mut buf)?;
    assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);

    let mut buf = Vec::new();
    write_dbus_binary(&0x123456789abcdef0u64, &mut buf)?;
    assert_eq!(buf, [0xf0, 0xde, 0xbc, 0x9a, 0x78, 0x56, 0x34, 0x12]);

    let mut buf = Vec::new();
    write_dbus_binary(&-0x1234i16, &mut buf)?;
    assert_eq!(buf, [0xcc, 0xed]);

    let mut buf = Vec::new();
    write_dbus_binary(&-0x12345678i32, &mut buf)?;
    assert_eq!(buf, [0x88, 0xa9, 0xcb, 0xed]);

    let mut buf = Vec::new();
    write_dbus_binary(&1337.42f64, &mut buf)?;
    assert_eq!(buf, [0x48, 0xe1, 0x7a, 0x14, 0xae, 0xe5, 0x94, 0x40]);

    round_trip(0x12u8);
    round_trip(0x1234u16);
    round_trip(-0x123456789abcdef0i64);
    round_trip(1337.42f64);
    Ok(())
}

#[test]
fn bool_scenarios() -> crate::Result<()> {
    let mut buf = Vec::new();
    write_dbus_binary(&true, &mut buf)?;
    assert_eq!(buf, [0x01, 0x00, 0x00, 0x00]);

    let mut buf = Vec::new();
    write_dbus_binary(&false, &mut buf)?;
    assert_eq!(buf, [0x00, 0x00, 0x00, 0x00]);

    round_trip(true);
    round_trip(false);
    Ok(())
}

#[test]
fn string_scenario() -> crate::Result<()> {
    let mut buf = Vec::new();
    write_dbus_binary("this is a message", &mut buf)?;

    let expected = [
        17, 0, 0, 0, b't', b'h', b'i', b's', b' ', b'i', b's', b' ', b'a', b' ', b'm', b'e',
        b's', b's', b'a', b'g', b'e', 0,
    ];
    assert_eq!(buf, expected);

    let back: String = read_dbus_binary(&buf)?;
    assert_eq!(back, "this is a message");

    round_trip(String::from("það"));
    Ok(())
}

#[test]
fn record_signature_scenario() -> crate::Result<()> {
    // struct { a: u64, bars: Vec<(String, u64)>, bars2: Vec<(String, u64)>, b: String }
    let signature =
        signature_of::<(u64, Vec<(String, u64)>, Vec<(String, u64)>, String)>().map_err(
            |error| crate::Error::new(error.into(), 0),
        )?;

    assert_eq!(signature, "(ta(st)a(st)s)");

    let mut buf = Vec::new();
    write_dbus_binary(&signature, &mut buf)?;

    let expected = [
        14, b'(', b't', b'a', b'(', b's', b't', b')', b'a', b'(', b's', b't', b')', b's', b')',
        0,
    ];
    assert_eq!(buf, expected);

    let back: SignatureBuf = read_dbus_binary(&buf)?;
    assert_eq!(back, signature);
    Ok(())
}

#[test]
fn vector_of_strings_scenario() -> crate::Result<()> {
    let value = vec![
        String::from("hello"),
        String::from("dbus"),
        String::from("world"),
    ];

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;

    let expected = [
        34, 0, 0, 0, // payload length
        5, 0, 0, 0, b'h', b'e', b'l', b'l', b'o', 0, 0, 0, // "hello" + padding
        4, 0, 0, 0, b'd', b'b', b'u', b's', 0, 0, 0, 0, // "dbus" + padding
        5, 0, 0, 0, b'w', b'o', b'r', b'l', b'd', 0, // "world", no trailing padding
    ];
    assert_eq!(buf, expected);

    let back: Vec<String> = read_dbus_binary(&buf)?;
    assert_eq!(back, value);
    Ok(())
}

#[test]
fn vector_of_vectors_scenario() -> crate::Result<()> {
    let value = vec![vec![1u64, 2], vec![3, 4, 5]];

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;

    let expected = [
        0x34, 0, 0, 0, // outer payload length (52 bytes)
        0x10, 0, 0, 0, // first inner length (16 bytes)
        1, 0, 0, 0, 0, 0, 0, 0, //
        2, 0, 0, 0, 0, 0, 0, 0, //
        0x18, 0, 0, 0, // second inner length (24 bytes)
        0, 0, 0, 0, // padding to the element alignment
        3, 0, 0, 0, 0, 0, 0, 0, //
        4, 0, 0, 0, 0, 0, 0, 0, //
        5, 0, 0, 0, 0, 0, 0, 0, //
    ];
    assert_eq!(buf, expected);

    let back: Vec<Vec<u64>> = read_dbus_binary(&buf)?;
    assert_eq!(back, value);
    Ok(())
}

#[test]
fn write_at_offset_scenario() -> crate::Result<()> {
    let mut buf = vec![0];
    write_dbus_binary(&0x1234u64, &mut buf)?;

    assert_eq!(buf.len(), 16);
    assert_eq!(
        buf,
        [0, 0, 0, 0, 0, 0, 0, 0, 0x34, 0x12, 0, 0, 0, 0, 0, 0]
    );
    Ok(())
}

#[test]
fn empty_array_pads_to_element_alignment() -> crate::Result<()> {
    let value: Vec<u64> = Vec::new();

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;
    assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0, 0]);

    let back: Vec<u64> = read_dbus_binary(&buf)?;
    assert!(back.is_empty());

    // The element type of an array of arrays aligns to 4, so no padding
    // follows the length word.
    let value: Vec<Vec<u64>> = Vec::new();

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;
    assert_eq!(buf, [0, 0, 0, 0]);

    let back: Vec<Vec<u64>> = read_dbus_binary(&buf)?;
    assert!(back.is_empty());
    Ok(())
}

#[test]
fn trivial_vector() -> crate::Result<()> {
    let value = vec![10u64, 20, 30];

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;

    let expected = [
        24, 0, 0, 0, // payload length
        0, 0, 0, 0, // padding
        10, 0, 0, 0, 0, 0, 0, 0, //
        20, 0, 0, 0, 0, 0, 0, 0, //
        30, 0, 0, 0, 0, 0, 0, 0, //
    ];
    assert_eq!(buf, expected);

    round_trip(value);
    Ok(())
}

#[test]
fn sequences_round_trip() {
    round_trip(vec![String::from("foo"), String::from("bar")]);
    round_trip([1u32, 2, 3]);

    let mut deque = std::collections::VecDeque::new();
    deque.push_back(1u16);
    deque.push_back(2u16);
    round_trip(deque);
}

#[test]
fn sets_compare_by_set_equality() -> crate::Result<()> {
    let value: HashSet<String> = ["foo", "baz", "bar"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;

    let back: HashSet<String> = read_dbus_binary(&buf)?;
    assert_eq!(back, value);

    // An ordered set has a deterministic wire form.
    let value: BTreeSet<String> = ["foo", "baz", "bar"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;

    let expected = [
        24, 0, 0, 0, //
        3, 0, 0, 0, b'b', b'a', b'r', 0, //
        3, 0, 0, 0, b'b', b'a', b'z', 0, //
        3, 0, 0, 0, b'f', b'o', b'o', 0, //
    ];
    assert_eq!(buf, expected);

    let back: BTreeSet<String> = read_dbus_binary(&buf)?;
    assert_eq!(back, value);
    Ok(())
}

#[test]
fn maps() -> crate::Result<()> {
    assert_eq!(
        signature_of::<BTreeMap<String, u32>>().map_err(|e| crate::Error::new(e.into(), 0))?,
        "a{su}"
    );

    let mut value = BTreeMap::new();
    value.insert(String::from("a"), 1u32);
    value.insert(String::from("b"), 2u32);

    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;

    let expected = [
        28, 0, 0, 0, // payload length
        0, 0, 0, 0, // padding to the dict entry alignment
        1, 0, 0, 0, b'a', 0, 0, 0, // key "a" + padding
        1, 0, 0, 0, // value 1
        0, 0, 0, 0, // padding to the next entry
        1, 0, 0, 0, b'b', 0, 0, 0, // key "b" + padding
        2, 0, 0, 0, // value 2
    ];
    assert_eq!(buf, expected);

    let back: BTreeMap<String, u32> = read_dbus_binary(&buf)?;
    assert_eq!(back, value);

    let mut value = HashMap::new();
    value.insert(String::from("hello"), vec![1u64, 2]);
    value.insert(String::from("world"), Vec::new());
    round_trip(value);
    Ok(())
}

#[test]
fn structs_round_trip() {
    round_trip((0x12u8,));
    round_trip((20u16, 30u32));
    round_trip((
        10u64,
        vec![(String::from("a"), 1u64), (String::from("b"), 2u64)],
        String::from("tail"),
    ));
}

#[test]
fn struct_wire_form() -> crate::Result<()> {
    let mut buf = Vec::new();
    write_dbus_binary(&0x12u8, &mut buf)?;
    write_dbus_binary(&(20u16, 30u32), &mut buf)?;

    // The struct aligns to 8 relative to the start of the body.
    let expected = [
        0x12, 0, 0, 0, 0, 0, 0, 0, // u8 then padding
        20, 0, 0, 0, // u16 then padding to u32
        30, 0, 0, 0, //
    ];
    assert_eq!(buf, expected);

    let mut body = Body::new(&buf);
    assert_eq!(u8::load_from(&mut body)?, 0x12);
    assert_eq!(<(u16, u32)>::load_from(&mut body)?, (20, 30));
    Ok(())
}

#[test]
fn enums() -> crate::Result<()> {
    crate::int_enum! {
        #[repr(u8)]
        enum Small {
            A = 1,
            B = 2,
            C = 3,
        }
    }

    crate::str_enum! {
        enum Named {
            A = "a",
            B = "b",
            C = "c",
        }
    }

    let mut buf = Vec::new();
    write_dbus_binary(&Small::A, &mut buf)?;
    assert_eq!(buf, [0x01]);
    assert_eq!(read_dbus_binary::<Small>(&[0x03])?, Small::C);

    let error = read_dbus_binary::<Small>(&[0x09]).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnknownEnumerator);

    let mut buf = Vec::new();
    write_dbus_binary(&Named::B, &mut buf)?;
    assert_eq!(buf, [1, 0, 0, 0, b'b', 0]);
    assert_eq!(read_dbus_binary::<Named>(&buf)?, Named::B);

    let bad = [1, 0, 0, 0, b'x', 0];
    let error = read_dbus_binary::<Named>(&bad).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnknownEnumerator);
    assert_eq!(error.offset(), 0);

    round_trip(Small::B);
    round_trip(Named::C);
    Ok(())
}

#[test]
fn variants() -> crate::Result<()> {
    let value = Variant::String(String::from("foo"));
    let mut buf = Vec::new();
    write_dbus_binary(&value, &mut buf)?;
    assert_eq!(buf, [1, b's', 0, 0, 3, 0, 0, 0, b'f', b'o', b'o', 0]);

    round_trip(Variant::Byte(0x12));
    round_trip(Variant::Bool(true));
    round_trip(Variant::Double(1337.42));
    round_trip(Variant::Uint64(0x123456789abcdef0));
    round_trip(Variant::Variant(Box::new(Variant::Uint32(42))));
    round_trip(Variant::Struct(vec![
        Variant::Uint32(1),
        Variant::String(String::from("two")),
    ]));

    let element = SignatureBuf::new(b"t").map_err(|e| crate::Error::new(e.into(), 0))?;
    round_trip(Variant::Array(
        element.clone(),
        vec![Variant::Uint64(1), Variant::Uint64(2)],
    ));

    // An empty array keeps its element type through a round trip.
    round_trip(Variant::Array(element, Vec::new()));
    Ok(())
}

#[test]
fn variant_dict() -> crate::Result<()> {
    let element = SignatureBuf::new(b"{sv}").map_err(|e| crate::Error::new(e.into(), 0))?;

    let value = Variant::Array(
        element,
        vec![Variant::DictEntry(
            Box::new(Variant::String(String::from("key"))),
            Box::new(Variant::Variant(Box::new(Variant::Uint32(7)))),
        )],
    );

    round_trip(value);
    Ok(())
}

#[test]
fn variant_signature_too_long() {
    // "(" followed by 255 "u" codes exceeds the 255 byte signature cap.
    let value = Variant::Struct(vec![Variant::Uint32(0); 255]);

    let mut buf = Vec::new();
    let error = write_dbus_binary(&value, &mut buf).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::SignatureTooLong);
}

#[test]
fn variant_rejects_top_level_dict_entry() {
    let value = Variant::DictEntry(
        Box::new(Variant::String(String::from("key"))),
        Box::new(Variant::Uint32(7)),
    );

    let mut buf = Vec::new();
    let error = write_dbus_binary(&value, &mut buf).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedShape);
}

#[test]
fn variant_rejects_mixed_array() {
    let element = SignatureBuf::new(b"u").expect("valid signature");

    let value = Variant::Array(
        element,
        vec![Variant::Uint32(1), Variant::String(String::from("two"))],
    );

    let mut buf = Vec::new();
    let error = write_dbus_binary(&value, &mut buf).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedShape);
}

#[test]
fn big_endian_extension_point() -> crate::Result<()> {
    let mut buf = Vec::new();
    let mut body = BodyBuf::with_endianness(&mut buf, Endianness::BIG);
    0x12345678u32.store_to(&mut body)?;
    assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);

    let mut body = Body::with_endianness(&buf, Endianness::BIG);
    assert_eq!(u32::load_from(&mut body)?, 0x12345678);
    Ok(())
}

#[test]
fn string_write_errors() {
    let mut buf = Vec::new();
    let error = write_dbus_binary("interior\0nul", &mut buf).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::EmbeddedNul);
}

#[test]
fn string_read_errors() {
    // Missing NUL terminator.
    let bad = [3, 0, 0, 0, b'f', b'o', b'o', 1];
    let error = read_dbus_binary::<String>(&bad).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::MissingNulTerminator);
    assert_eq!(error.offset(), 7);

    // Interior NUL.
    let bad = [3, 0, 0, 0, b'f', 0, b'o', 0];
    let error = read_dbus_binary::<String>(&bad).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::EmbeddedNul);

    // Invalid UTF-8.
    let bad = [2, 0, 0, 0, 0xff, 0xfe, 0];
    let error = read_dbus_binary::<String>(&bad).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidUtf8(..)));

    // Truncated.
    let bad = [5, 0, 0, 0, b'f'];
    let error = read_dbus_binary::<String>(&bad).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::OutOfBounds);
}

#[test]
fn array_read_errors() {
    // Length word exceeding the wire cap of 2^26.
    let bad = [1, 0, 0, 4, 0, 0, 0, 0];
    let error = read_dbus_binary::<Vec<u64>>(&bad).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ArrayTooLong(..)));

    // A length which no whole number of elements can satisfy.
    let bad = [
        12, 0, 0, 0, //
        0, 0, 0, 0, //
        1, 0, 0, 0, 0, 0, 0, 0, //
        2, 0, 0, 0, 0, 0, 0, 0, //
    ];
    let error = read_dbus_binary::<Vec<u64>>(&bad).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ArrayLengthMismatch);
}

#[test]
fn invalid_signature_read() {
    let bad = [1, b'w', 0];
    let error = read_dbus_binary::<SignatureBuf>(&bad).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidSignature(..)));
    assert_eq!(error.offset(), 0);
}

#[test]
fn fixed_size_array_requires_exact_count() -> crate::Result<()> {
    let mut buf = Vec::new();
    write_dbus_binary(&[1u32, 2, 3], &mut buf)?;

    let error = read_dbus_binary::<[u32; 2]>(&buf).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ArrayLengthMismatch);

    let back: [u32; 3] = read_dbus_binary(&buf)?;
    assert_eq!(back, [1, 2, 3]);
    Ok(())
}
