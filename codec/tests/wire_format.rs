//! Byte-exact encodings of representative values.

use bytes::BytesMut;
use ledger_codec::{
    aggregate, decode_from_bytes, decode_from_source, encode_to_bytes, encode_to_sink,
    enumeration, Config, Decode, Encode, Error, Mode, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH,
};

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    a: u8,
    b: i64,
}
aggregate!(Bar { a, b });

#[derive(Debug, Clone, PartialEq)]
struct Foo {
    a: u8,
    b: u16,
    c: u32,
    d: u64,
    e: Bar,
    f: Vec<u8>,
    g: i64,
    h: String,
}
aggregate!(Foo { a, b, c, d, e, f, g, h });

#[derive(Debug, Clone, Copy, PartialEq)]
enum Version {
    Legacy = 0,
    Current = 1,
}
enumeration!(Version: u16 { Legacy, Current });

#[derive(Debug, Clone, PartialEq)]
struct Link {
    id: u64,
    parent: Option<Box<Link>>,
}
aggregate!(Link { id, parent });

fn chain(depth: usize) -> Link {
    let mut link = Link {
        id: 0,
        parent: None,
    };
    for id in 1..depth as u64 {
        link = Link {
            id,
            parent: Some(Box::new(link)),
        };
    }
    link
}

fn foo() -> Foo {
    Foo {
        a: 1,
        b: 0xFFFF,
        c: 0xFFFF_FFFF,
        d: u64::MAX,
        e: Bar { a: 42, b: 42 },
        f: vec![1, 2, 3],
        g: 42,
        h: "69".into(),
    }
}

#[test]
fn test_aggregate_layout() {
    let mut expected = vec![1];
    expected.extend([0xFD, 0xFF, 0xFF]);
    expected.extend([0xFE, 0xFF, 0xFF, 0xFF, 0xFF]);
    expected.extend([0xFF; 9]);
    expected.extend([42, 0, 0, 0, 0, 0, 0, 0, 42]);
    expected.extend([3, 1, 2, 3]);
    expected.extend([0, 0, 0, 0, 0, 0, 0, 42]);
    expected.extend([2, b'6', b'9']);

    let cfg = Config::default();
    let encoded = encode_to_bytes(&foo(), &cfg);
    assert_eq!(&encoded[..], &expected[..]);
    assert_eq!(decode_from_bytes::<Foo>(&encoded, &cfg).unwrap(), foo());
}

#[test]
fn test_aggregate_layout_fixed() {
    let cfg = Config::from(Mode::Fixed);
    let encoded = encode_to_bytes(&foo(), &cfg);

    // Unsigned fields take their full width; the length prefix stays compact.
    assert_eq!(&encoded[..3], &[1, 0xFF, 0xFF]);
    assert_eq!(encoded.len(), 1 + 2 + 4 + 8 + 9 + 4 + 8 + 3);
    assert_eq!(decode_from_bytes::<Foo>(&encoded, &cfg).unwrap(), foo());

    // Decoding with the wrong mode does not reproduce the value.
    assert_ne!(
        decode_from_bytes::<Foo>(&encoded, &Config::default()).ok(),
        Some(foo())
    );
}

#[test]
fn test_varint_table() {
    let cases: [(u64, &[u8]); 7] = [
        (0, &[0x00]),
        (252, &[0xFC]),
        (253, &[0xFD, 0x00, 0xFD]),
        (65535, &[0xFD, 0xFF, 0xFF]),
        (65536, &[0xFE, 0x00, 0x01, 0x00, 0x00]),
        (u32::MAX as u64, &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF]),
        (
            u32::MAX as u64 + 1,
            &[0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00],
        ),
    ];
    for (value, bytes) in cases {
        assert_eq!(&value.encode()[..], bytes);
        assert_eq!(u64::decode(bytes).unwrap(), value);
    }
}

#[test]
fn test_bound_enforcement() {
    let encoded: &[u8] = &[0xFD, 0xFF, 0xFF];
    let expected = Error::LengthBoundExceeded {
        found: 65535,
        max: DEFAULT_MAX_LENGTH,
    };
    assert_eq!(Vec::<u64>::decode(encoded).unwrap_err(), expected);
    assert_eq!(String::decode(encoded).unwrap_err(), expected);
    assert_eq!(bytes::Bytes::decode(encoded).unwrap_err(), expected);

    // Nested lengths are bounded too.
    let nested: &[u8] = &[1, 0xFD, 0xFF, 0xFF];
    assert_eq!(Vec::<Vec<u8>>::decode(nested).unwrap_err(), expected);
}

#[test]
fn test_enum_fixed_width() {
    for cfg in [Config::default(), Config::from(Mode::Fixed)] {
        assert_eq!(&encode_to_bytes(&Version::Current, &cfg)[..], &[0x00, 0x01]);
        assert_eq!(&encode_to_bytes(&Version::Legacy, &cfg)[..], &[0x00, 0x00]);
    }
}

#[test]
fn test_concatenation() {
    let cfg = Config::default();
    let mut sink = BytesMut::new();
    encode_to_sink(&foo(), &mut sink, &cfg);
    encode_to_sink(&Some(Version::Current), &mut sink, &cfg);
    encode_to_sink(&foo(), &mut sink, &cfg);

    let mut source = sink.freeze();
    let first: Foo = decode_from_source(&mut source, &cfg).unwrap();
    let second: Option<Version> = decode_from_source(&mut source, &cfg).unwrap();
    let third: Foo = decode_from_source(&mut source, &cfg).unwrap();
    assert_eq!(first, foo());
    assert_eq!(second, Some(Version::Current));
    assert_eq!(third, foo());
    assert!(source.is_empty());
}

#[test]
fn test_invalid_utf8() {
    let encoded: &[u8] = &[3, 0xA7, 0x85, 0xAF];
    assert!(matches!(
        String::decode(encoded),
        Err(Error::InvalidEncoding(_, _))
    ));
}

#[test]
fn test_optional() {
    assert_eq!(&None::<Bar>.encode()[..], &[0]);
    let present = Some(Bar { a: 1, b: -1 });
    assert_eq!(
        &present.encode()[..],
        &[1, 1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );
    assert_eq!(Option::<Bar>::decode(present.encode()).unwrap(), present);
    assert!(matches!(
        Option::<Bar>::decode(&[2, 1, 0, 0, 0, 0, 0, 0, 0, 0][..]),
        Err(Error::InvalidEncoding(_, _))
    ));
}

#[test]
fn test_truncated_aggregate() {
    let encoded = foo().encode();
    for len in 0..encoded.len() {
        assert!(matches!(
            Foo::decode(&encoded[..len]),
            Err(Error::TruncatedInput { .. })
        ));
    }
}

#[test]
fn test_trailing_bytes() {
    let mut encoded = foo().encode();
    encoded.extend_from_slice(&[0xAA]);
    assert!(matches!(Foo::decode(&encoded[..]), Err(Error::ExtraData(1))));
    assert_eq!(
        decode_from_bytes::<Foo>(&encoded, &Config::default()).unwrap(),
        foo()
    );
}

#[test]
fn test_nesting_depth() {
    let cfg = Config::default();

    // Deepest accepted chain.
    let deepest = chain(DEFAULT_MAX_DEPTH);
    let encoded = encode_to_bytes(&deepest, &cfg);
    assert_eq!(decode_from_bytes::<Link>(&encoded, &cfg).unwrap(), deepest);

    // One level further is rejected.
    let encoded = encode_to_bytes(&chain(DEFAULT_MAX_DEPTH + 1), &cfg);
    assert_eq!(
        decode_from_bytes::<Link>(&encoded, &cfg),
        Err(Error::InvalidEncoding("nesting", "depth limit exceeded"))
    );

    // A tighter budget applies to the same bytes.
    let shallow = cfg.with_max_depth(3);
    let encoded = encode_to_bytes(&chain(3), &cfg);
    assert_eq!(decode_from_bytes::<Link>(&encoded, &shallow).unwrap(), chain(3));
    let encoded = encode_to_bytes(&chain(4), &cfg);
    assert!(decode_from_bytes::<Link>(&encoded, &shallow).is_err());
}

#[test]
fn test_untrusted_deep_nesting() {
    // Two hundred thousand `Some` links, then a terminating `None`.
    let mut encoded = [0u8, 1].repeat(200_000);
    encoded.extend_from_slice(&[0, 0]);
    assert_eq!(
        decode_from_bytes::<Link>(&encoded, &Config::default()),
        Err(Error::InvalidEncoding("nesting", "depth limit exceeded"))
    );
}
