//! Round trips of every supported shape, alone and nested in sequences and aggregates.

use bytes::Bytes;
use ledger_codec::{
    aggregate, encode_to_bytes, enumeration, Config, Decode, Mode, Read, Write,
};
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq)]
struct Holder<T> {
    before: u8,
    value: T,
    after: String,
}
aggregate!(Holder<T> { before, value, after });

#[derive(Debug, Clone, Copy, PartialEq)]
enum Level {
    Low,
    High = 0xFFFF,
}
enumeration!(Level: u16 { Low, High });

#[derive(Debug, Clone, PartialEq)]
struct Node {
    id: u64,
    children: Vec<Node>,
    parent: Option<Box<Node>>,
}
aggregate!(Node { id, children, parent });

fn init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn roundtrip<T: Write + Read + PartialEq + Debug>(value: &T, cfg: &Config) {
    let encoded = encode_to_bytes(value, cfg);
    let decoded = T::decode_cfg(encoded, cfg).unwrap();
    assert_eq!(&decoded, value);
}

/// Checks that `value` survives a round trip on its own, in a sequence, inside an aggregate
/// and in a sequence of aggregates, in both modes.
fn assert_symmetric<T: Write + Read + PartialEq + Debug + Clone>(value: T) {
    for mode in [Mode::Compact, Mode::Fixed] {
        let cfg = Config::from(mode);
        roundtrip(&value, &cfg);
        roundtrip(&vec![value.clone(), value.clone(), value.clone()], &cfg);
        roundtrip(&Vec::<T>::new(), &cfg);

        let holder = Holder {
            before: 0xAB,
            value: value.clone(),
            after: "end".into(),
        };
        roundtrip(&holder, &cfg);
        roundtrip(&vec![holder.clone(), holder], &cfg);
        roundtrip(&[value.clone(), value.clone()], &cfg);
        roundtrip(&Some(value.clone()), &cfg);
        roundtrip(&(value.clone(), 7u32, value.clone()), &cfg);
    }
}

#[test]
fn test_scalars() {
    init();
    for value in [0u8, 1, 0xFC, 0xFD, u8::MAX] {
        assert_symmetric(value);
    }
    for value in [0u16, 0xFC, 0xFD, u16::MAX] {
        assert_symmetric(value);
    }
    for value in [0u32, 0xFFFF, 0x1_0000, u32::MAX] {
        assert_symmetric(value);
    }
    for value in [0u64, u32::MAX as u64 + 1, u64::MAX] {
        assert_symmetric(value);
    }
    for value in [0usize, 70000] {
        assert_symmetric(value);
    }
    for value in [i8::MIN, -1, 0, i8::MAX] {
        assert_symmetric(value);
    }
    for value in [i16::MIN, 0, i16::MAX] {
        assert_symmetric(value);
    }
    for value in [i32::MIN, -1, i32::MAX] {
        assert_symmetric(value);
    }
    for value in [i64::MIN, 42, i64::MAX] {
        assert_symmetric(value);
    }
    assert_symmetric(i128::MIN);
    for value in [0.0f32, -1.5, f32::INFINITY] {
        assert_symmetric(value);
    }
    for value in [0.0f64, 1e-300, f64::NEG_INFINITY] {
        assert_symmetric(value);
    }
    assert_symmetric(true);
    assert_symmetric(false);
}

#[test]
fn test_containers() {
    init();
    assert_symmetric(String::new());
    assert_symmetric(String::from("ledger ✓"));
    assert_symmetric(Bytes::from_static(&[0, 1, 2, 0xFF]));
    assert_symmetric(vec![1u8, 2, 3]);
    assert_symmetric(vec![vec![-1i32], vec![]]);
    assert_symmetric([0xDEu8, 0xAD, 0xBE, 0xEF]);
    assert_symmetric([String::from("a"), String::from("b")]);
    assert_symmetric(None::<u32>);
    assert_symmetric(Some(Some(0u16)));
    assert_symmetric(Box::new(12u64));
    assert_symmetric(());
    assert_symmetric((1u8, -2i64, String::from("c")));
}

#[test]
fn test_enumerations() {
    init();
    assert_symmetric(Level::Low);
    assert_symmetric(Level::High);
}

#[test]
fn test_aggregates() {
    init();
    let leaf = Node {
        id: 3,
        children: vec![],
        parent: None,
    };
    let tree = Node {
        id: 1,
        children: vec![leaf.clone(), leaf.clone()],
        parent: Some(Box::new(Node {
            id: 0,
            children: vec![],
            parent: None,
        })),
    };
    assert_symmetric(leaf);
    assert_symmetric(tree);
    assert_symmetric(Holder {
        before: 1,
        value: Level::High,
        after: String::new(),
    });
}
