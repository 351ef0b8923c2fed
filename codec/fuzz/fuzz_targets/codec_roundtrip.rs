#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use ledger_codec::{
    aggregate, decode_from_bytes, encode_to_bytes, enumeration, Config, Decode, Encode, Error,
    Mode, Read, Write,
};
use libfuzzer_sys::fuzz_target;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Arbitrary)]
enum Kind {
    Transfer = 1,
    Stake = 2,
    Vote = 0x0100,
}
enumeration!(Kind: u16 { Transfer, Stake, Vote });

#[derive(Debug, Clone, PartialEq, Arbitrary)]
struct Record {
    kind: Kind,
    nonce: u64,
    amount: i64,
    memo: Option<String>,
    parts: Vec<u32>,
    flags: [u8; 4],
}
aggregate!(Record {
    kind,
    nonce,
    amount,
    memo,
    parts,
    flags
});

#[derive(Debug, Clone, PartialEq)]
struct Chain {
    id: u8,
    next: Option<Box<Chain>>,
}
aggregate!(Chain { id, next });

#[derive(Debug, Arbitrary)]
enum FuzzInput<'a> {
    // Arbitrary bytes must never panic the decoder
    Raw {
        data: &'a [u8],
        fixed: bool,
        max_length: u16,
    },

    // Varint encodings decoded into every unsigned width
    VarInt(u8, [u8; 8]),

    // Aggregates
    Record(Record),
    Tuple2(u8, u16),
    Tuple3(u32, u64, i128),
    Kind(Kind),

    // Length-prefixed
    Bytes(&'a [u8]),
    Text(String),
    Vec(Vec<u32>),
    Nested(Vec<Vec<u16>>),

    // Arrays
    ByteArray4([u8; 4]),
    ByteArray32([u8; 32]),
    WordArray([u64; 3]),

    // Option type
    OptionSome(i64),
    OptionNone,

    // Primitives
    Bool(bool),
    Unit,
    Usize(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    F32(f32),
    F64(f64),
}

const MODES: [Mode; 2] = [Mode::Compact, Mode::Fixed];

fn roundtrip<T>(value: &T)
where
    T: Write + Read + PartialEq + Debug,
{
    for mode in MODES {
        // Arbitrary values may be longer than the default bound
        let cfg = Config::from(mode).with_max_length(usize::MAX);
        let encoded = value.encode_cfg(&cfg);
        let decoded = T::decode_cfg(encoded.clone(), &cfg).expect("failed to decode");
        assert_eq!(value, &decoded);

        // Re-encoding is byte-identical
        assert_eq!(encoded, decoded.encode_cfg(&cfg));

        // Every strict prefix is rejected
        if !encoded.is_empty() {
            let cut = encoded.len() - 1;
            assert!(T::decode_cfg(&encoded[..cut], &cfg).is_err());
        }
    }
}

fn roundtrip_f32(value: f32) {
    for mode in MODES {
        let cfg = Config::from(mode);
        let encoded = encode_to_bytes(&value, &cfg);
        assert_eq!(encoded.len(), 4);
        let decoded: f32 = decode_from_bytes(&encoded, &cfg).expect("failed to decode f32");
        assert_eq!(value.to_bits(), decoded.to_bits());
    }
}

fn roundtrip_f64(value: f64) {
    for mode in MODES {
        let cfg = Config::from(mode);
        let encoded = encode_to_bytes(&value, &cfg);
        assert_eq!(encoded.len(), 8);
        let decoded: f64 = decode_from_bytes(&encoded, &cfg).expect("failed to decode f64");
        assert_eq!(value.to_bits(), decoded.to_bits());
    }
}

fn decode_raw(data: &[u8], fixed: bool, max_length: u16) {
    let mode = if fixed { Mode::Fixed } else { Mode::Compact };
    let cfg = Config::new(max_length as usize, mode);

    fn check<T: Read + Write>(data: &[u8], cfg: &Config) {
        let mut buf = data;
        if let Ok(value) = T::read_cfg(&mut buf, cfg) {
            // Whatever decodes must re-encode within the consumed bytes
            let consumed = data.len() - buf.len();
            let encoded = encode_to_bytes(&value, cfg);
            assert!(encoded.len() <= consumed);
        }
    }

    check::<u8>(data, &cfg);
    check::<u16>(data, &cfg);
    check::<u32>(data, &cfg);
    check::<u64>(data, &cfg);
    check::<usize>(data, &cfg);
    check::<bool>(data, &cfg);
    check::<Option<u32>>(data, &cfg);
    check::<Kind>(data, &cfg);
    check::<Bytes>(data, &cfg);
    check::<String>(data, &cfg);
    check::<Vec<u8>>(data, &cfg);
    check::<Vec<u64>>(data, &cfg);
    check::<Vec<String>>(data, &cfg);
    check::<[u16; 5]>(data, &cfg);
    check::<Record>(data, &cfg);
    check::<Chain>(data, &cfg);
    check::<(u8, Vec<i32>, Option<String>)>(data, &cfg);

    // Length prefixes above the bound never allocate
    if let Err(Error::LengthBoundExceeded { found, max }) = Vec::<u8>::decode_cfg(data, &cfg) {
        assert!(found > max as u64);
        assert_eq!(max, cfg.max_length());
    }
}

fn decode_varint(tag: u8, tail: [u8; 8]) {
    let mut data = Vec::with_capacity(9);
    data.push(tag);
    data.extend_from_slice(&tail);
    let cfg = Config::default();

    let wide: Result<u64, _> = decode_from_bytes(&data, &cfg);
    let narrow: Result<u32, _> = decode_from_bytes(&data, &cfg);
    let small: Result<u16, _> = decode_from_bytes(&data, &cfg);

    // Nine bytes always satisfy the longest form
    let wide = wide.expect("nine bytes hold any varint");
    match narrow {
        Ok(v) => assert_eq!(v as u64, wide),
        Err(_) => assert!(wide > u32::MAX as u64),
    }
    match small {
        Ok(v) => assert_eq!(v as u64, wide),
        Err(_) => assert!(wide > u16::MAX as u64),
    }
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Raw {
            data,
            fixed,
            max_length,
        } => decode_raw(data, fixed, max_length),
        FuzzInput::VarInt(tag, tail) => decode_varint(tag, tail),
        // Aggregates
        FuzzInput::Record(it) => roundtrip(&it),
        FuzzInput::Tuple2(a, b) => roundtrip(&(a, b)),
        FuzzInput::Tuple3(a, b, c) => roundtrip(&(a, b, c)),
        FuzzInput::Kind(it) => roundtrip(&it),
        // Length-prefixed
        FuzzInput::Bytes(it) => roundtrip(&Bytes::copy_from_slice(it)),
        FuzzInput::Text(it) => roundtrip(&it),
        FuzzInput::Vec(it) => roundtrip(&it),
        FuzzInput::Nested(it) => roundtrip(&it),
        // Arrays
        FuzzInput::ByteArray4(it) => roundtrip(&it),
        FuzzInput::ByteArray32(it) => roundtrip(&it),
        FuzzInput::WordArray(it) => roundtrip(&it),
        // Option types
        FuzzInput::OptionSome(v) => roundtrip(&Some(v)),
        FuzzInput::OptionNone => roundtrip::<Option<i64>>(&None),
        // Primitives
        FuzzInput::Bool(v) => roundtrip(&v),
        FuzzInput::Unit => roundtrip(&()),
        FuzzInput::Usize(v) => roundtrip(&v),
        FuzzInput::U8(v) => roundtrip(&v),
        FuzzInput::U16(v) => roundtrip(&v),
        FuzzInput::U32(v) => roundtrip(&v),
        FuzzInput::U64(v) => roundtrip(&v),
        FuzzInput::I8(v) => roundtrip(&v),
        FuzzInput::I16(v) => roundtrip(&v),
        FuzzInput::I32(v) => roundtrip(&v),
        FuzzInput::I64(v) => roundtrip(&v),
        FuzzInput::I128(v) => roundtrip(&v),
        FuzzInput::F32(v) => roundtrip_f32(v),
        FuzzInput::F64(v) => roundtrip_f64(v),
    };
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
