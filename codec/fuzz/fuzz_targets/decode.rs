#![no_main]

use arbitrary::Arbitrary;
use binwire_codec::{
    record, variant,
    varint::{read_varint32, read_varuint32, read_varuint64, VarInt32, VarUint32},
    Decode, DecodeExt, Error, RangeCfg,
};
use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Default)]
struct Header {
    version: u16,
    name: String,
    flags: Option<u8>,
    offset: VarInt32,
}

record!(Header {
    version,
    name,
    flags,
    offset,
});

variant! {
    #[derive(Debug)]
    enum Node {
        Leaf(u64),
        Text(String),
        Header(Header),
        Branch(Vec<Node>),
        Pair((VarUint32, Option<f64>)),
    }
}

#[derive(Arbitrary, Debug)]
enum Shape {
    U8,
    I64,
    F32,
    Bool,
    Bytes,
    Text,
    VecU32,
    VecText,
    OptionU16,
    Pair,
    Header,
    Node,
    Bounded(u16),
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Decode(Shape, Vec<u8>),
    VarUint(u64),
    VarInt(i32),
}

/// Reference encoder for varuints.
fn varuint(mut value: u64) -> Vec<u8> {
    let mut out = Vec::new();
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
    out
}

fn decode_shape(shape: Shape, data: Vec<u8>) {
    let buf = Bytes::from(data);
    match shape {
        Shape::U8 => {
            let _ = u8::decode(buf);
        }
        Shape::I64 => {
            let _ = i64::decode(buf);
        }
        Shape::F32 => {
            let _ = f32::decode(buf);
        }
        Shape::Bool => {
            let _ = bool::decode(buf);
        }
        Shape::Bytes => {
            let _ = Bytes::decode(buf);
        }
        Shape::Text => {
            let _ = String::decode(buf);
        }
        Shape::VecU32 => {
            let _ = Vec::<u32>::decode(buf);
        }
        Shape::VecText => {
            let _ = Vec::<String>::decode(buf);
        }
        Shape::OptionU16 => {
            let _ = Option::<u16>::decode(buf);
        }
        Shape::Pair => {
            let _ = <(i32, String)>::decode(buf);
        }
        Shape::Header => {
            let _ = Header::decode(buf);
        }
        Shape::Node => {
            let _ = Node::decode(buf);
        }
        Shape::Bounded(max) => {
            let max = max as usize;
            let cfg = (RangeCfg::new(..=max), RangeCfg::new(..=max));
            if let Ok(values) = Vec::<String>::decode_cfg(buf, &cfg) {
                assert!(values.len() <= max);
                assert!(values.iter().all(|value| value.len() <= max));
            }
        }
    }
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Decode(shape, data) => decode_shape(shape, data),
        FuzzInput::VarUint(value) => {
            let encoded = varuint(value);
            assert_eq!(read_varuint64(&mut encoded.as_slice()), Ok(value));
            match u32::try_from(value) {
                Ok(small) => assert_eq!(read_varuint32(&mut encoded.as_slice()), Ok(small)),
                Err(_) if encoded.len() > 5 => assert_eq!(
                    read_varuint32(&mut encoded.as_slice()),
                    Err(Error::InvalidVarint)
                ),
                Err(_) => assert!(read_varuint32(&mut encoded.as_slice()).is_ok()),
            }
        }
        FuzzInput::VarInt(value) => {
            let zigzag = ((value << 1) ^ (value >> 31)) as u32;
            let encoded = varuint(zigzag as u64);
            assert_eq!(read_varint32(&mut encoded.as_slice()), Ok(value));
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
