// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use mpack::{Packer, RecordShape, Value, Writer};
use mpack_core::serializer::map::encode_associative;
use mpack_core::serializer::text_map::{encode_text_dyn_map, encode_text_text_map};
use std::collections::{BTreeMap, HashMap};
use test_helpers::{text_pairs, Decoder};

fn packers() -> Vec<Packer> {
    vec![
        Packer::default(),
        Packer::default().sort_keys(true),
        Packer::default().struct_as_array(true),
        Packer::default().record_shape(RecordShape::Map),
        Packer::default().key_transform(|k| Ok(Value::from(k.to_uppercase()))),
        Packer::default()
            .sort_keys(true)
            .use_alternate_names(true)
            .key_transform(|_| Err(mpack::Error::key_transform("never called"))),
    ]
}

#[test]
fn absent_container_is_nil() {
    for packer in packers() {
        let mut writer = Writer::default();
        {
            let mut encoder = packer.encoder(&mut writer);
            encode_associative::<HashMap<String, i32>>(&mut encoder, None).unwrap();
            encode_associative::<[(Value, Value)]>(&mut encoder, None).unwrap();
            encode_text_text_map::<HashMap<String, String>>(&mut encoder, None).unwrap();
            encode_text_dyn_map::<BTreeMap<String, Value>>(&mut encoder, None).unwrap();
        }
        assert_eq!(writer.dump(), vec![0xc0, 0xc0, 0xc0, 0xc0]);

        let absent: Option<BTreeMap<String, String>> = None;
        assert_eq!(packer.encode(&absent).unwrap(), [0xc0]);
    }
}

#[test]
fn empty_map_is_fixmap_zero() {
    let map: HashMap<String, String> = HashMap::new();
    assert_eq!(Packer::default().encode(&map).unwrap(), [0x80]);
    assert_eq!(Packer::default().encode(&Value::Map(vec![])).unwrap(), [0x80]);
}

#[test]
fn text_text_map() {
    let mut map = HashMap::new();
    map.insert("b".to_string(), "2".to_string());
    map.insert("a".to_string(), "1".to_string());
    let bytes = Packer::default().encode(&map).unwrap();
    let mut pairs = text_pairs(&bytes);
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string())
        ]
    );
}

#[test]
fn text_keyed_map_of_borrowed_text() {
    let mut map: BTreeMap<&str, &str> = BTreeMap::new();
    map.insert("k", "v");
    let bytes = Packer::default().encode(&map).unwrap();
    assert_eq!(bytes, [0x81, 0xa1, b'k', 0xa1, b'v']);
}

#[test]
fn text_dyn_map_encodes_nested_values() {
    let mut map: BTreeMap<String, Value> = BTreeMap::new();
    map.insert("list".into(), Value::Array(vec![1u8.into(), "x".into()]));
    map.insert("none".into(), Value::Nil);
    let bytes = Packer::default().encode(&map).unwrap();

    let mut de = Decoder::new(&bytes);
    assert_eq!(de.map_len(), 2);
    assert_eq!(de.str(), "list");
    assert_eq!(de.array_len(), 2);
    assert_eq!(de.uint(), 1);
    assert_eq!(de.str(), "x");
    assert_eq!(de.str(), "none");
    de.nil();
    assert!(de.is_empty());
}

#[test]
fn text_encoders_called_directly() {
    let map: BTreeMap<String, String> = [("k".to_string(), "v".to_string())].into();
    let packer = Packer::default();
    let mut direct = Writer::default();
    {
        let mut encoder = packer.encoder(&mut direct);
        encode_text_text_map(&mut encoder, Some(&map)).unwrap();
        encode_text_dyn_map(&mut encoder, Some(&map)).unwrap();
    }
    let once = packer.encode(&map).unwrap();
    assert_eq!(direct.dump(), [once.clone(), once].concat());
}

#[test]
fn pair_vectors_are_associative() {
    let pairs = vec![("z".to_string(), 1u8), ("a".to_string(), 2u8)];
    let packer = Packer::default().sort_keys(true);
    let mut writer = Writer::default();
    {
        let mut encoder = packer.encoder(&mut writer);
        encode_associative(&mut encoder, Some(&pairs)).unwrap();
        encode_text_dyn_map(&mut encoder, Some(&pairs)).unwrap();
    }
    assert_eq!(
        writer.dump(),
        [
            0x82, 0xa1, b'z', 0x01, 0xa1, b'a', 0x02, // natural order
            0x82, 0xa1, b'a', 0x02, 0xa1, b'z', 0x01, // sorted
        ]
    );
}

#[test]
fn generic_map_keeps_non_text_keys() {
    let mut map = BTreeMap::new();
    map.insert(-1i32, "neg");
    map.insert(300i32, "big");
    let bytes = Packer::default()
        .key_transform(|_| Err(mpack::Error::key_transform("not for integer keys")))
        .encode(&map)
        .unwrap();
    let mut de = Decoder::new(&bytes);
    assert_eq!(de.map_len(), 2);
    assert_eq!(de.int(), -1);
    assert_eq!(de.str(), "neg");
    assert_eq!(de.int(), 300);
    assert_eq!(de.str(), "big");
}

#[test]
fn value_map_preserves_order_and_transforms_text_keys() {
    let value = Value::Map(vec![
        (Value::from("b"), Value::from(1u8)),
        (Value::from(7u8), Value::from(2u8)),
        (Value::from("a"), Value::from(3u8)),
    ]);
    let packer = Packer::default()
        .sort_keys(true)
        .key_transform(|k| Ok(Value::from(format!("_{k}"))));
    let bytes = packer.encode(&value).unwrap();

    let mut de = Decoder::new(&bytes);
    assert_eq!(de.map_len(), 3);
    assert_eq!(de.str(), "_b");
    assert_eq!(de.uint(), 1);
    assert_eq!(de.uint(), 7);
    assert_eq!(de.uint(), 2);
    assert_eq!(de.str(), "_a");
    assert_eq!(de.uint(), 3);
}

#[test]
fn nested_maps() {
    let mut inner = BTreeMap::new();
    inner.insert("x".to_string(), 1i64);
    let mut outer = BTreeMap::new();
    outer.insert("inner".to_string(), inner);
    let bytes = Packer::default().encode(&outer).unwrap();
    assert_eq!(
        bytes,
        [0x81, 0xa5, b'i', b'n', b'n', b'e', b'r', 0x81, 0xa1, b'x', 0x01]
    );
}

#[test]
fn map_with_optional_values() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), Some(1u8));
    map.insert("b".to_string(), None);
    let bytes = Packer::default().encode(&map).unwrap();
    assert_eq!(bytes, [0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0xc0]);
}
