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


use mpack::{ByteBuf, Bytes, Packer};
use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use test_helpers::Decoder;

fn enc<T: mpack::Encodable + ?Sized>(value: &T) -> Vec<u8> {
    Packer::default().encode(value).unwrap()
}

#[test]
fn unsigned_boundaries() {
    assert_eq!(enc(&0u8), [0x00]);
    assert_eq!(enc(&127u8), [0x7f]);
    assert_eq!(enc(&128u8), [0xcc, 0x80]);
    assert_eq!(enc(&255u16), [0xcc, 0xff]);
    assert_eq!(enc(&256u16), [0xcd, 0x01, 0x00]);
    assert_eq!(enc(&65536u32), [0xce, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(
        enc(&u64::MAX),
        [0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn signed_boundaries() {
    assert_eq!(enc(&0i8), [0x00]);
    assert_eq!(enc(&100i32), [0x64]);
    assert_eq!(enc(&200i32), [0xcc, 0xc8]);
    assert_eq!(enc(&-1i8), [0xff]);
    assert_eq!(enc(&-32i8), [0xe0]);
    assert_eq!(enc(&-33i8), [0xd0, 0xdf]);
    assert_eq!(enc(&-128i16), [0xd0, 0x80]);
    assert_eq!(enc(&-129i16), [0xd1, 0xff, 0x7f]);
    assert_eq!(enc(&-32769i32), [0xd2, 0xff, 0xff, 0x7f, 0xff]);
    assert_eq!(
        enc(&i64::MIN),
        [0xd3, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn integers_decode_back() {
    for v in [i64::MIN, -65536, -200, -5, 0, 5, 200, 70000, i64::MAX] {
        let bytes = enc(&v);
        assert_eq!(Decoder::new(&bytes).int(), v);
    }
}

#[test]
fn floats() {
    assert_eq!(enc(&1.5f32), [0xca, 0x3f, 0xc0, 0x00, 0x00]);
    assert_eq!(
        enc(&1.5f64),
        [0xcb, 0x3f, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(Decoder::new(&enc(&-0.25f32)).f32(), -0.25);
}

#[test]
fn bools_and_nil() {
    assert_eq!(enc(&true), [0xc3]);
    assert_eq!(enc(&false), [0xc2]);
    assert_eq!(enc(&()), [0xc0]);
    assert_eq!(enc(&None::<u8>), [0xc0]);
    assert_eq!(enc(&Some(1u8)), [0x01]);
}

#[test]
fn string_boundaries() {
    assert_eq!(enc(""), [0xa0]);
    let s31 = "a".repeat(31);
    assert_eq!(enc(s31.as_str())[0], 0xbf);
    let s32 = "a".repeat(32);
    assert_eq!(enc(&s32)[..2], [0xd9, 32]);
    let s256 = "a".repeat(256);
    assert_eq!(enc(&s256)[..3], [0xda, 0x01, 0x00]);
    let s65536 = "a".repeat(65536);
    assert_eq!(enc(&s65536)[..5], [0xdb, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(Decoder::new(&enc(&s65536)).str(), s65536);
}

#[test]
fn text_types_agree() {
    let expected = enc("héllo");
    assert_eq!(enc(&"héllo".to_string()), expected);
    assert_eq!(enc(&Cow::Borrowed("héllo")), expected);
    assert_eq!(enc(&Box::<str>::from("héllo")), expected);
    assert_eq!(enc(&'é'), enc("é"));
}

#[test]
fn bin_boundaries() {
    assert_eq!(enc(&Bytes(&[])), [0xc4, 0x00]);
    assert_eq!(enc(&Bytes(&[1, 2])), [0xc4, 0x02, 0x01, 0x02]);
    let big = ByteBuf(vec![7; 256]);
    assert_eq!(enc(&big)[..3], [0xc5, 0x01, 0x00]);
    let huge = ByteBuf(vec![7; 65536]);
    let bytes = enc(&huge);
    assert_eq!(bytes[..5], [0xc6, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(Decoder::new(&bytes).bin(), huge.0);
}

#[test]
fn byte_vectors_are_arrays() {
    assert_eq!(enc(&vec![1u8, 200]), [0x92, 0x01, 0xcc, 0xc8]);
}

#[test]
fn sequences() {
    let deque: VecDeque<i8> = [-1, 2].into_iter().collect();
    assert_eq!(enc(&deque), [0x92, 0xff, 0x02]);
    let set: BTreeSet<&str> = ["b", "a"].into_iter().collect();
    assert_eq!(enc(&set), [0x92, 0xa1, b'a', 0xa1, b'b']);
    assert_eq!(enc(&[[1u8], [2u8]]), [0x92, 0x91, 0x01, 0x91, 0x02]);
    assert_eq!(enc(&[1u8, 2][..]), [0x92, 0x01, 0x02]);
}

#[test]
fn pointers_are_transparent() {
    assert_eq!(enc(&Rc::new(5u8)), [0x05]);
    assert_eq!(enc(&Arc::new("x")), [0xa1, b'x']);
    assert_eq!(enc(&Box::new(vec![true])), [0x91, 0xc3]);
}
