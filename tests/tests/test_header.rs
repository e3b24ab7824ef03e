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


use mpack::{Packer, Value};
use std::collections::BTreeMap;
use test_helpers::Decoder;

const SIZES: [usize; 5] = [0, 15, 16, 65535, 65536];

fn expected_map_header(n: usize) -> Vec<u8> {
    match n {
        0..=15 => vec![0x80 | n as u8],
        16..=65535 => vec![0xde, (n >> 8) as u8, n as u8],
        _ => vec![0xdf, (n >> 24) as u8, (n >> 16) as u8, (n >> 8) as u8, n as u8],
    }
}

#[test]
fn map_header_counts_entries() {
    let packer = Packer::default();
    for n in SIZES {
        let map: BTreeMap<u32, bool> = (0..n as u32).map(|i| (i, i % 2 == 0)).collect();
        let bytes = packer.encode(&map).unwrap();
        let header = expected_map_header(n);
        assert_eq!(&bytes[..header.len()], &header[..], "n = {n}");

        let mut de = Decoder::new(&bytes);
        assert_eq!(de.map_len() as usize, n);
        for i in 0..n {
            assert_eq!(de.uint(), i as u64);
            assert_eq!(de.bool(), i % 2 == 0);
        }
        assert!(de.is_empty());
    }
}

#[test]
fn array_header_counts_elements() {
    let packer = Packer::default();
    for n in SIZES {
        let items: Vec<Value> = (0..n).map(|_| Value::Nil).collect();
        let bytes = packer.encode(&items).unwrap();
        let mut de = Decoder::new(&bytes);
        assert_eq!(de.array_len() as usize, n);
        for _ in 0..n {
            de.nil();
        }
        assert!(de.is_empty());
    }
}

#[test]
fn array_header_codes() {
    let packer = Packer::default();
    assert_eq!(packer.encode(&Vec::<u8>::new()).unwrap(), [0x90]);
    assert_eq!(packer.encode(&[0u8; 15]).unwrap()[0], 0x9f);
    assert_eq!(packer.encode(&[0u8; 16]).unwrap()[..3], [0xdc, 0x00, 0x10]);
    let big = vec![0u8; 65536];
    assert_eq!(
        packer.encode(&big).unwrap()[..5],
        [0xdd, 0x00, 0x01, 0x00, 0x00]
    );
}

#[test]
fn text_map_header_counts_entries() {
    let packer = Packer::default().sort_keys(true);
    for n in SIZES {
        let map: BTreeMap<String, String> =
            (0..n).map(|i| (format!("k{i:06}"), String::new())).collect();
        let bytes = packer.encode(&map).unwrap();
        assert_eq!(
            &bytes[..expected_map_header(n).len()],
            &expected_map_header(n)[..]
        );
        assert_eq!(test_helpers::text_pairs(&bytes).len(), n);
    }
}
