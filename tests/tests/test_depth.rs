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

use mpack::{Error, Packer, Value};

fn nested(depth: usize) -> Value {
    let mut value = Value::Nil;
    for _ in 0..depth {
        value = Value::Array(vec![value]);
    }
    value
}

#[test]
fn default_depth_allows_ordinary_nesting() {
    let bytes = Packer::default().encode(&nested(100)).unwrap();
    assert_eq!(bytes.len(), 101);
    assert!(bytes[..100].iter().all(|b| *b == 0x91));
    assert_eq!(bytes[100], 0xc0);
}

#[test]
fn exceeding_depth_fails() {
    let err = Packer::default().encode(&nested(300)).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)), "{err}");
}

#[test]
fn depth_limit_is_configurable() {
    let packer = Packer::default().max_depth(3);
    // The innermost nil counts as a level.
    assert!(packer.encode(&nested(2)).is_ok());
    assert!(matches!(
        packer.encode(&nested(3)),
        Err(Error::DepthExceed(_))
    ));
    assert!(Packer::default().max_depth(1000).encode(&nested(300)).is_ok());
}

#[test]
fn depth_resets_between_siblings() {
    let packer = Packer::default().max_depth(4);
    let wide = Value::Array((0..100).map(|_| nested(2)).collect());
    assert!(packer.encode(&wide).is_ok());
}
