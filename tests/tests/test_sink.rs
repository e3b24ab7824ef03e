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

use mpack::{Error, IoSink, Packer, Sink, Value, Writer};
use std::collections::BTreeMap;
use std::io;

/// Accepts `limit` bytes, then fails every write.
struct FailingWriter {
    written: Vec<u8>,
    limit: usize,
}

impl io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn sample() -> BTreeMap<String, Value> {
    let mut map = BTreeMap::new();
    map.insert("alpha".to_string(), Value::from(1u8));
    map.insert("beta".to_string(), Value::from("two"));
    map
}

#[test]
fn streams_to_io_writer() {
    let packer = Packer::default();
    let mut out = Vec::new();
    let written = packer.encode_to_writer(&sample(), &mut out).unwrap();
    assert_eq!(written, out.len());
    assert_eq!(out, packer.encode(&sample()).unwrap());
}

#[test]
fn sink_failure_surfaces_verbatim() {
    let packer = Packer::default();
    let failing = FailingWriter {
        written: Vec::new(),
        limit: 3,
    };
    let err = packer.encode_to_writer(&sample(), failing).unwrap_err();
    match err {
        Error::Io(io_err) => {
            assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
            assert_eq!(io_err.to_string(), "sink closed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn output_before_failure_is_kept() {
    let packer = Packer::default();
    let mut sink = IoSink::new(FailingWriter {
        written: Vec::new(),
        limit: 1,
    });
    assert!(packer.encoder(&mut sink).encode(&sample()).is_err());
    assert_eq!(sink.written(), 1);
    assert_eq!(sink.get_ref().written, [0x82]);
}

#[test]
fn encode_to_appends() {
    let packer = Packer::default();
    let mut writer = Writer::default();
    writer.write_u8(0xff).unwrap();
    packer.encode_to(&true, &mut writer).unwrap();
    packer.encode_to(&Value::Nil, &mut writer).unwrap();
    assert_eq!(writer.as_slice(), [0xff, 0xc3, 0xc0]);
    writer.reset();
    assert!(writer.is_empty());
}

#[test]
fn vec_is_a_sink() {
    let packer = Packer::default();
    let mut out: Vec<u8> = Vec::new();
    packer.encoder(&mut out).encode("ok").unwrap();
    assert_eq!(out, [0xa2, b'o', b'k']);
}
