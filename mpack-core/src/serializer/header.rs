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

use crate::buffer::Sink;
use crate::codes::{Code, FIXED_ARRAY_LOW, FIXED_MAP_LOW, MAX_FIXED_CONTAINER_LEN};
use crate::ensure;
use crate::error::Error;
use byteorder::{BigEndian, ByteOrder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Map,
    Array,
}

impl ContainerKind {
    #[inline(always)]
    fn fixed_low(self) -> u8 {
        match self {
            ContainerKind::Map => FIXED_MAP_LOW,
            ContainerKind::Array => FIXED_ARRAY_LOW,
        }
    }

    #[inline(always)]
    fn code16(self) -> Code {
        match self {
            ContainerKind::Map => Code::Map16,
            ContainerKind::Array => Code::Array16,
        }
    }

    #[inline(always)]
    fn code32(self) -> Code {
        match self {
            ContainerKind::Map => Code::Map32,
            ContainerKind::Array => Code::Array32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::Map => "map",
            ContainerKind::Array => "array",
        }
    }
}

/// Writes the length header of a map or array holding `len` entries.
///
/// Fewer than 16 entries fold into a single fix byte, fewer than 65536 use
/// the 16-bit form and everything else the 32-bit form. Lengths beyond
/// `u32::MAX` cannot be represented and are rejected before any byte is
/// written.
pub fn encode_container_len<S: Sink + ?Sized>(
    sink: &mut S,
    kind: ContainerKind,
    len: usize,
) -> Result<(), Error> {
    ensure!(
        len <= u32::MAX as usize,
        Error::size_limit(kind.name(), len)
    );
    if len <= MAX_FIXED_CONTAINER_LEN {
        sink.write_u8(kind.fixed_low() | len as u8)
    } else if len <= u16::MAX as usize {
        let mut buf = [kind.code16().byte(), 0, 0];
        BigEndian::write_u16(&mut buf[1..], len as u16);
        sink.write_bytes(&buf)
    } else {
        let mut buf = [kind.code32().byte(), 0, 0, 0, 0];
        BigEndian::write_u32(&mut buf[1..], len as u32);
        sink.write_bytes(&buf)
    }
}
