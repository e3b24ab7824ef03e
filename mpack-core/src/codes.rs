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

//! MessagePack marker bytes.

use num_enum::IntoPrimitive;

/// Single-byte markers with a fixed meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum Code {
    Nil = 0xc0,
    False = 0xc2,
    True = 0xc3,
    Bin8 = 0xc4,
    Bin16 = 0xc5,
    Bin32 = 0xc6,
    Float = 0xca,
    Double = 0xcb,
    Uint8 = 0xcc,
    Uint16 = 0xcd,
    Uint32 = 0xce,
    Uint64 = 0xcf,
    Int8 = 0xd0,
    Int16 = 0xd1,
    Int32 = 0xd2,
    Int64 = 0xd3,
    Str8 = 0xd9,
    Str16 = 0xda,
    Str32 = 0xdb,
    Array16 = 0xdc,
    Array32 = 0xdd,
    Map16 = 0xde,
    Map32 = 0xdf,
}

pub const POS_FIXED_NUM_HIGH: u8 = 0x7f;
pub const NEG_FIXED_NUM_LOW: i8 = -32;

pub const FIXED_MAP_LOW: u8 = 0x80;
pub const FIXED_ARRAY_LOW: u8 = 0x90;
pub const FIXED_STR_LOW: u8 = 0xa0;

/// Largest length a fixmap/fixarray header carries inline.
pub const MAX_FIXED_CONTAINER_LEN: usize = 15;
/// Largest length a fixstr header carries inline.
pub const MAX_FIXED_STR_LEN: usize = 31;

impl Code {
    #[inline(always)]
    pub fn byte(self) -> u8 {
        self.into()
    }
}
