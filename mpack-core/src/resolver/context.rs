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
use crate::codes::{Code, FIXED_STR_LOW, MAX_FIXED_STR_LEN, NEG_FIXED_NUM_LOW, POS_FIXED_NUM_HIGH};
use crate::config::Config;
use crate::error::Error;
use crate::meta::FieldSet;
use crate::resolver::field_resolver::FieldResolver;
use crate::serializer::header::{encode_container_len, ContainerKind};
use crate::serializer::{Encodable, Record};
use byteorder::{BigEndian, ByteOrder};
use std::sync::Arc;

/// State of one encode call.
///
/// An `Encoder` borrows the read-only [`Config`] and field cache of its
/// `Packer`, writes into a borrowed [`Sink`] and tracks how deep the current
/// value is nested. It is the generic value encoder that every container
/// encoder calls back into for nested values.
pub struct Encoder<'a> {
    sink: &'a mut dyn Sink,
    config: &'a Config,
    field_resolver: &'a FieldResolver,
    depth: u32,
}

impl<'a> Encoder<'a> {
    pub fn new(
        sink: &'a mut dyn Sink,
        config: &'a Config,
        field_resolver: &'a FieldResolver,
    ) -> Encoder<'a> {
        Encoder {
            sink,
            config,
            field_resolver,
            depth: 0,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &'a Config {
        self.config
    }

    #[inline(always)]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Field list of `T` under the configured naming convention.
    #[inline(always)]
    pub fn field_set<T: Record + 'static>(&self) -> Arc<FieldSet> {
        self.field_resolver.get::<T>(self.config.field_naming())
    }

    /// Encodes any value, dispatching through its [`Encodable`] impl.
    pub fn encode<T: Encodable + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.inc_depth()?;
        let result = value.encode(self);
        self.dec_depth();
        result
    }

    fn inc_depth(&mut self) -> Result<(), Error> {
        if self.depth >= self.config.max_depth() {
            return Err(Error::depth_exceed(format!(
                "Maximum nesting depth ({}) exceeded. \
                This may indicate a self-referencing value or an overly deep object graph. \
                Consider increasing max_depth if this is expected.",
                self.config.max_depth()
            )));
        }
        self.depth += 1;
        Ok(())
    }

    #[inline(always)]
    fn dec_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Writes bytes to the sink as-is.
    #[inline(always)]
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.sink.write_bytes(bytes)
    }

    #[inline(always)]
    fn write_code(&mut self, code: u8) -> Result<(), Error> {
        self.sink.write_u8(code)
    }

    #[inline(always)]
    fn write1(&mut self, code: Code, value: u8) -> Result<(), Error> {
        self.sink.write_bytes(&[code.byte(), value])
    }

    #[inline(always)]
    fn write2(&mut self, code: Code, value: u16) -> Result<(), Error> {
        let mut buf = [code.byte(), 0, 0];
        BigEndian::write_u16(&mut buf[1..], value);
        self.sink.write_bytes(&buf)
    }

    #[inline(always)]
    fn write4(&mut self, code: Code, value: u32) -> Result<(), Error> {
        let mut buf = [code.byte(), 0, 0, 0, 0];
        BigEndian::write_u32(&mut buf[1..], value);
        self.sink.write_bytes(&buf)
    }

    #[inline(always)]
    fn write8(&mut self, code: Code, value: u64) -> Result<(), Error> {
        let mut buf = [code.byte(), 0, 0, 0, 0, 0, 0, 0, 0];
        BigEndian::write_u64(&mut buf[1..], value);
        self.sink.write_bytes(&buf)
    }

    pub fn encode_nil(&mut self) -> Result<(), Error> {
        self.write_code(Code::Nil.byte())
    }

    pub fn encode_bool(&mut self, value: bool) -> Result<(), Error> {
        if value {
            self.write_code(Code::True.byte())
        } else {
            self.write_code(Code::False.byte())
        }
    }

    /// Writes `value` with the narrowest unsigned encoding.
    pub fn encode_u64(&mut self, value: u64) -> Result<(), Error> {
        if value <= POS_FIXED_NUM_HIGH as u64 {
            self.write_code(value as u8)
        } else if value <= u8::MAX as u64 {
            self.write1(Code::Uint8, value as u8)
        } else if value <= u16::MAX as u64 {
            self.write2(Code::Uint16, value as u16)
        } else if value <= u32::MAX as u64 {
            self.write4(Code::Uint32, value as u32)
        } else {
            self.write8(Code::Uint64, value)
        }
    }

    /// Writes `value` with the narrowest encoding; non-negative values use the
    /// unsigned family.
    pub fn encode_i64(&mut self, value: i64) -> Result<(), Error> {
        if value >= 0 {
            return self.encode_u64(value as u64);
        }
        if value >= NEG_FIXED_NUM_LOW as i64 {
            self.write_code(value as i8 as u8)
        } else if value >= i8::MIN as i64 {
            self.write1(Code::Int8, value as i8 as u8)
        } else if value >= i16::MIN as i64 {
            self.write2(Code::Int16, value as i16 as u16)
        } else if value >= i32::MIN as i64 {
            self.write4(Code::Int32, value as i32 as u32)
        } else {
            self.write8(Code::Int64, value as u64)
        }
    }

    pub fn encode_f32(&mut self, value: f32) -> Result<(), Error> {
        self.write4(Code::Float, value.to_bits())
    }

    pub fn encode_f64(&mut self, value: f64) -> Result<(), Error> {
        self.write8(Code::Double, value.to_bits())
    }

    pub fn encode_str(&mut self, value: &str) -> Result<(), Error> {
        let len = value.len();
        if len <= MAX_FIXED_STR_LEN {
            self.write_code(FIXED_STR_LOW | len as u8)?;
        } else if len <= u8::MAX as usize {
            self.write1(Code::Str8, len as u8)?;
        } else if len <= u16::MAX as usize {
            self.write2(Code::Str16, len as u16)?;
        } else if len <= u32::MAX as usize {
            self.write4(Code::Str32, len as u32)?;
        } else {
            return Err(Error::size_limit("str", len));
        }
        self.write_raw(value.as_bytes())
    }

    pub fn encode_bytes(&mut self, value: &[u8]) -> Result<(), Error> {
        let len = value.len();
        if len <= u8::MAX as usize {
            self.write1(Code::Bin8, len as u8)?;
        } else if len <= u16::MAX as usize {
            self.write2(Code::Bin16, len as u16)?;
        } else if len <= u32::MAX as usize {
            self.write4(Code::Bin32, len as u32)?;
        } else {
            return Err(Error::size_limit("bin", len));
        }
        self.write_raw(value)
    }

    #[inline(always)]
    pub fn encode_map_len(&mut self, len: usize) -> Result<(), Error> {
        encode_container_len(&mut *self.sink, ContainerKind::Map, len)
    }

    #[inline(always)]
    pub fn encode_array_len(&mut self, len: usize) -> Result<(), Error> {
        encode_container_len(&mut *self.sink, ContainerKind::Array, len)
    }
}
