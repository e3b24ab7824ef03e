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

use crate::buffer::{IoSink, Sink, Writer};
use crate::config::{Config, FieldNaming, RecordShape};
use crate::error::Error;
use crate::resolver::context::Encoder;
use crate::resolver::field_resolver::FieldResolver;
use crate::serializer::key::KeyDictionary;
use crate::serializer::value::Value;
use crate::serializer::Encodable;
use std::io;
use std::sync::Arc;

/// Entry point for encoding values to MessagePack.
///
/// A `Packer` owns the encoding policies and the per-type record field
/// cache. It is `Send + Sync`; one instance can serve any number of
/// concurrent encodes. Configure it with the builder methods before sharing
/// it, since the policies cannot change afterwards.
///
/// # Examples
///
/// ```rust
/// use mpack_core::Packer;
/// use std::collections::HashMap;
///
/// let packer = Packer::default().sort_keys(true);
/// let mut map = HashMap::new();
/// map.insert("b".to_string(), "2".to_string());
/// map.insert("a".to_string(), "1".to_string());
/// let bytes = packer.encode(&map).unwrap();
/// assert_eq!(bytes, [0x82, 0xa1, b'a', 0xa1, b'1', 0xa1, b'b', 0xa1, b'2']);
/// ```
#[derive(Default)]
pub struct Packer {
    config: Config,
    field_resolver: FieldResolver,
}

impl Packer {
    /// Writes text-keyed maps in ascending order of their original keys.
    ///
    /// Maps with non-text keys and [`Value::Map`] keep their own order.
    /// Defaults to `false`.
    pub fn sort_keys(mut self, sort_keys: bool) -> Self {
        self.config.sort_keys = sort_keys;
        self
    }

    /// When `true`, every record is written as a positional array. When
    /// `false`, records use the shape their type declares.
    pub fn struct_as_array(mut self, struct_as_array: bool) -> Self {
        self.config.record_shape = if struct_as_array {
            RecordShape::Array
        } else {
            RecordShape::Declared
        };
        self
    }

    pub fn record_shape(mut self, shape: RecordShape) -> Self {
        self.config.record_shape = shape;
        self
    }

    /// Names record fields with their `#[mpack(alt = "..")]` names.
    pub fn use_alternate_names(mut self, alternate: bool) -> Self {
        self.config.field_naming = if alternate {
            FieldNaming::Alternate
        } else {
            FieldNaming::Primary
        };
        self
    }

    /// Rewrites every textual key before it is written.
    ///
    /// The transform sees the original key and its result is encoded in its
    /// place. An error from the transform aborts the encode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mpack_core::{Packer, Value};
    /// use std::collections::BTreeMap;
    ///
    /// let packer = Packer::default().key_transform(|key| Ok(Value::from(key.len())));
    /// let mut map = BTreeMap::new();
    /// map.insert("abc".to_string(), true);
    /// assert_eq!(packer.encode(&map).unwrap(), [0x81, 0x03, 0xc3]);
    /// ```
    pub fn key_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.config.key_transform = Some(Arc::new(transform));
        self
    }

    /// Compresses keys through `dictionary`.
    pub fn key_dictionary(mut self, dictionary: KeyDictionary) -> Self {
        self.config.key_transform = Some(dictionary.into_transform());
        self
    }

    /// Maximum container nesting depth. Defaults to 256.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates an encoder writing to `sink` under this packer's policies.
    pub fn encoder<'a>(&'a self, sink: &'a mut dyn Sink) -> Encoder<'a> {
        Encoder::new(sink, &self.config, &self.field_resolver)
    }

    /// Encodes `value` into a fresh byte vector.
    ///
    /// Nothing is returned unless the whole value encoded successfully.
    /// Use [`encode_to`](Packer::encode_to) with a long-lived [`Writer`] to
    /// reuse one buffer across encodes.
    pub fn encode<T: Encodable + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::default();
        self.encode_to(value, &mut writer)?;
        Ok(writer.into_inner())
    }

    /// Appends the encoding of `value` to `writer`.
    ///
    /// On error the writer keeps whatever was written before the failure.
    pub fn encode_to<T: Encodable + ?Sized>(
        &self,
        value: &T,
        writer: &mut Writer,
    ) -> Result<(), Error> {
        self.encode_to_sink(value, writer)
    }

    /// Streams the encoding of `value` into `out` and returns the number of
    /// bytes written.
    pub fn encode_to_writer<T: Encodable + ?Sized, W: io::Write>(
        &self,
        value: &T,
        out: W,
    ) -> Result<usize, Error> {
        let mut sink = IoSink::new(out);
        self.encode_to_sink(value, &mut sink)?;
        Ok(sink.written())
    }

    fn encode_to_sink<T: Encodable + ?Sized>(
        &self,
        value: &T,
        sink: &mut dyn Sink,
    ) -> Result<(), Error> {
        tracing::trace!(value = std::any::type_name::<T>(), "encode");
        self.encoder(sink).encode(value)
    }
}
