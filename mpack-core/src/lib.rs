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

//! # mpack core
//!
//! Type-driven MessagePack encoding. Values describe themselves through the
//! [`Encodable`] trait and an [`Encoder`] walks them depth-first, writing the
//! wire form into a [`Sink`].
//!
//! ## Architecture
//!
//! - **`packer`**: The `Packer` entry point and its builder options
//! - **`buffer`**: Byte sinks (`Writer`, `IoSink`)
//! - **`codes`**: MessagePack type codes
//! - **`config`**: Encoding policies shared by every encode of a `Packer`
//! - **`serializer`**: Encoders for scalars, sequences, maps and records
//! - **`resolver`**: The per-call `Encoder` and the record field cache
//! - **`meta`**: Record field descriptors
//! - **`error`**: Error type and helper macros
//!
//! ## Maps
//!
//! Maps whose keys are text at compile time (`String`, `&str`, `Cow<str>`)
//! honor [`Packer::sort_keys`]; their keys are ordered by the original text
//! before any key transform runs. All other maps, including
//! [`Value::Map`], are written in their own iteration order. An absent
//! associative container passed to
//! [`encode_associative`](serializer::map::encode_associative) is written as
//! nil.
//!
//! ## Records
//!
//! Types deriving `MpackRecord` are written as maps of field name to value.
//! `#[mpack(omitempty)]` fields holding an empty value are left out. A type
//! marked `#[mpack(as_array)]`, or any record under
//! [`Packer::struct_as_array`], is written as a positional array of all its
//! fields instead.
//!
//! ## Usage
//!
//! ```rust
//! use mpack_core::{Packer, Value};
//!
//! let packer = Packer::default();
//! let value = Value::from_pairs([("id", Value::from(7u8))]);
//! let bytes = packer.encode(&value).unwrap();
//! assert_eq!(bytes, [0x81, 0xa2, b'i', b'd', 0x07]);
//! ```

pub mod buffer;
pub mod codes;
pub mod config;
pub mod error;
pub mod meta;
pub mod packer;
pub mod resolver;
pub mod serializer;

pub use buffer::{IoSink, Sink, Writer};
pub use config::{Config, FieldNaming, KeyTransform, RecordShape};
pub use error::Error;
pub use meta::FieldInfo;
pub use packer::Packer;
pub use resolver::context::Encoder;
pub use serializer::key::KeyDictionary;
pub use serializer::value::Value;
pub use serializer::{ByteBuf, Bytes, Encodable, Record, ValueKind};
