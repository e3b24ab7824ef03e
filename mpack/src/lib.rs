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

//! # mpack
//!
//! A MessagePack encoder driven by the static types of the values it writes.
//!
//! ```rust,ignore
//! use mpack::{MpackRecord, Packer};
//!
//! #[derive(MpackRecord)]
//! struct Item {
//!     #[mpack(name = "Name")]
//!     name: String,
//!     #[mpack(name = "Count", omitempty)]
//!     count: u32,
//! }
//!
//! let packer = Packer::default();
//! let bytes = packer.encode(&Item { name: "hi".into(), count: 0 })?;
//! // {"Name": "hi"}
//! assert_eq!(bytes, [0x81, 0xa4, b'N', b'a', b'm', b'e', 0xa2, b'h', b'i']);
//!
//! let bytes = Packer::default().struct_as_array(true).encode(&Item { name: "hi".into(), count: 0 })?;
//! // ["hi", 0]
//! assert_eq!(bytes, [0x92, 0xa2, b'h', b'i', 0x00]);
//! ```
//!
//! The derive output refers to `mpack_core`, so crates deriving
//! `MpackRecord` depend on `mpack-core` as well.

pub use mpack_core::{
    error::Error, ByteBuf, Bytes, Config, Encodable, Encoder, FieldNaming, IoSink, KeyDictionary,
    Packer, Record, RecordShape, Sink, Value, ValueKind, Writer,
};
pub use mpack_derive::MpackRecord;
