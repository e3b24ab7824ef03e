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

use crate::error::Error;
use crate::meta::FieldInfo;
use crate::resolver::context::Encoder;
use std::borrow::Cow;

/// Coarse category of a value, used to pick a container encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Bin,
    Array,
    Map,
    Record,
    /// Not known until the value is inspected.
    Dynamic,
}

/// A value that can be written as MessagePack.
pub trait Encodable {
    /// Writes this value through `encoder`.
    ///
    /// Implementations for containers call [`Encoder::encode`] for every
    /// element so that nesting depth is tracked.
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error>;

    /// Category of this particular value.
    fn kind(&self) -> ValueKind;

    /// The textual content when this value is text.
    ///
    /// Key encoders read the text through this to sort keys and apply the
    /// key transform. Types that do not store their text, such as `char`,
    /// return it owned.
    #[inline(always)]
    fn as_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Whether an `omitempty` record field holding this value is left out.
    ///
    /// False and zero scalars, empty text, byte strings and containers, and
    /// absent values are empty. Records never are.
    fn is_empty_value(&self) -> bool;

    /// Category shared by every value of the type, or `Dynamic` when values
    /// of the type may differ.
    #[inline(always)]
    fn static_kind() -> ValueKind {
        ValueKind::Dynamic
    }
}

/// A struct-like type with named fields.
///
/// Implemented by `#[derive(MpackRecord)]`. `FIELDS` lists every field in
/// declaration order; field access goes through the index of its entry.
pub trait Record: Encodable {
    const FIELDS: &'static [FieldInfo];

    /// Declared `#[mpack(as_array)]`.
    const AS_ARRAY: bool = false;

    fn encode_field(&self, index: usize, encoder: &mut Encoder<'_>) -> Result<(), Error>;

    fn is_field_empty(&self, index: usize) -> bool;
}
