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
use crate::resolver::context::Encoder;
use crate::serializer::{Encodable, ValueKind};
use std::borrow::Cow;

impl Encodable for str {
    #[inline(always)]
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        encoder.encode_str(self)
    }

    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    #[inline(always)]
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    #[inline(always)]
    fn static_kind() -> ValueKind {
        ValueKind::Str
    }
}

impl Encodable for String {
    #[inline(always)]
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        encoder.encode_str(self)
    }

    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    #[inline(always)]
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    #[inline(always)]
    fn static_kind() -> ValueKind {
        ValueKind::Str
    }
}

impl Encodable for Cow<'_, str> {
    #[inline(always)]
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        encoder.encode_str(self)
    }

    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    #[inline(always)]
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    #[inline(always)]
    fn static_kind() -> ValueKind {
        ValueKind::Str
    }
}

impl Encodable for char {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        let mut buf = [0u8; 4];
        encoder.encode_str(self.encode_utf8(&mut buf))
    }

    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        *self == '\0'
    }

    #[inline(always)]
    fn static_kind() -> ValueKind {
        ValueKind::Str
    }
}
