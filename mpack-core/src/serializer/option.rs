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

/// `None` encodes as nil, `Some` as the contained value.
impl<T: Encodable> Encodable for Option<T> {
    #[inline(always)]
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        match self {
            Some(v) => v.encode(encoder),
            None => encoder.encode_nil(),
        }
    }

    #[inline(always)]
    fn kind(&self) -> ValueKind {
        match self {
            Some(v) => v.kind(),
            None => ValueKind::Nil,
        }
    }

    #[inline(always)]
    fn as_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|v| v.as_text())
    }

    /// Only an absent value is empty; a present zero is kept.
    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}
