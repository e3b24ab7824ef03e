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

impl Encodable for bool {
    #[inline(always)]
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        encoder.encode_bool(*self)
    }

    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        !*self
    }

    #[inline(always)]
    fn static_kind() -> ValueKind {
        ValueKind::Bool
    }
}

/// The unit value encodes as nil.
impl Encodable for () {
    #[inline(always)]
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        encoder.encode_nil()
    }

    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Nil
    }

    #[inline(always)]
    fn is_empty_value(&self) -> bool {
        true
    }

    #[inline(always)]
    fn static_kind() -> ValueKind {
        ValueKind::Nil
    }
}
