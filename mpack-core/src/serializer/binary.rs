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
use std::ops::Deref;

/// Borrowed byte string, written with the bin family.
///
/// A plain `&[u8]` or `Vec<u8>` is a sequence of integers and encodes as an
/// array; wrap it to get a bin payload instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bytes<'a>(pub &'a [u8]);

/// Owned byte string, written with the bin family.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteBuf(pub Vec<u8>);

impl<'a> Deref for Bytes<'a> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0
    }
}

impl Deref for ByteBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteBuf {
    fn from(bytes: Vec<u8>) -> Self {
        ByteBuf(bytes)
    }
}

impl<'a> From<&'a [u8]> for Bytes<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Bytes(bytes)
    }
}

macro_rules! impl_bin_encodable {
    ($ty:ty) => {
        impl Encodable for $ty {
            #[inline(always)]
            fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                encoder.encode_bytes(self)
            }

            #[inline(always)]
            fn kind(&self) -> ValueKind {
                ValueKind::Bin
            }

            #[inline(always)]
            fn is_empty_value(&self) -> bool {
                self.is_empty()
            }

            #[inline(always)]
            fn static_kind() -> ValueKind {
                ValueKind::Bin
            }
        }
    };
}

impl_bin_encodable!(Bytes<'_>);
impl_bin_encodable!(ByteBuf);
