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
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Writes an array header followed by every element.
pub fn encode_seq<'v, T, I>(encoder: &mut Encoder<'_>, len: usize, items: I) -> Result<(), Error>
where
    T: Encodable + ?Sized + 'v,
    I: IntoIterator<Item = &'v T>,
{
    encoder.encode_array_len(len)?;
    for item in items {
        encoder.encode(item)?;
    }
    Ok(())
}

macro_rules! impl_seq_encodable {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> Encodable for $ty {
            fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                encode_seq(encoder, self.len(), self.iter())
            }

            #[inline(always)]
            fn kind(&self) -> ValueKind {
                ValueKind::Array
            }

            #[inline(always)]
            fn is_empty_value(&self) -> bool {
                self.len() == 0
            }

            #[inline(always)]
            fn static_kind() -> ValueKind {
                ValueKind::Array
            }
        }
    };
}

impl_seq_encodable!([T: Encodable] [T]);
impl_seq_encodable!([T: Encodable] Vec<T>);
impl_seq_encodable!([T: Encodable, const N: usize] [T; N]);
impl_seq_encodable!([T: Encodable] VecDeque<T>);
impl_seq_encodable!([T: Encodable, S] HashSet<T, S>);
impl_seq_encodable!([T: Encodable] BTreeSet<T>);
