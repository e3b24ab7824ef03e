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

macro_rules! impl_int_encodable {
    ($ty:ty, $method:ident, $wide:ty, $kind:expr) => {
        impl Encodable for $ty {
            #[inline(always)]
            fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                encoder.$method(*self as $wide)
            }

            #[inline(always)]
            fn kind(&self) -> ValueKind {
                $kind
            }

            #[inline(always)]
            fn is_empty_value(&self) -> bool {
                *self == 0
            }

            #[inline(always)]
            fn static_kind() -> ValueKind {
                $kind
            }
        }
    };
}

impl_int_encodable!(i8, encode_i64, i64, ValueKind::Int);
impl_int_encodable!(i16, encode_i64, i64, ValueKind::Int);
impl_int_encodable!(i32, encode_i64, i64, ValueKind::Int);
impl_int_encodable!(i64, encode_i64, i64, ValueKind::Int);
impl_int_encodable!(isize, encode_i64, i64, ValueKind::Int);
impl_int_encodable!(u8, encode_u64, u64, ValueKind::Uint);
impl_int_encodable!(u16, encode_u64, u64, ValueKind::Uint);
impl_int_encodable!(u32, encode_u64, u64, ValueKind::Uint);
impl_int_encodable!(u64, encode_u64, u64, ValueKind::Uint);
impl_int_encodable!(usize, encode_u64, u64, ValueKind::Uint);

macro_rules! impl_float_encodable {
    ($ty:ty, $method:ident) => {
        impl Encodable for $ty {
            #[inline(always)]
            fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                encoder.$method(*self)
            }

            #[inline(always)]
            fn kind(&self) -> ValueKind {
                ValueKind::Float
            }

            #[inline(always)]
            fn is_empty_value(&self) -> bool {
                *self == 0.0
            }

            #[inline(always)]
            fn static_kind() -> ValueKind {
                ValueKind::Float
            }
        }
    };
}

impl_float_encodable!(f32, encode_f32);
impl_float_encodable!(f64, encode_f64);
