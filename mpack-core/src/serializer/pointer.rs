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
use std::rc::Rc;
use std::sync::Arc;

macro_rules! impl_pointer_encodable {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> Encodable for $ty {
            #[inline(always)]
            fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                (**self).encode(encoder)
            }

            #[inline(always)]
            fn kind(&self) -> ValueKind {
                (**self).kind()
            }

            #[inline(always)]
            fn as_text(&self) -> Option<Cow<'_, str>> {
                (**self).as_text()
            }

            #[inline(always)]
            fn is_empty_value(&self) -> bool {
                (**self).is_empty_value()
            }

            #[inline(always)]
            fn static_kind() -> ValueKind {
                T::static_kind()
            }
        }
    };
}

impl_pointer_encodable!(['a, T: Encodable + ?Sized] &'a T);
impl_pointer_encodable!(['a, T: Encodable + ?Sized] &'a mut T);
impl_pointer_encodable!([T: Encodable + ?Sized] Box<T>);
impl_pointer_encodable!([T: Encodable + ?Sized] Rc<T>);
impl_pointer_encodable!([T: Encodable + ?Sized] Arc<T>);
