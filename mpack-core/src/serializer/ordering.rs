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
use crate::serializer::map::Associative;
use crate::serializer::Encodable;
use std::borrow::Cow;

/// Text of a key or value whose type is statically known to be textual.
#[inline(always)]
pub(crate) fn text_key<K: Encodable + ?Sized>(key: &K) -> Result<Cow<'_, str>, Error> {
    key.as_text().ok_or_else(|| {
        Error::enhance_type_error::<K>(Error::type_error("expected a text value"))
    })
}

/// Entries of a text-keyed map in ascending byte order of their original,
/// untransformed keys.
///
/// Associative types that may repeat a key keep the repeats in their
/// iteration order.
pub fn sorted_text_entries<M: Associative + ?Sized>(
    map: &M,
) -> Result<Vec<(Cow<'_, str>, &M::Value)>, Error> {
    let mut entries = Vec::with_capacity(map.entry_count());
    for (key, value) in map.entries() {
        entries.push((text_key(key)?, value));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}
