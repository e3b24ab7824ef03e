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

use crate::config::FieldNaming;
use crate::meta::FieldSet;
use crate::serializer::Record;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Per-type cache of resolved record field lists.
///
/// Entries are built on first use and never change afterwards, so lookups
/// take the read lock and only the first encode of a type takes the write
/// lock. Building a `FieldSet` is idempotent; two threads racing on the same
/// type produce equal sets and the first one inserted wins.
#[derive(Default)]
pub struct FieldResolver {
    cache: RwLock<HashMap<(TypeId, FieldNaming), Arc<FieldSet>>>,
}

impl FieldResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: Record + 'static>(&self, naming: FieldNaming) -> Arc<FieldSet> {
        let key = (TypeId::of::<T>(), naming);
        if let Some(set) = self.cache.read().get(&key) {
            return set.clone();
        }
        let set = Arc::new(FieldSet::build(T::FIELDS, T::AS_ARRAY, naming));
        tracing::debug!(
            record = std::any::type_name::<T>(),
            ?naming,
            fields = set.len(),
            as_array = set.as_array,
            "resolved record fields"
        );
        self.cache.write().entry(key).or_insert(set).clone()
    }

    /// Number of cached `(type, naming)` entries.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}
