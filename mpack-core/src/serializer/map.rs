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
use crate::serializer::key::encode_text_key;
use crate::serializer::text_map::{encode_text_dyn_map, encode_text_text_map};
use crate::serializer::{Encodable, ValueKind};
use std::collections::{BTreeMap, HashMap};

/// A collection of key/value entries with a known entry count.
pub trait Associative {
    type Key: Encodable;
    type Value: Encodable;

    fn entry_count(&self) -> usize;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K: Encodable, V: Encodable, S> Associative for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Encodable, V: Encodable> Associative for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

/// Ordered pairs, written in slice order.
impl<K: Encodable, V: Encodable> Associative for [(K, V)] {
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Encodable, V: Encodable> Associative for Vec<(K, V)> {
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.as_slice().entries()
    }
}

/// Writes any associative container as a map, or nil when it is absent.
///
/// Entries go out in the container's own iteration order and are never
/// sorted. When a key transform is configured it rewrites every key that
/// is text at runtime; other keys are written as they are.
pub fn encode_associative<M: Associative + ?Sized>(
    encoder: &mut Encoder<'_>,
    map: Option<&M>,
) -> Result<(), Error> {
    let Some(map) = map else {
        return encoder.encode_nil();
    };
    encoder.encode_map_len(map.entry_count())?;
    let transform = encoder.config().key_transform().is_some();
    for (key, value) in map.entries() {
        match key.as_text() {
            Some(text) if transform => encode_text_key(encoder, &text)?,
            _ => encoder.encode(key)?,
        }
        encoder.encode(value)?;
    }
    Ok(())
}

/// Picks the map encoder from the static key and value categories.
///
/// Maps keyed by text take the text-keyed encoders, which honor key
/// sorting; every other map takes the generic associative encoder.
pub fn encode_map<M: Associative + ?Sized>(encoder: &mut Encoder<'_>, map: &M) -> Result<(), Error> {
    match (M::Key::static_kind(), M::Value::static_kind()) {
        (ValueKind::Str, ValueKind::Str) => encode_text_text_map(encoder, Some(map)),
        (ValueKind::Str, _) => encode_text_dyn_map(encoder, Some(map)),
        _ => encode_associative(encoder, Some(map)),
    }
}

macro_rules! impl_map_encodable {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> Encodable for $ty {
            fn encode(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
                encode_map(encoder, self)
            }

            #[inline(always)]
            fn kind(&self) -> ValueKind {
                ValueKind::Map
            }

            #[inline(always)]
            fn is_empty_value(&self) -> bool {
                self.is_empty()
            }

            #[inline(always)]
            fn static_kind() -> ValueKind {
                ValueKind::Map
            }
        }
    };
}

impl_map_encodable!([K: Encodable, V: Encodable, S] HashMap<K, V, S>);
impl_map_encodable!([K: Encodable, V: Encodable] BTreeMap<K, V>);
