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

use crate::config::KeyTransform;
use crate::error::Error;
use crate::resolver::context::Encoder;
use crate::serializer::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Writes a textual key, rewritten by the configured key transform if any.
///
/// A failing transform aborts the enclosing encode; nothing is written for
/// the rejected key.
pub fn encode_text_key(encoder: &mut Encoder<'_>, key: &str) -> Result<(), Error> {
    match encoder.config().key_transform() {
        Some(transform) => {
            let mapped = transform(key).map_err(|err| {
                tracing::debug!(key, error = %err, "key transform rejected key");
                err
            })?;
            encoder.encode(&mapped)
        }
        None => encoder.encode_str(key),
    }
}

/// Key compression table.
///
/// Maps every known key to its position in the list it was built from, so
/// repeated keys go out as small integers. Keys outside the list are an error
/// unless the dictionary is built with [`KeyDictionary::passthrough`].
///
/// ```
/// use mpack_core::serializer::key::KeyDictionary;
/// use mpack_core::serializer::value::Value;
///
/// let dict = KeyDictionary::new(["id", "name"]);
/// assert_eq!(dict.lookup("name").unwrap(), Value::Uint(1));
/// assert!(dict.lookup("email").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyDictionary {
    codes: HashMap<String, u64>,
    passthrough: bool,
}

impl KeyDictionary {
    /// Builds a dictionary; a key listed twice keeps its first position.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes = HashMap::new();
        for (index, key) in keys.into_iter().enumerate() {
            codes.entry(key.into()).or_insert(index as u64);
        }
        KeyDictionary {
            codes,
            passthrough: false,
        }
    }

    /// Emit unknown keys unchanged instead of failing.
    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    pub fn code(&self, key: &str) -> Option<u64> {
        self.codes.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn lookup(&self, key: &str) -> Result<Value, Error> {
        match self.codes.get(key) {
            Some(code) => Ok(Value::Uint(*code)),
            None if self.passthrough => Ok(Value::Str(key.to_owned())),
            None => Err(Error::key_transform(format!(
                "key {key:?} is not in the dictionary"
            ))),
        }
    }

    pub fn into_transform(self) -> KeyTransform {
        Arc::new(move |key| self.lookup(key))
    }
}
