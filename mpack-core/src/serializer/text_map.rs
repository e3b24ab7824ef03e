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
use crate::serializer::map::Associative;
use crate::serializer::ordering::{sorted_text_entries, text_key};

fn encode_text_keyed<M, F>(
    encoder: &mut Encoder<'_>,
    map: Option<&M>,
    mut write_value: F,
) -> Result<(), Error>
where
    M: Associative + ?Sized,
    F: FnMut(&mut Encoder<'_>, &M::Value) -> Result<(), Error>,
{
    let Some(map) = map else {
        return encoder.encode_nil();
    };
    encoder.encode_map_len(map.entry_count())?;
    if encoder.config().is_sort_keys() {
        for (key, value) in sorted_text_entries(map)? {
            encode_text_key(encoder, &key)?;
            write_value(encoder, value)?;
        }
    } else {
        for (key, value) in map.entries() {
            encode_text_key(encoder, &text_key(key)?)?;
            write_value(encoder, value)?;
        }
    }
    Ok(())
}

/// Writes a map from text to text, or nil when it is absent.
///
/// Keys are sorted when key sorting is on; sorting always uses the original
/// key, never its transformed form.
pub fn encode_text_text_map<M: Associative + ?Sized>(
    encoder: &mut Encoder<'_>,
    map: Option<&M>,
) -> Result<(), Error> {
    encode_text_keyed(encoder, map, |encoder, value| {
        encoder.encode_str(&text_key(value)?)
    })
}

/// Writes a map from text to values of any kind, or nil when it is absent.
///
/// Same key handling as [`encode_text_text_map`]; values go through the
/// generic value encoder.
pub fn encode_text_dyn_map<M: Associative + ?Sized>(
    encoder: &mut Encoder<'_>,
    map: Option<&M>,
) -> Result<(), Error> {
    encode_text_keyed(encoder, map, |encoder, value| encoder.encode(value))
}
