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
use crate::meta::{FieldEntry, FieldSet};
use crate::resolver::context::Encoder;
use crate::serializer::key::encode_text_key;
use crate::serializer::Record;

/// Writes a record as a map of its fields, or as a positional array when the
/// configured or declared shape asks for one.
pub fn encode_record<T: Record + 'static>(
    record: &T,
    encoder: &mut Encoder<'_>,
) -> Result<(), Error> {
    let set = encoder.field_set::<T>();
    let result = if encoder.config().record_as_array(set.as_array) {
        encode_record_as_array(record, &set, encoder)
    } else {
        encode_record_as_map(record, &set, encoder)
    };
    result.map_err(Error::enhance_type_error::<T>)
}

/// Map shape. `omitempty` fields holding an empty value are dropped and the
/// header counts only the fields that remain.
fn encode_record_as_map<T: Record>(
    record: &T,
    set: &FieldSet,
    encoder: &mut Encoder<'_>,
) -> Result<(), Error> {
    let kept: Vec<&FieldEntry> = if set.has_omit_empty() {
        set.fields
            .iter()
            .filter(|f| !(f.omit_empty && record.is_field_empty(f.index)))
            .collect()
    } else {
        set.fields.iter().collect()
    };
    encoder.encode_map_len(kept.len())?;
    for field in kept {
        encode_text_key(encoder, field.name)?;
        record.encode_field(field.index, encoder)?;
    }
    Ok(())
}

/// Array shape. Every field is written in declaration order, without names,
/// so omit-empty and the key transform do not apply.
fn encode_record_as_array<T: Record>(
    record: &T,
    set: &FieldSet,
    encoder: &mut Encoder<'_>,
) -> Result<(), Error> {
    encoder.encode_array_len(set.len())?;
    for field in &set.fields {
        record.encode_field(field.index, encoder)?;
    }
    Ok(())
}
