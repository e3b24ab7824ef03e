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

/// Name used to exclude a field under one naming convention.
pub const SKIP_NAME: &str = "-";

/// Compile-time description of one record field.
///
/// Generated by `#[derive(MpackRecord)]` in declaration order; the position of
/// a `FieldInfo` in `Record::FIELDS` is the index passed back to
/// `Record::encode_field` and `Record::is_field_empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub alt_name: Option<&'static str>,
    pub omit_empty: bool,
}

impl FieldInfo {
    pub const fn new(name: &'static str, alt_name: Option<&'static str>, omit_empty: bool) -> Self {
        FieldInfo {
            name,
            alt_name,
            omit_empty,
        }
    }

    /// Name under `naming`, or `None` when the field is excluded there.
    pub fn name_for(&self, naming: FieldNaming) -> Option<&'static str> {
        let name = match naming {
            FieldNaming::Primary => self.name,
            FieldNaming::Alternate => self.alt_name.unwrap_or(self.name),
        };
        if name == SKIP_NAME {
            None
        } else {
            Some(name)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    /// Index into `Record::FIELDS`.
    pub index: usize,
    pub name: &'static str,
    pub omit_empty: bool,
}

/// Ordered field list of one record type under one naming convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSet {
    pub as_array: bool,
    pub fields: Vec<FieldEntry>,
}

impl FieldSet {
    pub fn build(infos: &[FieldInfo], as_array: bool, naming: FieldNaming) -> FieldSet {
        let fields = infos
            .iter()
            .enumerate()
            .filter_map(|(index, info)| {
                info.name_for(naming).map(|name| FieldEntry {
                    index,
                    name,
                    omit_empty: info.omit_empty,
                })
            })
            .collect();
        FieldSet { as_array, fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_omit_empty(&self) -> bool {
        self.fields.iter().any(|f| f.omit_empty)
    }
}
