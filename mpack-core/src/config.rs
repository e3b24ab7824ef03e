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
use crate::serializer::value::Value;
use std::fmt;
use std::sync::Arc;

/// Rewrites a textual key before it is emitted.
///
/// The returned [`Value`] is encoded in place of the key, so a transform can
/// shrink repeated keys to small integer codes. It must be free of side
/// effects: one `Packer` may run it from several threads at once.
pub type KeyTransform = Arc<dyn Fn(&str) -> Result<Value, Error> + Send + Sync>;

/// Which container shape records are written with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordShape {
    /// Map shape unless the record type declares `#[mpack(as_array)]`.
    #[default]
    Declared,
    /// Every record is a positional array, whatever the type declares.
    Array,
    /// Every record is a map, whatever the type declares.
    Map,
}

/// Which set of declared field names records are written with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldNaming {
    /// `#[mpack(name = "..")]`, or the field identifier.
    #[default]
    Primary,
    /// `#[mpack(alt = "..")]`, falling back to the primary name.
    Alternate,
}

pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Encoding policies for one `Packer`.
///
/// The config is immutable while values are encoded; every [`Encoder`]
/// borrows it for the duration of a single encode call.
///
/// [`Encoder`]: crate::resolver::context::Encoder
#[derive(Clone)]
pub struct Config {
    /// Optional rewrite applied to every textual key.
    pub key_transform: Option<KeyTransform>,
    /// Emit text-keyed maps in ascending order of their original keys.
    pub sort_keys: bool,
    /// Record container shape.
    pub record_shape: RecordShape,
    /// Record field naming convention.
    pub field_naming: FieldNaming,
    /// Maximum nesting depth of containers.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            key_transform: None,
            sort_keys: false,
            record_shape: RecordShape::Declared,
            field_naming: FieldNaming::Primary,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key_transform", &self.key_transform.is_some())
            .field("sort_keys", &self.sort_keys)
            .field("record_shape", &self.record_shape)
            .field("field_naming", &self.field_naming)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn key_transform(&self) -> Option<&KeyTransform> {
        self.key_transform.as_ref()
    }

    #[inline(always)]
    pub fn is_sort_keys(&self) -> bool {
        self.sort_keys
    }

    #[inline(always)]
    pub fn record_shape(&self) -> RecordShape {
        self.record_shape
    }

    #[inline(always)]
    pub fn field_naming(&self) -> FieldNaming {
        self.field_naming
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Resolves the record shape for a type that declares `type_as_array`.
    ///
    /// An explicit session shape takes precedence over the type's declaration.
    #[inline(always)]
    pub fn record_as_array(&self, type_as_array: bool) -> bool {
        match self.record_shape {
            RecordShape::Declared => type_as_array,
            RecordShape::Array => true,
            RecordShape::Map => false,
        }
    }
}
