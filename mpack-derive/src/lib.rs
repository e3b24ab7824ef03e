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

//! Derive macros for `mpack`.
//!
//! `#[derive(MpackRecord)]` implements `mpack_core::Record` and
//! `mpack_core::Encodable` for a struct so it is written as a MessagePack map
//! of its fields, or as a positional array.
//!
//! Container attribute:
//!
//! - `#[mpack(as_array)]`: write the record as an array of all its fields.
//!
//! Field attributes:
//!
//! - `#[mpack(name = "..")]`: name used on the wire. `"-"` excludes the field.
//! - `#[mpack(alt = "..")]`: name used when the packer selects alternate
//!   names. Falls back to the primary name. `"-"` excludes the field under
//!   alternate naming only.
//! - `#[mpack(omitempty)]`: leave the field out of map-shaped output when it
//!   holds an empty value.
//! - `#[mpack(skip)]`: never encode the field.
//!
//! The generated code refers to `mpack_core`, which must be a dependency of
//! the deriving crate.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

#[proc_macro_derive(MpackRecord, attributes(mpack))]
pub fn proc_macro_derive_mpack_record(input: proc_macro::TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
