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

use syn::{Attribute, Field, LitStr};

/// Parsed `#[mpack(...)]` attributes of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpackFieldMeta {
    pub name: Option<String>,
    pub alt: Option<String>,
    pub omit_empty: bool,
    pub skip: bool,
}

/// Parsed `#[mpack(...)]` attributes of the struct itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpackContainerMeta {
    pub as_array: bool,
}

pub fn parse_field_meta(field: &Field) -> syn::Result<MpackFieldMeta> {
    let mut meta = MpackFieldMeta::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("mpack") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("name") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.name = Some(non_empty(lit)?);
            } else if nested.path.is_ident("alt") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.alt = Some(non_empty(lit)?);
            } else if nested.path.is_ident("omitempty") {
                meta.omit_empty = true;
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else {
                return Err(nested.error("unknown mpack field attribute"));
            }
            Ok(())
        })?;
    }

    Ok(meta)
}

pub fn parse_container_meta(attrs: &[Attribute]) -> syn::Result<MpackContainerMeta> {
    let mut meta = MpackContainerMeta::default();

    for attr in attrs {
        if !attr.path().is_ident("mpack") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("as_array") {
                meta.as_array = true;
                Ok(())
            } else {
                Err(nested.error("unknown mpack container attribute"))
            }
        })?;
    }

    Ok(meta)
}

fn non_empty(lit: LitStr) -> syn::Result<String> {
    let value = lit.value();
    if value.is_empty() {
        return Err(syn::Error::new(lit.span(), "field name must not be empty"));
    }
    Ok(value)
}
