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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Fields, Index};

/// A struct field in declaration order.
pub struct SourceField<'a> {
    pub original_index: usize,
    pub field: &'a Field,
    /// Identifier without a raw prefix, or the position for tuple structs.
    pub field_name: String,
    pub is_tuple_struct: bool,
}

impl<'a> SourceField<'a> {
    /// `self.<field>` access expression.
    pub fn access(&self) -> TokenStream {
        if self.is_tuple_struct {
            let index = Index::from(self.original_index);
            quote! { self.#index }
        } else {
            let ident = &self.field.ident;
            quote! { self.#ident }
        }
    }
}

pub fn source_fields(fields: &Fields) -> Vec<SourceField<'_>> {
    fields
        .iter()
        .enumerate()
        .map(|(original_index, field)| match &field.ident {
            Some(ident) => {
                let name = ident.to_string();
                SourceField {
                    original_index,
                    field,
                    field_name: name.strip_prefix("r#").unwrap_or(&name).to_string(),
                    is_tuple_struct: false,
                }
            }
            None => SourceField {
                original_index,
                field,
                field_name: original_index.to_string(),
                is_tuple_struct: true,
            },
        })
        .collect()
}
