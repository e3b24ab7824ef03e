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

use crate::object::field_meta::MpackFieldMeta;
use crate::util::SourceField;
use proc_macro2::TokenStream;
use quote::quote;

/// A field that takes part in encoding, with its position in `FIELDS`.
pub struct RecordField<'a> {
    pub index: usize,
    pub source: SourceField<'a>,
    pub meta: MpackFieldMeta,
}

impl RecordField<'_> {
    fn primary_name(&self) -> &str {
        self.meta.name.as_deref().unwrap_or(&self.source.field_name)
    }
}

pub fn gen_fields_info(fields: &[RecordField]) -> TokenStream {
    let infos = fields.iter().map(|f| {
        let name = f.primary_name();
        let alt = match &f.meta.alt {
            Some(alt) => quote! { ::core::option::Option::Some(#alt) },
            None => quote! { ::core::option::Option::None },
        };
        let omit_empty = f.meta.omit_empty;
        quote! {
            mpack_core::meta::FieldInfo::new(#name, #alt, #omit_empty)
        }
    });
    quote! {
        &[#(#infos),*]
    }
}

pub fn gen_encode_field(fields: &[RecordField], type_name: &str) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let index = f.index;
        let access = f.source.access();
        quote! {
            #index => encoder.encode(&#access),
        }
    });
    let silence_unused = if fields.is_empty() {
        quote! { let _ = encoder; }
    } else {
        quote! {}
    };
    quote! {
        #silence_unused
        match index {
            #(#arms)*
            _ => ::core::result::Result::Err(mpack_core::error::Error::unknown(::std::format!(
                "field index {} out of range for {}",
                index, #type_name
            ))),
        }
    }
}

pub fn gen_is_field_empty(fields: &[RecordField]) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let index = f.index;
        let access = f.source.access();
        quote! {
            #index => mpack_core::serializer::Encodable::is_empty_value(&#access),
        }
    });
    quote! {
        match index {
            #(#arms)*
            _ => false,
        }
    }
}
