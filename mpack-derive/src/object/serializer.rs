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

use crate::object::field_meta::{parse_container_meta, parse_field_meta};
use crate::object::misc::{self, RecordField};
use crate::util::source_fields;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, GenericParam};

pub fn derive_record(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let data = match &ast.data {
        Data::Struct(s) => s,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span,
                "MpackRecord can only be derived for structs",
            ))
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "MpackRecord can only be derived for structs",
            ))
        }
    };
    if let Some(lifetime) = ast.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "MpackRecord does not support lifetime parameters",
        ));
    }

    let container = parse_container_meta(&ast.attrs)?;
    let mut fields = Vec::new();
    for source in source_fields(&data.fields) {
        let meta = parse_field_meta(source.field)?;
        if meta.skip {
            continue;
        }
        fields.push(RecordField {
            index: fields.len(),
            source,
            meta,
        });
    }

    let mut generics = ast.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(tp) = param {
            tp.bounds
                .push(parse_quote!(mpack_core::serializer::Encodable));
            tp.bounds.push(parse_quote!('static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_name = name.to_string();
    let fields_info_ts = misc::gen_fields_info(&fields);
    let encode_field_ts = misc::gen_encode_field(&fields, &type_name);
    let is_field_empty_ts = misc::gen_is_field_empty(&fields);
    let as_array = container.as_array;

    Ok(quote! {
        impl #impl_generics mpack_core::serializer::Record for #name #ty_generics #where_clause {
            const FIELDS: &'static [mpack_core::meta::FieldInfo] = #fields_info_ts;
            const AS_ARRAY: bool = #as_array;

            fn encode_field(
                &self,
                index: usize,
                encoder: &mut mpack_core::resolver::context::Encoder<'_>,
            ) -> ::core::result::Result<(), mpack_core::error::Error> {
                #encode_field_ts
            }

            fn is_field_empty(&self, index: usize) -> bool {
                #is_field_empty_ts
            }
        }

        impl #impl_generics mpack_core::serializer::Encodable for #name #ty_generics #where_clause {
            #[inline(always)]
            fn encode(
                &self,
                encoder: &mut mpack_core::resolver::context::Encoder<'_>,
            ) -> ::core::result::Result<(), mpack_core::error::Error> {
                mpack_core::serializer::struct_::encode_record(self, encoder)
            }

            #[inline(always)]
            fn kind(&self) -> mpack_core::serializer::ValueKind {
                mpack_core::serializer::ValueKind::Record
            }

            #[inline(always)]
            fn is_empty_value(&self) -> bool {
                false
            }

            #[inline(always)]
            fn static_kind() -> mpack_core::serializer::ValueKind {
                mpack_core::serializer::ValueKind::Record
            }
        }
    })
}
