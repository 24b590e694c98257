//! Entity derive macro implementation
//!
//! ## Module Structure
//!
//! - `attrs`: Struct and field attribute parsing

mod attrs;

use crate::common::syn_types::{member_type_variant, option_inner};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Entity cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Entity can only be derived for structs",
            ));
        }
    };

    let table = attrs::table_attr(&input)?;
    let table_name = table.table.unwrap_or_else(|| name.to_string());
    let schema = table.schema.map(|s| quote! { .schema(#s) });

    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attr = attrs::field_attr(field)?;

        let raw = ident.to_string();
        let member = attr
            .member
            .unwrap_or_else(|| raw.strip_prefix("r#").unwrap_or(&raw).to_string());

        let (ty, nullable) = match option_inner(&field.ty) {
            Some(inner) => (inner, true),
            None => (&field.ty, false),
        };
        let variant = syn::Ident::new(member_type_variant(ty), Span::call_site());

        let mut chain = TokenStream::new();
        if let Some(column) = &attr.column {
            chain.extend(quote! { .column_name(#column) });
        }
        if let Some(order) = attr.order {
            chain.extend(quote! { .order(#order) });
        }
        if let Some(ambient) = &attr.ambient {
            chain.extend(quote! { .ambient(#ambient) });
        }
        if attr.is_id {
            chain.extend(quote! { .primary_key() });
        }
        if nullable {
            chain.extend(quote! { .nullable() });
        }
        if attr.skip {
            chain.extend(quote! { .not_mapped() });
        }
        if let Some(identity) = attr.identity {
            chain.extend(quote! { .auto_increment(#identity) });
        }

        columns.push(quote! {
            .column(
                sqlweave::ColumnDescriptor::builder(#member, sqlweave::MemberType::#variant)
                    #chain
            )
        });
    }

    let type_name = name.to_string();

    Ok(quote! {
        impl sqlweave::Entity for #name {
            fn describe() -> sqlweave::WeaveResult<sqlweave::TableDescriptor> {
                sqlweave::TableDescriptor::builder(#table_name)
                    #schema
                    #(#columns)*
                    .build()
            }
        }

        sqlweave::inventory::submit! {
            sqlweave::EntityRegistration {
                type_name: #type_name,
                preload: <#name as sqlweave::Entity>::table,
            }
        }
    })
}
