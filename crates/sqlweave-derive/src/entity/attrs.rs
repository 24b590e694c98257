//! Attribute parsing for the Entity derive macro.

use syn::{DeriveInput, Result};

/// Struct-level `#[orm(...)]` values.
#[derive(Default)]
pub(super) struct TableAttr {
    pub table: Option<String>,
    pub schema: Option<String>,
}

impl syn::parse::Parse for TableAttr {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attr = TableAttr::default();
        while !input.is_empty() {
            let ident: syn::Ident = input.parse()?;
            let _: syn::Token![=] = input.parse()?;
            let value: syn::LitStr = input.parse()?;
            if ident == "table" {
                attr.table = Some(value.value());
            } else if ident == "schema" {
                attr.schema = Some(value.value());
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    "expected `table` or `schema`",
                ));
            }
            if !input.is_empty() {
                let _: syn::Token![,] = input.parse()?;
            }
        }
        Ok(attr)
    }
}

/// Field-level `#[orm(...)]` values.
#[derive(Default)]
pub(super) struct FieldAttr {
    pub is_id: bool,
    pub skip: bool,
    pub identity: Option<bool>,
    pub column: Option<String>,
    pub member: Option<String>,
    pub ambient: Option<String>,
    pub order: Option<i32>,
}

impl syn::parse::Parse for FieldAttr {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();
        while !input.is_empty() {
            let ident: syn::Ident = input.parse()?;
            match ident.to_string().as_str() {
                "id" => attr.is_id = true,
                "skip" => attr.skip = true,
                "identity" => attr.identity = Some(true),
                "no_identity" => attr.identity = Some(false),
                "order" => {
                    let _: syn::Token![=] = input.parse()?;
                    let value: syn::LitInt = input.parse()?;
                    attr.order = Some(value.base10_parse()?);
                }
                key @ ("column" | "member" | "ambient") => {
                    let _: syn::Token![=] = input.parse()?;
                    let value: syn::LitStr = input.parse()?;
                    let slot = match key {
                        "column" => &mut attr.column,
                        "member" => &mut attr.member,
                        _ => &mut attr.ambient,
                    };
                    *slot = Some(value.value());
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        "unknown orm attribute; expected one of `id`, `skip`, `identity`, \
                         `no_identity`, `order`, `column`, `member`, `ambient`",
                    ));
                }
            }
            if !input.is_empty() {
                let _: syn::Token![,] = input.parse()?;
            }
        }
        Ok(attr)
    }
}

/// Merge every struct-level `#[orm(...)]` attribute.
pub(super) fn table_attr(input: &DeriveInput) -> Result<TableAttr> {
    let mut merged = TableAttr::default();
    for attr in &input.attrs {
        if attr.path().is_ident("orm") {
            let parsed: TableAttr = attr.parse_args()?;
            merged.table = parsed.table.or(merged.table);
            merged.schema = parsed.schema.or(merged.schema);
        }
    }
    Ok(merged)
}

/// Merge every `#[orm(...)]` attribute on a field.
pub(super) fn field_attr(field: &syn::Field) -> Result<FieldAttr> {
    let mut merged = FieldAttr::default();
    for attr in &field.attrs {
        if attr.path().is_ident("orm") {
            let parsed: FieldAttr = attr.parse_args()?;
            merged.is_id |= parsed.is_id;
            merged.skip |= parsed.skip;
            merged.identity = parsed.identity.or(merged.identity);
            merged.column = parsed.column.or(merged.column);
            merged.member = parsed.member.or(merged.member);
            merged.ambient = parsed.ambient.or(merged.ambient);
            merged.order = parsed.order.or(merged.order);
        }
    }
    Ok(merged)
}
