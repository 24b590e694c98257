//! Type helper utilities for syn type analysis.

/// Extract the inner type T from Option<T>, or return None if not an Option type.
///
/// Recognizes `Option<T>`, `std::option::Option<T>`, and `core::option::Option<T>`.
pub fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    single_generic_arg(ty, "Option")
}

/// Extract the inner type T from Vec<T>, or return None if not a Vec type.
pub fn vec_inner(ty: &syn::Type) -> Option<&syn::Type> {
    single_generic_arg(ty, "Vec")
}

fn single_generic_arg<'a>(ty: &'a syn::Type, wrapper: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    let syn::GenericArgument::Type(inner) = args.args.first()? else {
        return None;
    };
    Some(inner)
}

/// Name of the `sqlweave::MemberType` variant for a field type.
///
/// Matches on the last path segment, so `chrono::NaiveDate` and `NaiveDate`
/// are treated alike. Unknown types map to `Other`.
pub fn member_type_variant(ty: &syn::Type) -> &'static str {
    if let syn::Type::Reference(r) = ty {
        return member_type_variant(&r.elem);
    }
    if let Some(inner) = vec_inner(ty) {
        return if last_ident(inner).as_deref() == Some("u8") {
            "Bytes"
        } else {
            "Other"
        };
    }

    match last_ident(ty).as_deref() {
        Some("bool") => "Bool",
        Some("i8") => "I8",
        Some("i16") => "I16",
        Some("i32") => "I32",
        Some("i64") | Some("isize") => "I64",
        Some("u8") => "U8",
        Some("u16") => "U16",
        Some("u32") => "U32",
        Some("u64") | Some("usize") => "U64",
        Some("f32") => "F32",
        Some("f64") => "F64",
        Some("Decimal") => "Decimal",
        Some("String") | Some("str") | Some("char") => "Text",
        Some("NaiveDate") => "Date",
        Some("NaiveTime") => "Time",
        Some("NaiveDateTime") => "DateTime",
        Some("DateTime") => "Timestamp",
        Some("Uuid") => "Uuid",
        Some("Value") | Some("Json") => "Json",
        _ => "Other",
    }
}

fn last_ident(ty: &syn::Type) -> Option<String> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    type_path.path.segments.last().map(|s| s.ident.to_string())
}
