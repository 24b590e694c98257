//! Derive macros for sqlweave
//!
//! Provides `#[derive(Entity)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod common;
mod entity;

/// Derive `sqlweave::Entity` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use sqlweave::Entity;
///
/// #[derive(Entity)]
/// #[orm(table = "T_People", schema = "dbo")]
/// struct Person {
///     #[orm(id)]
///     id: i32,
///     #[orm(column = "姓")]
///     last_name: String,
///     #[orm(skip)]
///     full_name: String,
///     #[orm(ambient = "SYSDATETIME()")]
///     created_at: chrono::NaiveDateTime,
/// }
/// ```
///
/// # Generated
///
/// - `impl sqlweave::Entity` describing every field in declaration order
/// - an inventory registration so `sqlweave::preload_entities()` can warm
///   the descriptor cache
///
/// # Attributes
///
/// Struct:
/// - `#[orm(table = "name")]` - Table name (defaults to the struct name)
/// - `#[orm(schema = "name")]` - Schema name
///
/// Field:
/// - `#[orm(id)]` - Primary key
/// - `#[orm(column = "name")]` - Column name (defaults to the member name)
/// - `#[orm(member = "Name")]` - Member name (defaults to the field name)
/// - `#[orm(ambient = "SQL")]` - Literal used instead of a parameter in ambient mode
/// - `#[orm(order = N)]` - Declared column order
/// - `#[orm(identity)]` / `#[orm(no_identity)]` - Force auto-increment on or off
/// - `#[orm(skip)]` - Not mapped to any column
#[proc_macro_derive(Entity, attributes(orm))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
