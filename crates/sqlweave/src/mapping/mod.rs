//! Table and column metadata.
//!
//! A [`TableDescriptor`] maps an entity's members to a table's columns. It is
//! built once per entity type through [`Entity::describe`] and cached for the
//! rest of the process by [`Entity::table`].

mod column;
mod registry;
mod table;

pub use column::{ColumnBuilder, ColumnDescriptor, MemberType};
pub use registry::{Entity, EntityRegistration, preload_entities, registered_entities, table_of};
pub use table::{TableBuilder, TableDescriptor};

#[cfg(test)]
mod tests;
