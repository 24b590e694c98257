//! # sqlweave
//!
//! Dialect-aware SQL statement assembly for mapped entities.
//!
//! ## Features
//!
//! - **Statements from metadata**: `select`, `insert`, `update`, `delete`,
//!   `count` and `truncate` are rendered from a [`TableDescriptor`]
//! - **Predicate compiler**: filters built with [`predicate::col`] and friends
//!   compile to parameterized `where` clauses with correct `and`/`or` grouping
//! - **Five dialects**: SQL Server, MySQL, SQLite, PostgreSQL and Oracle, plus
//!   custom ones loaded from configuration
//! - **No execution**: the output is a [`Query`] of SQL text and bind values
//!   for whatever driver you use
//!
//! ## Example
//!
//! ```ignore
//! use sqlweave::prelude::*;
//!
//! #[derive(Entity)]
//! #[orm(table = "T_People", schema = "dbo")]
//! struct Person {
//!     #[orm(id)]
//!     id: i32,
//!     #[orm(column = "姓")]
//!     last_name: String,
//!     age: i32,
//! }
//!
//! let mut qb = QueryBuilder::for_entity::<Person>(&Dialect::SQL_SERVER)?;
//! qb.select()?
//!     .filter(&col("id").eq(1).or(col("last_name").ne("x")))?;
//! let query = qb.build();
//! // select
//! //     [id] as [id],
//! //     [姓] as [last_name],
//! //     [age] as [age]
//! // from [dbo].[T_People]
//! // where
//! //     [id] = @p1 or [姓] <> @p2
//! ```

extern crate self as sqlweave;

pub mod builder;
pub mod command;
pub mod dialect;
pub mod error;
pub mod mapping;
pub mod param;
pub mod predicate;
pub mod prelude;
pub mod query;
pub mod statement;
pub mod trace;
pub mod value;
pub mod writer;

pub use builder::QueryBuilder;
pub use command::Command;
pub use dialect::{BracketPair, DbKind, Dialect};
pub use error::{WeaveError, WeaveResult};
pub use mapping::{
    ColumnBuilder, ColumnDescriptor, Entity, EntityRegistration, MemberType, TableBuilder,
    TableDescriptor, preload_entities, registered_entities, table_of,
};
pub use param::{BindParameters, Param};
pub use predicate::{CompareOp, LogicalOp, PredicateNode};
pub use query::Query;
pub use statement::{count, delete, insert, select, truncate, update};
pub use trace::SqlTrace;
pub use value::Value;
pub use writer::SqlWriter;

// Re-export inventory for use by the derive macro
pub use inventory;

#[cfg(feature = "derive")]
pub use sqlweave_derive::Entity;
