//! Convenient imports for typical `sqlweave` usage.
//!
//! ```ignore
//! use sqlweave::prelude::*;
//! ```

pub use crate::predicate::{col, computed, element, lit, try_computed};
pub use crate::{
    BindParameters, DbKind, Dialect, Entity, PredicateNode, Query, QueryBuilder, SqlTrace, Value,
    WeaveError, WeaveResult,
};
