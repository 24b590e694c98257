//! One-call statements for derived entities.
//!
//! Each helper runs a [`QueryBuilder`] over `T`'s cached table and returns
//! the finished [`Query`]. Use the builder directly to add ordering or raw
//! fragments.

use crate::builder::QueryBuilder;
use crate::dialect::Dialect;
use crate::error::WeaveResult;
use crate::mapping::Entity;
use crate::predicate::PredicateNode;
use crate::query::Query;

fn with_filter<T: Entity>(
    dialect: &Dialect,
    filter: Option<&PredicateNode>,
    command: impl FnOnce(&mut QueryBuilder<'_>) -> WeaveResult<()>,
) -> WeaveResult<Query> {
    let mut qb = QueryBuilder::for_entity::<T>(dialect)?;
    command(&mut qb)?;
    if let Some(predicate) = filter {
        qb.filter(predicate)?;
    }
    Ok(qb.build())
}

/// `select count(*) ...`, optionally filtered.
pub fn count<T: Entity>(dialect: &Dialect, filter: Option<&PredicateNode>) -> WeaveResult<Query> {
    with_filter::<T>(dialect, filter, |qb| qb.count().map(drop))
}

/// `select` of every mapped column, optionally filtered.
pub fn select<T: Entity>(dialect: &Dialect, filter: Option<&PredicateNode>) -> WeaveResult<Query> {
    with_filter::<T>(dialect, filter, |qb| qb.select().map(drop))
}

pub fn insert<T: Entity>(dialect: &Dialect, use_ambient: bool) -> WeaveResult<Query> {
    with_filter::<T>(dialect, None, |qb| qb.insert(use_ambient).map(drop))
}

pub fn update<T: Entity>(
    dialect: &Dialect,
    use_ambient: bool,
    filter: Option<&PredicateNode>,
) -> WeaveResult<Query> {
    with_filter::<T>(dialect, filter, |qb| qb.update(use_ambient).map(drop))
}

pub fn delete<T: Entity>(dialect: &Dialect, filter: Option<&PredicateNode>) -> WeaveResult<Query> {
    with_filter::<T>(dialect, filter, |qb| qb.delete().map(drop))
}

pub fn truncate<T: Entity>(dialect: &Dialect) -> WeaveResult<Query> {
    with_filter::<T>(dialect, None, |qb| qb.truncate().map(drop))
}
