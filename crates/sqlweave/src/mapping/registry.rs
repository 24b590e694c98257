//! Process-wide table descriptor cache.

use super::table::TableDescriptor;
use crate::error::WeaveResult;
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

/// A type mapped to a table.
///
/// Usually derived with `#[derive(Entity)]`; can be implemented by hand:
///
/// ```ignore
/// use sqlweave::{ColumnDescriptor, Entity, MemberType, TableDescriptor, WeaveResult};
///
/// struct Tag;
///
/// impl Entity for Tag {
///     fn describe() -> WeaveResult<TableDescriptor> {
///         TableDescriptor::builder("tags")
///             .column(ColumnDescriptor::builder("Id", MemberType::I64).primary_key())
///             .column(ColumnDescriptor::builder("Label", MemberType::Text))
///             .build()
///     }
/// }
/// ```
pub trait Entity: 'static {
    /// Build the table descriptor. Called at most once per type by [`Entity::table`].
    fn describe() -> WeaveResult<TableDescriptor>;

    /// The cached table descriptor for this type.
    fn table() -> WeaveResult<&'static TableDescriptor> {
        table_of::<Self>()
    }
}

/// Per-type slot: `init` serializes the first description, `table` holds the result.
#[derive(Default)]
struct Slot {
    init: Mutex<()>,
    table: OnceLock<&'static TableDescriptor>,
}

type Cache = RwLock<HashMap<TypeId, Arc<Slot>>>;

fn cache() -> &'static Cache {
    static CACHE: OnceLock<Cache> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

fn slot(key: TypeId) -> Arc<Slot> {
    if let Some(slot) = cache()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Arc::clone(slot);
    }
    let mut map = cache().write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(map.entry(key).or_default())
}

/// Resolve (and on first use, describe and cache) the table of `T`.
///
/// `describe` runs at most once per type even under concurrent first use.
/// A failing `describe` is not cached; the next call retries.
pub fn table_of<T: Entity + ?Sized>() -> WeaveResult<&'static TableDescriptor> {
    let slot = slot(TypeId::of::<T>());
    if let Some(table) = slot.table.get() {
        return Ok(*table);
    }

    let _guard = slot.init.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = slot.table.get() {
        return Ok(*table);
    }

    let described = T::describe()?;
    tracing::debug!(
        target: "sqlweave.mapping",
        entity = type_name::<T>(),
        table = described.name(),
        columns = described.columns().len(),
        "registered table descriptor"
    );
    let table: &'static TableDescriptor = Box::leak(Box::new(described));
    Ok(*slot.table.get_or_init(|| table))
}

/// Registration entry emitted by `#[derive(Entity)]`.
pub struct EntityRegistration {
    pub type_name: &'static str,
    pub preload: fn() -> WeaveResult<&'static TableDescriptor>,
}

inventory::collect!(EntityRegistration);

/// Warm the cache for every derived entity linked into the binary.
///
/// Returns the number of registered entities.
pub fn preload_entities() -> WeaveResult<usize> {
    let mut count = 0;
    for reg in inventory::iter::<EntityRegistration> {
        (reg.preload)()?;
        count += 1;
    }
    Ok(count)
}

/// Names of every derived entity linked into the binary.
pub fn registered_entities() -> impl Iterator<Item = &'static str> {
    inventory::iter::<EntityRegistration>
        .into_iter()
        .map(|reg| reg.type_name)
}
