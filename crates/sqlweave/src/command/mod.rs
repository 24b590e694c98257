//! Statement steps.
//!
//! Each step appends one fragment to a [`SqlWriter`] using the table's
//! metadata. Steps are independent: a [`QueryBuilder`](crate::QueryBuilder)
//! runs them in call order and performs no grammar check across them, so
//! e.g. an `order by` without a leading command is rendered as-is.

mod count;
mod delete;
mod filter;
mod insert;
mod order_by;
mod raw;
mod select;
mod truncate;
mod update;

pub use count::Count;
pub use delete::Delete;
pub use filter::Where;
pub use insert::Insert;
pub use order_by::{OrderBy, ThenBy};
pub use raw::Raw;
pub use select::Select;
pub use truncate::Truncate;
pub use update::Update;

use crate::error::{WeaveError, WeaveResult};
use crate::mapping::{ColumnDescriptor, TableDescriptor};
use crate::writer::SqlWriter;
use std::collections::HashSet;

/// One step of a statement.
pub trait Command {
    /// Step name used in trace output (`select`, `where`, ...).
    fn name(&self) -> &'static str;

    /// Append this step's fragment.
    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()>;
}

/// Mapped columns restricted to `members`, in declaration order.
///
/// Names the table does not know are rejected; names of unmapped members
/// and repeated names are ignored. An empty result is an error since it
/// would render no column list.
pub(crate) fn target_columns<'t>(
    table: &'t TableDescriptor,
    members: Option<&[&str]>,
    statement: &str,
) -> WeaveResult<Vec<&'t ColumnDescriptor>> {
    let columns: Vec<_> = match members {
        None => table.mapped_columns().collect(),
        Some(members) => {
            let mut wanted = HashSet::with_capacity(members.len());
            for &member in members {
                if table.column(member).is_none() {
                    return Err(WeaveError::mapping(
                        member,
                        format!("no such member on table '{}'", table.name()),
                    ));
                }
                wanted.insert(member);
            }
            table
                .mapped_columns()
                .filter(|c| wanted.contains(c.member_name()))
                .collect()
        }
    };

    if columns.is_empty() {
        return Err(WeaveError::validation(format!(
            "{statement} on '{}' has no columns",
            table.name()
        )));
    }
    Ok(columns)
}

#[cfg(test)]
mod tests;
