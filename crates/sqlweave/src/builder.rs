//! Step-by-step statement assembly.

use crate::command::{
    Command, Count, Delete, Insert, OrderBy, Raw, Select, ThenBy, Truncate, Update, Where,
};
use crate::dialect::Dialect;
use crate::error::WeaveResult;
use crate::mapping::{Entity, TableDescriptor};
use crate::param::BindParameters;
use crate::predicate::PredicateNode;
use crate::query::Query;
use crate::trace::SqlTrace;
use crate::writer::SqlWriter;

/// Builds one statement for one table.
///
/// Steps append to a shared buffer in call order. A step that fails is
/// rolled back, so its text and parameters never reach the built query.
///
/// ```ignore
/// use sqlweave::{Dialect, QueryBuilder, predicate::col};
///
/// let mut qb = QueryBuilder::for_entity::<Person>(&Dialect::SQL_SERVER)?;
/// qb.select()?
///     .filter(&col("Age").ge(20))?
///     .order_by("LastName")?
///     .then_by_desc("Id")?;
/// let query = qb.build();
/// ```
#[derive(Debug)]
pub struct QueryBuilder<'a> {
    table: &'a TableDescriptor,
    writer: SqlWriter<'a>,
    steps: Vec<&'static str>,
    trace: Option<SqlTrace>,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(dialect: &'a Dialect, table: &'a TableDescriptor) -> Self {
        Self {
            table,
            writer: SqlWriter::new(dialect),
            steps: Vec::new(),
            trace: Some(SqlTrace::default()),
        }
    }

    /// Builder over the cached table of `T`.
    pub fn for_entity<T: Entity>(dialect: &'a Dialect) -> WeaveResult<Self> {
        Ok(Self::new(dialect, T::table()?))
    }

    /// Use `params` as the statement's parameter collection.
    ///
    /// Positional names continue after the seeded entries; a collision
    /// fails the step that causes it.
    pub fn with_parameters(mut self, params: BindParameters) -> Self {
        self.writer.replace_parameters(params);
        self
    }

    pub fn trace(mut self, trace: SqlTrace) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn without_trace(mut self) -> Self {
        self.trace = None;
        self
    }

    pub fn table(&self) -> &'a TableDescriptor {
        self.table
    }

    /// The SQL written so far.
    pub fn sql(&self) -> &str {
        self.writer.sql()
    }

    /// Run any [`Command`].
    ///
    /// A failing step leaves the statement as it was before the call.
    pub fn step(&mut self, command: impl Command) -> WeaveResult<&mut Self> {
        let name = command.name();
        let mark = self.writer.mark();
        if let Err(err) = command.write(self.table, &mut self.writer) {
            self.writer.rollback(mark);
            tracing::debug!(
                target: "sqlweave.sql",
                step = name,
                error = %err,
                "statement step failed"
            );
            return Err(err);
        }
        self.steps.push(name);
        Ok(self)
    }

    pub fn count(&mut self) -> WeaveResult<&mut Self> {
        self.step(Count)
    }

    pub fn select(&mut self) -> WeaveResult<&mut Self> {
        self.step(Select::all())
    }

    pub fn select_members(&mut self, members: &[&str]) -> WeaveResult<&mut Self> {
        self.step(Select::members(members))
    }

    pub fn insert(&mut self, use_ambient: bool) -> WeaveResult<&mut Self> {
        self.step(Insert {
            use_ambient,
            members: None,
        })
    }

    pub fn insert_members(&mut self, members: &[&str], use_ambient: bool) -> WeaveResult<&mut Self> {
        self.step(Insert {
            use_ambient,
            members: Some(members),
        })
    }

    pub fn update(&mut self, use_ambient: bool) -> WeaveResult<&mut Self> {
        self.step(Update {
            use_ambient,
            members: None,
        })
    }

    pub fn update_members(&mut self, members: &[&str], use_ambient: bool) -> WeaveResult<&mut Self> {
        self.step(Update {
            use_ambient,
            members: Some(members),
        })
    }

    pub fn delete(&mut self) -> WeaveResult<&mut Self> {
        self.step(Delete)
    }

    pub fn truncate(&mut self) -> WeaveResult<&mut Self> {
        self.step(Truncate)
    }

    /// Append a `where` clause.
    pub fn filter(&mut self, predicate: &PredicateNode) -> WeaveResult<&mut Self> {
        self.step(Where { predicate })
    }

    pub fn order_by(&mut self, member: &str) -> WeaveResult<&mut Self> {
        self.step(OrderBy {
            member,
            ascending: true,
        })
    }

    pub fn order_by_desc(&mut self, member: &str) -> WeaveResult<&mut Self> {
        self.step(OrderBy {
            member,
            ascending: false,
        })
    }

    pub fn then_by(&mut self, member: &str) -> WeaveResult<&mut Self> {
        self.step(ThenBy {
            member,
            ascending: true,
        })
    }

    pub fn then_by_desc(&mut self, member: &str) -> WeaveResult<&mut Self> {
        self.step(ThenBy {
            member,
            ascending: false,
        })
    }

    /// Ordering from `(member, ascending)` pairs: the first opens the
    /// `order by` block, the rest continue it.
    pub fn order(&mut self, keys: &[(&str, bool)]) -> WeaveResult<&mut Self> {
        for (i, &(member, ascending)) in keys.iter().enumerate() {
            if i == 0 {
                self.step(OrderBy { member, ascending })?;
            } else {
                self.step(ThenBy { member, ascending })?;
            }
        }
        Ok(self)
    }

    /// Append caller-written SQL; the closure may also bind parameters.
    pub fn raw<F>(&mut self, f: F) -> WeaveResult<&mut Self>
    where
        F: FnOnce(&mut SqlWriter<'_>) -> WeaveResult<()>,
    {
        self.step(Raw(f))
    }

    /// Finish the statement.
    pub fn build(self) -> Query {
        let (text, parameters) = self.writer.into_parts();
        if let Some(trace) = &self.trace {
            trace.emit(
                &self.steps,
                parameters.as_ref().map_or(0, BindParameters::len),
                &text,
            );
        }
        Query::new(text, parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{ColumnDescriptor, MemberType};
    use crate::predicate::{CompareOp, col, try_computed};

    fn table() -> TableDescriptor {
        TableDescriptor::builder("T")
            .schema("dbo")
            .column(ColumnDescriptor::builder("Id", MemberType::I32).primary_key())
            .column(ColumnDescriptor::builder("Age", MemberType::I32))
            .build()
            .unwrap()
    }

    #[test]
    fn failed_filter_leaves_no_partial_where() {
        let table = table();
        let mut qb = QueryBuilder::new(&Dialect::SQL_SERVER, &table).without_trace();
        qb.select().unwrap();
        let before = qb.sql().to_string();

        let failing = col("Id")
            .eq(1)
            .and(col("Age").compare(CompareOp::Gt, try_computed(|| "x".parse::<i32>())));
        assert!(qb.filter(&failing).unwrap_err().is_evaluation());

        let query = qb.build();
        assert_eq!(query.text(), before);
        assert!(query.parameters().is_none());
    }

    #[test]
    fn failed_step_keeps_earlier_parameters() {
        let table = table();
        let mut qb = QueryBuilder::new(&Dialect::SQL_SERVER, &table).without_trace();
        qb.filter(&col("Age").ge(20)).unwrap();
        assert!(qb.order_by("Missing").unwrap_err().is_mapping());
        assert!(
            qb.raw(|w| {
                w.push_str(" and ").bind("x", 1)?;
                w.bind("x", 2)?;
                Ok(())
            })
            .unwrap_err()
            .is_duplicate_parameter()
        );

        qb.order_by_desc("Id").unwrap();
        let query = qb.build();
        assert_eq!(query.text(), "where\n    [Age] >= @p1\norder by\n    [Id] desc");
        let names: Vec<_> = query.parameters().unwrap().names().collect();
        assert_eq!(names, ["p1"]);
    }
}
