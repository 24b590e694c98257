use super::column::{ColumnBuilder, ColumnDescriptor};
use crate::error::{WeaveError, WeaveResult};
use serde::Serialize;
use std::collections::HashMap;

/// Table metadata: name, optional schema and columns in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct TableDescriptor {
    schema: Option<String>,
    name: String,
    columns: Vec<ColumnDescriptor>,
    #[serde(skip)]
    by_member: HashMap<String, usize>,
}

impl TableDescriptor {
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder {
            name: name.into(),
            schema: None,
            columns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Every described member, mapped or not.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column(&self, member: &str) -> Option<&ColumnDescriptor> {
        self.by_member.get(member).map(|&i| &self.columns[i])
    }

    /// Resolve a member that must take part in SQL.
    pub fn mapped_column(&self, member: &str) -> WeaveResult<&ColumnDescriptor> {
        match self.column(member) {
            Some(c) if c.is_mapped() => Ok(c),
            Some(_) => Err(WeaveError::mapping(member, "member is not mapped to a column")),
            None => Err(WeaveError::mapping(
                member,
                format!("no such member on table '{}'", self.name),
            )),
        }
    }

    pub fn mapped_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_mapped())
    }

    pub fn primary_key(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_primary_key())
    }
}

/// Builder for [`TableDescriptor`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    schema: Option<String>,
    columns: Vec<ColumnBuilder>,
}

impl TableBuilder {
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Append a column. Declaration order is statement order.
    pub fn column(mut self, column: ColumnBuilder) -> Self {
        self.columns.push(column);
        self
    }

    /// Validate member names and resolve auto-increment flags.
    ///
    /// Without an explicit flag, a column is auto-increment when it is the
    /// table's only primary key and has an integer type.
    pub fn build(self) -> WeaveResult<TableDescriptor> {
        let composite_key = self.columns.iter().filter(|c| c.primary_key).count() >= 2;

        let mut by_member = HashMap::with_capacity(self.columns.len());
        let mut columns = Vec::with_capacity(self.columns.len());
        for (i, c) in self.columns.into_iter().enumerate() {
            if by_member.insert(c.member_name.clone(), i).is_some() {
                return Err(WeaveError::mapping(
                    c.member_name,
                    format!("declared twice on table '{}'", self.name),
                ));
            }

            let auto_increment = match c.auto_increment {
                Some(true) if !c.primary_key => {
                    return Err(WeaveError::mapping(
                        c.member_name,
                        "auto-increment column must be a primary key",
                    ));
                }
                Some(flag) => flag,
                None => c.primary_key && !composite_key && c.member_type.is_integer(),
            };

            columns.push(ColumnDescriptor {
                member_name: c.member_name,
                member_type: c.member_type,
                column_name: c.column_name,
                order: c.order.unwrap_or(-1),
                ambient: c.ambient,
                primary_key: c.primary_key,
                nullable: c.nullable,
                mapped: c.mapped,
                auto_increment,
            });
        }

        Ok(TableDescriptor {
            schema: self.schema,
            name: self.name,
            columns,
            by_member,
        })
    }
}
