//! The statement text accumulator.

use crate::dialect::Dialect;
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::param::BindParameters;
use crate::value::Value;

/// Text buffer plus lazily created parameter collection for one statement.
///
/// Every step of a [`QueryBuilder`](crate::QueryBuilder) appends to the same
/// writer; the parameter collection is only allocated when the first
/// parameter is bound, so a statement without parameters yields `None`.
#[derive(Debug)]
pub struct SqlWriter<'a> {
    dialect: &'a Dialect,
    buf: String,
    params: Option<BindParameters>,
}

/// Position in a [`SqlWriter`] to roll back to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    len: usize,
    params: Option<usize>,
}

impl<'a> SqlWriter<'a> {
    pub fn new(dialect: &'a Dialect) -> Self {
        Self {
            dialect,
            buf: String::with_capacity(256),
            params: None,
        }
    }

    /// Start from a caller-owned parameter collection.
    pub fn with_parameters(dialect: &'a Dialect, params: BindParameters) -> Self {
        Self {
            params: Some(params),
            ..Self::new(dialect)
        }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    pub fn sql(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn parameters(&self) -> Option<&BindParameters> {
        self.params.as_ref()
    }

    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    pub fn push_char(&mut self, c: char) -> &mut Self {
        self.buf.push(c);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Remove `n` trailing bytes (used to drop a dangling `,`).
    pub fn trim_end(&mut self, n: usize) -> &mut Self {
        let len = self.buf.len().saturating_sub(n);
        let mut end = len;
        while end > 0 && !self.buf.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.truncate(end);
        self
    }

    /// Append an identifier wrapped in the dialect's brackets.
    pub fn push_ident(&mut self, ident: &str) -> &mut Self {
        let bracket = self.dialect.bracket;
        self.buf.push(bracket.open);
        self.buf.push_str(ident);
        self.buf.push(bracket.close);
        self
    }

    /// Append `[schema].[table]`, or `[table]` when neither the table nor the
    /// dialect provides a non-blank schema.
    pub fn push_table_name(&mut self, table: &TableDescriptor) -> &mut Self {
        let schema = table
            .schema()
            .filter(|s| !s.trim().is_empty())
            .or(self.dialect.default_schema.as_deref())
            .filter(|s| !s.trim().is_empty());
        if let Some(schema) = schema {
            self.push_ident(schema);
            self.buf.push('.');
        }
        self.push_ident(table.name())
    }

    /// Append a placeholder for `name` and bind `value` under it.
    pub fn bind(&mut self, name: &str, value: impl Into<Value>) -> WeaveResult<&mut Self> {
        self.params
            .get_or_insert_with(BindParameters::new)
            .add(name, value)?;
        self.buf.push(self.dialect.bind_prefix);
        self.buf.push_str(name);
        Ok(self)
    }

    /// Bind `value` under the next positional name (`p1`, `p2`, ...).
    ///
    /// Positions count every parameter already in the statement, named ones
    /// included.
    pub fn bind_next(&mut self, value: impl Into<Value>) -> WeaveResult<&mut Self> {
        let next = self.params.as_ref().map_or(0, BindParameters::len) + 1;
        self.bind(&format!("p{next}"), value)
    }

    /// Current text and parameter lengths, for [`SqlWriter::rollback`].
    pub(crate) fn mark(&self) -> Mark {
        Mark {
            len: self.buf.len(),
            params: self.params.as_ref().map(BindParameters::len),
        }
    }

    /// Discard everything written and bound since `mark`.
    pub(crate) fn rollback(&mut self, mark: Mark) {
        self.buf.truncate(mark.len);
        match mark.params {
            Some(len) => {
                if let Some(params) = self.params.as_mut() {
                    params.truncate(len);
                }
            }
            None => self.params = None,
        }
    }

    pub(crate) fn replace_parameters(&mut self, params: BindParameters) {
        self.params = Some(params);
    }

    pub(crate) fn into_parts(self) -> (String, Option<BindParameters>) {
        (self.buf, self.params)
    }
}
