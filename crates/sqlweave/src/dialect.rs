//! SQL dialect descriptors.
//!
//! A [`Dialect`] captures the formatting conventions that differ between
//! databases: identifier brackets, the bind parameter prefix, the default
//! schema and the largest element count a single `IN` clause may carry.
//!
//! Five built-in dialects are provided as constants. Custom dialects can be
//! assembled with [`Dialect::custom`] or deserialized from configuration:
//!
//! ```ignore
//! use sqlweave::{DbKind, Dialect};
//!
//! let dialect = Dialect::custom(DbKind::PostgreSql)
//!     .bind_prefix('$')
//!     .in_clause_max_size(500)
//!     .default_schema("public")
//!     .validate()?;
//! # Ok::<(), sqlweave::WeaveError>(())
//! ```

use crate::error::{WeaveError, WeaveResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Database kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbKind {
    SqlServer,
    MySql,
    Sqlite,
    PostgreSql,
    Oracle,
}

/// Begin/end characters used to quote identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

impl BracketPair {
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

/// Formatting conventions of one SQL dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    pub kind: DbKind,
    pub bind_prefix: char,
    pub bracket: BracketPair,
    pub in_clause_max_size: usize,
    #[serde(default)]
    pub default_schema: Option<Cow<'static, str>>,
}

impl Dialect {
    /// SQL Server: `[dbo].[Table]`, `@p1`.
    pub const SQL_SERVER: Dialect = Dialect {
        kind: DbKind::SqlServer,
        bind_prefix: '@',
        bracket: BracketPair::new('[', ']'),
        in_clause_max_size: 1000,
        default_schema: Some(Cow::Borrowed("dbo")),
    };

    /// MySQL / MariaDB / Aurora: `` `Table` ``, `@p1`.
    pub const MYSQL: Dialect = Dialect {
        kind: DbKind::MySql,
        bind_prefix: '@',
        bracket: BracketPair::new('`', '`'),
        in_clause_max_size: 1000,
        default_schema: None,
    };

    /// SQLite: `"Table"`, `@p1`.
    pub const SQLITE: Dialect = Dialect {
        kind: DbKind::Sqlite,
        bind_prefix: '@',
        bracket: BracketPair::new('"', '"'),
        in_clause_max_size: 1000,
        default_schema: None,
    };

    /// PostgreSQL: `"Table"`, `:p1`.
    pub const POSTGRESQL: Dialect = Dialect {
        kind: DbKind::PostgreSql,
        bind_prefix: ':',
        bracket: BracketPair::new('"', '"'),
        in_clause_max_size: 1000,
        default_schema: None,
    };

    /// Oracle: `"Table"`, `:p1`.
    pub const ORACLE: Dialect = Dialect {
        kind: DbKind::Oracle,
        bind_prefix: ':',
        bracket: BracketPair::new('"', '"'),
        in_clause_max_size: 1000,
        default_schema: None,
    };

    /// All built-in dialects.
    pub fn all() -> [&'static Dialect; 5] {
        [&SQL_SERVER, &MYSQL, &SQLITE, &POSTGRESQL, &ORACLE]
    }

    /// The built-in dialect for a database kind.
    pub fn of(kind: DbKind) -> &'static Dialect {
        match kind {
            DbKind::SqlServer => &SQL_SERVER,
            DbKind::MySql => &MYSQL,
            DbKind::Sqlite => &SQLITE,
            DbKind::PostgreSql => &POSTGRESQL,
            DbKind::Oracle => &ORACLE,
        }
    }

    /// Start a custom dialect from the built-in settings of `kind`.
    pub fn custom(kind: DbKind) -> Self {
        Self::of(kind).clone()
    }

    /// Override the bind parameter prefix.
    pub fn bind_prefix(mut self, prefix: char) -> Self {
        self.bind_prefix = prefix;
        self
    }

    /// Override the identifier brackets.
    pub fn brackets(mut self, open: char, close: char) -> Self {
        self.bracket = BracketPair::new(open, close);
        self
    }

    /// Override the maximum element count per `IN` clause.
    pub fn in_clause_max_size(mut self, size: usize) -> Self {
        self.in_clause_max_size = size;
        self
    }

    /// Set the schema used when a table declares none.
    pub fn default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = Some(Cow::Owned(schema.into()));
        self
    }

    /// Clear the default schema.
    pub fn without_default_schema(mut self) -> Self {
        self.default_schema = None;
        self
    }

    /// Check the dialect invariants, returning the dialect on success.
    pub fn validate(self) -> WeaveResult<Self> {
        if self.in_clause_max_size == 0 {
            return Err(WeaveError::InvalidDialect(format!(
                "{:?}: in_clause_max_size must be at least 1",
                self.kind
            )));
        }
        Ok(self)
    }
}

static SQL_SERVER: Dialect = Dialect::SQL_SERVER;
static MYSQL: Dialect = Dialect::MYSQL;
static SQLITE: Dialect = Dialect::SQLITE;
static POSTGRESQL: Dialect = Dialect::POSTGRESQL;
static ORACLE: Dialect = Dialect::ORACLE;
