//! Filter predicates.
//!
//! A [`PredicateNode`] tree describes a boolean filter over one entity's
//! members. Trees are assembled from combinators and compiled into a
//! parameterized `where` fragment by [`compile`]:
//!
//! ```ignore
//! use sqlweave::predicate::{col, lit};
//!
//! let filter = col("Id").eq(1).or(col("LastName").ne("x"));
//! // [Id] = @p1 or [姓] <> @p2
//!
//! let adults = lit(18).le(col("Age"));
//! // [Age] >= @p1
//! ```

mod compile;
mod eval;

pub use compile::compile;
pub use eval::evaluate;

use crate::error::{WeaveError, WeaveResult};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// The operator seen from the other side: `a < b` is `b > a`.
    pub fn flip(self) -> Self {
        match self {
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Le => CompareOp::Ge,
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Le,
            op => op,
        }
    }

    /// Rendered operator with surrounding spaces.
    pub fn as_sql(self) -> &'static str {
        match self {
            CompareOp::Eq => " = ",
            CompareOp::Ne => " <> ",
            CompareOp::Lt => " < ",
            CompareOp::Le => " <= ",
            CompareOp::Gt => " > ",
            CompareOp::Ge => " >= ",
        }
    }
}

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Rendered connective with surrounding spaces.
    pub fn as_sql(self) -> &'static str {
        match self {
            LogicalOp::And => " and ",
            LogicalOp::Or => " or ",
        }
    }
}

type ComputeFn = dyn Fn() -> WeaveResult<Value> + Send + Sync;

/// A value produced by caller code when the predicate is compiled.
#[derive(Clone)]
pub struct Computed(Arc<ComputeFn>);

impl Computed {
    /// Run the producer.
    pub fn call(&self) -> WeaveResult<Value> {
        (self.0)()
    }
}

impl fmt::Debug for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Computed").field(&"<fn>").finish()
    }
}

/// Node of a filter predicate.
#[derive(Debug, Clone)]
pub enum PredicateNode {
    /// A constant value.
    Literal(Value),
    /// A member of the filtered entity.
    ColumnRef(String),
    /// A value computed at compile time.
    Computed(Computed),
    /// The `index`th element of a list-valued operand.
    Element {
        source: Box<PredicateNode>,
        index: usize,
    },
    /// `left op right`, where one side is a column.
    Comparison {
        op: CompareOp,
        left: Box<PredicateNode>,
        right: Box<PredicateNode>,
    },
    /// Two predicates joined by `and` / `or`.
    Logical {
        op: LogicalOp,
        left: Box<PredicateNode>,
        right: Box<PredicateNode>,
    },
    /// `member in (values)`.
    Membership { member: String, values: Vec<Value> },
}

impl PredicateNode {
    /// `self and other`.
    pub fn and(self, other: impl Into<PredicateNode>) -> PredicateNode {
        logical(LogicalOp::And, self, other)
    }

    /// `self or other`.
    pub fn or(self, other: impl Into<PredicateNode>) -> PredicateNode {
        logical(LogicalOp::Or, self, other)
    }

    /// `self = other`; a `null` operand renders `is null`.
    pub fn eq(self, other: impl Into<PredicateNode>) -> PredicateNode {
        compare(CompareOp::Eq, self, other)
    }

    /// `self <> other`; a `null` operand renders `is not null`.
    pub fn ne(self, other: impl Into<PredicateNode>) -> PredicateNode {
        compare(CompareOp::Ne, self, other)
    }

    /// `self < other`.
    pub fn lt(self, other: impl Into<PredicateNode>) -> PredicateNode {
        compare(CompareOp::Lt, self, other)
    }

    /// `self <= other`.
    pub fn le(self, other: impl Into<PredicateNode>) -> PredicateNode {
        compare(CompareOp::Le, self, other)
    }

    /// `self > other`.
    pub fn gt(self, other: impl Into<PredicateNode>) -> PredicateNode {
        compare(CompareOp::Gt, self, other)
    }

    /// `self >= other`.
    pub fn ge(self, other: impl Into<PredicateNode>) -> PredicateNode {
        compare(CompareOp::Ge, self, other)
    }

    /// Short variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PredicateNode::Literal(_) => "literal",
            PredicateNode::ColumnRef(_) => "column reference",
            PredicateNode::Computed(_) => "computed value",
            PredicateNode::Element { .. } => "element access",
            PredicateNode::Comparison { .. } => "comparison",
            PredicateNode::Logical { .. } => "logical expression",
            PredicateNode::Membership { .. } => "membership test",
        }
    }
}

impl From<Value> for PredicateNode {
    fn from(value: Value) -> Self {
        PredicateNode::Literal(value)
    }
}

impl From<Column> for PredicateNode {
    fn from(column: Column) -> Self {
        PredicateNode::ColumnRef(column.0)
    }
}

impl From<Computed> for PredicateNode {
    fn from(computed: Computed) -> Self {
        PredicateNode::Computed(computed)
    }
}

/// Handle on an entity member, the usual starting point of a predicate.
#[derive(Debug, Clone)]
pub struct Column(String);

/// Reference the entity member `member`.
pub fn col(member: impl Into<String>) -> Column {
    Column(member.into())
}

impl Column {
    /// The referenced member name.
    pub fn member(&self) -> &str {
        &self.0
    }

    fn against(self, op: CompareOp, value: impl Into<Value>) -> PredicateNode {
        compare(op, self, lit(value))
    }

    /// `member = value`.
    pub fn eq(self, value: impl Into<Value>) -> PredicateNode {
        self.against(CompareOp::Eq, value)
    }

    /// `member <> value`.
    pub fn ne(self, value: impl Into<Value>) -> PredicateNode {
        self.against(CompareOp::Ne, value)
    }

    /// `member < value`.
    pub fn lt(self, value: impl Into<Value>) -> PredicateNode {
        self.against(CompareOp::Lt, value)
    }

    /// `member <= value`.
    pub fn le(self, value: impl Into<Value>) -> PredicateNode {
        self.against(CompareOp::Le, value)
    }

    /// `member > value`.
    pub fn gt(self, value: impl Into<Value>) -> PredicateNode {
        self.against(CompareOp::Gt, value)
    }

    /// `member >= value`.
    pub fn ge(self, value: impl Into<Value>) -> PredicateNode {
        self.against(CompareOp::Ge, value)
    }

    /// `member is null`, binding nothing.
    pub fn is_null(self) -> PredicateNode {
        self.against(CompareOp::Eq, Value::Null)
    }

    /// `member is not null`, binding nothing.
    pub fn is_not_null(self) -> PredicateNode {
        self.against(CompareOp::Ne, Value::Null)
    }

    /// `member in (values)`, split into several clauses when the dialect's
    /// limit is exceeded.
    pub fn in_list<I>(self, values: I) -> PredicateNode
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        PredicateNode::Membership {
            member: self.0,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Compare against an arbitrary operand such as a [`computed`] value.
    pub fn compare(self, op: CompareOp, operand: impl Into<PredicateNode>) -> PredicateNode {
        compare(op, self, operand)
    }
}

/// A constant operand.
pub fn lit(value: impl Into<Value>) -> PredicateNode {
    PredicateNode::Literal(value.into())
}

/// A value produced by `f` when the predicate is compiled.
pub fn computed<F, V>(f: F) -> PredicateNode
where
    F: Fn() -> V + Send + Sync + 'static,
    V: Into<Value>,
{
    PredicateNode::Computed(Computed(Arc::new(move || Ok(f().into()))))
}

/// Like [`computed`], for fallible producers. A failure surfaces as
/// [`WeaveError::Evaluation`].
pub fn try_computed<F, V, E>(f: F) -> PredicateNode
where
    F: Fn() -> Result<V, E> + Send + Sync + 'static,
    V: Into<Value>,
    E: fmt::Display,
{
    PredicateNode::Computed(Computed(Arc::new(move || {
        f().map(Into::into)
            .map_err(|e| WeaveError::evaluation(e.to_string()))
    })))
}

/// The `index`th element of a list-valued operand.
pub fn element(source: impl Into<PredicateNode>, index: usize) -> PredicateNode {
    PredicateNode::Element {
        source: Box::new(source.into()),
        index,
    }
}

/// Compare two operands; one of them must be a column when compiled.
pub fn compare(
    op: CompareOp,
    left: impl Into<PredicateNode>,
    right: impl Into<PredicateNode>,
) -> PredicateNode {
    PredicateNode::Comparison {
        op,
        left: Box::new(left.into()),
        right: Box::new(right.into()),
    }
}

/// Join two predicates with `op`.
pub fn logical(
    op: LogicalOp,
    left: impl Into<PredicateNode>,
    right: impl Into<PredicateNode>,
) -> PredicateNode {
    PredicateNode::Logical {
        op,
        left: Box::new(left.into()),
        right: Box::new(right.into()),
    }
}
