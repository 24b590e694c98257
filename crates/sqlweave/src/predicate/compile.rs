use super::{CompareOp, LogicalOp, PredicateNode, evaluate};
use crate::error::{WeaveError, WeaveResult};
use crate::mapping::TableDescriptor;
use crate::value::Value;
use crate::writer::SqlWriter;

/// Append `node` to `writer` as a SQL condition.
///
/// Values are bound as positional parameters named after the statement's
/// parameter count, so compiling after other steps continues their
/// numbering. Comparisons against `null` render `is null` / `is not null`
/// without a parameter.
pub fn compile(
    node: &PredicateNode,
    table: &TableDescriptor,
    writer: &mut SqlWriter<'_>,
) -> WeaveResult<()> {
    Compiler { table, writer }.predicate(node)
}

struct Compiler<'t, 'w, 'd> {
    table: &'t TableDescriptor,
    writer: &'w mut SqlWriter<'d>,
}

impl Compiler<'_, '_, '_> {
    fn predicate(&mut self, node: &PredicateNode) -> WeaveResult<()> {
        match node {
            PredicateNode::Logical { op, left, right } => {
                self.logical_operand(*op, left)?;
                self.writer.push_str(op.as_sql());
                self.logical_operand(*op, right)
            }
            PredicateNode::Comparison { op, left, right } => self.comparison(*op, left, right),
            PredicateNode::Membership { member, values } => self.membership(member, values),
            PredicateNode::Literal(Value::Bool(b)) => {
                self.writer.push_str(if *b { "1 = 1" } else { "1 = 0" });
                Ok(())
            }
            other => Err(WeaveError::unsupported(format!(
                "{} cannot be used as a condition",
                other.kind()
            ))),
        }
    }

    /// A mixed-operator child is parenthesized; same-operator chains are not.
    fn logical_operand(&mut self, parent: LogicalOp, child: &PredicateNode) -> WeaveResult<()> {
        let needs_parens = matches!(child, PredicateNode::Logical { op, .. } if *op != parent);
        if needs_parens {
            self.writer.push_char('(');
            self.predicate(child)?;
            self.writer.push_char(')');
            Ok(())
        } else {
            self.predicate(child)
        }
    }

    fn comparison(
        &mut self,
        op: CompareOp,
        left: &PredicateNode,
        right: &PredicateNode,
    ) -> WeaveResult<()> {
        let (op, member, operand) = match (left, right) {
            (PredicateNode::ColumnRef(member), operand) => (op, member, operand),
            (operand, PredicateNode::ColumnRef(member)) => (op.flip(), member, operand),
            _ => {
                return Err(WeaveError::unsupported(format!(
                    "comparison between {} and {} has no column operand",
                    left.kind(),
                    right.kind()
                )));
            }
        };

        let table = self.table;
        let column = table.mapped_column(member)?;
        let value = evaluate(operand)?;

        self.writer.push_ident(column.column_name());
        match (op, value.is_null()) {
            (CompareOp::Eq, true) => {
                self.writer.push_str(" is null");
            }
            (CompareOp::Ne, true) => {
                self.writer.push_str(" is not null");
            }
            _ => {
                self.writer.push_str(op.as_sql());
                self.writer.bind_next(value)?;
            }
        }
        Ok(())
    }

    fn membership(&mut self, member: &str, values: &[Value]) -> WeaveResult<()> {
        let table = self.table;
        let column = table.mapped_column(member)?;
        let chunk_size = self.writer.dialect().in_clause_max_size.max(1);

        let mut chunks = values.chunks(chunk_size);
        let chunk_count = values.len().div_ceil(chunk_size);
        match chunk_count {
            0 => {
                self.writer.push_str("1 = 0");
            }
            1 => {
                self.writer.push_ident(column.column_name()).push_str(" in ");
                self.writer.bind_next(values.to_vec())?;
            }
            _ => {
                tracing::trace!(
                    target: "sqlweave.predicate",
                    member,
                    values = values.len(),
                    chunks = chunk_count,
                    "split membership test"
                );
                self.writer.push_char('(');
                if let Some(first) = chunks.next() {
                    self.in_chunk(column.column_name(), first)?;
                }
                for chunk in chunks {
                    self.writer.push_str(" or ");
                    self.in_chunk(column.column_name(), chunk)?;
                }
                self.writer.push_char(')');
            }
        }
        Ok(())
    }

    fn in_chunk(&mut self, column: &str, chunk: &[Value]) -> WeaveResult<()> {
        self.writer.push_ident(column).push_str(" in ");
        self.writer.bind_next(chunk.to_vec())?;
        Ok(())
    }
}
