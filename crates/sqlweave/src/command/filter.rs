use super::Command;
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::predicate::{PredicateNode, compile};
use crate::writer::SqlWriter;

/// `where <predicate>`, on its own line when the statement is not empty.
#[derive(Debug, Clone, Copy)]
pub struct Where<'p> {
    pub predicate: &'p PredicateNode,
}

impl Command for Where<'_> {
    fn name(&self) -> &'static str {
        "where"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        if !writer.is_empty() {
            writer.newline();
        }
        writer.push_str("where\n    ");
        compile(self.predicate, table, writer)
    }
}
