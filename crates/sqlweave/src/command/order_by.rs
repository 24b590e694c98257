use super::Command;
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::writer::SqlWriter;

/// Opens an `order by` block.
#[derive(Debug, Clone, Copy)]
pub struct OrderBy<'m> {
    pub member: &'m str,
    pub ascending: bool,
}

/// Continues an `order by` block with another key.
#[derive(Debug, Clone, Copy)]
pub struct ThenBy<'m> {
    pub member: &'m str,
    pub ascending: bool,
}

impl Command for OrderBy<'_> {
    fn name(&self) -> &'static str {
        "order by"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        let column = table.mapped_column(self.member)?;
        if !writer.is_empty() {
            writer.newline();
        }
        writer.push_str("order by\n    ").push_ident(column.column_name());
        if !self.ascending {
            writer.push_str(" desc");
        }
        Ok(())
    }
}

impl Command for ThenBy<'_> {
    fn name(&self) -> &'static str {
        "then by"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        let column = table.mapped_column(self.member)?;
        if !writer.is_empty() {
            writer.push_str(",\n");
        }
        writer.push_str("    ").push_ident(column.column_name());
        if !self.ascending {
            writer.push_str(" desc");
        }
        Ok(())
    }
}
