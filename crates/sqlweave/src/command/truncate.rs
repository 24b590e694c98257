use super::Command;
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::writer::SqlWriter;

/// `truncate table [table]`
#[derive(Debug, Clone, Copy, Default)]
pub struct Truncate;

impl Command for Truncate {
    fn name(&self) -> &'static str {
        "truncate"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        writer.push_str("truncate table ").push_table_name(table);
        Ok(())
    }
}
