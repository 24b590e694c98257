use super::Command;
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::writer::SqlWriter;

/// `delete from [table]`
#[derive(Debug, Clone, Copy, Default)]
pub struct Delete;

impl Command for Delete {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        writer.push_str("delete from ").push_table_name(table);
        Ok(())
    }
}
