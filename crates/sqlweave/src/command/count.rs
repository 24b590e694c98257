use super::Command;
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::writer::SqlWriter;

/// `select count(*) as [Count] from [table]`
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl Command for Count {
    fn name(&self) -> &'static str {
        "count"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        writer
            .push_str("select count(*) as ")
            .push_ident("Count")
            .push_str(" from ")
            .push_table_name(table);
        Ok(())
    }
}
