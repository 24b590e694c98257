use super::{Command, target_columns};
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::writer::SqlWriter;

/// `select [column] as [Member], ... from [table]`
///
/// Every mapped column, or only those named in `members`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Select<'m> {
    pub members: Option<&'m [&'m str]>,
}

impl<'m> Select<'m> {
    pub fn all() -> Self {
        Self { members: None }
    }

    pub fn members(members: &'m [&'m str]) -> Self {
        Self {
            members: Some(members),
        }
    }
}

impl Command for Select<'_> {
    fn name(&self) -> &'static str {
        "select"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        let columns = target_columns(table, self.members, "select")?;

        writer.push_str("select");
        for column in columns {
            writer
                .push_str("\n    ")
                .push_ident(column.column_name())
                .push_str(" as ")
                .push_ident(column.member_name())
                .push_char(',');
        }
        writer.trim_end(1);
        writer.push_str("\nfrom ").push_table_name(table);
        Ok(())
    }
}
