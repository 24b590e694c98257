use super::{Command, target_columns};
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::value::Value;
use crate::writer::SqlWriter;

/// `update [table] set [column] = @Member, ...`
///
/// Unlike [`Insert`](super::Insert), auto-increment columns are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Update<'m> {
    pub use_ambient: bool,
    pub members: Option<&'m [&'m str]>,
}

impl Command for Update<'_> {
    fn name(&self) -> &'static str {
        "update"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        let columns = target_columns(table, self.members, "update")?;

        writer.push_str("update ").push_table_name(table);
        writer.push_str("\nset");
        for column in columns {
            writer
                .push_str("\n    ")
                .push_ident(column.column_name())
                .push_str(" = ");
            match column.ambient() {
                Some(literal) if self.use_ambient => {
                    writer.push_str(literal);
                }
                _ => {
                    writer.bind(column.member_name(), Value::Null)?;
                }
            }
            writer.push_char(',');
        }
        writer.trim_end(1);
        Ok(())
    }
}
