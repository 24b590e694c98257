use super::{Command, target_columns};
use crate::error::{WeaveError, WeaveResult};
use crate::mapping::TableDescriptor;
use crate::value::Value;
use crate::writer::SqlWriter;

/// `insert into [table] (...) values (...)`
///
/// Auto-increment columns are left out. Each value is a placeholder named
/// after its member and bound to `null`, except that with `use_ambient`
/// a column's ambient literal (e.g. `SYSDATETIME()`) is written instead
/// and nothing is bound for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insert<'m> {
    pub use_ambient: bool,
    pub members: Option<&'m [&'m str]>,
}

impl Command for Insert<'_> {
    fn name(&self) -> &'static str {
        "insert"
    }

    fn write(self, table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        let columns: Vec<_> = target_columns(table, self.members, "insert")?
            .into_iter()
            .filter(|c| !c.is_auto_increment())
            .collect();
        if columns.is_empty() {
            return Err(WeaveError::validation(format!(
                "insert on '{}' has only auto-increment columns",
                table.name()
            )));
        }

        writer.push_str("insert into ").push_table_name(table);
        writer.push_str("\n(");
        for column in &columns {
            writer
                .push_str("\n    ")
                .push_ident(column.column_name())
                .push_char(',');
        }
        writer.trim_end(1);

        writer.push_str("\n)\nvalues\n(");
        for column in &columns {
            writer.push_str("\n    ");
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
        writer.push_str("\n)");
        Ok(())
    }
}
