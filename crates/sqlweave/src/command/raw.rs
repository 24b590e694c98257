use super::Command;
use crate::error::WeaveResult;
use crate::mapping::TableDescriptor;
use crate::writer::SqlWriter;

/// Caller-written fragment with full access to the writer.
///
/// ```ignore
/// builder.raw(|w| {
///     w.push_str("\noffset ").bind("skip", 20)?;
///     Ok(())
/// })?;
/// ```
pub struct Raw<F>(pub F);

impl<F> Raw<F>
where
    F: FnOnce(&mut SqlWriter<'_>) -> WeaveResult<()>,
{
    pub fn new(f: F) -> Self {
        Raw(f)
    }
}

impl<F> Command for Raw<F>
where
    F: FnOnce(&mut SqlWriter<'_>) -> WeaveResult<()>,
{
    fn name(&self) -> &'static str {
        "raw"
    }

    fn write(self, _table: &TableDescriptor, writer: &mut SqlWriter<'_>) -> WeaveResult<()> {
        (self.0)(writer)
    }
}
