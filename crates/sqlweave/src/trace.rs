//! `tracing` output for built statements.

use tracing::Level;

/// Configures the event emitted when a statement is built.
///
/// Events use the `sqlweave.sql` target and carry the statement's step names,
/// its parameter count and the SQL text.
#[derive(Debug, Clone)]
pub struct SqlTrace {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes, on a char boundary). `None` disables truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for SqlTrace {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl SqlTrace {
    /// Defaults: `DEBUG`, SQL cut at 200 bytes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Cut logged SQL after `len` bytes.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Log SQL in full.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    pub(crate) fn truncate_sql<'s>(&self, sql: &'s str) -> std::borrow::Cow<'s, str> {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_at_char(sql, max)).into(),
            _ => sql.into(),
        }
    }

    pub(crate) fn emit(&self, steps: &[&'static str], param_count: usize, sql: &str) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(sql);
        emit_at_level!(
            self.level,
            target: "sqlweave.sql",
            steps = ?steps,
            param_count,
            sql = %sql,
            "built statement"
        );
    }
}

fn truncate_at_char(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let trace = SqlTrace::new();
        assert_eq!(trace.level, Level::DEBUG);
        assert_eq!(trace.max_sql_length, Some(200));
        assert_eq!(trace.no_truncate().max_sql_length, None);
    }

    #[test]
    fn short_sql_is_untouched() {
        let trace = SqlTrace::new().max_sql_length(20);
        assert_eq!(trace.truncate_sql("delete from [T]"), "delete from [T]");
    }

    #[test]
    fn long_sql_is_cut_with_ellipsis() {
        let trace = SqlTrace::new().max_sql_length(6);
        assert_eq!(trace.truncate_sql("select * from t"), "select...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "[姓]" is 1 + 3 + 1 bytes; cutting at 2 must not split the ideograph.
        let trace = SqlTrace::new().max_sql_length(2);
        assert_eq!(trace.truncate_sql("[姓]"), "[...");
    }
}
