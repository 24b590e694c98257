use crate::param::BindParameters;
use serde::Serialize;
use std::fmt;

/// A built statement: SQL text plus its bind parameters.
///
/// `parameters` is `None` when no parameter was ever bound, which tells a
/// statement without dynamic values apart from one with an empty filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    text: String,
    parameters: Option<BindParameters>,
}

impl Query {
    pub fn new(text: impl Into<String>, parameters: Option<BindParameters>) -> Self {
        Self {
            text: text.into(),
            parameters,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> Option<&BindParameters> {
        self.parameters.as_ref()
    }

    /// Mutable access, e.g. to fill insert placeholders with
    /// [`BindParameters::overwrite`].
    pub fn parameters_mut(&mut self) -> Option<&mut BindParameters> {
        self.parameters.as_mut()
    }

    pub fn into_parts(self) -> (String, Option<BindParameters>) {
        (self.text, self.parameters)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
