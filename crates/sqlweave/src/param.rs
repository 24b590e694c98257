//! Bind parameter storage.
//!
//! [`BindParameters`] is the `(name → value)` side of a built [`Query`](crate::Query).
//! Iteration follows insertion order, which is the order placeholders were
//! written into the SQL text.

use crate::error::{WeaveError, WeaveResult};
use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

/// A clone-friendly bound value.
///
/// Cloning a [`BindParameters`] copies its entries but shares the values.
#[derive(Clone, Debug, PartialEq)]
pub struct Param(pub(crate) Arc<Value>);

impl Param {
    pub fn new(value: impl Into<Value>) -> Self {
        Param(Arc::new(value.into()))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Whether two params share the same allocation.
    pub fn ptr_eq(&self, other: &Param) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for Param {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Param(Arc::new(value))
    }
}

impl Serialize for Param {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Insertion-ordered map from parameter name to bound value.
#[derive(Clone, Debug, Default)]
pub struct BindParameters {
    entries: Vec<(String, Param)>,
    index: HashMap<String, usize>,
}

impl BindParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Fails if the name is already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<Value>) -> WeaveResult<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(WeaveError::DuplicateParameter(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, Param::new(value)));
        Ok(())
    }

    /// Insert or replace a parameter, keeping its original position on replace.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = Param::new(value),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, Param::new(value)));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&i| self.entries[i].1.value())
    }

    pub fn get_param(&self, name: &str) -> Option<&Param> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Param> {
        let i = self.index.remove(name)?;
        let (_, param) = self.entries.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(param)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.value()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Add every pair, failing on the first duplicate name.
    pub fn append<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> WeaveResult<()>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in pairs {
            self.add(name, value)?;
        }
        Ok(())
    }

    /// Replace the values of names already present; unknown names are ignored.
    ///
    /// Used to fill the `null` placeholders produced by insert/update
    /// statements with real values.
    pub fn overwrite<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (name, value) in pairs {
            if let Some(&i) = self.index.get(name.as_ref()) {
                self.entries[i].1 = Param::new(value);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Drop every entry after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        for (name, _) in self.entries.drain(len.min(self.entries.len())..) {
            self.index.remove(&name);
        }
    }
}

impl PartialEq for BindParameters {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Serialize for BindParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, param) in &self.entries {
            map.serialize_entry(name, param)?;
        }
        map.end()
    }
}

/// Later pairs replace earlier ones with the same name.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for BindParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = BindParameters::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

impl<'a> IntoIterator for &'a BindParameters {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
