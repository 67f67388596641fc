//! External configuration of the plotting library
//!
//! The plotting library is configured through a large, flat, process-wide
//! key-value mapping (its "rc params"). Themes only ever read a snapshot of it,
//! write batches of keys into it and reset it to its defaults.
//! This module abstracts that mapping behind the [`Store`] trait, and provides
//! [`MemoryStore`], an in-process implementation.
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

mod defaults;

pub use defaults::defaults;

/// Ordered mapping of configuration keys to values
pub type Params = BTreeMap<String, Value>;

/// A configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean flag
    Bool(bool),
    /// A number
    Number(f64),
    /// A string (color, option name, etc.)
    Text(String),
    /// A list of strings (font names, etc.)
    List(Vec<String>),
    /// A property cycle
    Cycle(Cycle),
    /// Any other value, passed through verbatim
    Other(serde_json::Value),
}

impl Value {
    /// Get the value as a boolean, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a number, if it is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

impl From<Cycle> for Value {
    fn from(value: Cycle) -> Self {
        Value::Cycle(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_f64() {
                Some(n) => Value::Number(n),
                None => Value::Other(Json::Number(n)),
            },
            Json::String(s) => Value::Text(s),
            Json::Array(items) if items.iter().all(Json::is_string) => Value::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Json::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Value::Other(other),
        }
    }
}

/// A property cycle, e.g. the sequence of colors given to successive series
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    prop: String,
    values: Vec<String>,
}

impl Cycle {
    /// Build a cycle over the given property
    pub fn new(prop: impl Into<String>, values: Vec<String>) -> Self {
        Cycle {
            prop: prop.into(),
            values,
        }
    }

    /// Build a color cycle
    pub fn color(values: Vec<String>) -> Self {
        Cycle::new("color", values)
    }

    /// The property that is cycled
    pub fn prop(&self) -> &str {
        &self.prop
    }

    /// The values of the cycle
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cycler('{}', [", self.prop)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", v)?;
        }
        f.write_str("])")
    }
}

/// Narrow interface to the global configuration of a plotting library
pub trait Store {
    /// Snapshot of all current values
    fn get_all(&self) -> Params;

    /// Write all the given values, overwriting existing ones
    fn set_many(&mut self, values: Params);

    /// Reset every key to the library default
    fn reset(&mut self);

    /// Current value of a single key
    fn get(&self, key: &str) -> Option<Value> {
        self.get_all().remove(key)
    }

    /// Write a single value
    fn set(&mut self, key: &str, value: Value) {
        let mut values = Params::new();
        values.insert(key.to_string(), value);
        self.set_many(values);
    }

    /// Restore a snapshot previously obtained with [`Store::get_all`]
    fn restore(&mut self, snapshot: Params) {
        self.set_many(snapshot);
    }
}

/// In-process configuration store
///
/// Keys are free-form: unknown keys are accepted, as a plotting library would
/// accept any of its own keys that are not in the default table.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    defaults: Params,
    current: Params,
    deprecated: BTreeSet<String>,
}

impl MemoryStore {
    /// Build a store from the given defaults. The current values are the defaults.
    pub fn new(defaults: Params) -> Self {
        MemoryStore {
            current: defaults.clone(),
            defaults,
            deprecated: BTreeSet::new(),
        }
    }

    /// Flag keys as deprecated and return self for chaining.
    /// Writing a deprecated key logs a warning, except during [`Store::restore`].
    pub fn with_deprecated<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deprecated.extend(keys.into_iter().map(Into::into));
        self
    }

    /// The default values
    pub fn defaults(&self) -> &Params {
        &self.defaults
    }

    /// The current values, without copy
    pub fn current(&self) -> &Params {
        &self.current
    }

    /// Whether a key is flagged as deprecated
    pub fn is_deprecated(&self, key: &str) -> bool {
        self.deprecated.contains(key)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new(defaults())
    }
}

impl Store for MemoryStore {
    fn get_all(&self) -> Params {
        self.current.clone()
    }

    fn set_many(&mut self, values: Params) {
        for (key, value) in values {
            if self.deprecated.contains(&key) {
                log::warn!("rc key '{}' is deprecated", key);
            }
            self.current.insert(key, value);
        }
    }

    fn reset(&mut self) {
        self.current = self.defaults.clone();
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.current.get(key).cloned()
    }

    fn restore(&mut self, snapshot: Params) {
        self.current = snapshot;
    }
}
