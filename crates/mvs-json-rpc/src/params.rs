//! Positional and flagged parameters.
//!
//! The node's RPC layer mirrors its command line: every method takes a list of
//! positional arguments followed by `flag value` pairs. Both end up in the same
//! flat `params` array on the wire, so a flag such as `-f` and its value are two
//! consecutive array elements rather than an object entry.

use serde_json::Value;

/// Value bound to a single optional flag
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArgValue {
    /// Omitted entirely from the emitted params
    #[default]
    Absent,
    /// Emitted once as `flag, value`
    Scalar(Value),
    /// Emitted once per element as `flag, element`, in element order
    Repeated(Vec<Value>),
}

impl ArgValue {
    pub fn scalar(value: impl Into<Value>) -> Self {
        ArgValue::Scalar(value.into())
    }

    pub fn repeated<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        ArgValue::Repeated(values.into_iter().map(Into::into).collect())
    }

    /// `None` becomes [`ArgValue::Absent`]
    pub fn optional<V: Into<Value>>(value: Option<V>) -> Self {
        match value {
            Some(value) => ArgValue::Scalar(value.into()),
            None => ArgValue::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ArgValue::Absent)
    }

    /// Number of `flag, value` pairs this entry expands to
    pub fn pair_count(&self) -> usize {
        match self {
            ArgValue::Absent => 0,
            ArgValue::Scalar(_) => 1,
            ArgValue::Repeated(values) => values.len(),
        }
    }
}

/// Ordered flag-to-value mapping for one call.
///
/// Entries keep their insertion order so the wire bytes are reproducible. A flag
/// may be pushed twice; both entries are emitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionalArgs {
    entries: Vec<(String, ArgValue)>,
}

impl OptionalArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with an explicit [`ArgValue`]
    pub fn with(mut self, flag: impl Into<String>, value: ArgValue) -> Self {
        self.entries.push((flag.into(), value));
        self
    }

    /// Add a flag that is always present
    pub fn scalar(self, flag: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(flag, ArgValue::scalar(value))
    }

    /// Add a flag that is skipped when `value` is `None`
    pub fn optional<V: Into<Value>>(self, flag: impl Into<String>, value: Option<V>) -> Self {
        self.with(flag, ArgValue::optional(value))
    }

    /// Add a flag repeated once per element
    pub fn repeated<I, V>(self, flag: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.with(flag, ArgValue::repeated(values))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(flag, value)| (flag.as_str(), value))
    }

    /// Expand into alternating `flag, value` elements.
    ///
    /// Object-valued scalars are emitted as a single pair like any other scalar;
    /// only [`ArgValue::Repeated`] fans out.
    pub fn flatten(&self) -> Vec<Value> {
        let capacity = self.entries.iter().map(|(_, v)| v.pair_count() * 2).sum();
        let mut flat = Vec::with_capacity(capacity);

        for (flag, value) in &self.entries {
            match value {
                ArgValue::Absent => continue,
                ArgValue::Scalar(value) => {
                    flat.push(Value::String(flag.clone()));
                    flat.push(value.clone());
                }
                ArgValue::Repeated(values) => {
                    for value in values {
                        flat.push(Value::String(flag.clone()));
                        flat.push(value.clone());
                    }
                }
            }
        }

        flat
    }
}

impl<K: Into<String>> FromIterator<(K, ArgValue)> for OptionalArgs {
    fn from_iter<T: IntoIterator<Item = (K, ArgValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Concatenate positional arguments with the flattened optional pairs
pub fn build_params(positional: Vec<Value>, optional: &OptionalArgs) -> Vec<Value> {
    let mut params = positional;
    params.extend(optional.flatten());
    params
}
