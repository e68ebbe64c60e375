//! Result projectors shared by the endpoint wrappers

use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{RpcClientError, RpcClientResult};

/// Take `key` out of an object result
pub(crate) fn field(method: &'static str, result: &mut Value, key: &str) -> RpcClientResult<Value> {
    result
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| RpcClientError::projection(method, format!("missing field '{}'", key)))
}

pub(crate) fn field_str(method: &'static str, result: &mut Value, key: &str) -> RpcClientResult<String> {
    match field(method, result, key)? {
        Value::String(s) => Ok(s),
        other => Err(RpcClientError::projection(
            method,
            format!("field '{}' is not a string: {}", key, other),
        )),
    }
}

/// Array of strings under `key`
pub(crate) fn field_strings(
    method: &'static str,
    result: &mut Value,
    key: &str,
) -> RpcClientResult<Vec<String>> {
    let value = field(method, result, key)?;
    strings(method, key, value)
}

/// Number under `key`, accepting either a JSON number or a numeric string.
///
/// The node is not consistent about quoting integers.
pub(crate) fn field_number<T>(method: &'static str, result: &mut Value, key: &str) -> RpcClientResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let value = field(method, result, key)?;
    let text = match &value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(RpcClientError::projection(
                method,
                format!("field '{}' is not numeric: {}", key, other),
            ));
        }
    };

    text.parse::<T>().map_err(|e| {
        RpcClientError::projection(method, format!("field '{}' ('{}'): {}", key, text, e))
    })
}

pub(crate) fn strings(method: &'static str, what: &str, value: Value) -> RpcClientResult<Vec<String>> {
    let Value::Array(items) = value else {
        return Err(RpcClientError::projection(
            method,
            format!("'{}' is not an array", what),
        ));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(RpcClientError::projection(
                method,
                format!("'{}' holds a non-string element: {}", what, other),
            )),
        })
        .collect()
}
