//! Per-endpoint call declarations and their outcomes

use mvs_json_rpc::{ArgValue, OptionalArgs, RpcErrorObject};
use serde_json::Value;
use std::fmt;

use crate::error::RpcClientResult;
use crate::transport::ApiVersion;

/// Turns a successful `result` payload into the wrapper's return value
pub type Projector<T> = Box<dyn FnOnce(Value) -> RpcClientResult<T> + Send>;

/// Everything needed to perform one RPC call.
///
/// Built fresh by each endpoint wrapper, consumed once by
/// [`RpcClient::invoke`](crate::RpcClient::invoke).
pub struct CallDeclaration<T = Value> {
    method: &'static str,
    api: ApiVersion,
    positional: Vec<Value>,
    optional: OptionalArgs,
    projector: Projector<T>,
}

impl CallDeclaration<Value> {
    /// Declaration on the v2 API that returns the raw result
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            api: ApiVersion::V2,
            positional: Vec::new(),
            optional: OptionalArgs::new(),
            projector: Box::new(|result: Value| -> RpcClientResult<Value> { Ok(result) }),
        }
    }
}

impl<T> CallDeclaration<T> {
    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn optional(&self) -> &OptionalArgs {
        &self.optional
    }

    /// Route the call to another API version
    pub fn api(mut self, api: ApiVersion) -> Self {
        self.api = api;
        self
    }

    /// Append one positional argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append several positional arguments of one type
    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    /// Append every entry of a prepared [`OptionalArgs`]
    pub fn with_optional(mut self, optional: OptionalArgs) -> Self {
        for (flag, value) in optional.iter() {
            self.optional = self.optional.with(flag, value.clone());
        }
        self
    }

    /// Append a positional argument only when present
    pub fn arg_if_some<V: Into<Value>>(self, value: Option<V>) -> Self {
        match value {
            Some(value) => self.arg(value),
            None => self,
        }
    }

    /// Append a bare positional switch such as `--cert` when `enabled`
    pub fn switch(self, name: &'static str, enabled: bool) -> Self {
        if enabled { self.arg(name) } else { self }
    }

    /// Add a flag that is always sent
    pub fn flag(mut self, flag: &'static str, value: impl Into<Value>) -> Self {
        self.optional = self.optional.scalar(flag, value);
        self
    }

    /// Add a flag that is dropped when `value` is `None`
    pub fn opt_flag<V: Into<Value>>(mut self, flag: &'static str, value: Option<V>) -> Self {
        self.optional = self.optional.optional(flag, value);
        self
    }

    /// Add a flag repeated once per element
    pub fn repeated_flag<I, V>(mut self, flag: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.optional = self.optional.repeated(flag, values);
        self
    }

    /// Add a flag with an explicit [`ArgValue`]
    pub fn flag_value(mut self, flag: &'static str, value: ArgValue) -> Self {
        self.optional = self.optional.with(flag, value);
        self
    }

    /// Replace the projector applied to a successful result
    pub fn project<U, F>(self, projector: F) -> CallDeclaration<U>
    where
        F: FnOnce(Value) -> RpcClientResult<U> + Send + 'static,
    {
        CallDeclaration {
            method: self.method,
            api: self.api,
            positional: self.positional,
            optional: self.optional,
            projector: Box::new(projector),
        }
    }

    pub(crate) fn into_parts(self) -> (CallParts, Projector<T>) {
        (
            CallParts {
                method: self.method,
                api: self.api,
                positional: self.positional,
                optional: self.optional,
            },
            self.projector,
        )
    }
}

impl<T> fmt::Debug for CallDeclaration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallDeclaration")
            .field("method", &self.method)
            .field("api", &self.api)
            .field("positional", &self.positional)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

/// Declaration minus its projector
#[derive(Debug, Clone)]
pub(crate) struct CallParts {
    pub method: &'static str,
    pub api: ApiVersion,
    pub positional: Vec<Value>,
    pub optional: OptionalArgs,
}

/// Answer to a call that reached the node and came back intact.
///
/// `Failure` is the node's JSON-RPC error object; callers are expected to
/// branch on it. Transport and integrity faults never end up here.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<T> {
    Success(T),
    Failure(RpcErrorObject),
}

impl<T> CallOutcome<T> {
    /// `0` on success, the node's error code otherwise
    pub fn code(&self) -> i64 {
        match self {
            CallOutcome::Success(_) => 0,
            CallOutcome::Failure(error) => error.code,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CallOutcome::Success(_) => None,
            CallOutcome::Failure(error) => Some(&error.message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            CallOutcome::Success(value) => Some(value),
            CallOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&RpcErrorObject> {
        match self {
            CallOutcome::Success(_) => None,
            CallOutcome::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, RpcErrorObject> {
        match self {
            CallOutcome::Success(value) => Ok(value),
            CallOutcome::Failure(error) => Err(error),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> CallOutcome<U> {
        match self {
            CallOutcome::Success(value) => CallOutcome::Success(f(value)),
            CallOutcome::Failure(error) => CallOutcome::Failure(error),
        }
    }
}
