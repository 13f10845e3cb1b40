//! Incoming request parameters

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{FilterError, RequestError};

/// Operations exposed by the request layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterRoute {
    /// POST: insert `item`
    Add,
    /// GET: test `item`
    Check,
    /// DELETE: reset the filter
    Clear,
    /// GET: statistics only
    Stats,
}

impl FilterRoute {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterRoute::Add => "add",
            FilterRoute::Check => "check",
            FilterRoute::Clear => "clear",
            FilterRoute::Stats => "stats",
        }
    }
}

impl fmt::Display for FilterRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterRoute {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(FilterRoute::Add),
            "check" => Ok(FilterRoute::Check),
            "clear" => Ok(FilterRoute::Clear),
            "stats" => Ok(FilterRoute::Stats),
            other => Err(RequestError::UnknownRoute(other.to_string())),
        }
    }
}

/// Extract the `item` parameter of an add or check request
///
/// Absent and falsy values (`null`, `false`, `0`, `""`) are a missing item.
/// Any other non-text value is `InvalidInput`, raised before hashing.
pub fn item_param(params: &Value) -> Result<&str, RequestError> {
    match params.get("item") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(RequestError::MissingItem),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(RequestError::MissingItem),
        Some(Value::String(s)) if s.is_empty() => Err(RequestError::MissingItem),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(FilterError::InvalidInput("Input must be a string".to_string()).into()),
    }
}
