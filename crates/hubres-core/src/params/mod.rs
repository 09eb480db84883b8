//! Request parameters for the hub resolver.
//!
//! Requests arrive as an ordered list of name/value pairs. Before use they are
//! collapsed into a map (last write wins), checked, and, on the resolve path,
//! completed with installation defaults.

mod kind;
mod validate;

pub use kind::Kind;
pub use validate::{resolve_params, validate_params};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::ResolveError;

pub const PARAM_CATALOG: &str = "catalog";
pub const PARAM_KIND: &str = "kind";
pub const PARAM_NAME: &str = "name";
pub const PARAM_VERSION: &str = "version";

/// Installation configuration key holding the default catalog.
pub const CONFIG_CATALOG: &str = "default-catalog";
/// Installation configuration key holding the default kind.
pub const CONFIG_KIND: &str = "default-kind";

/// Typed parameter value as sent by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Array(Vec<String>),
    Object(BTreeMap<String, String>),
}

impl ParamValue {
    /// The string payload, or None for array/object values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            ParamValue::Array(_) | ParamValue::Object(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

/// One request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: ParamValue,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Fully-populated parameters, ready for URL construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubParams {
    pub catalog: String,
    pub kind: Kind,
    pub name: String,
    pub version: String,
}

/// Collapses the ordered parameter list into a map. Later duplicates win.
pub fn collapse(params: &[Param]) -> HashMap<&str, &ParamValue> {
    params
        .iter()
        .map(|p| (p.name.as_str(), &p.value))
        .collect()
}

/// Reads a recognized parameter that must carry a string value.
fn string_param<'a>(
    map: &HashMap<&str, &'a ParamValue>,
    name: &str,
) -> Result<Option<&'a str>, ResolveError> {
    match map.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ResolveError::InvalidParameter(format!("{} param must be a string", name))),
    }
}
