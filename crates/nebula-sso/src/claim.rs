use std::{collections::HashMap, io::Read};

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClaimsError;

/// A claim value as reported by the identity provider.
///
/// Providers disagree on the shape of multi-valued attributes, so a value is either a single string,
/// a list of strings, or something the resolvers do not understand. `Unsupported` values are kept
/// instead of rejected so that one odd attribute never fails the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Scalar(String),
    List(Vec<String>),
    Unsupported(Value),
}

impl ClaimValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ClaimValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::Scalar(value)
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for ClaimValue {
    fn from(values: Vec<String>) -> Self {
        ClaimValue::List(values)
    }
}

impl From<Vec<&str>> for ClaimValue {
    fn from(values: Vec<&str>) -> Self {
        ClaimValue::List(values.into_iter().map(String::from).collect())
    }
}

/// One authenticated user as reported by the identity provider. The payload is trusted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct IdentityClaims {
    #[serde(default)]
    #[builder(default)]
    pub email: String,
    #[serde(default, alias = "userID", alias = "userId")]
    #[builder(default)]
    pub user_id: String,
    #[serde(default, alias = "rawData", alias = "raw_data", alias = "rawAttributes")]
    #[builder(default)]
    pub raw_attributes: HashMap<String, ClaimValue>,
}

impl IdentityClaims {
    pub fn from_json(payload: &str) -> Result<Self, ClaimsError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ClaimsError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn claim(&self, name: &str) -> Option<&ClaimValue> {
        self.raw_attributes.get(name)
    }

    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        self.raw_attributes.insert(name.into(), value.into());
        self
    }
}
