use std::collections::HashMap;

use bon::Builder;
use serde::Deserialize;

use crate::{
    claim::IdentityClaims,
    identity::{resolve_identity, Identity},
};

/// Per-provider rules for extracting an identity from a claims payload.
///
/// Empty strings are treated like unset fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct ResolutionConfig {
    /// Claim holding the email, instead of the canonical `email` attribute.
    pub custom_email_field: Option<String>,
    /// Claim holding the user id, instead of the canonical `user_id` attribute.
    pub custom_id_field: Option<String>,
    /// Claim holding the group memberships.
    pub custom_group_field: Option<String>,
    /// Group assigned when none of the provider groups can be mapped.
    pub default_group_id: Option<String>,
    /// Provider group name to internal group id.
    #[serde(default)]
    #[builder(default)]
    pub group_mapping: HashMap<String, String>,
    /// Separator of a scalar group claim, a single space when unset.
    pub group_separator: Option<String>,
}

impl ResolutionConfig {
    pub fn custom_email_field(&self) -> &str {
        self.custom_email_field.as_deref().unwrap_or_default()
    }

    pub fn custom_id_field(&self) -> &str {
        self.custom_id_field.as_deref().unwrap_or_default()
    }

    pub fn custom_group_field(&self) -> &str {
        self.custom_group_field.as_deref().unwrap_or_default()
    }

    pub fn default_group_id(&self) -> &str {
        self.default_group_id.as_deref().unwrap_or_default()
    }

    pub fn group_separator(&self) -> &str {
        self.group_separator.as_deref().unwrap_or_default()
    }

    pub fn resolve(&self, claims: &IdentityClaims) -> Identity {
        resolve_identity(claims, self)
    }
}
