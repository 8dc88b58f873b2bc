use std::collections::HashMap;

use tracing::debug;

use crate::claim::{ClaimValue, IdentityClaims};

pub const DEFAULT_GROUP_SEPARATOR: &str = " ";

/// Resolves the internal group ids of a user.
///
/// The group mapping acts as an allow-list: tokens without an entry are dropped, and only when nothing at all
/// matched does the default group take over. The default group is never mixed with partially matched groups.
/// The result keeps token order and duplicates.
pub fn get_group_ids(
    claims: &IdentityClaims,
    custom_group_field: &str,
    default_group_id: &str,
    group_mapping: &HashMap<String, String>,
    group_separator: &str,
) -> Vec<String> {
    if custom_group_field.is_empty() {
        return default_or_empty_group_ids(default_group_id);
    }

    let tokens = match claims.claim(custom_group_field) {
        Some(ClaimValue::Scalar(value)) => split_group_tokens(value, group_separator),
        Some(ClaimValue::List(values)) => values.iter().map(String::as_str).collect(),
        Some(ClaimValue::Unsupported(_)) | None => {
            debug!("group claim(name: {custom_group_field}) not found, using default group");
            return default_or_empty_group_ids(default_group_id);
        }
    };

    let group_ids: Vec<String> = tokens.into_iter().filter_map(|token| group_mapping.get(token).cloned()).collect();
    if group_ids.is_empty() {
        debug!("no group in claim(name: {custom_group_field}) is mapped, using default group");
        return default_or_empty_group_ids(default_group_id);
    }

    group_ids
}

/// Splits a scalar group claim. Tokens are not trimmed and empty tokens are kept.
fn split_group_tokens<'a>(value: &'a str, separator: &str) -> Vec<&'a str> {
    let separator = if separator.is_empty() { DEFAULT_GROUP_SEPARATOR } else { separator };
    value.split(separator).collect()
}

fn default_or_empty_group_ids(default_group_id: &str) -> Vec<String> {
    if default_group_id.is_empty() {
        Vec::new()
    } else {
        vec![default_group_id.to_string()]
    }
}
