use serde::{Deserialize, Serialize};

use crate::{
    claim::IdentityClaims,
    config::ResolutionConfig,
    resolver::{email::get_email, group::get_group_ids, user_id::get_user_id},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub user_id: String,
    pub group_ids: Vec<String>,
}

pub fn resolve_identity(claims: &IdentityClaims, config: &ResolutionConfig) -> Identity {
    Identity {
        email: get_email(claims, config.custom_email_field()),
        user_id: get_user_id(claims, config.custom_id_field()),
        group_ids: get_group_ids(
            claims,
            config.custom_group_field(),
            config.default_group_id(),
            &config.group_mapping,
            config.group_separator(),
        ),
    }
}
