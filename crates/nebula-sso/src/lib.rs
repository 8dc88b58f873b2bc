pub mod claim;
pub mod config;
pub mod error;
pub mod identity;
pub mod resolver;

pub use claim::{ClaimValue, IdentityClaims};
pub use config::ResolutionConfig;
pub use identity::{resolve_identity, Identity};
pub use resolver::{
    email::{get_email, DEFAULT_SSO_EMAIL},
    group::{get_group_ids, DEFAULT_GROUP_SEPARATOR},
    user_id::get_user_id,
};
