use tracing::debug;

use crate::claim::{ClaimValue, IdentityClaims};

/// The canonical user id is the floor: a custom field only ever overrides it, never blanks it out.
pub fn get_user_id(claims: &IdentityClaims, custom_id_field: &str) -> String {
    if custom_id_field.is_empty() {
        return claims.user_id.clone();
    }

    match claims.claim(custom_id_field).and_then(ClaimValue::as_scalar) {
        Some(user_id) => user_id.to_string(),
        None => {
            debug!("user id claim(name: {custom_id_field}) not found, using canonical user id");
            claims.user_id.clone()
        }
    }
}
