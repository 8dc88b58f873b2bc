use tracing::debug;

use crate::claim::{ClaimValue, IdentityClaims};

/// Email returned when the provider did not give us a usable address.
pub const DEFAULT_SSO_EMAIL: &str = "sso@nebula.invalid";

pub fn get_email(claims: &IdentityClaims, custom_email_field: &str) -> String {
    if custom_email_field.is_empty() {
        if claims.email.is_empty() {
            debug!("identity provider did not return an email, using default sso email");
            return DEFAULT_SSO_EMAIL.to_string();
        }
        return claims.email.clone();
    }

    match claims.claim(custom_email_field).and_then(ClaimValue::as_scalar) {
        Some(email) => email.to_string(),
        None => {
            debug!("email claim(name: {custom_email_field}) not found, using default sso email");
            DEFAULT_SSO_EMAIL.to_string()
        }
    }
}

#[cfg(test)]
mod test {
    use crate::claim::{ClaimValue, IdentityClaims};

    use super::{get_email, DEFAULT_SSO_EMAIL};

    const TEST_EMAIL: &str = "test@nebula.io";

    #[test]
    fn when_custom_field_is_empty_then_canonical_email_is_returned() {
        let claims = IdentityClaims::builder().email(TEST_EMAIL).build();

        assert_eq!(get_email(&claims, ""), TEST_EMAIL);
    }

    #[test]
    fn when_custom_field_and_canonical_email_are_empty_then_default_email_is_returned() {
        let claims = IdentityClaims::default();

        assert_eq!(get_email(&claims, ""), DEFAULT_SSO_EMAIL);
    }

    #[test]
    fn when_custom_field_does_not_exist_then_default_email_is_returned() {
        let claims = IdentityClaims::builder().email(TEST_EMAIL).build();

        assert_eq!(get_email(&claims, "myEmailField"), DEFAULT_SSO_EMAIL);
        assert_eq!(get_email(&IdentityClaims::default(), "myEmailField"), DEFAULT_SSO_EMAIL);
    }

    #[test]
    fn when_custom_field_exists_then_its_value_is_returned() {
        let claims =
            IdentityClaims::builder().email("canonical@nebula.io").build().with_claim("myEmailField", TEST_EMAIL);

        assert_eq!(get_email(&claims, "myEmailField"), TEST_EMAIL);
    }

    #[test]
    fn when_custom_field_is_an_empty_string_then_empty_string_is_returned() {
        let claims = IdentityClaims::builder().email(TEST_EMAIL).build().with_claim("myEmailField", "");

        assert_eq!(get_email(&claims, "myEmailField"), "");
    }

    #[test]
    fn when_custom_field_is_not_a_string_then_default_email_is_returned() {
        let claims = IdentityClaims::default()
            .with_claim("list", vec![TEST_EMAIL])
            .with_claim("number", ClaimValue::Unsupported(serde_json::json!(7)));

        assert_eq!(get_email(&claims, "list"), DEFAULT_SSO_EMAIL);
        assert_eq!(get_email(&claims, "number"), DEFAULT_SSO_EMAIL);
    }

    #[test]
    fn when_value_is_not_normalized_then_it_is_returned_verbatim() {
        let claims = IdentityClaims::default().with_claim("mail", " Test@Nebula.IO ");

        assert_eq!(get_email(&claims, "mail"), " Test@Nebula.IO ");
        assert_eq!(get_email(&claims, "Mail"), DEFAULT_SSO_EMAIL);
    }
}
