//! Resolvers turning an [`IdentityClaims`](crate::IdentityClaims) payload into normalized identity values.
//!
//! Every resolver is total: missing or oddly shaped claims degrade to a documented default instead of an error.
//! An empty custom field name means "not configured".

pub mod email;
pub mod group;
pub mod user_id;
