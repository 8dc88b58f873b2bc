use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("unable to parse claims payload")]
    Deserialize(#[from] serde_json::Error),
}
