#[derive(Debug, thiserror::Error)]
#[error("missing role: {missing_role}")]
pub struct MissingRoleError {
    pub missing_role: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("no credential provided")]
    NoCredential,

    #[error("malformed credential: {0}")]
    MalformedCredential(&'static str),

    #[error("invalid credential: {0}")]
    InvalidCredential(String),
}
