//!
//! Roles a user can be granted in the bearer token
//!

use std::str::FromStr;
use strum::{AsRefStr, EnumString};

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[strum(serialize = "admin")]
    Admin,

    #[default]
    #[strum(serialize = "user")]
    User,
}

impl Role {
    ///
    /// Any value other than a known role falls back to [Role::User].
    ///
    pub fn from_claim(claim: &str) -> Self {
        Self::from_str(claim).unwrap_or_default()
    }
}
