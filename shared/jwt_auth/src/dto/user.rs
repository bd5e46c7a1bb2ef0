use crate::Role;
use std::{ops::Deref, sync::Arc};

///
/// Struct with user information.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Clone, Debug)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// User information retrieved from the bearer token.
///
#[derive(Debug)]
pub struct InnerUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl User {
    pub fn new(email: String, first_name: String, last_name: String, role: Role) -> Self {
        Self {
            inner: Arc::new(InnerUser {
                email,
                first_name,
                last_name,
                role,
            }),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
