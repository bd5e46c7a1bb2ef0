use crate::{error::MissingRoleError, Role, User};

///
/// Validates that user has the required role.
///
/// ### Errors
/// - [MissingRoleError] when user has a different role
///
pub fn require_role(user: &User, role: Role) -> Result<(), MissingRoleError> {
    match user.role == role {
        true => Ok(()),
        false => Err(MissingRoleError {
            missing_role: role.as_ref().to_string(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn user_with_role(role: Role) -> User {
        User::new(
            "jane@example.com".to_string(),
            "Jane".to_string(),
            "Doe".to_string(),
            role,
        )
    }

    #[test]
    fn require_role_user_has_role() {
        let user = user_with_role(Role::Admin);

        let result = require_role(&user, Role::Admin);

        assert!(result.is_ok());
    }

    #[test]
    fn require_role_user_does_not_have_role() {
        let user = user_with_role(Role::User);

        let err = require_role(&user, Role::Admin).unwrap_err();

        assert_eq!(err.missing_role, "admin");
    }
}
