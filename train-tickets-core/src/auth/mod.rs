mod jwt_authorization_validator;

pub use jwt_authorization_validator::*;
