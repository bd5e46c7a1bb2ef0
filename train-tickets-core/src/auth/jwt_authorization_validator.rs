use crate::error::Error;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, Response},
    response::IntoResponse,
};
use jwt_auth::IdentityExtractor;
use tower_http::validate_request::ValidateRequest;

///
/// Middleware that resolves caller from JWT in Authorization header.
/// If Authorization is correct [jwt_auth::User] is added to request extensions,
/// otherwise request is rejected with `unauthenticated` error.
///
#[derive(Clone)]
pub struct JwtAuthorizationValidator {
    extractor: IdentityExtractor,
}

impl JwtAuthorizationValidator {
    pub fn new(extractor: IdentityExtractor) -> Self {
        Self { extractor }
    }
}

impl<B> ValidateRequest<B> for JwtAuthorizationValidator {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        let authorization_header = request.headers().get(AUTHORIZATION);

        let user = self
            .extractor
            .extract(authorization_header)
            .map_err(|err| Error::Unauthenticated(err).into_response())?;

        request.extensions_mut().insert(user);

        Ok(())
    }
}
