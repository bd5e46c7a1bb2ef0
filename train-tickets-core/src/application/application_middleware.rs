use super::ApplicationEnv;
use crate::auth::JwtAuthorizationValidator;
use jwt_auth::IdentityExtractor;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
    validate_request::ValidateRequestHeaderLayer,
};

pub struct ApplicationMiddleware {
    pub auth: ValidateRequestHeaderLayer<JwtAuthorizationValidator>,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
    pub body_limit: RequestBodyLimitLayer,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let extractor = IdentityExtractor::new(env.token_verification.clone());
    let auth = ValidateRequestHeaderLayer::custom(JwtAuthorizationValidator::new(extractor));

    let trace = TraceLayer::new_for_http();

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    ApplicationMiddleware {
        auth,
        trace,
        body_limit,
    }
}
