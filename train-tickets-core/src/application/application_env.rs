use anyhow::anyhow;
use jwt_auth::{
    util::{parse_jwt_algorithms, parse_jwt_key},
    TokenVerification,
};
use std::net::SocketAddr;

const DEFAULT_ROUTE_FROM: &str = "London";
const DEFAULT_ROUTE_TO: &str = "France";
const DEFAULT_TICKET_PRICE_CENTS: u32 = 2000;
const DEFAULT_MAX_HTTP_CONTENT_LEN: usize = 16 * 1024;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub max_http_content_len: usize,

    pub route_from: String,
    pub route_to: String,
    pub ticket_price_cents: u32,

    /// Signatures are checked only when both algorithms and key are set
    pub token_verification: TokenVerification,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TRAIN_TICKETS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TRAIN_TICKETS_LOG_FILENAME")?;
        let bind_address = Self::env_var("TRAIN_TICKETS_BIND_ADDRESS")?.parse()?;
        let max_http_content_len = match Self::optional_env_var("TRAIN_TICKETS_MAX_HTTP_CONTENT_LEN") {
            Some(max_http_content_len) => max_http_content_len.parse()?,
            None => DEFAULT_MAX_HTTP_CONTENT_LEN,
        };
        let route_from = Self::optional_env_var("TRAIN_TICKETS_ROUTE_FROM")
            .unwrap_or_else(|| DEFAULT_ROUTE_FROM.to_string());
        let route_to = Self::optional_env_var("TRAIN_TICKETS_ROUTE_TO")
            .unwrap_or_else(|| DEFAULT_ROUTE_TO.to_string());
        let ticket_price_cents = match Self::optional_env_var("TRAIN_TICKETS_PRICE_CENTS") {
            Some(ticket_price_cents) => ticket_price_cents.parse()?,
            None => DEFAULT_TICKET_PRICE_CENTS,
        };
        let token_verification = Self::parse_token_verification(
            Self::optional_env_var("TRAIN_TICKETS_JWT_ALGORITHMS"),
            Self::optional_env_var("TRAIN_TICKETS_JWT_KEY"),
        )?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            max_http_content_len,
            route_from,
            route_to,
            ticket_price_cents,
            token_verification,
        })
    }

    fn parse_token_verification(
        jwt_algorithms: Option<String>,
        jwt_key: Option<String>,
    ) -> anyhow::Result<TokenVerification> {
        let (jwt_algorithms, jwt_key) = match (jwt_algorithms, jwt_key) {
            (Some(jwt_algorithms), Some(jwt_key)) => (jwt_algorithms, jwt_key),
            (None, None) => return Ok(TokenVerification::Unverified),
            _ => {
                return Err(anyhow!(
                    "TRAIN_TICKETS_JWT_ALGORITHMS and TRAIN_TICKETS_JWT_KEY must be set together"
                ))
            }
        };

        let algorithms = parse_jwt_algorithms(&jwt_algorithms)?;
        let algorithm = algorithms.first().ok_or(anyhow!(
            "TRAIN_TICKETS_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let key = parse_jwt_key(algorithm, &jwt_key)?;

        Ok(TokenVerification::Verified { key, algorithms })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use jsonwebtoken::Algorithm;

    #[test]
    fn token_verification_none_set() {
        let verification = ApplicationEnv::parse_token_verification(None, None).unwrap();

        assert!(matches!(verification, TokenVerification::Unverified));
    }

    #[test]
    fn token_verification_both_set() {
        let verification = ApplicationEnv::parse_token_verification(
            Some("HS256, HS384".to_string()),
            Some("some secret".to_string()),
        )
        .unwrap();

        match verification {
            TokenVerification::Verified { algorithms, .. } => {
                assert_eq!(algorithms, vec![Algorithm::HS256, Algorithm::HS384])
            }
            TokenVerification::Unverified => panic!("expected verified"),
        }
    }

    #[test]
    fn token_verification_only_one_set() {
        let only_algorithms =
            ApplicationEnv::parse_token_verification(Some("HS256".to_string()), None);
        let only_key = ApplicationEnv::parse_token_verification(None, Some("secret".to_string()));

        assert!(only_algorithms.is_err());
        assert!(only_key.is_err());
    }

    #[test]
    fn token_verification_invalid_algorithm() {
        let verification = ApplicationEnv::parse_token_verification(
            Some("HS999".to_string()),
            Some("some secret".to_string()),
        );

        assert!(verification.is_err());
    }
}
