use jsonwebtoken::{Algorithm, DecodingKey};
use jwt_auth::{test::create_jwt, TokenVerification};
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use train_tickets_core::application::{
    create_application, create_middleware, create_state, ApplicationEnv,
};

pub const JWT_KEY: &str = "integration tests secret";
pub const MAX_HTTP_CONTENT_LEN: usize = 4096;

///
/// Starts application with verified tokens on a random port.
///
/// Every call gets its own empty train.
///
pub async fn spawn_application() -> String {
    let env = ApplicationEnv {
        log_directory: "logs".to_string(),
        log_filename: "train-tickets-tests.log".to_string(),
        bind_address: "127.0.0.1:0".parse().unwrap(),
        max_http_content_len: MAX_HTTP_CONTENT_LEN,
        route_from: "London".to_string(),
        route_to: "France".to_string(),
        ticket_price_cents: 2000,
        token_verification: TokenVerification::Verified {
            key: DecodingKey::from_secret(JWT_KEY.as_bytes()),
            algorithms: vec![Algorithm::HS256],
        },
    };

    let application = create_application(create_state(&env), create_middleware(&env));
    let listener = TcpListener::bind(env.bind_address).await.unwrap();
    let address = listener.local_addr().unwrap().to_string();

    tokio::spawn(async move {
        axum::serve(listener, application).await.unwrap();
    });

    address
}

pub fn create_user_jwt(email: &str) -> String {
    create_jwt(email, None, JWT_KEY)
}

pub fn create_admin_jwt() -> String {
    create_jwt("admin@example.com", Some("admin"), JWT_KEY)
}

pub async fn purchase_ticket(client: &Client, address: &str, email: &str) -> Response {
    client
        .post(format!("http://{address}/api/v1/tickets"))
        .header(CONTENT_TYPE, "application/json")
        .body(
            serde_json::json!({
                "first_name": "John",
                "last_name": "Doe",
                "email": email,
            })
            .to_string(),
        )
        .send()
        .await
        .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let response_body = response.bytes().await.unwrap();

    serde_json::from_slice::<Value>(&response_body).unwrap()
}
