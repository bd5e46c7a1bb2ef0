use tokio::net::TcpListener;
use train_tickets_core::application::{self, ApplicationEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env);
    let middleware = application::create_middleware(&env);
    let app = application::create_application(state, middleware);

    tracing::info!(bind_address = %env.bind_address, "starting server");
    let listener = TcpListener::bind(env.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(application::shutdown_signal())
        .await?;

    tracing::info!("server stopped");

    Ok(())
}
