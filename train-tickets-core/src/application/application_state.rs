use super::ApplicationEnv;
use crate::{
    service::tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    store::AllocationStoreImpl,
};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
}

pub fn create_state(env: &ApplicationEnv) -> ApplicationState {
    tracing::info!("creating allocation store");
    let allocation_store = AllocationStoreImpl::new();
    let allocation_store = Arc::new(allocation_store);

    tracing::info!(
        from = %env.route_from,
        to = %env.route_to,
        price = env.ticket_price_cents,
        "creating services"
    );
    let config = TicketsServiceConfig {
        route_from: env.route_from.clone(),
        route_to: env.route_to.clone(),
        ticket_price: env.ticket_price_cents,
    };
    let tickets_service = TicketsServiceImpl::new(config, allocation_store);
    let tickets_service = Arc::new(tickets_service);

    ApplicationState { tickets_service }
}
