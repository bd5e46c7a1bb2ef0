use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    extract::{JsonBody, QueryParams},
    service::tickets_service::TicketsService,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use jwt_auth::User;
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/receipt", get(view_receipt))
        .route(
            "/api/v1/allocations",
            get(view_allocations).delete(remove_user),
        )
        .route("/api/v1/allocations/seat", put(modify_seat))
        .route_layer(application_middleware.auth.clone())
        .route("/api/v1/tickets", post(purchase_ticket))
}

async fn purchase_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    JsonBody(purchase): JsonBody<input::TicketPurchase>,
) -> Result<(StatusCode, Json<output::Receipt>), Error> {
    let receipt = tickets_service.purchase_ticket(purchase).await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

async fn view_receipt(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::Receipt>, Error> {
    let receipt = tickets_service.view_receipt(&user).await?;

    Ok(Json(receipt))
}

async fn view_allocations(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    QueryParams(filter): QueryParams<input::AllocationsFilter>,
) -> Result<Json<Vec<output::Allocation>>, Error> {
    let allocations = tickets_service.view_allocations(&user, filter).await?;

    Ok(Json(allocations))
}

async fn remove_user(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    QueryParams(removal): QueryParams<input::UserRemoval>,
) -> Result<Json<output::Removal>, Error> {
    let removal = tickets_service.remove_user(&user, removal).await?;

    Ok(Json(removal))
}

async fn modify_seat(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    JsonBody(modification): JsonBody<input::SeatModification>,
) -> Result<Json<output::Receipt>, Error> {
    let receipt = tickets_service.modify_seat(&user, modification).await?;

    Ok(Json(receipt))
}
