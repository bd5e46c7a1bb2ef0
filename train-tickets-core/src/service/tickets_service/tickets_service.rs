use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Buy a ticket for anonymous user.
    ///
    /// ### Returns
    /// [output::Receipt] of the new ticket
    ///
    /// ### Errors
    /// - [Error::Validation] when first name, last name or email is empty
    /// - [Error::Store] when
    ///     - email already owns a ticket
    ///     - train is full
    ///
    async fn purchase_ticket(
        &self,
        purchase: input::TicketPurchase,
    ) -> Result<output::Receipt, Error>;

    ///
    /// Find ticket of the user.
    ///
    /// ### Errors
    /// - [Error::Store] when user has no ticket
    ///
    async fn view_receipt(&self, user: &User) -> Result<output::Receipt, Error>;

    ///
    /// Find all occupied seats, optionally limited to one section.
    ///
    /// ### Errors
    /// - [Error::Auth] when user is not an admin
    ///
    async fn view_allocations(
        &self,
        user: &User,
        filter: input::AllocationsFilter,
    ) -> Result<Vec<output::Allocation>, Error>;

    ///
    /// Remove user from the train. Only admin can remove other users.
    ///
    /// ### Errors
    /// - [Error::PermissionDenied] when non admin targets another user
    /// - [Error::Store] when target has no ticket
    ///
    async fn remove_user(
        &self,
        user: &User,
        removal: input::UserRemoval,
    ) -> Result<output::Removal, Error>;

    ///
    /// Move user to another seat. Only admin can move other users.
    ///
    /// ### Errors
    /// - [Error::Validation] when section or seat number is missing
    /// - [Error::PermissionDenied] when non admin targets another user
    /// - [Error::Store] when
    ///     - seat is out of range
    ///     - target has no ticket
    ///     - seat is occupied by another user
    ///
    async fn modify_seat(
        &self,
        user: &User,
        modification: input::SeatModification,
    ) -> Result<output::Receipt, Error>;
}
