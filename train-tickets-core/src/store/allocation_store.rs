use super::{Passenger, Section, Ticket};
use crate::store;
use axum::async_trait;

///
/// Owns all tickets and seat occupancy.
///
/// Every operation is atomic with respect to every other operation.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AllocationStore: Send + Sync {
    ///
    /// Creates ticket on the first free seat.
    /// Seats are scanned in order `A1..A10`, `B1..B10`.
    ///
    /// ### Errors
    /// - [store::Error::AlreadyHasTicket] when passenger's email already owns a ticket
    /// - [store::Error::Full] when every seat is occupied
    ///
    async fn purchase(
        &self,
        passenger: Passenger,
        from: &str,
        to: &str,
        price_paid: u32,
    ) -> Result<Ticket, store::Error>;

    ///
    /// ### Errors
    /// - [store::Error::NotFound]
    ///
    async fn get_by_email(&self, email: &str) -> Result<Ticket, store::Error>;

    ///
    /// Finds tickets with seats in the section, or all tickets when section is `None`.
    /// Order of returned tickets is not part of the contract.
    ///
    async fn list_allocations(&self, section: Option<Section>) -> Vec<Ticket>;

    ///
    /// Deletes ticket and frees its seat.
    ///
    /// ### Errors
    /// - [store::Error::NotFound]
    ///
    async fn remove(&self, email: &str) -> Result<(), store::Error>;

    ///
    /// Moves ticket to another seat. Seat is validated before the ticket is looked up.
    /// Moving to the seat the ticket already holds changes nothing.
    ///
    /// ### Errors
    /// - [store::Error::InvalidSeat] when section or seat number is out of range
    /// - [store::Error::NotFound] when email has no ticket
    /// - [store::Error::SeatOccupied] when another ticket holds the seat
    ///
    async fn reseat(
        &self,
        email: &str,
        section: &str,
        seat_number: i32,
    ) -> Result<Ticket, store::Error>;
}
