use super::{
    AllocationStore, Passenger, Seat, Section, Ticket, SEATS_PER_SECTION, SECTIONS_COUNT,
};
use crate::store::{self, Error};
use axum::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

///
/// [AllocationStore] kept in memory.
///
/// Tickets and seat occupancy live behind a single lock
/// so they are always observed together.
///
pub struct AllocationStoreImpl {
    allocations: RwLock<Allocations>,
}

#[derive(Default)]
struct Allocations {
    tickets: HashMap<String, Ticket>,
    seats: SeatMap,
}

///
/// Email of the ticket owner for every seat, indexed by section and seat number.
///
#[derive(Default)]
struct SeatMap {
    slots: [[Option<String>; SEATS_PER_SECTION]; SECTIONS_COUNT],
}

impl SeatMap {
    fn slot(&self, seat: Seat) -> &Option<String> {
        &self.slots[seat.section.index()][seat.seat_number as usize - 1]
    }

    fn slot_mut(&mut self, seat: Seat) -> &mut Option<String> {
        &mut self.slots[seat.section.index()][seat.seat_number as usize - 1]
    }

    fn first_free(&self) -> Option<Seat> {
        Section::ALL.into_iter().find_map(|section| {
            self.slots[section.index()]
                .iter()
                .position(Option::is_none)
                .map(|idx| Seat {
                    section,
                    seat_number: idx as i32 + 1,
                })
        })
    }

    fn occupant(&self, seat: Seat) -> Option<&str> {
        self.slot(seat).as_deref()
    }

    fn claim(&mut self, seat: Seat, email: &str) {
        *self.slot_mut(seat) = Some(email.to_string());
    }

    fn release(&mut self, seat: Seat) {
        self.slot_mut(seat).take();
    }

    ///
    /// Occupied seats in allocation order
    ///
    fn occupied(&self) -> impl Iterator<Item = (Seat, &str)> {
        Section::ALL.into_iter().flat_map(move |section| {
            self.slots[section.index()]
                .iter()
                .enumerate()
                .filter_map(move |(idx, email)| {
                    let seat = Seat {
                        section,
                        seat_number: idx as i32 + 1,
                    };
                    email.as_deref().map(|email| (seat, email))
                })
        })
    }
}

impl AllocationStoreImpl {
    pub fn new() -> Self {
        let allocations = Allocations::default();
        let allocations = RwLock::new(allocations);

        Self { allocations }
    }
}

#[async_trait]
impl AllocationStore for AllocationStoreImpl {
    async fn purchase(
        &self,
        passenger: Passenger,
        from: &str,
        to: &str,
        price_paid: u32,
    ) -> Result<Ticket, store::Error> {
        let mut guard = self.allocations.write().await;
        let allocations = &mut *guard;

        if allocations.tickets.contains_key(&passenger.email) {
            return Err(Error::AlreadyHasTicket);
        }

        let seat = allocations.seats.first_free().ok_or(Error::Full)?;
        allocations.seats.claim(seat, &passenger.email);

        let ticket = Ticket {
            from: from.to_string(),
            to: to.to_string(),
            passenger,
            price_paid,
            seat,
        };
        allocations
            .tickets
            .insert(ticket.passenger.email.clone(), ticket.clone());
        tracing::debug!(
            email = %ticket.passenger.email,
            section = %seat.section,
            seat_number = seat.seat_number,
            "seat claimed"
        );

        Ok(ticket)
    }

    async fn get_by_email(&self, email: &str) -> Result<Ticket, store::Error> {
        let allocations = self.allocations.read().await;

        allocations
            .tickets
            .get(email)
            .cloned()
            .ok_or(Error::NotFound)
    }

    async fn list_allocations(&self, section: Option<Section>) -> Vec<Ticket> {
        let allocations = self.allocations.read().await;

        allocations
            .seats
            .occupied()
            .filter(|(seat, _)| section.map_or(true, |section| seat.section == section))
            .filter_map(|(_, email)| allocations.tickets.get(email))
            .cloned()
            .collect()
    }

    async fn remove(&self, email: &str) -> Result<(), store::Error> {
        let mut guard = self.allocations.write().await;
        let allocations = &mut *guard;

        let ticket = allocations.tickets.remove(email).ok_or(Error::NotFound)?;
        allocations.seats.release(ticket.seat);
        tracing::debug!(
            email,
            section = %ticket.seat.section,
            seat_number = ticket.seat.seat_number,
            "seat released"
        );

        Ok(())
    }

    async fn reseat(
        &self,
        email: &str,
        section: &str,
        seat_number: i32,
    ) -> Result<Ticket, store::Error> {
        let seat = Seat::parse(section, seat_number)?;

        let mut guard = self.allocations.write().await;
        let allocations = &mut *guard;

        let ticket = allocations.tickets.get_mut(email).ok_or(Error::NotFound)?;

        match allocations.seats.occupant(seat) {
            Some(occupant) if occupant == email => {
                tracing::debug!(email, "ticket already holds requested seat");
                return Ok(ticket.clone());
            }
            Some(_) => return Err(Error::SeatOccupied),
            None => {}
        }

        allocations.seats.release(ticket.seat);
        allocations.seats.claim(seat, email);
        ticket.seat = seat;
        tracing::debug!(
            email,
            section = %seat.section,
            seat_number = seat.seat_number,
            "seat changed"
        );

        Ok(ticket.clone())
    }
}
