use super::Passenger;
use crate::store::{Section, Ticket};
use serde::{Deserialize, Serialize};

///
/// Occupied seat together with its passenger
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub section: Section,
    pub seat_number: i32,
    pub user: Passenger,
}

impl From<Ticket> for Allocation {
    fn from(value: Ticket) -> Self {
        Self {
            section: value.seat.section,
            seat_number: value.seat.seat_number,
            user: value.passenger.into(),
        }
    }
}
