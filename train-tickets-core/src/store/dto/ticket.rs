use super::Seat;

///
/// Copy of the buyer's identity taken at purchase time.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub from: String,
    pub to: String,

    pub passenger: Passenger,

    /// cents
    pub price_paid: u32,

    pub seat: Seat,
}
