#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not found")]
    NotFound,

    #[error("user already has a ticket")]
    AlreadyHasTicket,

    #[error("train is full")]
    Full,

    #[error("seat is already occupied")]
    SeatOccupied,

    #[error("invalid seat: {0}")]
    InvalidSeat(String),
}
