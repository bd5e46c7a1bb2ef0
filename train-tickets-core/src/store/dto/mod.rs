mod seat;
mod ticket;

pub use seat::*;
pub use ticket::*;
