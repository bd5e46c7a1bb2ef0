mod allocations_filter;
mod seat_modification;
mod ticket_purchase;
mod user_removal;

pub use allocations_filter::*;
pub use seat_modification::*;
pub use ticket_purchase::*;
pub use user_removal::*;
