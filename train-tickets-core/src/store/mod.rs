//!
//! In-memory allocation of seats to passengers
//!

mod allocation_store;
mod allocation_store_impl;
mod dto;
mod error;

pub use allocation_store::*;
pub use allocation_store_impl::*;
pub use dto::*;
pub use error::*;
