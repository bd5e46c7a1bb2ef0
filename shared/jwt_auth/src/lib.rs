//!
//! Bearer token handling shared by the services.
//!
//! Turns an `Authorization` header into a [User].
//!

pub mod dto;
pub mod error;
mod extractor;
mod functions;
pub mod role;
pub mod util;

pub use dto::User;
pub use extractor::*;
pub use functions::*;
pub use role::Role;
