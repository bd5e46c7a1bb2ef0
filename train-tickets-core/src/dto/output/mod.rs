mod allocation;
mod error_body;
mod receipt;
mod removal;

pub use allocation::*;
pub use error_body::*;
pub use receipt::*;
pub use removal::*;
