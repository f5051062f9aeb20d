//! One-shot UDP transport for statistics records

mod error;
mod reporter;

pub use error::TransportError;
pub use reporter::Reporter;
