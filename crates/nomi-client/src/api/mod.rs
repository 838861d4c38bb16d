//! API endpoint implementations.

mod nomis;
mod rooms;

pub use nomis::NomisApi;
pub use rooms::RoomsApi;
