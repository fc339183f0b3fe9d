// Client library for the healthcare FWA analysis service
pub mod client;
pub mod common;
pub mod utils;
