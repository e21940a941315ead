//! Configuration: environment-driven settings plus application constants
//! (role names, status strings, pagination and rate-limit bounds).

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
