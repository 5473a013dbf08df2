// Domain layer: guest-list entities, errors and persistence ports.

pub mod entities;
pub mod errors;
pub mod ports;
