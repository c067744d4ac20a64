//! Application layer — use-cases and the port traits they depend on.

pub mod ports;
pub mod services;
