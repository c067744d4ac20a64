//! Domain layer — pure types and logic, zero I/O beyond local path probing.

pub mod config;
pub mod error;
pub mod paths;
pub mod remote;
