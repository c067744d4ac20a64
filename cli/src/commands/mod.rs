//! Command handlers — presentation layer wiring infra adapters into the
//! application services and formatting the results.

pub mod deploy;
pub mod setup_daemon;
pub mod version;
