//! Infrastructure adapters — concrete implementations of the Application
//! layer ports, each wrapping one external tool through a `CommandRunner`.

pub mod apt;
pub mod chown;
pub mod credentials;
pub mod git;
pub mod host;
pub mod python;
pub mod systemd;

#[cfg(test)]
pub mod test_runner;
