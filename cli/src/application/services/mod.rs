//! Application services — one module per use-case.

pub mod daemon_setup;
pub mod deploy;

#[cfg(test)]
pub mod test_support;
