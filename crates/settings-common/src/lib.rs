use thiserror::Error;

pub mod diagnostics;
pub mod io;
pub mod logging;
pub mod memo;

mod macros;

/// Something in the configuration file is not correct.
///
/// This is a marker kind: configuration validation code raises it so callers
/// can distinguish malformed settings from other failures. It carries nothing
/// beyond a message.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ConfigError(String);

impl ConfigError {
    pub fn new(s: &str) -> ConfigError {
        ConfigError(s.to_string())
    }

    pub fn from<E: std::error::Error>(e: E) -> Self {
        Self(e.to_string())
    }
}
