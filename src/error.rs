// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Gesture and notification handlers never fail; these errors only surface
//! from loaders, file-backed stores, and the fullscreen capability.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Store Error: {0}")]
    Store(String),

    #[error("Fullscreen Error: {0}")]
    Fullscreen(#[from] FullscreenError),
}

/// Reasons the host can give for refusing a fullscreen transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// The host denied the request (e.g. no user activation, policy).
    #[error("request denied: {0}")]
    Denied(String),

    /// The presentation surface cannot enter fullscreen at all.
    #[error("fullscreen is not supported by this surface")]
    Unsupported,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
