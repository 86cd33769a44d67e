// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Errors carry messages rather than the source values so they stay `Clone`
//! and can travel inside Iced messages.

use crate::application::port::gallery::SourceError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Gallery error: {0}")]
    Source(#[from] SourceError),

    #[error("Image error: {0}")]
    Image(String),
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
