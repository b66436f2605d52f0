//! Error types for the DevDays API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "that program or speaker does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `HttpError` with
//! the raw status code and body for debugging.
//!
//! `UnsupportedDate` is raised while building a request, so a day missing
//! from the calendar never reaches the network.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by the program and speaker services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The date has no entry in the program calendar.
    #[error("no program scheduled for {0}")]
    UnsupportedDate(NaiveDate),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The transport could not complete the round-trip.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors raised while loading a `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid program date `{key}`: {source}")]
    InvalidDate {
        key: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("base_url must not be empty")]
    EmptyBaseUrl,
}
