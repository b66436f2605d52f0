//! Async client for the DrupalDevDays schedule API.
//!
//! # Overview
//! `ProgramService` resolves a conference day to its program id and returns
//! that day's sessions sorted by start time. `SpeakerService` fetches speaker
//! profiles for a batch of ids in a single request. Both are stateless.
//!
//! # Design
//! - Every operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`); `get_*` chains the two through
//!   a `Transport`.
//! - `get_*` futures are lazy and abandon the call when dropped.
//! - The date → program table is injected through `ClientConfig`; a day
//!   outside it fails with `ApiError::UnsupportedDate` before any I/O.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod config;
pub mod error;
pub mod http;
pub mod program;
pub mod speaker;
pub mod transport;
pub mod types;

pub use config::{ClientConfig, ProgramCalendar};
pub use error::{ApiError, ConfigError};
pub use http::{HttpRequest, HttpResponse};
pub use program::ProgramService;
pub use speaker::SpeakerService;
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{ProgramId, Session, Speaker};
