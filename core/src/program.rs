//! Day program lookup: date → program id → sessions sorted by start time.

use chrono::NaiveDate;

use crate::config::{ClientConfig, ProgramCalendar};
use crate::error::ApiError;
use crate::http::{decode_json, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{ProgramId, Session};

/// Fetches one conference day's sessions.
///
/// Holds only immutable configuration and the transport, so any number of
/// calls may run concurrently. `get_program` is lazy: no request is sent
/// until the returned future is polled, and dropping it abandons the call.
#[derive(Debug, Clone)]
pub struct ProgramService<T> {
    base_url: String,
    calendar: ProgramCalendar,
    transport: T,
}

impl<T: Transport> ProgramService<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            calendar: config.calendar.clone(),
            transport,
        }
    }

    pub fn program_id(&self, date: NaiveDate) -> Option<ProgramId> {
        self.calendar.program_id(date)
    }

    /// Fails with `UnsupportedDate` for days outside the calendar.
    pub fn build_get_program(&self, date: NaiveDate) -> Result<HttpRequest, ApiError> {
        let Some(program_id) = self.program_id(date) else {
            tracing::warn!(%date, "date has no program");
            return Err(ApiError::UnsupportedDate(date));
        };
        Ok(HttpRequest::get_json(format!(
            "{}/api/program/{program_id}",
            self.base_url
        )))
    }

    /// Sessions are ordered by `start_time` with a stable byte-wise string
    /// comparison (not locale-aware); equal start times keep server order.
    pub fn parse_get_program(&self, response: HttpResponse) -> Result<Vec<Session>, ApiError> {
        let mut sessions: Vec<Session> = decode_json(response)?;
        sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(sessions)
    }

    pub async fn get_program(&self, date: NaiveDate) -> Result<Vec<Session>, ApiError> {
        let request = self.build_get_program(date)?;
        tracing::debug!(%date, url = %request.url, "fetching program");
        let response = self.transport.execute(request).await?;
        let sessions = self.parse_get_program(response)?;
        tracing::debug!(%date, count = sessions.len(), "program loaded");
        Ok(sessions)
    }
}
