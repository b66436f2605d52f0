//! Batched speaker lookup.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{decode_json, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Speaker;

/// Fetches speaker profiles, all ids in one request.
///
/// The response keeps the server's order. There is no limit on the number
/// of ids, so a very large batch can exceed the server's URL length limit.
#[derive(Debug, Clone)]
pub struct SpeakerService<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> SpeakerService<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// An empty batch still builds a request, ending in `/api/users/`.
    pub fn build_get_speakers<S: AsRef<str>>(&self, ids: &[S]) -> HttpRequest {
        if ids.is_empty() {
            tracing::warn!("requesting an empty speaker batch");
        }
        let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        HttpRequest::get_json(format!("{}/api/users/{joined}", self.base_url))
    }

    pub fn parse_get_speakers(&self, response: HttpResponse) -> Result<Vec<Speaker>, ApiError> {
        decode_json(response)
    }

    pub async fn get_speakers<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Speaker>, ApiError> {
        let request = self.build_get_speakers(ids);
        tracing::debug!(requested = ids.len(), url = %request.url, "fetching speakers");
        let response = self.transport.execute(request).await?;
        let speakers = self.parse_get_speakers(response)?;
        tracing::debug!(count = speakers.len(), "speakers loaded");
        Ok(speakers)
    }
}
