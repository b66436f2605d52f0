//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! Services are generic over `Transport` so tests can swap in a fake and
//! hosts can bring their own HTTP stack. Non-2xx responses come back as
//! data; only connection-level failures are `Err`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request).await
    }
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use ureq::config::ConfigBuilder;
    use ureq::typestate::AgentScope;

    use super::*;

    /// `ureq` agent driven from a tokio blocking thread.
    ///
    /// `execute` must be polled inside a tokio runtime; anywhere else it
    /// returns `ApiError::Transport` without sending anything.
    ///
    /// Dropping the future returned by `execute` abandons the request, but
    /// the blocking worker still runs it to completion and discards the
    /// result. No timeout is set here; ureq's defaults apply.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            Self::with_config(ureq::Agent::config_builder())
        }

        /// Agent built from `config`. `http_status_as_error` is always
        /// turned off; status interpretation belongs to the services.
        pub fn with_config(config: ConfigBuilder<AgentScope>) -> Self {
            let agent = config.http_status_as_error(false).build().new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    fn call(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call().map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    #[async_trait]
    impl Transport for UreqTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let runtime = tokio::runtime::Handle::try_current()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let agent = self.agent.clone();
            runtime
                .spawn_blocking(move || call(&agent, request))
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?
        }
    }

}
