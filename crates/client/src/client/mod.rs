//! Opsgenie REST API façade and its generic invoker.
//!
//! This module provides [`ApiFacade`], one typed method per remote operation.
//! Every method funnels through a single invoker that shapes the request from
//! the route table, sends it, records the exchange in the activity log, and
//! parses the reply.
//!
//! # Submodules
//! - [`builder`]: Façade construction and configuration
//! - `account`: Account info
//! - `alerts`: Alert reads and mutations
//! - `schedules`: Schedules and on-call lookups
//!
//! # What this module does NOT handle:
//! - Route and parameter shaping (see [`crate::operation`])
//! - Swapping the façade after a configuration change (see [`crate::manager`])
//!
//! # Invariants
//! - Façade methods never panic and never return a transport error directly:
//!   every failure is logged and handed back as an [`Absence`].
//! - The activity log sees the call name and parameters before the request is
//!   sent, and status plus body after the reply is read.

pub mod builder;

mod account;
mod alerts;
mod schedules;

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tygenie_config::constants::API_KEY_PREFIX;
use url::Url;

use crate::activity::ActivityLogger;
use crate::error::{Absence, ApiResult, ClientError, Result};
use crate::models::ErrorBody;
use crate::operation::Operation;

/// Opsgenie REST API façade.
///
/// # Creating a Façade
///
/// ```rust,ignore
/// use tygenie_client::ApiFacade;
///
/// let api = ApiFacade::builder()
///     .host("https://api.opsgenie.com")
///     .api_key(SecretString::new("key".to_string().into()))
///     .username("jdoe")
///     .build()?;
///
/// let alerts = api.list_alerts(&Default::default()).await.ok();
/// ```
pub struct ApiFacade {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) username: String,
    pub(crate) source: String,
    pub(crate) timeout: Duration,
    pub(crate) logger: ActivityLogger,
}

impl std::fmt::Debug for ApiFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiFacade")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("source", &self.source)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiFacade {
    /// Create a new façade builder.
    pub fn builder() -> builder::ApiFacadeBuilder {
        builder::ApiFacadeBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// User attached to mutating calls.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Audit source attached to mutating calls.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Activity logger shared with the rest of the client.
    pub fn logger(&self) -> &ActivityLogger {
        &self.logger
    }

    /// Run one operation and parse its reply as `T`.
    ///
    /// Failures are logged as `Exception in API call: <error>` and returned
    /// as an [`Absence`] naming the operation.
    pub(crate) async fn invoke<T: DeserializeOwned>(&self, operation: Operation) -> ApiResult<T> {
        let kind = operation.kind();
        self.execute(&operation).await.map_err(|e| {
            self.logger.log(&format!("Exception in API call: {e}"));
            tracing::debug!(operation = %kind, error = %e, "API call failed");
            Absence::new(kind, e)
        })
    }

    async fn execute<T: DeserializeOwned>(&self, operation: &Operation) -> Result<T> {
        let route = operation.route();
        self.logger.log(&format!(
            "API call {} with params {}",
            route.name,
            operation.describe()
        ));

        let url = self.url_for(operation)?;
        let mut request = self
            .http
            .request(route.method.as_reqwest(), url)
            .header(
                AUTHORIZATION,
                format!("{} {}", API_KEY_PREFIX, self.api_key.expose_secret()),
            )
            .query(&operation.query_pairs());

        let body = operation
            .body()
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let url = response.url().to_string();
        let content = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.logger.log(&format!("API status code: {}", status.as_u16()));
        self.logger.log(&format!("API content: {content}"));
        self.logger.log(&format!("API call {} done", route.name));

        if !status.is_success() {
            let (message, request_id) = match serde_json::from_str::<ErrorBody>(&content) {
                Ok(body) if !body.message.is_empty() => (body.message, body.request_id),
                _ => (content, None),
            };
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                url,
                message,
                request_id,
            });
        }

        serde_json::from_str(&content).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Build the request URL, percent-encoding the identifier segment.
    fn url_for(&self, operation: &Operation) -> Result<Url> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("host is empty".to_string()));
        }
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot be a base URL", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in operation.path_segments() {
                segments.push(&segment);
            }
        }
        Ok(url)
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::HttpError(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertRef;

    fn facade(host: &str) -> ApiFacade {
        ApiFacade::builder().host(host).build().unwrap()
    }

    #[test]
    fn test_url_for_encodes_identifier() {
        let api = facade("https://api.opsgenie.com");
        let url = api
            .url_for(&Operation::GetAlert(AlertRef::alias("db/primary down")))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.opsgenie.com/v2/alerts/db%2Fprimary%20down"
        );
    }

    #[test]
    fn test_url_for_keeps_host_prefix_path() {
        let api = facade("http://127.0.0.1:8080/proxy/");
        let url = api.url_for(&Operation::ListSchedules).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/v2/schedules");
    }

    #[test]
    fn test_url_for_rejects_empty_host() {
        let api = facade("");
        let err = api.url_for(&Operation::GetAccountInfo).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_invoke_on_unconfigured_host_is_absence() {
        let api = facade("");
        let result: ApiResult<serde_json::Value> = api.invoke(Operation::ListSchedules).await;
        let absence = result.unwrap_err();
        assert_eq!(absence.operation, crate::operation::OperationKind::ListSchedules);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let api = ApiFacade::builder()
            .host("https://api.opsgenie.com")
            .api_key(SecretString::new("super-secret".to_string().into()))
            .build()
            .unwrap();
        assert!(!format!("{api:?}").contains("super-secret"));
    }
}
