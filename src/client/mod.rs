//! Client layer: orchestrates transport calls and maps wire ↔ domain.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    AccessToken, ApiResult, ApiStatus, ApprovalRequest, ApprovalResult, ApprovalUpdateRequest,
    BuildRequest, MessageId, MessageStatus, Msisdn, NewMessageRequest, NewMessageResult,
    ResendMessageRequest, ScrubResult, ValidationError,
};
use crate::transport::{self, Classified};

/// Total request timeout applied unless overridden through the builder.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const UNMARSHAL_DESCRIPTION: &str = "Unable to unmarshal result from API";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug, Clone)]
struct TransportFailure {
    /// Partial status code when one was observed, 0 otherwise.
    status: u16,
    message: String,
}

impl TransportFailure {
    fn from_reqwest(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|status| status.as_u16()).unwrap_or(0),
            message: err.to_string(),
        }
    }
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        body: Option<&'a str>,
        token: &'a AccessToken,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        body: Option<&'a str>,
        token: &'a AccessToken,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut request = self
                .client
                .request(method, url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .bearer_auth(token.as_str());
            if let Some(body) = body {
                request = request.body(body.to_owned());
            }

            let response = request.send().await.map_err(TransportFailure::from_reqwest)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|err| TransportFailure {
                status,
                message: err.to_string(),
            })?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MessagingClient`].
///
/// These are the hard failures raised before any network call. Everything
/// that happens after the request is sent (transport failures, protocol
/// errors, undecodable success bodies) is normalized into
/// [`ApiResult::status`] instead, so callers have one place to check the
/// outcome.
pub enum MessagingError {
    /// Invalid endpoint or route at construction; no request was attempted.
    #[error("configuration error: {0}")]
    Configuration(#[source] ValidationError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A request body could not be serialized.
    #[error("request encoding error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The underlying HTTP client could not be built.
    #[error("http client error: {0}")]
    Http(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
/// Builder for [`MessagingClient`].
///
/// Use this when you need to customize the timeout or user-agent.
pub struct MessagingClientBuilder {
    endpoint: String,
    token: AccessToken,
    timeout: Duration,
    user_agent: Option<String>,
}

impl MessagingClientBuilder {
    /// Create a builder with the default timeout and no user-agent override.
    pub fn new(endpoint: impl Into<String>, token: AccessToken) -> Self {
        Self {
            endpoint: endpoint.into(),
            token,
            timeout: REQUEST_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the total HTTP timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MessagingClient`].
    pub fn build(self) -> Result<MessagingClient, MessagingError> {
        let endpoint = normalize_endpoint(&self.endpoint)?;

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(MessagingError::Http)?;

        Ok(MessagingClient {
            endpoint,
            token: self.token,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Messaging API client.
///
/// One HTTP call per operation: requests authenticate with a bearer token,
/// bodies are JSON, and every response is mapped onto [`ApiResult`]. The
/// library never retries; callers own backoff around
/// [`ApiStatus::RateLimited`] and gateway errors.
pub struct MessagingClient {
    endpoint: Url,
    token: AccessToken,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for MessagingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessagingClient")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl MessagingClient {
    /// Create a client for the given endpoint with default settings.
    ///
    /// For more customization, use [`MessagingClient::builder`].
    pub fn new(
        endpoint: impl Into<String>,
        token: AccessToken,
    ) -> Result<Self, MessagingError> {
        Self::builder(endpoint, token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(endpoint: impl Into<String>, token: AccessToken) -> MessagingClientBuilder {
        MessagingClientBuilder::new(endpoint, token)
    }

    /// Check authentication with a simple GET against `ping`.
    ///
    /// The ping route checks the access token, so this is the easiest way to
    /// verify the client is configured correctly.
    pub async fn ping(&self) -> Result<ApiResult<()>, MessagingError> {
        let classified = self.call(Method::GET, "ping", None).await?;
        Ok(match classified {
            Classified::Success { .. } => ApiResult::ok_empty(),
            Classified::Failure {
                status,
                description,
            } => ApiResult::failure(status, description),
        })
    }

    /// Submit a new message via `message/send`.
    pub async fn create(
        &self,
        request: &NewMessageRequest,
    ) -> Result<ApiResult<NewMessageResult>, MessagingError> {
        let body = transport::encode_new_message(request).map_err(MessagingError::Encode)?;
        let classified = self.call(Method::POST, "message/send", Some(body)).await?;
        Ok(decode_result(classified))
    }

    /// Resubmit an already-created message via `message/resend`.
    pub async fn resend(
        &self,
        request: &ResendMessageRequest,
    ) -> Result<ApiResult<NewMessageResult>, MessagingError> {
        let body = transport::encode_resend(request).map_err(MessagingError::Encode)?;
        let classified = self
            .call(Method::POST, "message/resend", Some(body))
            .await?;
        Ok(decode_result(classified))
    }

    /// Render a template and run its after-build action via `generate/video`.
    pub async fn generate(
        &self,
        request: &BuildRequest,
    ) -> Result<ApiResult<NewMessageResult>, MessagingError> {
        let body = transport::encode_build_request(request).map_err(MessagingError::Encode)?;
        let classified = self
            .call(Method::POST, "generate/video", Some(body))
            .await?;
        Ok(decode_result(classified))
    }

    /// Create an approval batch via `approval/create`.
    pub async fn create_approval(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApiResult<ApprovalResult>, MessagingError> {
        let body = transport::encode_approval_request(request).map_err(MessagingError::Encode)?;
        let classified = self
            .call(Method::POST, "approval/create", Some(body))
            .await?;
        Ok(decode_result(classified))
    }

    /// Move an approval batch to a new state via `approval/update`.
    pub async fn update_approval(
        &self,
        request: &ApprovalUpdateRequest,
    ) -> Result<ApiResult<ApprovalResult>, MessagingError> {
        let body = transport::encode_approval_update(request).map_err(MessagingError::Encode)?;
        let classified = self.call(Method::PUT, "approval/update", Some(body)).await?;
        Ok(decode_result(classified))
    }

    /// Look up the lifecycle status of a message.
    pub async fn message_status(
        &self,
        message_id: &MessageId,
    ) -> Result<ApiResult<MessageStatus>, MessagingError> {
        let route = format!("message/{}/status", message_id.as_str());
        let classified = self.call(Method::GET, &route, None).await?;
        Ok(decode_result(classified))
    }

    /// Look up handset information for an MSISDN.
    pub async fn msisdn_scrub(
        &self,
        msisdn: &Msisdn,
    ) -> Result<ApiResult<ScrubResult>, MessagingError> {
        let route = format!("scrub/{}", msisdn.as_str());
        let classified = self.call(Method::GET, &route, None).await?;
        Ok(decode_result(classified))
    }

    async fn call(
        &self,
        method: Method,
        route: &str,
        body: Option<String>,
    ) -> Result<Classified, MessagingError> {
        let url = self.endpoint.join(route).map_err(|_| {
            MessagingError::Configuration(ValidationError::InvalidUrl {
                field: "route",
                input: route.to_owned(),
            })
        })?;

        debug!(%method, route, "dispatching API request");
        match self
            .http
            .execute(method, url.as_str(), body.as_deref(), &self.token)
            .await
        {
            Ok(response) => Ok(transport::classify_response(response.status, response.body)),
            Err(failure) => {
                warn!(status = failure.status, "transport failure: {}", failure.message);
                Ok(transport::classify_transport_failure(
                    failure.status,
                    failure.message,
                ))
            }
        }
    }
}

fn decode_result<T: serde::de::DeserializeOwned>(classified: Classified) -> ApiResult<T> {
    match classified {
        Classified::Failure {
            status,
            description,
        } => ApiResult::failure(status, description),
        Classified::Success { body } => match serde_json::from_str(&body) {
            Ok(data) => ApiResult::ok(data),
            // A 200 with an unexpected body is reported through the status
            // field only; the HTTP-level success stays observable.
            Err(_) => ApiResult::failure(ApiStatus::Error, UNMARSHAL_DESCRIPTION),
        },
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<Url, MessagingError> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(MessagingError::Configuration(ValidationError::Empty {
            field: "endpoint",
        }));
    }
    // Routes are joined onto the endpoint, so the path must end with a slash
    // or Url::join would replace the last segment.
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&normalized).map_err(|_| {
        MessagingError::Configuration(ValidationError::InvalidUrl {
            field: "endpoint",
            input: endpoint.to_owned(),
        })
    })
}
