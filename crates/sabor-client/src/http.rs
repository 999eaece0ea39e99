//! Request pipeline shared by every repository method.
//!
//! One call goes: build request → interceptor decorates → send → interceptor
//! observes status → status check → envelope decode. Transport errors, non-2xx
//! statuses and bad bodies all come out as [`ApiFailure`]; nothing is retried.

use reqwest::{Method, StatusCode, Url};
use sabor_auth::AuthInterceptor;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::SaborClient;
use crate::envelope::{Envelope, error_message, parse_envelope};
use crate::error::{
    ApiFailure, ErrorKind, GENERIC_IO_MESSAGE, INVALID_CREDENTIALS_MESSAGE, OperationResult,
};

impl SaborClient {
    /// Resolve an endpoint path (no leading slash) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> OperationResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|error| ApiFailure::from_kind(ErrorKind::ValidationFailed).with_cause(error))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> OperationResult<Envelope<T>> {
        self.exchange(Method::GET, path, None).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> OperationResult<Envelope<T>> {
        self.exchange(Method::DELETE, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> OperationResult<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.exchange(Method::POST, path, Some(to_json(body)?)).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> OperationResult<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.exchange(Method::PATCH, path, Some(to_json(body)?)).await
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> OperationResult<Envelope<T>> {
        let url = self.endpoint(path)?;
        let mut builder = self.http.request(method.clone(), url);
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        let request = builder.build().map_err(transport_failure)?;
        let request = self.interceptor.decorate(request);
        let request_path = request.url().path().to_owned();
        let sent_token = AuthInterceptor::attached_token(&request);

        tracing::debug!(%method, path = %request_path, "api request");
        let response = self.http.execute(request).await.map_err(|error| {
            let failure = transport_failure(error);
            tracing::warn!(%method, path = %request_path, kind = %failure.kind(), "api request failed");
            failure
        })?;

        let status = response.status();
        self.interceptor
            .observe(&request_path, status, sent_token.as_deref());
        let bytes = response.bytes().await.map_err(transport_failure)?;
        tracing::debug!(%method, path = %request_path, status = status.as_u16(), "api response");

        if !status.is_success() {
            let failure = status_failure(
                status,
                &bytes,
                self.interceptor.is_auth_endpoint(&request_path),
            );
            tracing::warn!(
                %method,
                path = %request_path,
                status = status.as_u16(),
                kind = %failure.kind(),
                "api call rejected"
            );
            return Err(failure);
        }

        parse_envelope(&bytes)
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> OperationResult<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|error| ApiFailure::from_kind(ErrorKind::ValidationFailed).with_cause(error))
}

/// Map a reqwest error to a failure. Timeouts are checked first because a
/// connect timeout reports both `is_timeout` and `is_connect`.
pub(crate) fn transport_failure(error: reqwest::Error) -> ApiFailure {
    let failure = if error.is_timeout() {
        ApiFailure::from_kind(ErrorKind::Timeout)
    } else if error.is_connect() {
        ApiFailure::from_kind(ErrorKind::NetworkUnreachable)
    } else if error.is_decode() {
        ApiFailure::from_kind(ErrorKind::MalformedResponse)
    } else {
        ApiFailure::new(ErrorKind::Unknown, GENERIC_IO_MESSAGE)
    };
    failure.with_cause(error)
}

/// Map a non-2xx response to a failure.
///
/// Client errors prefer the server's own message. Server errors and 401s on
/// protected endpoints always use the fixed wording: the former tend to carry
/// stack-trace text, the latter a bare "Unauthorized".
pub(crate) fn status_failure(status: StatusCode, body: &[u8], auth_endpoint: bool) -> ApiFailure {
    let kind = ErrorKind::from_status(status);
    let server_message = error_message(body);

    let message = match kind {
        ErrorKind::Unauthorized if auth_endpoint => {
            server_message.unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string())
        }
        ErrorKind::Unauthorized | ErrorKind::ServerError => kind.default_message().to_string(),
        _ => server_message.unwrap_or_else(|| kind.default_message().to_string()),
    };
    ApiFailure::new(kind, message).with_status(status)
}
