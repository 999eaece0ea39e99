//! The `{ success, message, data, total }` wrapper every backend response uses.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use sabor_core::Page;

use crate::error::{ApiFailure, ErrorKind, OperationResult};

/// Server-provided message: a sentence, or NestJS validation output (a list).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Text(String),
    List(Vec<String>),
}

impl ServerMessage {
    /// Non-blank text of the message, list entries joined with `"; "`.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let text = match self {
            Self::Text(text) => text.trim().to_string(),
            Self::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        };
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<ServerMessage>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Envelope<T> {
    fn message_text(&self) -> Option<String> {
        self.message.as_ref().and_then(ServerMessage::text)
    }

    fn rejection(&self) -> Option<ApiFailure> {
        (!self.success).then(|| {
            ApiFailure::new(
                ErrorKind::Unknown,
                self.message_text().unwrap_or_default(),
            )
        })
    }

    /// Payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// `success: false` yields a failure with the envelope message; a missing
    /// payload yields [`ErrorKind::MalformedResponse`].
    pub fn into_data(self) -> OperationResult<T> {
        if let Some(failure) = self.rejection() {
            return Err(failure);
        }
        let message = self.message_text();
        self.data.ok_or_else(|| {
            ApiFailure::new(ErrorKind::MalformedResponse, message.unwrap_or_default())
        })
    }

    /// Only check `success`; the payload (if any) is dropped.
    ///
    /// # Errors
    ///
    /// `success: false` yields a failure with the envelope message.
    pub fn into_unit(self) -> OperationResult<()> {
        self.rejection().map_or(Ok(()), Err)
    }
}

impl<T> Envelope<Vec<T>> {
    /// List payload together with the envelope's `total`.
    ///
    /// # Errors
    ///
    /// Same as [`Envelope::into_data`].
    pub fn into_page(self) -> OperationResult<Page<T>> {
        let total = self.total;
        self.into_data().map(|items| Page::new(items, total))
    }
}

/// Decode a 2xx body as an envelope.
///
/// # Errors
///
/// Returns [`ErrorKind::MalformedResponse`] if the body is not a valid envelope
/// for `T`.
pub fn parse_envelope<T: DeserializeOwned>(body: &[u8]) -> OperationResult<Envelope<T>> {
    serde_json::from_slice(body).map_err(|error| {
        ApiFailure::from_kind(ErrorKind::MalformedResponse).with_cause(error)
    })
}

/// Error bodies: envelopes or NestJS exception filters (`{statusCode, message, error}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<ServerMessage>,
}

/// Message carried by a non-2xx body, if it has a usable one.
#[must_use]
pub fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .and_then(|message| message.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn success_with_data() {
        let env: Envelope<Item> =
            parse_envelope(br#"{"success":true,"data":{"id":7}}"#).expect("parse");
        assert_eq!(env.into_data().expect("data"), Item { id: 7 });
    }

    #[test]
    fn success_false_uses_envelope_message() {
        let env: Envelope<Item> =
            parse_envelope(br#"{"success":false,"message":"Stock insuficiente"}"#).expect("parse");
        let failure = env.into_data().unwrap_err();
        assert_eq!(failure.message(), "Stock insuficiente");
    }

    #[test]
    fn success_false_without_message_uses_fallback() {
        let env: Envelope<Item> = parse_envelope(br#"{"success":false}"#).expect("parse");
        let failure = env.into_data().unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::Unknown);
        assert_eq!(failure.message(), ErrorKind::Unknown.default_message());
    }

    #[test]
    fn null_data_is_malformed() {
        let env: Envelope<Item> =
            parse_envelope(br#"{"success":true,"data":null}"#).expect("parse");
        let failure = env.into_data().unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn unit_ignores_missing_data() {
        let env: Envelope<serde::de::IgnoredAny> =
            parse_envelope(br#"{"success":true,"message":"Eliminado"}"#).expect("parse");
        assert!(env.into_unit().is_ok());
    }

    #[test]
    fn page_uses_total_when_present() {
        let env: Envelope<Vec<Item>> =
            parse_envelope(br#"{"success":true,"data":[{"id":1},{"id":2}],"total":12}"#)
                .expect("parse");
        let page = env.into_page().expect("page");
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 12);
    }

    #[test]
    fn non_envelope_body_is_malformed() {
        let failure = parse_envelope::<Item>(b"<html>502</html>").unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::MalformedResponse);
        assert!(failure.cause().is_some());
    }

    #[test]
    fn error_message_reads_nest_validation_lists() {
        let body = br#"{"statusCode":400,"message":["email must be an email"," ","password too short"],"error":"Bad Request"}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("email must be an email; password too short")
        );
        assert_eq!(error_message(b"").as_deref(), None);
        assert_eq!(error_message(br#"{"message":"   "}"#).as_deref(), None);
    }
}
