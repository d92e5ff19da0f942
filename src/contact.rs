//! Contact form submission: one attempt through the form relay, then a
//! pre-filled `mailto:` link if that fails.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Characters `encodeURIComponent` leaves alone, so links match what mail
/// clients already expect from browser-built URLs.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("all fields are required")]
    Incomplete,
    #[error("form relay rejected the message with status {0}")]
    Rejected(u16),
    #[error("couldn't reach the form relay: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Mirrors the inputs' `required` attributes.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|f| !f.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// JSON body posted to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "_captcha")]
    pub captcha: bool,
}

impl From<&ContactForm> for ContactPayload {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message.clone(),
            captcha: false,
        }
    }
}

/// A `mailto:` URL with percent-encoded subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink(String);

impl MailtoLink {
    pub fn compose(recipient: &str, payload: &ContactPayload) -> Self {
        let body = format!(
            "From: {} ({})\n\nMessage:\n{}",
            payload.name, payload.email, payload.message
        );
        Self(format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(&payload.subject),
            encode_component(&body)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn query_value(&self, key: &str) -> Option<String> {
        let query = self.0.split_once('?')?.1;
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            if k != key {
                return None;
            }
            percent_encoding::percent_decode_str(v)
                .decode_utf8()
                .ok()
                .map(|s| s.into_owned())
        })
    }

    pub fn subject(&self) -> Option<String> {
        self.query_value("subject")
    }

    pub fn body(&self) -> Option<String> {
        self.query_value("body")
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Third-party endpoint that turns a JSON payload into an email.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), ContactError>;
}

/// Hands a `mailto:` link to the visitor's mail client.
pub trait MailComposer {
    fn open(&self, link: &MailtoLink);
}

#[derive(Debug, Clone)]
pub struct HttpFormRelay {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormRelay {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl FormRelay for HttpFormRelay {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(status.as_u16()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// The relay failed and the visitor's mail client was opened instead.
    ComposedMail(MailtoLink),
}

pub struct ContactSubmitter<R, M> {
    relay: R,
    composer: M,
    recipient: String,
}

impl<R: FormRelay, M: MailComposer> ContactSubmitter<R, M> {
    pub fn new(relay: R, composer: M, recipient: impl Into<String>) -> Self {
        Self {
            relay,
            composer,
            recipient: recipient.into(),
        }
    }

    /// Sends `form`, falling back to a `mailto:` link on any relay error.
    /// The form is cleared whenever something was sent or composed.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<SubmitOutcome, ContactError> {
        if !form.is_complete() {
            return Err(ContactError::Incomplete);
        }
        let payload = ContactPayload::from(&*form);
        let outcome = match self.relay.deliver(&payload).await {
            Ok(()) => {
                log::debug!("contact message relayed");
                SubmitOutcome::Sent
            }
            Err(err) => {
                log::warn!("{err}; opening mail client instead");
                let link = MailtoLink::compose(&self.recipient, &payload);
                self.composer.open(&link);
                SubmitOutcome::ComposedMail(link)
            }
        };
        form.clear();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct StaticRelay {
        result: Result<(), ContactError>,
        calls: Arc<Mutex<Vec<ContactPayload>>>,
    }

    impl FormRelay for StaticRelay {
        async fn deliver(&self, payload: &ContactPayload) -> Result<(), ContactError> {
            self.calls.lock().unwrap().push(payload.clone());
            self.result.clone()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingComposer(Arc<Mutex<Vec<MailtoLink>>>);

    impl MailComposer for RecordingComposer {
        fn open(&self, link: &MailtoLink) {
            self.0.lock().unwrap().push(link.clone());
        }
    }

    fn jane() -> ContactForm {
        ContactForm::new("Jane", "jane@x.com", "Hi", "Test")
    }

    fn submitter(
        result: Result<(), ContactError>,
    ) -> (
        ContactSubmitter<StaticRelay, RecordingComposer>,
        Arc<Mutex<Vec<ContactPayload>>>,
        RecordingComposer,
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let composer = RecordingComposer::default();
        let relay = StaticRelay {
            result,
            calls: calls.clone(),
        };
        (
            ContactSubmitter::new(relay, composer.clone(), "owner@example.com"),
            calls,
            composer,
        )
    }

    #[test]
    fn test_encode_matches_uri_component() {
        assert_eq!(encode_component("Hi there"), "Hi%20there");
        assert_eq!(encode_component("a&b=c?"), "a%26b%3Dc%3F");
        assert_eq!(encode_component("it's (ok)!*~._-"), "it's%20(ok)!*~._-");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("👋"), "%F0%9F%91%8B");
    }

    #[test]
    fn test_payload_serializes_captcha_flag() {
        let payload = ContactPayload::from(&jane());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Jane");
        assert_eq!(json["_captcha"], false);
        assert!(json.get("captcha").is_none());
    }

    #[test]
    fn test_mailto_layout() {
        let link = MailtoLink::compose("owner@example.com", &ContactPayload::from(&jane()));
        assert!(link.as_str().starts_with("mailto:owner@example.com?subject=Hi&body="));
        assert_eq!(link.subject().as_deref(), Some("Hi"));
        assert_eq!(
            link.body().as_deref(),
            Some("From: Jane (jane@x.com)\n\nMessage:\nTest")
        );
    }

    #[test]
    fn test_form_completeness() {
        assert!(jane().is_complete());
        let mut form = jane();
        form.subject = "  ".to_string();
        assert!(form.is_complete());
        form.subject.clear();
        assert!(!form.is_complete());
        form.clear();
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_subject_still_reaches_relay() {
        let (submitter, calls, composer) = submitter(Err(ContactError::Rejected(500)));
        let mut form = jane();
        form.subject = "  ".to_string();
        let outcome = submitter.submit(&mut form).await.unwrap();

        assert_eq!(calls.lock().unwrap().len(), 1);
        let links = composer.0.lock().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(outcome, SubmitOutcome::ComposedMail(links[0].clone()));
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_relay_composes_one_mailto() {
        let (submitter, calls, composer) = submitter(Err(ContactError::Rejected(500)));
        let mut form = jane();
        let outcome = submitter.submit(&mut form).await.unwrap();

        assert_eq!(calls.lock().unwrap().len(), 1);
        let links = composer.0.lock().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(outcome, SubmitOutcome::ComposedMail(links[0].clone()));
        assert!(links[0].as_str().contains("subject=Hi&"));
        let body = links[0].body().unwrap();
        assert!(body.contains("Jane"));
        assert!(body.contains("Test"));
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_also_falls_back() {
        let (submitter, _, composer) =
            submitter(Err(ContactError::Transport("offline".to_string())));
        let mut form = jane();
        let outcome = submitter.submit(&mut form).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::ComposedMail(_)));
        assert_eq!(composer.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_success_sends_without_mailto() {
        let (submitter, calls, composer) = submitter(Ok(()));
        let mut form = jane();
        let outcome = submitter.submit(&mut form).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(calls.lock().unwrap()[0].subject, "Hi");
        assert!(composer.0.lock().unwrap().is_empty());
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let (submitter, calls, composer) = submitter(Ok(()));
        let mut form = jane();
        form.message.clear();
        let err = submitter.submit(&mut form).await.unwrap_err();
        assert_eq!(err, ContactError::Incomplete);
        assert!(calls.lock().unwrap().is_empty());
        assert!(composer.0.lock().unwrap().is_empty());
        assert_eq!(form.subject, "Hi");
    }
}
