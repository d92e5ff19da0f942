use std::sync::{Arc, Mutex};

use portfolio_site::contact::{
    ContactForm, ContactSubmitter, HttpFormRelay, MailComposer, MailtoLink, SubmitOutcome,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[derive(Clone, Default)]
struct RecordingComposer(Arc<Mutex<Vec<MailtoLink>>>);

impl MailComposer for RecordingComposer {
    fn open(&self, link: &MailtoLink) {
        self.0.lock().unwrap().push(link.clone());
    }
}

fn relay_for(server: &MockServer) -> HttpFormRelay {
    let endpoint = Url::parse(&format!("{}/ajax/owner@example.com", server.uri())).unwrap();
    HttpFormRelay::new(endpoint)
}

fn sample_form() -> ContactForm {
    ContactForm::new("Jane", "jane@x.com", "Hi", "Test")
}

#[tokio::test]
async fn accepted_message_is_sent_as_json() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ajax/owner@example.com"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "name": "Jane",
            "email": "jane@x.com",
            "subject": "Hi",
            "message": "Test",
            "_captcha": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": "true" })))
        .expect(1)
        .mount(&server)
        .await;

    let composer = RecordingComposer::default();
    let submitter = ContactSubmitter::new(relay_for(&server), composer.clone(), "owner@example.com");
    let mut form = sample_form();

    let outcome = submitter.submit(&mut form).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert!(composer.0.lock().unwrap().is_empty());
    assert!(form.is_empty());
}

#[tokio::test]
async fn rejected_message_opens_mail_client_once() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let composer = RecordingComposer::default();
    let submitter = ContactSubmitter::new(relay_for(&server), composer.clone(), "owner@example.com");
    let mut form = sample_form();

    let outcome = submitter.submit(&mut form).await.unwrap();

    let opened = composer.0.lock().unwrap().clone();
    assert_eq!(opened.len(), 1);
    assert_eq!(outcome, SubmitOutcome::ComposedMail(opened[0].clone()));
    assert!(opened[0].as_str().starts_with("mailto:owner@example.com?subject=Hi&body="));
    assert_eq!(
        opened[0].body().as_deref(),
        Some("From: Jane (jane@x.com)\n\nMessage:\nTest")
    );
    assert!(form.is_empty());
}
