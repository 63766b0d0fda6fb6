//! Common helpers for client integration tests
#![allow(dead_code)]

use gridmail_client::{Attachment, Body, ClientConfig, EmailAddress, EmailRequest, RecipientGroup};
use wiremock::MockServer;

pub const API_KEY: &str = "SG.integration-test";
pub const SEND_PATH: &str = "/api/mail.send.json";

pub fn address(s: &str) -> EmailAddress {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test address {}: {}", s, e))
}

/// Config pointing at the mock server's mail-send path
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .api_key(API_KEY)
        .endpoint(format!("{}{}", server.uri(), SEND_PATH))
        .timeout_secs(5)
        .build()
}

pub fn receipt_request() -> EmailRequest {
    EmailRequest::new(
        RecipientGroup::from_plain(vec![
            address("alice@example.com"),
            address("bob@example.com"),
        ])
        .expect("two recipients"),
        "Your receipt",
        Body::both("<p>Thanks!</p>", "Thanks!"),
        address("billing@acme.com"),
    )
    .with_sender_name("Acme Billing")
    .with_attachment(Attachment::new("receipt.pdf", "%PDF-1.7 receipt"))
    .with_category("receipts".to_string())
}
