//! Common request fixtures for integration tests
#![allow(dead_code)]

use gridmail_core::{Body, EmailAddress, EmailRequest, NamedAddress, RecipientGroup};

pub fn address(s: &str) -> EmailAddress {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test address {}: {}", s, e))
}

/// `count` plain recipients `user0@example.com`, `user1@example.com`, ...
pub fn plain_group(count: usize) -> RecipientGroup {
    RecipientGroup::from_plain(
        (0..count)
            .map(|i| address(&format!("user{}@example.com", i)))
            .collect(),
    )
    .expect("count must be > 0")
}

/// `count` named recipients with display names `User 0`, `User 1`, ...
pub fn named_group(count: usize) -> RecipientGroup {
    RecipientGroup::from_named(
        (0..count)
            .map(|i| {
                NamedAddress::new(
                    address(&format!("user{}@example.com", i)),
                    format!("User {}", i),
                )
            })
            .collect(),
    )
    .expect("count must be > 0")
}

pub fn simple_request(to: RecipientGroup) -> EmailRequest {
    EmailRequest::new(
        to,
        "Your receipt",
        Body::both("<p>Thanks for your order</p>", "Thanks for your order"),
        address("billing@acme.com"),
    )
}
