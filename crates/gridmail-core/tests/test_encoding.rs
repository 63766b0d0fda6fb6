/// Encoding properties of the multipart field encoder
#[path = "common/mod.rs"]
mod common;

use gridmail_core::{
    Attachment, Body, EmailRequest, InlineContent, PartValue, RecipientGroup, WirePart, encode,
};
use serde_json::{Map, Value, json};

fn count_named(parts: &[WirePart], name: &str) -> usize {
    parts.iter().filter(|p| p.name == name).count()
}

#[test]
fn named_group_emits_two_parts_per_recipient() {
    for n in 1..=5 {
        let parts = encode(&common::simple_request(common::named_group(n)));
        let to_parts: Vec<&WirePart> = parts
            .iter()
            .filter(|p| p.name == "to[]" || p.name == "toname[]")
            .collect();

        assert_eq!(to_parts.len(), 2 * n);
        for (i, pair) in to_parts.chunks(2).enumerate() {
            assert_eq!(pair[0].name, "to[]");
            assert_eq!(pair[0].as_bytes(), format!("user{}@example.com", i).as_bytes());
            assert_eq!(pair[1].name, "toname[]");
            assert_eq!(pair[1].as_text(), Some(format!("User {}", i).as_str()));
        }
    }
}

#[test]
fn plain_group_never_emits_name_parts() {
    for n in 1..=5 {
        let parts = encode(&common::simple_request(common::plain_group(n)));
        assert_eq!(count_named(&parts, "to[]"), n);
        assert_eq!(count_named(&parts, "toname[]"), 0);
    }
}

#[test]
fn cc_and_bcc_follow_group_rules() {
    let request = common::simple_request(common::plain_group(1))
        .with_cc(common::named_group(2))
        .with_bcc(common::plain_group(3));
    let parts = encode(&request);

    assert_eq!(count_named(&parts, "cc[]"), 2);
    assert_eq!(count_named(&parts, "ccname[]"), 2);
    assert_eq!(count_named(&parts, "bcc[]"), 3);
    assert_eq!(count_named(&parts, "bccname[]"), 0);
}

#[test]
fn body_variants_emit_expected_parts() {
    let cases = [
        (Body::html("<p>x</p>"), vec!["html"]),
        (Body::text("x"), vec!["text"]),
        (Body::both("<p>x</p>", "x"), vec!["html", "text"]),
    ];

    for (body, expected) in cases {
        let request: EmailRequest = EmailRequest::single_recipient(
            common::address("to@example.com"),
            "Subject",
            body,
            common::address("from@example.com"),
        );
        let parts = encode(&request);
        let body_names: Vec<&str> = parts
            .iter()
            .map(|p| p.name.as_str())
            .filter(|n| *n == "html" || *n == "text")
            .collect();
        assert_eq!(body_names, expected);
    }
}

#[test]
fn attachment_round_trip() {
    let request = common::simple_request(common::plain_group(1))
        .with_attachment(Attachment::new("fileName.txt", "Attachment"));
    let parts = encode(&request);

    let file = parts
        .iter()
        .find(|p| p.name == "files[fileName.txt]")
        .expect("file part present");
    match &file.value {
        PartValue::File { filename, content } => {
            assert_eq!(filename, "fileName.txt");
            assert_eq!(&content[..], b"Attachment");
        }
        other => panic!("expected file part, got {:?}", other),
    }
}

#[test]
fn inline_content_follows_its_file() {
    let request = common::simple_request(common::plain_group(1)).with_inline_content(
        InlineContent::new(Attachment::new("banner.gif", vec![0x47u8, 0x49, 0x46]), "banner"),
    );
    let parts = encode(&request);

    let pos = parts
        .iter()
        .position(|p| p.name == "files[banner.gif]")
        .expect("inline file part present");
    assert_eq!(parts[pos + 1].name, "content[banner.gif]");
    assert_eq!(parts[pos + 1].as_text(), Some("banner"));
}

#[test]
fn metadata_precedence_on_the_wire() {
    let mut custom = Map::new();
    custom.insert("category".to_string(), json!(["x"]));
    custom.insert("unique_args".to_string(), json!({"customer": "42"}));

    let request = common::simple_request(common::plain_group(1))
        .with_categories(["a".to_string(), "b".to_string()])
        .with_template_id("d-welcome")
        .with_unsubscribe_group_id(10)
        .with_unsubscribe_groups_for_preference_page([10, 11])
        .with_custom_metadata(custom);

    let parts = encode(&request);
    let smtpapi = parts.last().expect("parts not empty");
    assert_eq!(smtpapi.name, "x-smtpapi");

    let parsed: Value = serde_json::from_slice(smtpapi.as_bytes()).expect("valid JSON");
    assert_eq!(
        parsed,
        json!({
            "filters": {"templates": {"settings": {"template_id": "d-welcome", "enable": 1}}},
            "category": ["a", "b"],
            "asm_group_id": 10,
            "asm_groups_to_display": [10, 11],
            "unique_args": {"customer": "42"}
        })
    );
}

#[test]
fn no_metadata_means_no_smtpapi_field() {
    let parts = encode(&common::simple_request(common::plain_group(1)));
    assert_eq!(count_named(&parts, "x-smtpapi"), 0);
}

#[test]
fn custom_category_types_serialize() {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Category {
        PasswordReset,
        Security,
    }

    let request = EmailRequest::single_recipient(
        common::address("to@example.com"),
        "Reset your password",
        Body::text("Follow the link"),
        common::address("security@acme.com"),
    )
    .with_categories([Category::PasswordReset, Category::Security]);

    let parts = encode(&request);
    let parsed: Value = serde_json::from_slice(parts.last().unwrap().as_bytes()).unwrap();
    assert_eq!(parsed["category"], json!(["password_reset", "security"]));
}

#[test]
fn encoding_is_idempotent() {
    let request = common::simple_request(common::named_group(2))
        .with_cc(common::plain_group(1))
        .with_sender_name("Acme Billing")
        .with_header("X-Campaign", "spring")
        .with_attachment(Attachment::new("invoice.pdf", "%PDF-1.7"))
        .with_category("billing".to_string());

    assert_eq!(encode(&request), encode(&request));
}

#[test]
fn recipient_group_replacement_is_explicit() {
    let request = common::simple_request(common::named_group(2));
    let replaced = request.clone().with_to(RecipientGroup::plain(common::address("only@example.com")));

    let parts = encode(&replaced);
    assert_eq!(count_named(&parts, "to[]"), 1);
    assert_eq!(count_named(&parts, "toname[]"), 0);

    let demoted = request.clone().with_to(request.to.clone().into_plain());
    let parts = encode(&demoted);
    assert_eq!(count_named(&parts, "to[]"), 2);
    assert_eq!(count_named(&parts, "toname[]"), 0);
}
