/// Field encoder: `EmailRequest` -> ordered multipart fields
use super::WirePart;
use super::metadata::merge_metadata;
use crate::constants::{
    DATE_FORMAT, FIELD_BCC, FIELD_BCC_NAME, FIELD_CC, FIELD_CC_NAME, FIELD_DATE, FIELD_FROM,
    FIELD_FROM_NAME, FIELD_HEADERS, FIELD_HTML, FIELD_REPLY_TO, FIELD_SMTPAPI, FIELD_SUBJECT,
    FIELD_TEXT, FIELD_TO, FIELD_TO_NAME, content_field, file_field,
};
use crate::models::{Attachment, Body, EmailAddress, EmailRequest, RecipientGroup};
use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Encodes a request into its multipart fields
///
/// Field groups always come out in the same order: recipients, subject,
/// body, sender, cc/bcc, sender name, reply-to, date, headers, files, inline
/// content, then `x-smtpapi`. Encoding never fails.
pub fn encode<C: Serialize>(request: &EmailRequest<C>) -> Vec<WirePart> {
    let mut parts = Vec::new();

    encode_recipients(&mut parts, FIELD_TO, FIELD_TO_NAME, &request.to);
    parts.push(WirePart::text(FIELD_SUBJECT, request.subject.as_str()));
    encode_body(&mut parts, &request.body);
    parts.push(address_part(FIELD_FROM, &request.sender));

    if let Some(cc) = &request.cc {
        encode_recipients(&mut parts, FIELD_CC, FIELD_CC_NAME, cc);
    }
    if let Some(bcc) = &request.bcc {
        encode_recipients(&mut parts, FIELD_BCC, FIELD_BCC_NAME, bcc);
    }

    if let Some(name) = &request.sender_name {
        parts.push(WirePart::text(FIELD_FROM_NAME, name.as_str()));
    }
    if let Some(reply_to) = &request.reply_to {
        parts.push(address_part(FIELD_REPLY_TO, reply_to));
    }
    if let Some(send_at) = &request.send_at {
        parts.push(WirePart::text(
            FIELD_DATE,
            send_at.format(DATE_FORMAT).to_string(),
        ));
    }

    if !request.custom_headers.is_empty() {
        parts.push(WirePart::text(
            FIELD_HEADERS,
            headers_json(&request.custom_headers),
        ));
    }

    for file in &request.attachments {
        parts.push(file_part(file));
    }
    for inline in &request.inline_content {
        parts.push(file_part(&inline.file));
        parts.push(WirePart::text(
            content_field(&inline.file.name),
            inline.content_id.as_str(),
        ));
    }

    let metadata = merge_metadata(
        request.template_id.as_deref(),
        request.categories.as_slice(),
        request.unsubscribe_group_id,
        &request.unsubscribe_group_ids_for_preference_page,
        request.custom_metadata.as_ref(),
    );
    if let Some(metadata) = metadata {
        // Display on a JSON Value is its compact serialization
        let json = Value::Object(metadata).to_string();
        parts.push(WirePart::bytes(FIELD_SMTPAPI, json.into_bytes()));
    }

    debug!(
        parts = parts.len(),
        recipients = request.recipient_count(),
        attachments = request.attachments.len(),
        inline = request.inline_content.len(),
        "Encoded email request"
    );

    parts
}

/// Named groups interleave address and name per entry; plain groups emit
/// addresses only
fn encode_recipients(
    parts: &mut Vec<WirePart>,
    email_key: &str,
    name_key: &str,
    group: &RecipientGroup,
) {
    match group {
        RecipientGroup::Named(entries) => {
            for entry in entries {
                parts.push(address_part(email_key, &entry.address));
                parts.push(WirePart::text(name_key, entry.display_name.as_str()));
            }
        }
        RecipientGroup::Plain(addresses) => {
            for address in addresses {
                parts.push(address_part(email_key, address));
            }
        }
    }
}

fn encode_body(parts: &mut Vec<WirePart>, body: &Body) {
    if let Some(html) = body.html_part() {
        parts.push(WirePart::bytes(
            FIELD_HTML,
            Bytes::copy_from_slice(html.as_bytes()),
        ));
    }
    if let Some(text) = body.text_part() {
        parts.push(WirePart::text(FIELD_TEXT, text));
    }
}

fn address_part(key: &str, address: &EmailAddress) -> WirePart {
    WirePart::bytes(key, Bytes::copy_from_slice(address.as_bytes()))
}

fn file_part(file: &Attachment) -> WirePart {
    WirePart::file(file_field(&file.name), file.name.as_str(), file.content.clone())
}

fn headers_json(headers: &[(String, String)]) -> String {
    let mut map = Map::new();
    for (name, value) in headers {
        map.insert(name.clone(), Value::String(value.clone()));
    }
    Value::Object(map).to_string()
}
