/// Outbound email request
use super::address::EmailAddress;
use super::attachment::{Attachment, InlineContent};
use super::body::Body;
use super::recipients::RecipientGroup;
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

/// One email-send intent, generic over the application's category label
///
/// Build it with [`EmailRequest::new`] or [`EmailRequest::single_recipient`]
/// and the `with_*` methods, then hand it to [`crate::encode`]. Every optional
/// field starts absent or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailRequest<C = String> {
    pub to: RecipientGroup,
    pub cc: Option<RecipientGroup>,
    pub bcc: Option<RecipientGroup>,
    pub sender: EmailAddress,
    pub sender_name: Option<String>,
    pub reply_to: Option<EmailAddress>,
    pub subject: String,
    pub body: Body,
    pub send_at: Option<DateTime<FixedOffset>>,
    pub attachments: Vec<Attachment>,
    pub inline_content: Vec<InlineContent>,
    /// Raw transport-level headers, serialized into the `headers` field
    pub custom_headers: Vec<(String, String)>,
    pub categories: Vec<C>,
    pub template_id: Option<String>,
    pub unsubscribe_group_id: Option<i64>,
    pub unsubscribe_group_ids_for_preference_page: Vec<i64>,
    /// Extra `x-smtpapi` keys; derived keys override these on collision
    pub custom_metadata: Option<Map<String, Value>>,
}

impl<C> EmailRequest<C> {
    pub fn new(
        to: RecipientGroup,
        subject: impl Into<String>,
        body: Body,
        sender: EmailAddress,
    ) -> Self {
        Self {
            to,
            cc: None,
            bcc: None,
            sender,
            sender_name: None,
            reply_to: None,
            subject: subject.into(),
            body,
            send_at: None,
            attachments: Vec::new(),
            inline_content: Vec::new(),
            custom_headers: Vec::new(),
            categories: Vec::new(),
            template_id: None,
            unsubscribe_group_id: None,
            unsubscribe_group_ids_for_preference_page: Vec::new(),
            custom_metadata: None,
        }
    }

    /// Request addressed to exactly one plain recipient
    pub fn single_recipient(
        to: EmailAddress,
        subject: impl Into<String>,
        body: Body,
        sender: EmailAddress,
    ) -> Self {
        Self::new(RecipientGroup::plain(to), subject, body, sender)
    }

    /// Replaces the `to` group
    pub fn with_to(mut self, to: RecipientGroup) -> Self {
        self.to = to;
        self
    }

    /// Sets or replaces the `cc` group
    pub fn with_cc(mut self, cc: RecipientGroup) -> Self {
        self.cc = Some(cc);
        self
    }

    /// Sets or replaces the `bcc` group
    pub fn with_bcc(mut self, bcc: RecipientGroup) -> Self {
        self.bcc = Some(bcc);
        self
    }

    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    pub fn with_reply_to(mut self, reply_to: EmailAddress) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    pub fn with_send_at(mut self, send_at: impl Into<DateTime<FixedOffset>>) -> Self {
        self.send_at = Some(send_at.into());
        self
    }

    pub fn with_attachment(mut self, file: Attachment) -> Self {
        self.attachments.push(file);
        self
    }

    pub fn with_inline_content(mut self, content: InlineContent) -> Self {
        self.inline_content.push(content);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    pub fn with_category(mut self, category: C) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = C>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn with_unsubscribe_group_id(mut self, group_id: i64) -> Self {
        self.unsubscribe_group_id = Some(group_id);
        self
    }

    pub fn with_unsubscribe_groups_for_preference_page(
        mut self,
        group_ids: impl IntoIterator<Item = i64>,
    ) -> Self {
        self.unsubscribe_group_ids_for_preference_page
            .extend(group_ids);
        self
    }

    pub fn with_custom_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.custom_metadata = Some(metadata);
        self
    }

    /// Number of distinct recipient slots across to, cc and bcc
    pub fn recipient_count(&self) -> usize {
        self.to.len()
            + self.cc.as_ref().map_or(0, RecipientGroup::len)
            + self.bcc.as_ref().map_or(0, RecipientGroup::len)
    }
}
