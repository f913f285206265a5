//! WhatsApp deep links
//!
//! Links have the form `https://wa.me/<number>?text=<prefilled message>`.
//! The message is percent-encoded as a URI component (spaces become `%20`,
//! never `+`) so line breaks, punctuation and non-ASCII text survive intact.

use super::error::EnquiryError;
use super::record::SubmittedSnapshot;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Bytes left as-is inside a URI component
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Messaging service base address
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// Where deep links point and how the academy introduces itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    base: Url,
    academy: String,
}

impl LinkSettings {
    /// `number` is the international number without `+`, e.g. `919011141618`
    pub fn new(number: &str, academy: impl Into<String>) -> Result<Self, EnquiryError> {
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EnquiryError::InvalidContactNumber(number.to_string()));
        }
        let base = Url::parse(WHATSAPP_BASE)
            .and_then(|base| base.join(number))
            .map_err(|_| EnquiryError::InvalidContactNumber(number.to_string()))?;
        Ok(Self {
            base,
            academy: academy.into(),
        })
    }

    pub fn academy(&self) -> &str {
        &self.academy
    }

    /// The number the links open a chat with
    pub fn number(&self) -> &str {
        self.base.path().trim_start_matches('/')
    }

    /// Build a link that opens a chat prefilled with `text`
    pub fn link(&self, text: &str) -> Url {
        let mut url = self.base.clone();
        url.set_query(Some(&format!(
            "text={}",
            utf8_percent_encode(text, URI_COMPONENT)
        )));
        url
    }
}

/// Message sent after a successful enquiry
pub fn confirmation_text(academy: &str, snapshot: &SubmittedSnapshot) -> String {
    let record = snapshot.record();
    let grade = record.grade().map_or("", |g| g.label());
    let board = record.board().map_or("", |b| b.label());
    format!(
        "Hello {academy}, I have just submitted an enquiry on your website.\n\n\
         *Student Details:*\n\
         Name: {}\n\
         Class: {grade}\n\
         Board: {board}\n\
         School: {}\n\
         Parent: {}\n\
         Phone: {}\n\n\
         Please share the coaching details and brochure.",
        record.student_name, record.school_name, record.parent_name, record.phone,
    )
}

/// Deep link confirming a submitted enquiry
pub fn confirmation_link(settings: &LinkSettings, snapshot: &SubmittedSnapshot) -> Url {
    settings.link(&confirmation_text(settings.academy(), snapshot))
}
