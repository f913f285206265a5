//! Click-to-chat shortcut
//!
//! Always available, independent of any enquiry in progress.

use super::deep_link::LinkSettings;
use crate::browser::UrlOpener;
use anyhow::Result;
use url::Url;

pub fn contact_text(academy: &str) -> String {
    format!(
        "Hello {academy}, I am interested in your coaching programs. \
         Could you please share more details?"
    )
}

pub fn contact_link(settings: &LinkSettings) -> Url {
    settings.link(&contact_text(settings.academy()))
}

/// Open a chat with the academy. Returns the link that was opened.
pub fn open_contact(settings: &LinkSettings, opener: &dyn UrlOpener) -> Result<Url> {
    let url = contact_link(settings);
    tracing::debug!("Opening contact link {url}");
    opener.open(&url)?;
    Ok(url)
}
