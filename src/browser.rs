//! Handing links to the desktop: default browser and clipboard

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use url::Url;

/// Opens an external URL in a new browsing context
#[cfg_attr(test, mockall::automock)]
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &Url) -> Result<()>;
}

/// Opens links with the platform's URL handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &Url) -> Result<()> {
        let (program, args) = crate::platform::OPEN_COMMAND;
        Command::new(program)
            .args(args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run {program}"))?;
        Ok(())
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
