//! Application state and core logic

use crate::api::{EnquiryClient, EnquirySubmitter};
use crate::browser::{copy_to_clipboard, SystemBrowser, UrlOpener};
use crate::config::DeskConfig;
use crate::enquiry::{open_contact, LinkSettings, SubmissionOutcome, SubmissionTicket};
use crate::state::{AppState, Form, FormVariant, SuccessAction, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// A finished submission on its way back to the UI task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionResult {
    pub variant: FormVariant,
    pub ticket: Uuid,
    pub outcome: SubmissionOutcome,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// WhatsApp number and academy name for deep links
    links: LinkSettings,
    /// Where enquiries are sent
    submitter: Arc<dyn EnquirySubmitter>,
    /// Opens deep links outside the terminal
    opener: Box<dyn UrlOpener>,
    results_tx: UnboundedSender<SubmissionResult>,
    results_rx: UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Terminal size for hit-testing clicks (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create an App talking to the configured endpoint and the system browser
    pub fn new(config: &DeskConfig) -> Result<Self> {
        let links = config.link_settings()?;
        let client = EnquiryClient::new(config.api_endpoint());
        tracing::info!("Sending enquiries to {}", client.endpoint());
        Ok(Self::with_collaborators(
            links,
            Arc::new(client),
            Box::new(SystemBrowser),
        ))
    }

    pub fn with_collaborators(
        links: LinkSettings,
        submitter: Arc<dyn EnquirySubmitter>,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            links,
            submitter,
            opener,
            results_tx,
            results_rx,
            quit: false,
            copy_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission indicator needs frequent redraws
    pub fn in_animation(&self) -> bool {
        self.state.section.workflow.is_submitting() || self.state.modal.workflow.is_submitting()
    }

    pub fn links(&self) -> &LinkSettings {
        &self.links
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Clear any status messages on key press
        self.copy_message = None;

        let typing = self
            .state
            .focused_variant()
            .is_some_and(|variant| self.state.form(variant).is_typing());

        match key.code {
            KeyCode::Char('e') if ctrl || !typing => {
                if !self.state.modal_open {
                    self.state.open_modal();
                }
                return;
            }
            KeyCode::Char('w') if ctrl || !typing => {
                self.open_contact();
                return;
            }
            KeyCode::Char('q') if !ctrl && !typing && !self.state.modal_open => {
                self.quit = true;
                return;
            }
            KeyCode::F(1) if !self.state.modal_open => {
                self.state.current_view = View::Enquiry;
                return;
            }
            KeyCode::F(2) if !self.state.modal_open => {
                self.state.current_view = View::Contact;
                return;
            }
            _ => {}
        }

        match self.state.focused_variant() {
            Some(variant) => self.handle_form_key(variant, key),
            None => {
                if key.code == KeyCode::Enter {
                    self.open_contact();
                }
            }
        }
    }

    /// Handle a mouse event; a left click on the floating button opens the chat
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if self.state.has_errors() {
            return;
        }
        let Some((height, width)) = self.terminal_size else {
            return;
        };
        let screen = Rect::new(0, 0, width, height);
        let point = Position::new(mouse.column, mouse.row);
        if self.state.modal_open && crate::ui::enquiry_modal_area(screen).contains(point) {
            return;
        }
        if crate::ui::chat_button_area(screen).contains(point) {
            self.copy_message = None;
            self.open_contact();
        }
    }

    fn handle_form_key(&mut self, variant: FormVariant, key: KeyEvent) {
        if variant == FormVariant::Modal && key.code == KeyCode::Esc {
            self.state.close_modal();
            return;
        }

        if self.state.form(variant).status().shows_form() {
            self.handle_entry_key(variant, key);
        } else {
            self.handle_success_key(variant, key);
        }
    }

    /// Keys while the form is shown (idle, submitting or rejected)
    fn handle_entry_key(&mut self, variant: FormVariant, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_submit_row = self.state.form(variant).is_submit_row_active();
        let form = self.state.form_mut(variant);

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => {
                form.cycle_choice(false);
            }
            KeyCode::Right => {
                form.cycle_choice(true);
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter if !on_submit_row => form.next_field(),
            KeyCode::Enter => self.start_submission(variant),
            KeyCode::Char('s') if ctrl => self.start_submission(variant),
            KeyCode::Char(c) if !ctrl => {
                form.input_char(c);
            }
            _ => {}
        }
    }

    /// Keys on the success view
    fn handle_success_key(&mut self, variant: FormVariant, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
                self.state.form_mut(variant).next_action();
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Up => {
                self.state.form_mut(variant).prev_action();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_link(variant);
            }
            KeyCode::Enter => match self.state.form(variant).selected_success_action() {
                SuccessAction::Confirm => self.confirm(variant),
                SuccessAction::CopyLink => self.copy_link(variant),
                SuccessAction::Dismiss => self.dismiss(variant),
            },
            _ => {}
        }
    }

    /// Validate the form and, if it passes, send it on a background task
    pub fn start_submission(&mut self, variant: FormVariant) {
        match self.state.form_mut(variant).try_submit() {
            Ok(Some(ticket)) => self.spawn_submission(variant, ticket),
            Ok(None) => {}
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn spawn_submission(&self, variant: FormVariant, ticket: SubmissionTicket) {
        let submitter = Arc::clone(&self.submitter);
        let results = self.results_tx.clone();

        tokio::spawn(async move {
            let result = submitter.submit(ticket.record()).await;
            let outcome = SubmissionOutcome::from_result(&result);
            let message = SubmissionResult {
                variant,
                ticket: ticket.id(),
                outcome,
            };
            if results.send(message).is_err() {
                tracing::debug!("UI gone before submission {} finished", ticket.id());
            }
        });
    }

    /// Apply every submission result that has arrived.
    ///
    /// Returns true if any of them changed a form.
    pub fn poll_submissions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.results_rx.try_recv() {
            let form = self.state.form_mut(result.variant);
            if form.workflow.resolve(result.ticket, result.outcome) {
                form.submission_finished();
                changed = true;
            }
        }
        changed
    }

    /// Open the WhatsApp confirmation for an accepted enquiry
    pub fn confirm(&mut self, variant: FormVariant) {
        let result = self
            .state
            .form(variant)
            .workflow
            .confirm(&self.links, self.opener.as_ref());
        match result {
            Ok(true) => self.copy_message = Some("Opening WhatsApp...".to_string()),
            Ok(false) => {}
            Err(e) => self.push_error(format!("Failed to open WhatsApp: {}", e)),
        }
    }

    /// Copy the confirmation link, for when no browser is around
    pub fn copy_link(&mut self, variant: FormVariant) {
        let Some(url) = self
            .state
            .form(variant)
            .workflow
            .confirmation_link(&self.links)
        else {
            return;
        };
        match copy_to_clipboard(url.as_str()) {
            Ok(()) => self.copy_message = Some("WhatsApp link copied".to_string()),
            Err(e) => self.push_error(format!("Failed to copy link: {}", e)),
        }
    }

    /// Leave the success view (or drop the form) and start over
    pub fn dismiss(&mut self, variant: FormVariant) {
        match variant {
            FormVariant::Section => self.state.section.reset(),
            FormVariant::Modal => self.state.close_modal(),
        }
    }

    /// Open a general chat with the academy
    pub fn open_contact(&mut self) {
        match open_contact(&self.links, self.opener.as_ref()) {
            Ok(_) => self.copy_message = Some("Opening WhatsApp...".to_string()),
            Err(e) => self.push_error(format!("Failed to open WhatsApp: {}", e)),
        }
    }
}
