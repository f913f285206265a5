//! Application state definitions

use super::forms::{EnquiryForm, FormVariant};
use std::collections::VecDeque;

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Enquiry section with the contact panel beside it
    #[default]
    Enquiry,
    /// Contact details
    Contact,
}

impl View {
    pub const ALL: [View; 2] = [View::Enquiry, View::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Self::Enquiry => "Enquiry",
            Self::Contact => "Contact",
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            Self::Enquiry => "F1",
            Self::Contact => "F2",
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Forms: the inline section and the admission dialog
    pub section: EnquiryForm,
    pub modal: EnquiryForm,
    pub modal_open: bool,

    // Errors waiting to be acknowledged, oldest first
    pub errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            section: EnquiryForm::new(FormVariant::Section),
            modal: EnquiryForm::new(FormVariant::Modal),
            modal_open: false,
            errors: VecDeque::new(),
        }
    }
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Close the dialog, discarding whatever it held
    pub fn close_modal(&mut self) {
        if !self.modal.workflow.record().is_empty() {
            tracing::debug!("Discarding unsent admission enquiry");
        }
        self.modal_open = false;
        self.modal.reset();
    }

    pub fn form(&self, variant: FormVariant) -> &EnquiryForm {
        match variant {
            FormVariant::Section => &self.section,
            FormVariant::Modal => &self.modal,
        }
    }

    pub fn form_mut(&mut self, variant: FormVariant) -> &mut EnquiryForm {
        match variant {
            FormVariant::Section => &mut self.section,
            FormVariant::Modal => &mut self.modal,
        }
    }

    /// The form keyboard input goes to, if any
    pub fn focused_variant(&self) -> Option<FormVariant> {
        if self.modal_open {
            Some(FormVariant::Modal)
        } else if self.current_view == View::Enquiry {
            Some(FormVariant::Section)
        } else {
            None
        }
    }
}
