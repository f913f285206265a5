//! Form field descriptors

use crate::enquiry::EnquiryField;

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// ASCII digits only, capped at `max_len`
    Digits { max_len: usize },
    /// Picked from a list with Left/Right or Space
    Choice,
}

/// One input on an enquiry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub field: EnquiryField,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    pub const fn text(field: EnquiryField, placeholder: &'static str) -> Self {
        Self {
            field,
            placeholder,
            kind: FieldKind::Text,
        }
    }

    pub const fn digits(field: EnquiryField, placeholder: &'static str, max_len: usize) -> Self {
        Self {
            field,
            placeholder,
            kind: FieldKind::Digits { max_len },
        }
    }

    pub const fn choice(field: EnquiryField, placeholder: &'static str) -> Self {
        Self {
            field,
            placeholder,
            kind: FieldKind::Choice,
        }
    }

    /// Label with a `*` marker on required fields
    pub fn label(&self) -> String {
        if self.field.is_required() {
            format!("{} *", self.field.label())
        } else {
            self.field.label().to_string()
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice)
    }

    /// Whether typing `c` into a field currently holding `current` is allowed
    pub fn accepts(&self, c: char, current: &str) -> bool {
        match self.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Digits { max_len } => c.is_ascii_digit() && current.len() < max_len,
            FieldKind::Choice => false,
        }
    }
}
