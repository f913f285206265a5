//! Form domain layer
//!
//! Field descriptors and the per-variant enquiry form built on them.

mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{EnquiryForm, Form, FormVariant, SuccessAction};
