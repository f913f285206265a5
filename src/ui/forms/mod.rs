//! Form rendering module
//!
//! - `field_renderer`: single fields and key hints
//! - `enquiry_form`: the entry form, its success view and the admission dialog

mod enquiry_form;
mod field_renderer;

pub use enquiry_form::{draw_enquiry_modal, draw_form, enquiry_modal_area};
