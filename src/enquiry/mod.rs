//! Admission enquiry domain
//!
//! - `board`: class list and the board/stream options each class allows
//! - `record`: the enquiry being filled in and the snapshot kept on success
//! - `workflow`: submission lifecycle state machine
//! - `deep_link`: WhatsApp links with prefilled text
//! - `contact`: the always-available chat shortcut

mod board;
mod contact;
mod deep_link;
mod error;
mod record;
mod workflow;

pub use board::{cycle_board, Board, Grade};
pub use contact::open_contact;
pub use deep_link::LinkSettings;
pub use error::EnquiryError;
pub use record::{EnquiryField, EnquiryRecord};
pub use workflow::{EnquiryWorkflow, SubmissionOutcome, SubmissionTicket, WorkflowStatus};

#[cfg(test)]
pub(crate) use record::filled_record;
