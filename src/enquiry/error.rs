//! Enquiry domain errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnquiryError {
    /// A required field is empty; carries the field label
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Mobile number must be exactly 10 digits")]
    InvalidPhone,

    #[error("{board} is not offered for {grade}")]
    BoardNotOffered { board: String, grade: String },

    #[error("Unknown class: {0}")]
    UnknownGrade(String),

    #[error("Unknown board: {0}")]
    UnknownBoard(String),

    #[error("Contact number must contain only digits: {0:?}")]
    InvalidContactNumber(String),
}
