//! Enquiry submission endpoint
//!
//! The academy's backend is a black box: it takes an enquiry and answers
//! yes or no.

mod client;
mod traits;

pub use client::EnquiryClient;
pub use traits::EnquirySubmitter;

#[cfg(test)]
pub use traits::MockEnquirySubmitter;
