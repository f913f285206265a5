//! Trait abstraction for the submission endpoint to enable mocking in tests

use crate::enquiry::EnquiryRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Hands an enquiry to the academy
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnquirySubmitter: Send + Sync {
    /// Submit one enquiry.
    ///
    /// `Ok(true)` means accepted, `Ok(false)` an explicit refusal, and `Err`
    /// a transport failure. Callers treat the last two the same way.
    async fn submit(&self, record: &EnquiryRecord) -> Result<bool>;
}
