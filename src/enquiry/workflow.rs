//! Enquiry submission lifecycle
//!
//! ```text
//! Idle ──submit──▶ Submitting ──accepted──▶ Success ──dismiss──▶ Idle
//!   ▲                   │
//!   │                   └──rejected──▶ Error ──submit──▶ Submitting
//!   └──────────────── dismiss (from any state) ◀───────────┘
//! ```
//!
//! A submission is identified by a [`SubmissionTicket`]. Results are only
//! applied for the ticket currently in flight, so a result that arrives
//! after the user dismissed the form is dropped.

use super::board::{Board, Grade};
use super::deep_link::{confirmation_link, LinkSettings};
use super::error::EnquiryError;
use super::record::{EnquiryField, EnquiryRecord, SubmittedSnapshot};
use crate::api::EnquirySubmitter;
use crate::browser::UrlOpener;
use anyhow::Result;
use chrono::Utc;
use url::Url;
use uuid::Uuid;

/// Where the workflow is in the submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    /// Ready for input
    #[default]
    Idle,
    /// Request in flight
    Submitting,
    /// Accepted by the academy
    Success,
    /// Rejected; the user may retry
    Error,
}

impl WorkflowStatus {
    /// Whether the form is shown (as opposed to the success view)
    pub fn shows_form(self) -> bool {
        !matches!(self, Self::Success)
    }
}

/// Result of handing an enquiry to the submission collaborator.
///
/// Explicit failure responses and transport errors are both `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

impl SubmissionOutcome {
    pub fn from_result(result: &Result<bool>) -> Self {
        match result {
            Ok(true) => Self::Accepted,
            Ok(false) => Self::Rejected,
            Err(err) => {
                tracing::warn!("Enquiry submission failed: {err:#}");
                Self::Rejected
            }
        }
    }
}

/// An in-flight submission: its id plus the record as it was when sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: Uuid,
    record: EnquiryRecord,
}

impl SubmissionTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn record(&self) -> &EnquiryRecord {
        &self.record
    }
}

/// Form data plus submission state for one enquiry form
#[derive(Debug, Default)]
pub struct EnquiryWorkflow {
    status: WorkflowStatus,
    record: EnquiryRecord,
    snapshot: Option<SubmittedSnapshot>,
    in_flight: Option<SubmissionTicket>,
}

impl EnquiryWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn record(&self) -> &EnquiryRecord {
        &self.record
    }

    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == WorkflowStatus::Submitting
    }

    /// Id of the submission currently awaiting a result
    #[allow(dead_code)]
    pub fn in_flight(&self) -> Option<Uuid> {
        self.in_flight.as_ref().map(SubmissionTicket::id)
    }

    /// Edit one field. Never changes the workflow status.
    #[allow(dead_code)]
    pub fn edit(&mut self, field: EnquiryField, value: String) -> Result<(), EnquiryError> {
        self.record.set_field(field, value)
    }

    /// Mutable access to a free-text field
    pub fn text_mut(&mut self, field: EnquiryField) -> Option<&mut String> {
        self.record.text_mut(field)
    }

    pub fn set_grade(&mut self, grade: Option<Grade>) {
        self.record.set_grade(grade);
    }

    pub fn set_board(&mut self, board: Option<Board>) -> Result<(), EnquiryError> {
        self.record.set_board(board)
    }

    /// Start a submission of the current record.
    ///
    /// Returns `None` while a submission is already in flight, or on the
    /// success view where the form isn't shown.
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        match self.status {
            WorkflowStatus::Idle | WorkflowStatus::Error => {}
            WorkflowStatus::Submitting | WorkflowStatus::Success => return None,
        }

        let ticket = SubmissionTicket {
            id: Uuid::new_v4(),
            record: self.record.clone(),
        };
        tracing::info!("Submitting enquiry {}", ticket.id);
        self.status = WorkflowStatus::Submitting;
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Returns false (and changes nothing) when `id` isn't the submission in
    /// flight.
    pub fn resolve(&mut self, id: Uuid, outcome: SubmissionOutcome) -> bool {
        let ticket = match self.in_flight.take() {
            Some(ticket) if ticket.id == id => ticket,
            other => {
                self.in_flight = other;
                tracing::debug!("Ignoring result for stale submission {id}");
                return false;
            }
        };

        match outcome {
            SubmissionOutcome::Accepted => {
                tracing::info!("Enquiry {id} accepted");
                self.snapshot = Some(SubmittedSnapshot::new(ticket.record, Utc::now()));
                self.record = EnquiryRecord::default();
                self.status = WorkflowStatus::Success;
            }
            SubmissionOutcome::Rejected => {
                tracing::warn!("Enquiry {id} rejected");
                self.status = WorkflowStatus::Error;
            }
        }
        true
    }

    /// Submit through `submitter` and wait for the result.
    ///
    /// Returns `None` when the submit was refused (see [`Self::begin_submission`]).
    #[allow(dead_code)]
    pub async fn submit(&mut self, submitter: &dyn EnquirySubmitter) -> Option<SubmissionOutcome> {
        let ticket = self.begin_submission()?;
        let result = submitter.submit(ticket.record()).await;
        let outcome = SubmissionOutcome::from_result(&result);
        self.resolve(ticket.id(), outcome);
        Some(outcome)
    }

    /// Back to an empty form, whatever the current state.
    ///
    /// A submission still in flight is forgotten; its result will be ignored.
    pub fn dismiss(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            tracing::debug!("Dismissed while submission {} in flight", ticket.id);
        }
        self.status = WorkflowStatus::Idle;
        self.record = EnquiryRecord::default();
        self.snapshot = None;
    }

    /// Deep link confirming the accepted enquiry, if there is one
    pub fn confirmation_link(&self, settings: &LinkSettings) -> Option<Url> {
        if self.status != WorkflowStatus::Success {
            return None;
        }
        self.snapshot
            .as_ref()
            .map(|snapshot| confirmation_link(settings, snapshot))
    }

    /// Open the confirmation chat. Without an accepted enquiry this does
    /// nothing and returns `Ok(false)`.
    pub fn confirm(&self, settings: &LinkSettings, opener: &dyn UrlOpener) -> Result<bool> {
        let Some(url) = self.confirmation_link(settings) else {
            return Ok(false);
        };
        tracing::debug!("Opening confirmation link");
        opener.open(&url)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockEnquirySubmitter;
    use crate::browser::MockUrlOpener;
    use crate::enquiry::record::filled_record;
    use anyhow::anyhow;

    fn settings() -> LinkSettings {
        LinkSettings::new("919011141618", "Eklavyaa Academy").unwrap()
    }

    fn filled_workflow() -> EnquiryWorkflow {
        EnquiryWorkflow {
            record: filled_record(),
            ..Default::default()
        }
    }

    fn submitter_returning(result: fn() -> Result<bool>) -> MockEnquirySubmitter {
        let mut submitter = MockEnquirySubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(move |_| result());
        submitter
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_keeps_status() {
            let mut workflow = filled_workflow();
            workflow.status = WorkflowStatus::Error;
            workflow
                .edit(EnquiryField::StudentName, "Asha".to_string())
                .unwrap();
            assert_eq!(workflow.status(), WorkflowStatus::Error);
            assert_eq!(workflow.record().student_name, "Asha");
        }

        #[test]
        fn test_grade_edit_clears_board() {
            let mut workflow = filled_workflow();
            workflow
                .edit(EnquiryField::Grade, "11th Standard".to_string())
                .unwrap();
            assert_eq!(workflow.record().board(), None);

            workflow.set_board(Some(Board::Commerce)).unwrap();
            workflow.set_grade(Some(Grade::Eleventh));
            assert_eq!(workflow.record().board(), None);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_moves_to_submitting() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            assert_eq!(workflow.status(), WorkflowStatus::Submitting);
            assert_eq!(ticket.record(), &filled_record());
            assert_eq!(workflow.in_flight(), Some(ticket.id()));
        }

        #[test]
        fn test_submit_while_submitting_is_noop() {
            let mut workflow = filled_workflow();
            let first = workflow.begin_submission().unwrap();
            assert!(workflow.begin_submission().is_none());
            assert_eq!(workflow.in_flight(), Some(first.id()));
            assert_eq!(workflow.status(), WorkflowStatus::Submitting);
        }

        #[test]
        fn test_submit_refused_on_success_view() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Accepted);
            assert!(workflow.begin_submission().is_none());
        }

        #[test]
        fn test_accepted_captures_snapshot_and_clears_record() {
            let mut workflow = filled_workflow();
            let before = workflow.record().clone();
            let ticket = workflow.begin_submission().unwrap();

            assert!(workflow.resolve(ticket.id(), SubmissionOutcome::Accepted));
            assert_eq!(workflow.status(), WorkflowStatus::Success);
            assert!(workflow.record().is_empty());
            assert_eq!(workflow.snapshot().unwrap().record(), &before);
            assert_eq!(workflow.in_flight(), None);
        }

        #[test]
        fn test_snapshot_is_record_at_submit_time() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow
                .edit(EnquiryField::StudentName, "Edited Later".to_string())
                .unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Accepted);
            assert_eq!(workflow.snapshot().unwrap().record(), &filled_record());
        }

        #[test]
        fn test_rejected_keeps_record() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();

            assert!(workflow.resolve(ticket.id(), SubmissionOutcome::Rejected));
            assert_eq!(workflow.status(), WorkflowStatus::Error);
            assert_eq!(workflow.record(), &filled_record());
            assert!(workflow.snapshot().is_none());
        }

        #[test]
        fn test_retry_after_error() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Rejected);

            let retry = workflow.begin_submission().unwrap();
            assert_ne!(retry.id(), ticket.id());
            assert_eq!(workflow.status(), WorkflowStatus::Submitting);
        }

        #[test]
        fn test_unknown_ticket_ignored() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            assert!(!workflow.resolve(Uuid::new_v4(), SubmissionOutcome::Accepted));
            assert_eq!(workflow.status(), WorkflowStatus::Submitting);
            assert_eq!(workflow.in_flight(), Some(ticket.id()));
        }

        #[test]
        fn test_result_after_dismiss_ignored() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.dismiss();

            assert!(!workflow.resolve(ticket.id(), SubmissionOutcome::Accepted));
            assert_eq!(workflow.status(), WorkflowStatus::Idle);
            assert!(workflow.record().is_empty());
            assert!(workflow.snapshot().is_none());
        }

        #[test]
        fn test_outcome_from_result() {
            assert_eq!(
                SubmissionOutcome::from_result(&Ok(true)),
                SubmissionOutcome::Accepted
            );
            assert_eq!(
                SubmissionOutcome::from_result(&Ok(false)),
                SubmissionOutcome::Rejected
            );
            assert_eq!(
                SubmissionOutcome::from_result(&Err(anyhow!("connection refused"))),
                SubmissionOutcome::Rejected
            );
        }
    }

    mod async_submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_accepted() {
            let mut workflow = filled_workflow();
            let submitter = submitter_returning(|| Ok(true));

            let outcome = workflow.submit(&submitter).await;
            assert_eq!(outcome, Some(SubmissionOutcome::Accepted));
            assert_eq!(workflow.status(), WorkflowStatus::Success);
            assert!(workflow.record().is_empty());
        }

        #[tokio::test]
        async fn test_submit_sends_current_record() {
            let mut workflow = filled_workflow();
            let mut submitter = MockEnquirySubmitter::new();
            submitter
                .expect_submit()
                .withf(|record| record.student_name == "Rahul Patil")
                .times(1)
                .returning(|_| Ok(true));

            workflow.submit(&submitter).await;
        }

        #[tokio::test]
        async fn test_submit_false_is_rejected() {
            let mut workflow = filled_workflow();
            let submitter = submitter_returning(|| Ok(false));

            let outcome = workflow.submit(&submitter).await;
            assert_eq!(outcome, Some(SubmissionOutcome::Rejected));
            assert_eq!(workflow.status(), WorkflowStatus::Error);
            assert_eq!(workflow.record(), &filled_record());
        }

        #[tokio::test]
        async fn test_submit_error_is_rejected() {
            let mut workflow = filled_workflow();
            let submitter = submitter_returning(|| Err(anyhow!("timed out")));

            let outcome = workflow.submit(&submitter).await;
            assert_eq!(outcome, Some(SubmissionOutcome::Rejected));
            assert_eq!(workflow.status(), WorkflowStatus::Error);
            assert_eq!(workflow.record(), &filled_record());
        }

        #[test]
        fn test_submit_refused_does_not_call_collaborator() {
            let mut workflow = filled_workflow();
            workflow.begin_submission().unwrap();
            let mut submitter = MockEnquirySubmitter::new();
            submitter.expect_submit().never();

            let outcome = tokio_test::block_on(workflow.submit(&submitter));
            assert_eq!(outcome, None);
        }
    }

    mod dismiss {
        use super::*;
        use pretty_assertions::assert_eq;

        fn assert_reset(workflow: &EnquiryWorkflow) {
            assert_eq!(workflow.status(), WorkflowStatus::Idle);
            assert!(workflow.record().is_empty());
            assert!(workflow.snapshot().is_none());
            assert!(workflow.in_flight().is_none());
        }

        #[test]
        fn test_dismiss_from_submitting() {
            let mut workflow = filled_workflow();
            workflow.begin_submission().unwrap();
            workflow.dismiss();
            assert_reset(&workflow);
        }

        #[test]
        fn test_dismiss_from_success() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Accepted);
            workflow.dismiss();
            assert_reset(&workflow);
        }

        #[test]
        fn test_dismiss_from_error() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Rejected);
            workflow.dismiss();
            assert_reset(&workflow);
        }

        #[test]
        fn test_dismiss_from_idle_clears_input() {
            let mut workflow = filled_workflow();
            workflow.dismiss();
            assert_reset(&workflow);
        }
    }

    mod confirm {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_confirm_without_snapshot_is_noop() {
            let workflow = filled_workflow();
            let mut opener = MockUrlOpener::new();
            opener.expect_open().never();

            assert!(!workflow.confirm(&settings(), &opener).unwrap());
            assert!(workflow.confirmation_link(&settings()).is_none());
        }

        #[test]
        fn test_confirm_after_error_is_noop() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Rejected);
            let mut opener = MockUrlOpener::new();
            opener.expect_open().never();

            assert!(!workflow.confirm(&settings(), &opener).unwrap());
        }

        #[test]
        fn test_confirm_opens_link_and_keeps_state() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Accepted);

            let mut opener = MockUrlOpener::new();
            opener
                .expect_open()
                .withf(|url| {
                    url.host_str() == Some("wa.me")
                        && url
                            .query_pairs()
                            .any(|(_, text)| text.contains("Rahul Patil"))
                })
                .times(1)
                .returning(|_| Ok(()));

            assert!(workflow.confirm(&settings(), &opener).unwrap());
            assert_eq!(workflow.status(), WorkflowStatus::Success);
            assert!(workflow.snapshot().is_some());
        }

        #[test]
        fn test_confirm_surfaces_opener_failure() {
            let mut workflow = filled_workflow();
            let ticket = workflow.begin_submission().unwrap();
            workflow.resolve(ticket.id(), SubmissionOutcome::Accepted);

            let mut opener = MockUrlOpener::new();
            opener
                .expect_open()
                .returning(|_| Err(anyhow!("xdg-open missing")));

            assert!(workflow.confirm(&settings(), &opener).is_err());
            assert_eq!(workflow.status(), WorkflowStatus::Success);
        }
    }
}
