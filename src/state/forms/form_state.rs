//! Enquiry form state: focus, input rules and validation around a workflow

use super::field::FormField;
use crate::enquiry::{
    cycle_board, Board, EnquiryError, EnquiryField, EnquiryWorkflow, Grade, SubmissionTicket,
    WorkflowStatus,
};
use std::time::{Duration, Instant};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

const SECTION_FIELDS: &[FormField] = &[
    FormField::text(EnquiryField::StudentName, "e.g. Rahul Patil"),
    FormField::text(EnquiryField::ParentName, "Parent's Name"),
    FormField::choice(EnquiryField::Grade, "Select Class"),
    FormField::choice(EnquiryField::Board, "Choose Board"),
    FormField::digits(EnquiryField::Phone, "10-digit number", 10),
    FormField::text(EnquiryField::SchoolName, "Current school"),
];

const MODAL_FIELDS: &[FormField] = &[
    FormField::text(EnquiryField::StudentName, "Full Name"),
    FormField::choice(EnquiryField::Grade, "Select"),
    FormField::choice(EnquiryField::Board, "Select"),
    FormField::text(EnquiryField::SchoolName, "Current School Name"),
    FormField::digits(EnquiryField::Phone, "10-digit phone", 10),
    FormField::text(EnquiryField::ParentName, "Parent's Name"),
];

/// Which presentation a form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormVariant {
    /// Inline section on the enquiry page
    Section,
    /// Admission enquiry dialog
    Modal,
}

impl FormVariant {
    pub fn fields(self) -> &'static [FormField] {
        match self {
            Self::Section => SECTION_FIELDS,
            Self::Modal => MODAL_FIELDS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Section => "Enquiry Form",
            Self::Modal => "Admission Enquiry",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Section => "Please fill in the details below to get started.",
            Self::Modal => "Join the family of high achievers.",
        }
    }

    /// Banner shown after a rejected submission
    pub fn error_banner(self) -> &'static str {
        match self {
            Self::Section => "Unable to submit. Please check your connection or call us.",
            Self::Modal => "Oops! Please try again or call us.",
        }
    }

    pub fn submit_label(self, status: WorkflowStatus) -> &'static str {
        match (self, status) {
            (Self::Section, WorkflowStatus::Submitting) => "Submitting...",
            (Self::Modal, WorkflowStatus::Submitting) => "Processing...",
            (Self::Section, _) => "Submit Enquiry",
            (Self::Modal, _) => "Submit Admission Request",
        }
    }

    pub fn success_title(self) -> &'static str {
        match self {
            Self::Section => "Details Received!",
            Self::Modal => "Submission Success!",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Section => {
                "Thank you for reaching out. Please confirm your enquiry on WhatsApp \
                 to receive our brochure and fee structure instantly."
            }
            Self::Modal => {
                "We've received your details. To get immediate fee details and a \
                 digital brochure, please chat with our counselor on WhatsApp."
            }
        }
    }

    /// Label for the success view's primary, copy and dismiss buttons
    pub fn action_label(self, action: SuccessAction) -> &'static str {
        match (self, action) {
            (Self::Section, SuccessAction::Confirm) => "Confirm via WhatsApp",
            (Self::Modal, SuccessAction::Confirm) => "Continue on WhatsApp",
            (_, SuccessAction::CopyLink) => "Copy WhatsApp Link",
            (Self::Section, SuccessAction::Dismiss) => "Submit Another Enquiry",
            (Self::Modal, SuccessAction::Dismiss) => "Close",
        }
    }

    /// Board text for this layout; the section has room for the long form
    pub fn board_text(self, board: Board) -> &'static str {
        match self {
            Self::Section => board.description(),
            Self::Modal => board.label(),
        }
    }
}

/// Buttons on the success view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessAction {
    Confirm,
    CopyLink,
    Dismiss,
}

impl SuccessAction {
    pub const ALL: [SuccessAction; 3] = [
        SuccessAction::Confirm,
        SuccessAction::CopyLink,
        SuccessAction::Dismiss,
    ];
}

/// Length of one sweep of the submitting indicator
const SWEEP_PERIOD: Duration = Duration::from_millis(1200);

/// An enquiry form: the workflow plus focus and input handling.
///
/// This is the input boundary. It only lets a submit through once the
/// record validates, and keeps the board selector inert until a class is
/// chosen.
#[derive(Debug)]
pub struct EnquiryForm {
    pub variant: FormVariant,
    pub workflow: EnquiryWorkflow,
    /// Focused field; `fields().len()` is the submit row
    pub active_field_index: usize,
    /// Focused button on the success view
    pub selected_action: usize,
    /// When the current submission started (drives the indicator)
    pub submitting_since: Option<Instant>,
}

impl EnquiryForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            workflow: EnquiryWorkflow::new(),
            active_field_index: 0,
            selected_action: 0,
            submitting_since: None,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        self.variant.fields()
    }

    pub fn status(&self) -> WorkflowStatus {
        self.workflow.status()
    }

    /// Focused field, or `None` on the submit row
    pub fn active_form_field(&self) -> Option<&'static FormField> {
        self.fields().get(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields().len()
    }

    /// Whether the focused field takes typed text
    pub fn is_typing(&self) -> bool {
        self.status().shows_form()
            && self
                .active_form_field()
                .is_some_and(|field| !field.is_choice())
    }

    /// The board selector stays disabled until a class is chosen
    pub fn is_field_enabled(&self, field: EnquiryField) -> bool {
        match field {
            EnquiryField::Board => self.workflow.record().grade().is_some(),
            _ => true,
        }
    }

    /// Text shown for a field's current value (empty when unset)
    pub fn display_value(&self, field: EnquiryField) -> &'static str {
        let record = self.workflow.record();
        match field {
            EnquiryField::Grade => record.grade().map_or("", Grade::label),
            EnquiryField::Board => record
                .board()
                .map_or("", |board| self.variant.board_text(board)),
            _ => "",
        }
    }

    /// Type a character into the focused field. Returns false if refused.
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(field) = self.active_form_field() else {
            return false;
        };
        if field.is_choice() {
            if c == ' ' {
                return self.cycle_choice(true);
            }
            return false;
        }
        let Some(text) = self.workflow.text_mut(field.field) else {
            return false;
        };
        if !field.accepts(c, text) {
            return false;
        }
        text.push(c);
        true
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_form_field() {
            if let Some(text) = self.workflow.text_mut(field.field) {
                text.pop();
            }
        }
    }

    /// Step the focused class/board selector. Returns false if nothing changed.
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        let Some(field) = self.active_form_field() else {
            return false;
        };
        match field.field {
            EnquiryField::Grade => {
                let grade = Grade::cycle(self.workflow.record().grade(), forward);
                self.workflow.set_grade(Some(grade));
                true
            }
            EnquiryField::Board if self.is_field_enabled(EnquiryField::Board) => {
                let record = self.workflow.record();
                let board = cycle_board(record.grade(), record.board(), forward);
                self.workflow.set_board(Some(board)).is_ok()
            }
            _ => false,
        }
    }

    /// Check the record before letting a submit through
    pub fn validate(&self) -> Result<(), EnquiryError> {
        self.workflow.record().validate()
    }

    /// Validate and start a submission.
    ///
    /// `Ok(None)` means a submission is already in flight (or the form isn't
    /// shown), so the submit was ignored.
    pub fn try_submit(&mut self) -> Result<Option<SubmissionTicket>, EnquiryError> {
        if !self.status().shows_form() || self.workflow.is_submitting() {
            return Ok(None);
        }
        if let Err(err) = self.validate() {
            self.focus_field(&err);
            return Err(err);
        }
        let ticket = self.workflow.begin_submission();
        if ticket.is_some() {
            self.submitting_since = Some(Instant::now());
        }
        Ok(ticket)
    }

    /// Called after a result was applied to the workflow
    pub fn submission_finished(&mut self) {
        self.submitting_since = None;
        self.selected_action = 0;
        if self.status() == WorkflowStatus::Success {
            self.active_field_index = 0;
        }
    }

    /// Empty form, focus on the first field
    pub fn reset(&mut self) {
        self.workflow.dismiss();
        self.active_field_index = 0;
        self.selected_action = 0;
        self.submitting_since = None;
    }

    pub fn selected_success_action(&self) -> SuccessAction {
        SuccessAction::ALL[self.selected_action % SuccessAction::ALL.len()]
    }

    pub fn next_action(&mut self) {
        self.selected_action = (self.selected_action + 1) % SuccessAction::ALL.len();
    }

    pub fn prev_action(&mut self) {
        let len = SuccessAction::ALL.len();
        self.selected_action = (self.selected_action + len - 1) % len;
    }

    /// Position (0.0-1.0) of the submitting indicator's sweep
    pub fn submitting_sweep(&self, now: Instant) -> Option<f32> {
        let since = self.submitting_since?;
        if !self.workflow.is_submitting() {
            return None;
        }
        let elapsed = now.saturating_duration_since(since).as_millis() % SWEEP_PERIOD.as_millis();
        let progress = elapsed as f32 / SWEEP_PERIOD.as_millis() as f32;
        Some(simple_easing::cubic_out(progress))
    }

    /// Move focus to the field a validation error is about
    fn focus_field(&mut self, err: &EnquiryError) {
        let target = match err {
            EnquiryError::MissingField(label) => self
                .fields()
                .iter()
                .position(|f| f.field.label() == *label),
            EnquiryError::InvalidPhone => self
                .fields()
                .iter()
                .position(|f| f.field == EnquiryField::Phone),
            _ => None,
        };
        if let Some(index) = target {
            self.active_field_index = index;
        }
    }
}

impl Form for EnquiryForm {
    fn field_count(&self) -> usize {
        self.fields().len() + 1 // fields, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::{SubmissionOutcome, WorkflowStatus};

    fn focus(form: &mut EnquiryForm, field: EnquiryField) {
        let index = form
            .fields()
            .iter()
            .position(|f| f.field == field)
            .unwrap();
        form.set_active_field(index);
    }

    fn type_text(form: &mut EnquiryForm, field: EnquiryField, text: &str) {
        focus(form, field);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn filled_form(variant: FormVariant) -> EnquiryForm {
        let mut form = EnquiryForm::new(variant);
        type_text(&mut form, EnquiryField::StudentName, "Rahul Patil");
        type_text(&mut form, EnquiryField::ParentName, "Suresh Patil");
        type_text(&mut form, EnquiryField::SchoolName, "ABC High");
        type_text(&mut form, EnquiryField::Phone, "9011141618");
        form.workflow.set_grade(Some(Grade::Tenth));
        form.workflow.set_board(Some(Board::Ssc)).unwrap();
        form
    }

    mod layout {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_section_field_order() {
            let order: Vec<_> = FormVariant::Section
                .fields()
                .iter()
                .map(|f| f.field)
                .collect();
            assert_eq!(
                order,
                vec![
                    EnquiryField::StudentName,
                    EnquiryField::ParentName,
                    EnquiryField::Grade,
                    EnquiryField::Board,
                    EnquiryField::Phone,
                    EnquiryField::SchoolName,
                ]
            );
        }

        #[test]
        fn test_modal_field_order() {
            let order: Vec<_> = FormVariant::Modal
                .fields()
                .iter()
                .map(|f| f.field)
                .collect();
            assert_eq!(
                order,
                vec![
                    EnquiryField::StudentName,
                    EnquiryField::Grade,
                    EnquiryField::Board,
                    EnquiryField::SchoolName,
                    EnquiryField::Phone,
                    EnquiryField::ParentName,
                ]
            );
        }

        #[test]
        fn test_both_variants_cover_required_fields() {
            for variant in [FormVariant::Section, FormVariant::Modal] {
                for required in EnquiryField::REQUIRED {
                    assert!(
                        variant.fields().iter().any(|f| f.field == required),
                        "{variant:?} lacks {required:?}"
                    );
                }
            }
        }

        #[test]
        fn test_board_text_per_variant() {
            assert_eq!(FormVariant::Section.board_text(Board::Ssc), "SSC (State Board)");
            assert_eq!(FormVariant::Modal.board_text(Board::Ssc), "SSC");
        }

        #[test]
        fn test_submit_label_while_submitting() {
            assert_eq!(
                FormVariant::Section.submit_label(WorkflowStatus::Submitting),
                "Submitting..."
            );
            assert_eq!(
                FormVariant::Modal.submit_label(WorkflowStatus::Submitting),
                "Processing..."
            );
            assert_eq!(
                FormVariant::Section.submit_label(WorkflowStatus::Error),
                "Submit Enquiry"
            );
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_submit_row() {
            let form = EnquiryForm::new(FormVariant::Section);
            assert_eq!(form.field_count(), 7);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = EnquiryForm::new(FormVariant::Modal);
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = EnquiryForm::new(FormVariant::Modal);
            form.prev_field();
            assert!(form.is_submit_row_active());
            assert!(form.active_form_field().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 6);
        }

        #[test]
        fn test_success_actions_wrap() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            form.prev_action();
            assert_eq!(form.selected_success_action(), SuccessAction::Dismiss);
            form.next_action();
            assert_eq!(form.selected_success_action(), SuccessAction::Confirm);
        }
    }

    mod input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_updates_record() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            type_text(&mut form, EnquiryField::StudentName, "Asha");
            assert_eq!(form.workflow.record().student_name, "Asha");
            form.backspace();
            assert_eq!(form.workflow.record().student_name, "Ash");
        }

        #[test]
        fn test_phone_accepts_only_ten_digits() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            type_text(&mut form, EnquiryField::Phone, "90-11 14a1618999");
            assert_eq!(form.workflow.record().phone, "9011141618");
        }

        #[test]
        fn test_board_disabled_until_grade_chosen() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            focus(&mut form, EnquiryField::Board);
            assert!(!form.is_field_enabled(EnquiryField::Board));
            assert!(!form.cycle_choice(true));
            assert!(!form.input_char(' '));
            assert_eq!(form.workflow.record().board(), None);
        }

        #[test]
        fn test_space_steps_board_once_grade_chosen() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            form.workflow.set_grade(Some(Grade::Tenth));
            focus(&mut form, EnquiryField::Board);
            assert!(form.input_char(' '));
            assert!(form.workflow.record().board().is_some());
        }

        #[test]
        fn test_grade_cycle_clears_board() {
            let mut form = filled_form(FormVariant::Section);
            focus(&mut form, EnquiryField::Grade);
            assert!(form.cycle_choice(true));
            assert_eq!(form.workflow.record().grade(), Some(Grade::Eleventh));
            assert_eq!(form.workflow.record().board(), None);
        }

        #[test]
        fn test_board_cycle_uses_grade_options() {
            let mut form = EnquiryForm::new(FormVariant::Modal);
            form.workflow.set_grade(Some(Grade::Twelfth));
            focus(&mut form, EnquiryField::Board);
            assert!(form.cycle_choice(true));
            assert_eq!(form.workflow.record().board(), Some(Board::Science));
            assert!(form.input_char(' '));
            assert_eq!(form.workflow.record().board(), Some(Board::Commerce));
        }

        #[test]
        fn test_typing_into_choice_is_refused() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            focus(&mut form, EnquiryField::Grade);
            assert!(!form.input_char('5'));
            assert!(!form.is_typing());
        }

        #[test]
        fn test_display_value_for_choices() {
            let form = filled_form(FormVariant::Section);
            assert_eq!(form.display_value(EnquiryField::Grade), "10th Standard");
            assert_eq!(form.display_value(EnquiryField::Board), "SSC (State Board)");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_form_is_not_submitted() {
            let mut form = EnquiryForm::new(FormVariant::Section);
            let err = form.try_submit().unwrap_err();
            assert_eq!(err, EnquiryError::MissingField("Student Name"));
            assert_eq!(form.status(), WorkflowStatus::Idle);
        }

        #[test]
        fn test_invalid_phone_focuses_phone() {
            let mut form = filled_form(FormVariant::Modal);
            focus(&mut form, EnquiryField::Phone);
            form.backspace();
            form.set_active_field(0);

            assert_eq!(form.try_submit(), Err(EnquiryError::InvalidPhone));
            assert_eq!(
                form.active_form_field().map(|f| f.field),
                Some(EnquiryField::Phone)
            );
        }

        #[test]
        fn test_missing_board_focuses_board() {
            let mut form = filled_form(FormVariant::Section);
            form.workflow.set_grade(Some(Grade::Eleventh));
            assert!(form.try_submit().is_err());
            assert_eq!(
                form.active_form_field().map(|f| f.field),
                Some(EnquiryField::Board)
            );
        }

        #[test]
        fn test_valid_form_starts_submission() {
            let mut form = filled_form(FormVariant::Section);
            let ticket = form.try_submit().unwrap().unwrap();
            assert_eq!(form.status(), WorkflowStatus::Submitting);
            assert_eq!(ticket.record().student_name, "Rahul Patil");
            assert!(form.submitting_since.is_some());
        }

        #[test]
        fn test_second_submit_ignored_while_in_flight() {
            let mut form = filled_form(FormVariant::Section);
            form.try_submit().unwrap().unwrap();
            assert_eq!(form.try_submit(), Ok(None));
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = filled_form(FormVariant::Modal);
            form.try_submit().unwrap().unwrap();
            form.active_field_index = 3;
            form.reset();
            assert_eq!(form.status(), WorkflowStatus::Idle);
            assert!(form.workflow.record().is_empty());
            assert_eq!(form.active_field_index, 0);
            assert!(form.submitting_since.is_none());
        }

        #[test]
        fn test_submission_finished_resets_focus_on_success() {
            let mut form = filled_form(FormVariant::Section);
            let ticket = form.try_submit().unwrap().unwrap();
            form.workflow.resolve(ticket.id(), SubmissionOutcome::Accepted);
            form.submission_finished();
            assert_eq!(form.active_field_index, 0);
            assert!(form.submitting_since.is_none());
            assert!(!form.status().shows_form());
        }

        #[test]
        fn test_sweep_only_while_submitting() {
            let mut form = filled_form(FormVariant::Section);
            let now = Instant::now();
            assert_eq!(form.submitting_sweep(now), None);

            form.try_submit().unwrap().unwrap();
            let sweep = form.submitting_sweep(Instant::now()).unwrap();
            assert!((0.0..=1.0).contains(&sweep));
        }
    }
}
