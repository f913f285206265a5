//! Enquiry record and submitted snapshot

use super::board::{board_options, is_board_offered, Board, Grade};
use super::error::EnquiryError;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Addressable fields of an [`EnquiryRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnquiryField {
    StudentName,
    ParentName,
    Grade,
    Board,
    SchoolName,
    Address,
    Phone,
    Email,
    Message,
}

impl EnquiryField {
    /// Fields that must be present before submitting, in reporting order
    pub const REQUIRED: [EnquiryField; 6] = [
        EnquiryField::StudentName,
        EnquiryField::ParentName,
        EnquiryField::Grade,
        EnquiryField::Board,
        EnquiryField::SchoolName,
        EnquiryField::Phone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::StudentName => "Student Name",
            Self::ParentName => "Parent Name",
            Self::Grade => "Class",
            Self::Board => "Board / Stream",
            Self::SchoolName => "School Name",
            Self::Address => "Address",
            Self::Phone => "Mobile Number",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Grade and board are picked from a list rather than typed
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Grade | Self::Board)
    }
}

/// Returns true for exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

fn serialize_choice<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: fmt::Display,
{
    match value {
        Some(choice) => serializer.collect_str(choice),
        None => serializer.serialize_str(""),
    }
}

/// The admission enquiry being filled in.
///
/// Class and board are private so that a class change always clears the
/// board in the same step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryRecord {
    pub student_name: String,
    pub parent_name: String,
    #[serde(serialize_with = "serialize_choice")]
    grade: Option<Grade>,
    #[serde(serialize_with = "serialize_choice")]
    board: Option<Board>,
    pub school_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl EnquiryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    pub fn board(&self) -> Option<Board> {
        self.board
    }

    /// Set the class. Any previously chosen board is cleared.
    pub fn set_grade(&mut self, grade: Option<Grade>) {
        self.grade = grade;
        self.board = None;
    }

    /// Set the board, which must be offered for the current class
    pub fn set_board(&mut self, board: Option<Board>) -> Result<(), EnquiryError> {
        if let Some(board) = board {
            if !is_board_offered(self.grade, board) {
                return Err(EnquiryError::BoardNotOffered {
                    board: board.label().to_string(),
                    grade: self
                        .grade
                        .map_or("no class selected", Grade::label)
                        .to_string(),
                });
            }
        }
        self.board = board;
        Ok(())
    }

    /// Options currently valid for the board field
    pub fn board_options(&self) -> &'static [Board] {
        board_options(self.grade)
    }

    /// Apply a raw edit to one field.
    ///
    /// Class labels that aren't recognised leave the class unset (and the
    /// board cleared). Board labels must name a board offered for the class.
    pub fn set_field(&mut self, field: EnquiryField, value: String) -> Result<(), EnquiryError> {
        match field {
            EnquiryField::StudentName => self.student_name = value,
            EnquiryField::ParentName => self.parent_name = value,
            EnquiryField::SchoolName => self.school_name = value,
            EnquiryField::Address => self.address = value,
            EnquiryField::Phone => self.phone = value,
            EnquiryField::Email => self.email = value,
            EnquiryField::Message => self.message = value,
            EnquiryField::Grade => self.set_grade(Grade::from_label(&value)),
            EnquiryField::Board => {
                if value.is_empty() {
                    self.board = None;
                } else {
                    let board =
                        Board::from_label(&value).ok_or(EnquiryError::UnknownBoard(value))?;
                    self.set_board(Some(board))?;
                }
            }
        }
        Ok(())
    }

    /// Current value of a field as displayed/submitted
    pub fn value(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::StudentName => &self.student_name,
            EnquiryField::ParentName => &self.parent_name,
            EnquiryField::SchoolName => &self.school_name,
            EnquiryField::Address => &self.address,
            EnquiryField::Phone => &self.phone,
            EnquiryField::Email => &self.email,
            EnquiryField::Message => &self.message,
            EnquiryField::Grade => self.grade.map_or("", Grade::label),
            EnquiryField::Board => self.board.map_or("", Board::label),
        }
    }

    /// Mutable access to a free-text field; `None` for choice fields
    pub fn text_mut(&mut self, field: EnquiryField) -> Option<&mut String> {
        match field {
            EnquiryField::StudentName => Some(&mut self.student_name),
            EnquiryField::ParentName => Some(&mut self.parent_name),
            EnquiryField::SchoolName => Some(&mut self.school_name),
            EnquiryField::Address => Some(&mut self.address),
            EnquiryField::Phone => Some(&mut self.phone),
            EnquiryField::Email => Some(&mut self.email),
            EnquiryField::Message => Some(&mut self.message),
            EnquiryField::Grade | EnquiryField::Board => None,
        }
    }

    /// Text fields count as present when they hold non-whitespace text,
    /// choice fields when a value is selected.
    pub fn is_present(&self, field: EnquiryField) -> bool {
        match field {
            EnquiryField::Grade => self.grade.is_some(),
            EnquiryField::Board => self.board.is_some(),
            other => has_text(self.value(other)),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check the constraints that must hold before submitting
    pub fn validate(&self) -> Result<(), EnquiryError> {
        if let Some(missing) = EnquiryField::REQUIRED
            .into_iter()
            .find(|field| !self.is_present(*field))
        {
            return Err(EnquiryError::MissingField(missing.label()));
        }
        if !is_valid_phone(&self.phone) {
            return Err(EnquiryError::InvalidPhone);
        }
        Ok(())
    }
}

/// Copy of a record taken when the academy accepted it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedSnapshot {
    record: EnquiryRecord,
    submitted_at: DateTime<Utc>,
}

impl SubmittedSnapshot {
    pub fn new(record: EnquiryRecord, submitted_at: DateTime<Utc>) -> Self {
        Self {
            record,
            submitted_at,
        }
    }

    pub fn record(&self) -> &EnquiryRecord {
        &self.record
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// A complete, valid record shared by tests across the crate
#[cfg(test)]
pub(crate) fn filled_record() -> EnquiryRecord {
    let mut record = EnquiryRecord::new();
    record.student_name = "Rahul Patil".to_string();
    record.parent_name = "Suresh Patil".to_string();
    record.set_grade(Some(Grade::Tenth));
    record.board = Some(Board::Ssc);
    record.school_name = "ABC High".to_string();
    record.phone = "9011141618".to_string();
    record
}
