//! Class and board/stream choices
//!
//! The board selector depends on the selected class: higher secondary
//! classes pick a stream, every other class picks a school board.

use super::error::EnquiryError;
use std::fmt;
use std::str::FromStr;

/// School year offered by the academy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl Grade {
    /// All classes in display order
    pub const ALL: [Grade; 8] = [
        Grade::Fifth,
        Grade::Sixth,
        Grade::Seventh,
        Grade::Eighth,
        Grade::Ninth,
        Grade::Tenth,
        Grade::Eleventh,
        Grade::Twelfth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Fifth => "5th Standard",
            Self::Sixth => "6th Standard",
            Self::Seventh => "7th Standard",
            Self::Eighth => "8th Standard",
            Self::Ninth => "9th Standard",
            Self::Tenth => "10th Standard",
            Self::Eleventh => "11th Standard",
            Self::Twelfth => "12th Standard",
        }
    }

    /// 11th and 12th choose a stream instead of a board
    pub fn is_higher_secondary(self) -> bool {
        matches!(self, Self::Eleventh | Self::Twelfth)
    }

    /// Look up a class by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.label() == label)
    }

    /// Step through the class list, wrapping at both ends.
    /// `None` steps to the first (or last) class.
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        let len = Self::ALL.len();
        let next = match current.and_then(|g| Self::ALL.iter().position(|x| *x == g)) {
            None if forward => 0,
            None => len - 1,
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
        };
        Self::ALL[next]
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = EnquiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| EnquiryError::UnknownGrade(s.to_string()))
    }
}

/// Board (classes 5-10) or stream (classes 11-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Board {
    Ssc,
    Cbse,
    Science,
    Commerce,
}

impl Board {
    /// Value submitted with the enquiry
    pub fn label(self) -> &'static str {
        match self {
            Self::Ssc => "SSC",
            Self::Cbse => "CBSE",
            Self::Science => "Science",
            Self::Commerce => "Commerce",
        }
    }

    /// Longer text for roomy layouts
    pub fn description(self) -> &'static str {
        match self {
            Self::Ssc => "SSC (State Board)",
            other => other.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [Self::Ssc, Self::Cbse, Self::Science, Self::Commerce]
            .into_iter()
            .find(|board| board.label() == label)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const SCHOOL_BOARDS: &[Board] = &[Board::Ssc, Board::Cbse];
const STREAMS: &[Board] = &[Board::Science, Board::Commerce];

/// Valid board/stream options for a class, in display order.
///
/// An unset class gets the school boards, same as classes 5-10.
pub fn board_options(grade: Option<Grade>) -> &'static [Board] {
    match grade {
        Some(grade) if grade.is_higher_secondary() => STREAMS,
        _ => SCHOOL_BOARDS,
    }
}

/// [`board_options`] over a raw class label; unknown labels get the default set.
#[allow(dead_code)]
pub fn board_options_for_label(label: &str) -> &'static [Board] {
    board_options(Grade::from_label(label))
}

pub fn is_board_offered(grade: Option<Grade>, board: Board) -> bool {
    board_options(grade).contains(&board)
}

/// Step through the options valid for `grade`, wrapping at both ends.
/// A current value that isn't offered restarts from the first (or last) option.
pub fn cycle_board(grade: Option<Grade>, current: Option<Board>, forward: bool) -> Board {
    let options = board_options(grade);
    let len = options.len();
    let next = match current.and_then(|b| options.iter().position(|x| *x == b)) {
        None if forward => 0,
        None => len - 1,
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
    };
    options[next]
}
