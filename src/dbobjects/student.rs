use core::fmt;

use crate::error::{ManagerErr, Result};

pub const SUBJECT_COUNT: usize = 3;
pub const MIN_MARK: i32 = 0;
pub const MAX_MARK: i32 = 100;
pub const PASS_MARK: i32 = 40;

pub type RollNumber = i32;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// Three subject marks, each inside `[MIN_MARK, MAX_MARK]`.
/// Only obtainable through `Marks::new`, so holding one means it was validated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Marks([i32; SUBJECT_COUNT]);

impl Marks {
    pub fn new(marks: [i32; SUBJECT_COUNT]) -> Result<Self> {
        validate_marks(&marks)?;
        Ok(Self(marks))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn average(&self) -> f64 {
        average(&self.0)
    }

    pub fn status(&self) -> ResultStatus {
        status(&self.0)
    }
}

/// Fails on the first mark outside the allowed range, reporting its 1-based subject index.
pub fn validate_marks(marks: &[i32]) -> Result<()> {
    match marks.iter().enumerate().find(|(_, m)| !(MIN_MARK..=MAX_MARK).contains(*m)) {
        Some((i, m)) => Err(ManagerErr::InvalidMarks { subject: i + 1, value: *m }),
        None => Ok(()),
    }
}

pub fn average(marks: &[i32]) -> f64 {
    let sum: i64 = marks.iter().map(|m| *m as i64).sum();
    sum as f64 / SUBJECT_COUNT as f64
}

pub fn status(marks: &[i32]) -> ResultStatus {
    if marks.iter().any(|m| *m < PASS_MARK) {
        ResultStatus::Fail
    } else {
        ResultStatus::Pass
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StudentRecord {
    pub roll_number: RollNumber,
    pub name: String,
    marks: Marks,
}

impl StudentRecord {
    pub fn new(roll_number: RollNumber, name: String, marks: [i32; SUBJECT_COUNT]) -> Result<Self> {
        Ok(Self {
            roll_number,
            name,
            marks: Marks::new(marks)?,
        })
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn average(&self) -> f64 {
        self.marks.average()
    }

    pub fn status(&self) -> ResultStatus {
        self.marks.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asha_passes() {
        let record = StudentRecord::new(1, "Asha".to_string(), [90, 85, 42]).unwrap();
        assert!((record.average() - 72.333_333_333_333_33).abs() < 1e-9);
        assert_eq!(record.status(), ResultStatus::Pass);
        assert_eq!(record.marks().as_slice(), &[90, 85, 42]);
    }

    #[test]
    fn ravi_rejected_on_first_subject() {
        let err = StudentRecord::new(2, "Ravi".to_string(), [101, 50, 60]).unwrap_err();
        assert!(matches!(err, ManagerErr::InvalidMarks { subject: 1, value: 101 }));
    }

    #[test]
    fn lee_fails_with_even_average() {
        let record = StudentRecord::new(3, "Lee".to_string(), [30, 40, 50]).unwrap();
        assert_eq!(record.average(), 40.0);
        assert_eq!(record.status(), ResultStatus::Fail);
    }

    #[test]
    fn first_violation_wins() {
        let err = validate_marks(&[50, -1, 200]).unwrap_err();
        assert!(matches!(err, ManagerErr::InvalidMarks { subject: 2, value: -1 }));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_marks(&[0, 100, 40]).is_ok());
        assert!(validate_marks(&[0, 100, 101]).is_err());
        assert_eq!(status(&[40, 40, 40]), ResultStatus::Pass);
        assert_eq!(status(&[39, 100, 100]), ResultStatus::Fail);
    }

    #[test]
    fn empty_name_allowed() {
        let record = StudentRecord::new(7, String::new(), [0, 0, 0]).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.average(), 0.0);
    }
}
