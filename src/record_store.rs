use tracing::{debug, info};

use crate::dbobjects::student::{RollNumber, StudentRecord};
use crate::error::{ManagerErr, Result};
use crate::shell::Host;

pub const DEFAULT_CAPACITY: usize = 50;

/// Append-only, insertion-ordered store with a checked record limit.
#[derive(Debug, PartialEq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    capacity: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Returns the position the record was stored at.
    pub fn push(&mut self, record: StudentRecord) -> Result<usize> {
        if self.is_full() {
            return Err(ManagerErr::StorageFull { capacity: self.capacity });
        }
        info!(roll = record.roll_number, slot = self.records.len(), "record stored");
        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    /// Earliest inserted record with a matching roll number.
    pub fn find(&self, roll_number: RollNumber) -> Option<&StudentRecord> {
        let found = self.records.iter().find(|record| record.roll_number == roll_number);
        debug!(roll = roll_number, hit = found.is_some(), "record lookup");
        found
    }
}

impl Host for RecordStore {
    fn is_full(&self) -> bool {
        RecordStore::is_full(self)
    }

    fn add_student(&mut self, record: StudentRecord) -> Result<usize> {
        self.push(record)
    }

    fn find_student(&self, roll_number: RollNumber) -> Option<&StudentRecord> {
        self.find(roll_number)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
