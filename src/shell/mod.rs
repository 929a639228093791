
pub mod command;
pub mod display;
pub mod parser;
pub mod scanner;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use self::command::Command;
use self::parser::{ParseErr, Parser};
use self::scanner::Scanner;
use crate::config::{Config, MenuMismatch};
use crate::dbobjects::student::{RollNumber, StudentRecord, SUBJECT_COUNT};
use crate::error::{ManagerErr, Result};

const MENU: &str = "=====Student Result Management System =====\n\
                    1. Add Student\n\
                    2. Show Student Details\n\
                    3. Exit\n";

/// Storage the shell operates on.
pub trait Host {
    fn is_full(&self) -> bool;
    fn add_student(&mut self, record: StudentRecord) -> Result<usize>;
    fn find_student(&self, roll_number: RollNumber) -> Option<&StudentRecord>;
}

pub struct Shell<'a, T, R, W> where T: Host, R: BufRead, W: Write {
    host: &'a mut T,
    scanner: Scanner<R>,
    out: W,
    config: Config,
}

impl<'a, T, R, W> Shell<'a, T, R, W> where T: Host, R: BufRead, W: Write {
    pub fn new(host_: &'a mut T, input: R, out_: W, config_: Config) -> Self {
        Self {
            host: host_,
            scanner: Scanner::new(input),
            out: out_,
            config: config_,
        }
    }

    /// Runs the menu until exit, end of input or a fatal menu mismatch.
    /// The closing message is written and the input released on every path.
    pub fn start(mut self) -> Result<W> {
        let outcome = match self.main_loop() {
            Err(ManagerErr::EndOfInput) => {
                info!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        };

        let Self { scanner, mut out, .. } = self;
        let closed = writeln!(out, "Closing manager. Goodbye.").and_then(|_| out.flush());
        drop(scanner);

        outcome?;
        closed?;
        Ok(out)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn error_line(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", display::paint_error(message, self.config.color))?;
        Ok(())
    }

    fn main_loop(&mut self) -> Result<()> {
        let parser = Parser {};
        loop {
            write!(self.out, "{}", MENU)?;
            self.prompt("Enter your choice: ")?;

            let choice = match self.scanner.next_int() {
                Ok(inner) => inner,
                Err(ManagerErr::TypeMismatch { token }) => {
                    warn!(%token, "non-integer menu choice");
                    self.error_line("Input mismatch: please enter the correct data type.")?;
                    match self.config.menu_mismatch {
                        MenuMismatch::Fatal => return Ok(()),
                        MenuMismatch::Recover => {
                            self.scanner.discard_line()?;
                            continue;
                        }
                    }
                }
                Err(e) => return Err(e),
            };
            self.scanner.discard_line()?;

            match parser.parse(choice) {
                Ok(command) => {
                    debug!(?command, "dispatch");
                    match command {
                        Command::AddStudent => self.add_student()?,
                        Command::ShowStudent => self.show_student()?,
                        Command::Exit => {
                            writeln!(self.out, "Exiting program. Thank you!")?;
                            return Ok(())
                        }
                    }
                }
                Err(ParseErr::UnknownChoice(n)) => {
                    debug!(choice = n, "unknown menu choice");
                    writeln!(self.out, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn read_student(&mut self) -> Result<StudentRecord> {
        self.prompt("Enter Roll Number: ")?;
        let roll_number = self.scanner.next_int()?;
        self.scanner.discard_line()?;
        self.prompt("Enter Student Name: ")?;
        let name = self.scanner.next_line()?;

        let mut marks = [0; SUBJECT_COUNT];
        for (i, mark) in marks.iter_mut().enumerate() {
            self.prompt(&format!("Enter marks for subject {}: ", i + 1))?;
            *mark = self.scanner.next_int()?;
        }
        StudentRecord::new(roll_number, name, marks)
    }

    fn add_student(&mut self) -> Result<()> {
        if self.host.is_full() {
            warn!("add rejected, store full");
            return self.error_line("Student storage full.")
        }

        let record = match self.read_student() {
            Ok(inner) => inner,
            Err(e @ ManagerErr::InvalidMarks { .. }) => {
                warn!(%e, "record rejected");
                return self.error_line(&format!("Error:{} Returning to main menu...", e))
            }
            Err(ManagerErr::TypeMismatch { token }) => {
                warn!(%token, "non-integer record field");
                self.error_line("Input mismatch encountered. Returning to main menu...")?;
                return self.scanner.discard_line()
            }
            Err(e) => return Err(e),
        };

        match self.host.add_student(record) {
            Ok(_) => {
                writeln!(self.out, "Student added successfully. Returning to main menu...")?;
                Ok(())
            }
            Err(ManagerErr::StorageFull { .. }) => self.error_line("Student storage full."),
            Err(e) => Err(e),
        }
    }

    fn show_student(&mut self) -> Result<()> {
        self.prompt("Enter Roll Number to search: ")?;
        let roll_number = match self.scanner.next_int() {
            Ok(inner) => inner,
            Err(ManagerErr::TypeMismatch { token }) => {
                warn!(%token, "non-integer roll number");
                self.error_line("Invalid input for roll number.")?;
                return self.scanner.discard_line()
            }
            Err(e) => return Err(e),
        };

        match self.host.find_student(roll_number) {
            Some(record) => display::write_record(&mut self.out, record, self.config.color)?,
            None => writeln!(self.out, "Student not found.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_store::RecordStore;
    use std::io::Cursor;

    fn run(input: &str, store: &mut RecordStore, config: Config) -> String {
        let shell = Shell::new(store, Cursor::new(input.to_string()), Vec::new(), config);
        String::from_utf8(shell.start().unwrap()).unwrap()
    }

    #[test]
    fn exit_prints_closing() {
        let mut store = RecordStore::new();
        let out = run("3\n", &mut store, Config::default());
        assert!(out.starts_with(MENU));
        assert!(out.ends_with("Enter your choice: Exiting program. Thank you!\nClosing manager. Goodbye.\n"));
    }

    #[test]
    fn end_of_input_still_closes() {
        let mut store = RecordStore::new();
        let out = run("1\n4\nPartial\n", &mut store, Config::default());
        assert!(out.ends_with("Enter marks for subject 1: Closing manager. Goodbye.\n"));
        assert!(store.is_empty());
    }

    #[test]
    fn recover_policy_keeps_menu_alive() {
        let mut store = RecordStore::new();
        let config = Config { menu_mismatch: MenuMismatch::Recover, ..Config::default() };
        let out = run("x\n3\n", &mut store, config);
        assert_eq!(out.matches("Input mismatch: please enter the correct data type.").count(), 1);
        assert!(out.contains("Exiting program. Thank you!"));
    }

    #[test]
    fn full_store_skips_prompts() {
        let mut store = RecordStore::with_capacity(0);
        let out = run("1\n3\n", &mut store, Config::default());
        assert!(out.contains("Student storage full."));
        assert!(!out.contains("Enter Roll Number: "));
    }
}
