
use super::command::*;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseErr {
    UnknownChoice(i32),
}

pub struct Parser {
}

impl Parser {
    pub fn parse(&self, choice: i32) -> Result<Command, ParseErr> {
        match choice {
            1 => Ok(Command::AddStudent),
            2 => Ok(Command::ShowStudent),
            3 => Ok(Command::Exit),
            n => Err(ParseErr::UnknownChoice(n)),
        }
    }
}
