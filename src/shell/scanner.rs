use std::io::BufRead;

use crate::error::{ManagerErr, Result};

/// Whitespace-token reader over a line-oriented input stream.
///
/// Integer reads skip blank space across line boundaries and leave a malformed
/// token in place; line reads hand back whatever is left of the current line.
pub struct Scanner<R> where R: BufRead {
    reader: R,
    line: String,
    pos: usize,
    loaded: bool,
}

impl<R> Scanner<R> where R: BufRead {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            loaded: false,
        }
    }

    fn fill(&mut self) -> Result<bool> {
        self.line.clear();
        self.pos = 0;
        self.loaded = false;
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(false)
        }
        // undecodable bytes become U+FFFD rather than ending the session
        self.line.push_str(&String::from_utf8_lossy(&bytes));
        let trimmed = self.line.trim_end_matches(['\n', '\r']).len();
        self.line.truncate(trimmed);
        self.loaded = true;
        Ok(true)
    }

    pub fn next_int(&mut self) -> Result<i32> {
        loop {
            if self.loaded {
                let rest = &self.line[self.pos..];
                let token_start = rest.trim_start();
                if !token_start.is_empty() {
                    let skipped = rest.len() - token_start.len();
                    let len = token_start.find(char::is_whitespace).unwrap_or(token_start.len());
                    let token = &token_start[..len];
                    return match token.parse::<i32>() {
                        Ok(value) => {
                            self.pos += skipped + len;
                            Ok(value)
                        }
                        Err(_) => {
                            let token = token.to_string();
                            self.pos += skipped;
                            Err(ManagerErr::TypeMismatch { token })
                        }
                    }
                }
            }
            if !self.fill()? {
                return Err(ManagerErr::EndOfInput)
            }
        }
    }

    pub fn next_line(&mut self) -> Result<String> {
        if !self.loaded && !self.fill()? {
            return Err(ManagerErr::EndOfInput)
        }
        let rest = self.line[self.pos..].to_string();
        self.loaded = false;
        self.pos = self.line.len();
        Ok(rest)
    }

    pub fn discard_line(&mut self) -> Result<()> {
        self.next_line().map(|_| ())
    }
}
