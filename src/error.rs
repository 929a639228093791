use core::fmt;

pub type Result<T> = core::result::Result<T, ManagerErr>;

#[derive(Debug)]
pub enum ManagerErr {
    InvalidMarks { subject: usize, value: i32 }, // subject is 1-based
    TypeMismatch { token: String },
    StorageFull { capacity: usize },
    EndOfInput,
    Io(std::io::Error),
}

impl fmt::Display for ManagerErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMarks { subject, value } => {
                write!(f, "Invalid marks for subject {}: {}", subject, value)
            }
            Self::TypeMismatch { token } => {
                write!(f, "Expected an integer, found \"{}\"", token)
            }
            Self::StorageFull { capacity } => {
                write!(f, "Student storage full ({} records).", capacity)
            }
            Self::EndOfInput => write!(f, "Input stream closed."),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<std::io::Error> for ManagerErr {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::error::Error for ManagerErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
