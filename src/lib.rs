pub mod cli;
pub mod config;
pub mod dbobjects;
pub mod error;
pub mod record_store;
pub mod shell;

pub use error::{ManagerErr, Result};
