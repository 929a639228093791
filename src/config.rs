use clap::ValueEnum;

/// What happens when the menu prompt receives something other than an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MenuMismatch {
    /// Leave the menu loop and close the manager.
    #[default]
    Fatal,
    /// Report the mismatch, drop the line and show the menu again.
    Recover,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: bool,
    pub menu_mismatch: MenuMismatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: false,
            menu_mismatch: MenuMismatch::Fatal,
        }
    }
}
