use clap::Parser;

use crate::config::{Config, MenuMismatch};

#[derive(Debug, Parser)]
#[clap(name = "result_manager", about = "Interactive student result manager")]
pub struct CommandLine {
    #[clap(long, action)]
    pub color: bool,
    #[clap(long = "menu-mismatch", value_enum, default_value_t = MenuMismatch::Fatal)]
    pub menu_mismatch: MenuMismatch,
}

impl From<CommandLine> for Config {
    fn from(value: CommandLine) -> Self {
        Self {
            color: value.color,
            menu_mismatch: value.menu_mismatch,
        }
    }
}
