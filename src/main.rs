use clap::Parser;
use result_manager::cli::CommandLine;
use result_manager::config::Config;
use result_manager::record_store::RecordStore;
use result_manager::shell::Shell;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from(CommandLine::parse());
    let mut store = RecordStore::new();

    let stdin = std::io::stdin();
    let shell = Shell::new(&mut store, stdin.lock(), std::io::stdout(), config);
    if let Err(e) = shell.start() {
        error!("{}", e);
    }
}
