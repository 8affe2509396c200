use crate::prelude::{
    AppError, Phonebook, Session, StorageMediums,
    command::Cli,
    storage::parse_storage_type,
};
use clap::Parser;
use dotenv::dotenv;
use std::io;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PHONEBOOK_LOG=debug`.
pub const LOG_ENV: &str = "PHONEBOOK_LOG";

fn init_tracing() {
    // Logs go to stderr; stdout belongs to the interactive session.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var(LOG_ENV)
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .try_init();
}

pub fn run_app() -> Result<(), AppError> {
    // .env values are visible to clap's `env` fallbacks below.
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let medium = StorageMediums::from(&cli.storage_choice)?;

    let storage = parse_storage_type(medium, &cli.file)?;
    let mut phonebook = Phonebook::new(storage)?;
    info!(
        medium = phonebook.medium(),
        file = %cli.file,
        records = phonebook.count(),
        "phonebook ready"
    );

    let stdin = io::stdin();
    let mut session = Session::new(&mut phonebook, stdin.lock(), io::stdout());
    session.run()
}
