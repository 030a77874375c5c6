use crate::{conf::Settings, pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod migrate;

#[derive(Parser)]
#[command(about = "student resume analysis service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    Migrate,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    let settings = Settings::new()?;
    match args.command {
        Some(SubCommandType::Listen) => {
            listen(settings).await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply(&settings).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
