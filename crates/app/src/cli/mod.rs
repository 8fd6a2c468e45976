use clap::{Parser, Subcommand};

use crust_app::config::LoggingConfig;

mod quote;

#[derive(Debug, Parser)]
#[command(name = "crust-app", about = "Crust CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price an order against a menu and print the receipt
    Quote(quote::QuoteArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Quote(args) => quote::run(&args).await,
        }
    }
}
