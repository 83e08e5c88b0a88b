mod commands;
mod config;
mod emojis;
mod filters;
mod storages;
mod utils;

use clap::Parser;
use config::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    pretty_env_logger::init();
    log::info!("Starting ledgermoji...");

    match commands::execute(args.command).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{} {}", emojis::ERROR, e);
            std::process::exit(1);
        }
    }
}
