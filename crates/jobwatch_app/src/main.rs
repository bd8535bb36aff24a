//! `jobwatch`: follows a backend extraction/identification job in the terminal.
//!
//! Usage:
//!     jobwatch --kind articles --job-id 123
//!     jobwatch --kind requirements --legal-basis 42 --log terminal

mod app;
mod cli;
mod config;
mod effects;
mod logging;
mod render;

use clap::Parser;
use watch_logging::watch_info;

use crate::effects::Exit;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::initialize(args.log);

    match app::run(args)? {
        Exit::Completed { job_id } => {
            watch_info!("job {} completed", job_id);
            println!("Job {job_id} completed.");
        }
        Exit::Closed => watch_info!("closed by user"),
        Exit::NoPendingJob { owner_id } => {
            watch_info!("no pending job for legal basis {}", owner_id);
            println!("No pending job for legal basis {owner_id}.");
        }
    }
    Ok(())
}
