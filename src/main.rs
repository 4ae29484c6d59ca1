#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod cache;
mod cli;
mod config;
mod date;
mod error;
mod fetch;
mod menu;
mod parse;

use std::{env, process::ExitCode};

use crate::{
    cli::{Command, Outcome},
    config::Config,
};

pub use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let outcome = match cli::parse_args(env::args_os()) {
        Command::Help => Outcome::help(),
        Command::Usage => Outcome::usage(),
        command => {
            let today = chrono::Local::now().date_naive();
            cli::execute(command, &Config::from_env(), today).await
        }
    };
    outcome.emit()
}
