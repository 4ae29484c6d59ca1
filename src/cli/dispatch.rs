use std::process::ExitCode;

use chrono::{Datelike, NaiveDate};

use super::{args::USAGE, Command};
use crate::{
    cache::Store,
    config::Config,
    date::{resolve, LookupKey},
    error::Error,
    fetch::{RuSite, WeekSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Usage,
    Failure,
    NotFound,
}

impl Status {
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Usage => 1,
            Self::Failure => 2,
            Self::NotFound => 3,
        }
    }
}

/// Everything a run prints, decided before anything is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl Outcome {
    const fn new(status: Status, stdout: Option<String>, stderr: Option<String>) -> Self {
        Self {
            status,
            stdout,
            stderr,
        }
    }

    pub fn help() -> Self {
        Self::new(Status::Success, Some(USAGE.to_string()), None)
    }

    pub fn usage() -> Self {
        Self::new(Status::Usage, Some(USAGE.to_string()), None)
    }

    pub fn failure(e: &Error) -> Self {
        log::debug!("run failed: {e:?}");
        Self::new(Status::Failure, None, Some(e.user_message()))
    }

    fn not_found(key: &LookupKey) -> Self {
        Self::new(Status::NotFound, Some(format!("Data invalida({key}).")), None)
    }

    fn menu(text: String) -> Self {
        Self::new(Status::Success, Some(text), None)
    }

    pub fn emit(self) -> ExitCode {
        if let Some(out) = self.stdout {
            println!("{out}");
        }
        if let Some(err) = self.stderr {
            eprintln!("{err}");
        }
        ExitCode::from(self.status.code())
    }
}

/// Runs one command against the configured cache and site.
pub async fn execute(command: Command, config: &Config, today: NaiveDate) -> Outcome {
    let store = Store::open(&config.cache);
    log::debug!("{store:?}");
    run(command, &store, &RuSite::new(config), today).await
}

/// Runs one command. `today` is the local calendar date.
pub async fn run(
    command: Command,
    store: &Store,
    source: &impl WeekSource,
    today: NaiveDate,
) -> Outcome {
    match command {
        Command::Help => Outcome::help(),
        Command::Usage => Outcome::usage(),
        Command::Clear => match store.clear().await {
            Ok(removed) => {
                log::info!("cache cleared (record existed: {removed})");
                Outcome::new(Status::Success, None, None)
            }
            Err(e) => Outcome::failure(&e),
        },
        Command::Lookup(token) => {
            let key = resolve(&token, today);
            match store.load_or_fetch(source, today.day()).await {
                Ok(loaded) => {
                    log::debug!("week menu from {:?}", loaded.origin);
                    loaded.week.lookup(&key).map_or_else(
                        || Outcome::not_found(&key),
                        |text| Outcome::menu(text.into_owned()),
                    )
                }
                Err(e) => Outcome::failure(&e),
            }
        }
    }
}
