//! Runtime configuration, read once from the environment at startup.
//!
//! - `RU_URL`: menu page (default `https://ru.ufsc.br/ru/`), checked only
//!   when the page is fetched so `clear` works with a broken value
//! - `RU_CACHE`: cache file path, or `:memory:` to never persist
//! - `RU_TIMEOUT_SECS`: request timeout in seconds (default 10)

use std::{env, path::PathBuf, time::Duration};

/// Application name used for the cache directory.
const APP_NAME: &str = "ru_watcher";
const CACHE_FILE: &str = "week_menu.json";
const DEFAULT_URL: &str = "https://ru.ufsc.br/ru/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub cache: CacheLocation,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok(), dirs::cache_dir())
    }

    fn from_vars(
        var: impl Fn(&str) -> Option<String>,
        cache_dir: Option<PathBuf>,
    ) -> Self {
        let url = var("RU_URL").unwrap_or_else(|| DEFAULT_URL.to_string());

        let cache = match var("RU_CACHE").as_deref() {
            Some(":memory:") => CacheLocation::Memory,
            Some(p) if !p.is_empty() => CacheLocation::File(PathBuf::from(p)),
            _ => cache_dir.map_or_else(
                || {
                    log::warn!("no cache directory on this platform, using ad-hoc memory cache.");
                    CacheLocation::Memory
                },
                |dir| CacheLocation::File(dir.join(APP_NAME).join(CACHE_FILE)),
            ),
        };

        let timeout = match var("RU_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT,
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!("ignoring invalid RU_TIMEOUT_SECS `{secs}`");
                    DEFAULT_TIMEOUT
                }
            },
        };

        Self {
            url,
            cache,
            timeout,
        }
    }
}
