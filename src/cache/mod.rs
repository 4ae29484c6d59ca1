//! Reusing the week menu between runs.
//!
//! A saved week carries no timestamp. It is considered current while today
//! falls strictly between the day of month of its first and last entries,
//! so a week spanning a month boundary (e.g. 29 to 4) is always refetched,
//! as are the first and last days of any week.

mod local;

use crate::{config::CacheLocation, fetch::WeekSource, menu::WeekMenu};

pub use local::FileStore;

/// Whether `week` still covers `today` (a day of month).
pub fn is_fresh(week: &WeekMenu, today: u32) -> bool {
    match (week.first_day(), week.last_day()) {
        (Some(first), Some(last)) => first < today && today < last,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Network,
}

#[derive(Debug)]
pub struct Loaded {
    pub week: WeekMenu,
    pub origin: Origin,
}

#[derive(Debug)]
pub enum Store {
    Local(FileStore),
    AdHoc,
}

impl Store {
    pub fn open(location: &CacheLocation) -> Self {
        match location {
            CacheLocation::File(p) => Self::Local(FileStore::open(p)),
            CacheLocation::Memory => Self::AdHoc,
        }
    }

    async fn cached(&self) -> Option<WeekMenu> {
        match self {
            Self::Local(f) => f.load().await.unwrap_or_else(|e| {
                log::warn!("ignoring unreadable cache {}: {e}", f.path().display());
                None
            }),
            Self::AdHoc => None,
        }
    }

    pub async fn save(&self, data: &WeekMenu) -> crate::Result<()> {
        match self {
            Self::Local(f) => f.save(data).await,
            Self::AdHoc => Ok(()),
        }
    }

    /// Uses the saved week while it is fresh, otherwise fetches a new one
    /// from `source` and saves it before returning. A failed save is logged
    /// and the fetched week is still returned.
    pub async fn load_or_fetch(
        &self,
        source: &impl WeekSource,
        today: u32,
    ) -> crate::Result<Loaded> {
        match self.cached().await {
            Some(week) if is_fresh(&week, today) => {
                log::debug!("using cached week menu");
                return Ok(Loaded {
                    week,
                    origin: Origin::Cache,
                });
            }
            Some(_) => log::info!("cached week menu is stale, refreshing"),
            None => log::info!("no cached week menu, fetching"),
        }
        let week = source.fetch_week_menu().await?;
        log::info!("fetched week starting {:?}", week.entries().first());
        if let Err(e) = self.save(&week).await {
            log::warn!("could not save week menu: {e}");
        }
        Ok(Loaded {
            week,
            origin: Origin::Network,
        })
    }

    /// Removes the saved week. Returns whether there was one.
    pub async fn clear(&self) -> crate::Result<bool> {
        match self {
            Self::Local(f) => f.clear().await,
            Self::AdHoc => Ok(false),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::menu::april_week;

    /// Serves a fixed week and counts how often it was asked.
    pub(crate) struct FixedSource {
        week: WeekMenu,
        pub(crate) fetches: Cell<usize>,
    }

    impl FixedSource {
        pub(crate) fn new(week: WeekMenu) -> Self {
            Self {
                week,
                fetches: Cell::new(0),
            }
        }
    }

    impl WeekSource for FixedSource {
        async fn fetch_week_menu(&self) -> crate::Result<WeekMenu> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(self.week.clone())
        }
    }

    fn days(first: u32, last: u32) -> WeekMenu {
        let mut entries: Vec<String> = (0..7).map(|_| "x".to_string()).collect();
        entries[0] = format!("{first:02}.03.2021 primeiro");
        entries[6] = format!("{last:02}.03.2021 ultimo");
        WeekMenu::new(entries).unwrap()
    }

    #[test]
    fn test_is_fresh_strictly_inside() {
        let week = days(1, 5);
        assert!(is_fresh(&week, 3));
        assert!(!is_fresh(&week, 1));
        assert!(!is_fresh(&week, 5));
        assert!(!is_fresh(&week, 7));
    }

    #[test]
    fn test_is_fresh_month_boundary_never_fresh() {
        let week = days(29, 4);
        for today in [29, 30, 31, 1, 2, 3, 4] {
            assert!(!is_fresh(&week, today));
        }
    }

    #[test]
    fn test_is_fresh_without_dates() {
        let week = WeekMenu::new(vec!["Segunda".into(); 7]).unwrap();
        assert!(!is_fresh(&week, 3));
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(&CacheLocation::File(dir.path().join("week_menu.json")));
        let source = FixedSource::new(april_week());

        let first = store.load_or_fetch(&source, 10).await.unwrap();
        assert_eq!(first.origin, Origin::Network);
        assert_eq!(source.fetches.get(), 1);

        let second = store.load_or_fetch(&source, 10).await.unwrap();
        assert_eq!(second.origin, Origin::Cache);
        assert_eq!(second.week, first.week);
        assert_eq!(source.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_stale_record_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week_menu.json");
        let store = Store::open(&CacheLocation::File(path.clone()));
        store.save(&days(1, 7)).await.unwrap();
        let source = FixedSource::new(april_week());

        let loaded = store.load_or_fetch(&source, 10).await.unwrap();
        assert_eq!(loaded.origin, Origin::Network);
        assert_eq!(FileStore::open(&path).load().await.unwrap(), Some(april_week()));
    }

    #[tokio::test]
    async fn test_corrupt_record_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week_menu.json");
        std::fs::write(&path, "garbage").unwrap();
        let store = Store::open(&CacheLocation::File(path));
        let source = FixedSource::new(april_week());

        let loaded = store.load_or_fetch(&source, 10).await.unwrap();
        assert_eq!(loaded.origin, Origin::Network);
        assert_eq!(source.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_still_returns_week() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "file").unwrap();
        let store = Store::open(&CacheLocation::File(blocker.join("week_menu.json")));
        assert!(store.save(&april_week()).await.is_err());
        let source = FixedSource::new(april_week());

        let loaded = store.load_or_fetch(&source, 10).await.unwrap();
        assert_eq!(loaded.origin, Origin::Network);
        assert_eq!(loaded.week, april_week());
    }

    #[tokio::test]
    async fn test_ad_hoc_always_fetches() {
        let store = Store::open(&CacheLocation::Memory);
        let source = FixedSource::new(april_week());
        store.load_or_fetch(&source, 10).await.unwrap();
        store.load_or_fetch(&source, 10).await.unwrap();
        assert_eq!(source.fetches.get(), 2);
        assert!(!store.clear().await.unwrap());
    }
}
