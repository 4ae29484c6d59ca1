use std::time::{Duration, Instant};

use reqwest::{Client, Error as RequestError};
use scraper::Html;
use tracing::{instrument, Level};
use url::Url;

use crate::{config::Config, error::Error, menu::WeekMenu, parse::week_menu_from_html};

/// Where fresh week menus come from.
pub trait WeekSource {
    async fn fetch_week_menu(&self) -> crate::Result<WeekMenu>;
}

/// The live cafeteria site. The URL and HTTP client are only built when a
/// fetch happens.
#[derive(Debug, Clone)]
pub struct RuSite {
    url: String,
    timeout: Duration,
}

impl RuSite {
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.url.clone(),
            timeout: config.timeout,
        }
    }

    fn url(&self) -> crate::Result<Url> {
        Url::parse(&self.url).map_err(|e| Error::Config(format!("RU_URL `{}`: {e}", self.url)))
    }
}

impl WeekSource for RuSite {
    async fn fetch_week_menu(&self) -> crate::Result<WeekMenu> {
        let url = self.url()?;
        let client = make_client(self.timeout)?;
        let page = menu_page(&client, &url).await?;
        let html = Html::parse_document(&page);
        Ok(week_menu_from_html(&html)?)
    }
}

pub fn make_client(timeout: Duration) -> Result<Client, RequestError> {
    Client::builder().gzip(true).timeout(timeout).build()
}

#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn menu_page(client: &Client, url: &Url) -> Result<String, RequestError> {
    let start = Instant::now();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}
