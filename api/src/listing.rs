use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, instrument};

pub const DEFAULT_API_HOST: &str = "github.com";

// ListingSource
//
// identifies one folder of one repository branch on the content host.  the
// api lives on the api. subdomain and expects its own vendor media type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSource {
    pub api_host: String,
    pub owner: String,
    pub repo: String,
    pub folder: String,
    pub branch: String,
}

impl ListingSource {
    pub fn url(&self) -> String {
        format!(
            "https://api.{}/repos/{}/{}/contents/{}?ref={}",
            self.api_host, self.owner, self.repo, self.folder, self.branch
        )
    }

    // github.com -> application/vnd.github.v3+json
    pub fn accept(&self) -> String {
        let vendor = self
            .api_host
            .split_once('.')
            .map_or(self.api_host.as_str(), |(vendor, _)| vendor);

        format!("application/vnd.{vendor}.v3+json")
    }
}

// one entry of the folder listing
//
// the host sends many more fields (sha, size, path, ...), which we ignore.
// directories and submodules come back with a null download_url
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(rename = "type", default)]
    pub entry_type: Option<String>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Failed to load: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Failed to load: {0}")]
    Transport(String),
}

impl From<gloo_net::Error> for ListingError {
    fn from(err: gloo_net::Error) -> Self {
        ListingError::Transport(err.to_string())
    }
}

#[instrument(level = Level::DEBUG, skip_all, fields(url = %source.url()))]
pub async fn fetch_listing(source: &ListingSource) -> Result<Vec<ListingEntry>, ListingError> {
    let resp = Request::get(&source.url())
        .header("Accept", &source.accept())
        .send()
        .await?;

    if !resp.ok() {
        return Err(ListingError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }

    let entries: Vec<ListingEntry> = resp.json().await?;

    debug!("listing returned {} entries", entries.len());
    Ok(entries)
}
