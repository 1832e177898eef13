pub mod play_store;
pub mod ranking;

use {
    async_trait::async_trait,
    serde::{Serialize, Deserialize},
    crate::error::Result,
};

pub use {
    play_store::PlayStoreCatalog,
    ranking::{fetch_ranking, rank_listings, FetchWarning, RankedListing, Ranking, RankingReport},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub package_id: String,
}

/// Store metadata for one app at the time it was fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct AppListing {
    pub name: String,
    pub package_id: String,
    pub title: String,
    pub score: Option<f64>,
    pub ratings: Option<u64>,
    pub installs: Option<String>,
    pub developer: Option<String>,
}

/// Fetches the current store listing for a single app.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn lookup(&self, app: &AppEntry) -> Result<AppListing>;
}

impl AppEntry {
    pub fn new(name: &str, package_id: &str) -> Self {
        Self {
            name: name.to_owned(),
            package_id: package_id.to_owned(),
        }
    }
}

impl AppListing {
    pub fn new(app: &AppEntry, title: &str) -> Self {
        Self {
            name: app.name.clone(),
            package_id: app.package_id.clone(),
            title: title.to_owned(),
            score: None,
            ratings: None,
            installs: None,
            developer: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_ratings(mut self, ratings: u64) -> Self {
        self.ratings = Some(ratings);
        self
    }
}
