use {
    std::cmp::Ordering,
    tracing::{info, warn},
    crate::catalog::{AppEntry, AppListing, CatalogLookup},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchWarning {
    pub name: String,
    pub package_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedListing {
    pub rank: usize,
    pub listing: AppListing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    Ranked(Vec<RankedListing>),
    NoRankableData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingReport {
    pub ranking: Ranking,
    pub warnings: Vec<FetchWarning>,
}

/// Looks up every app in order, one request at a time, and ranks whatever succeeded.
///
/// A failed lookup becomes a warning and the loop moves on to the next app.
pub async fn fetch_ranking<C: CatalogLookup + ?Sized>(lookup: &C, apps: &[AppEntry]) -> RankingReport {
    info!("fetching store listings for {} apps", apps.len());

    let mut listings = Vec::new();
    let mut warnings = Vec::new();

    for app in apps {
        match lookup.lookup(app).await {
            Ok(listing) => listings.push(listing),
            Err(err) => {
                warn!("skipping {} ({}): {}", app.name, app.package_id, err);
                warnings.push(FetchWarning {
                    name: app.name.clone(),
                    package_id: app.package_id.clone(),
                    reason: err.to_string(),
                });
            },
        }
    }

    info!("fetched {} of {} listings", listings.len(), apps.len());

    RankingReport {
        ranking: rank_listings(listings),
        warnings,
    }
}

/// Drops listings without a score, sorts by score then rating count (both descending)
/// and numbers them 1..K in that order.
pub fn rank_listings(listings: Vec<AppListing>) -> Ranking {
    let mut listings: Vec<AppListing> = listings.into_iter()
        .filter(|listing| listing.score.is_some())
        .collect();

    if listings.is_empty() {
        return Ranking::NoRankableData;
    }

    listings.sort_by(compare_listings);

    Ranking::Ranked(
        listings.into_iter()
            .enumerate()
            .map(|(index, listing)| RankedListing {
                rank: index + 1,
                listing,
            })
            .collect()
    )
}

fn compare_listings(a: &AppListing, b: &AppListing) -> Ordering {
    let score_a = a.score.unwrap_or(f64::NEG_INFINITY);
    let score_b = b.score.unwrap_or(f64::NEG_INFINITY);

    score_b.total_cmp(&score_a)
        .then_with(|| b.ratings.unwrap_or(0).cmp(&a.ratings.unwrap_or(0)))
}

impl RankingReport {
    pub fn ranked(&self) -> &[RankedListing] {
        match &self.ranking {
            Ranking::Ranked(listings) => listings,
            Ranking::NoRankableData => &[],
        }
    }
}
