use {
    invest_sentiment_core::catalog::{fetch_ranking, AppEntry, CatalogLookup, Ranking, RankedListing},
    crate::render::{self, Severity},
};

const COLUMNS: &[&str] = &["Peringkat", "Nama Aplikasi", "Rating", "Jumlah Ulasan", "Unduhan", "Pengembang"];

pub async fn ranking_panel<C: CatalogLookup + ?Sized>(catalog: &C, apps: &[AppEntry]) -> String {
    let report = fetch_ranking(catalog, apps).await;

    let mut out = render::header("Ranking Aplikasi Investasi");
    for warning in &report.warnings {
        out.push_str(&render::notice(
            Severity::Warning,
            &format!("Gagal mengambil data untuk {}: {}", warning.name, warning.reason),
        ));
    }

    match &report.ranking {
        Ranking::NoRankableData => {
            out.push_str(&render::notice(Severity::Info, "Tidak ada data rating yang bisa ditampilkan."));
        },
        Ranking::Ranked(ranked) => {
            let rows: Vec<Vec<String>> = ranked.iter().map(ranking_row).collect();
            out.push_str(&render::table(COLUMNS, &rows));
        },
    }

    out
}

fn ranking_row(ranked: &RankedListing) -> Vec<String> {
    let listing = &ranked.listing;
    vec![
        ranked.rank.to_string(),
        listing.title.clone(),
        listing.score.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_owned()),
        listing.ratings.map(|v| v.to_string()).unwrap_or_else(|| "-".to_owned()),
        listing.installs.clone().unwrap_or_else(|| "-".to_owned()),
        listing.developer.clone().unwrap_or_else(|| "-".to_owned()),
    ]
}
