use {
    tracing::error,
    invest_sentiment_core::{
        config::DatasetConfig,
        dataset::{load_summary, LABEL_COLUMN},
        error::Error,
    },
    crate::render::{self, Severity},
};

pub fn dataset_panel(config: &DatasetConfig) -> String {
    let mut out = render::header("Dataset Pelatihan");

    let summary = match load_summary(&config.path(), config.preview_rows, config.top_tokens) {
        Ok(v) => v,
        Err(Error::DatasetMissing(_)) => {
            out.push_str(&render::notice(Severity::Error, "File dataset tidak ditemukan."));
            return out;
        },
        Err(Error::SchemaMismatch { column }) => {
            out.push_str(&render::notice(Severity::Info, &format!("Kolom '{}' tidak ditemukan di dataset.", column)));
            return out;
        },
        Err(err) => {
            error!("failed to read dataset: {}", err);
            out.push_str(&render::notice(Severity::Error, &format!("Dataset tidak dapat dibaca: {}", err)));
            return out;
        },
    };

    let headers: Vec<&str> = summary.headers.iter().map(|v| v.as_str()).collect();
    out.push_str(&format!("{} baris\n\n", summary.total_rows));
    out.push_str(&render::table(&headers, &summary.preview));

    out.push_str(&format!("\nDistribusi label ({})\n", LABEL_COLUMN));
    out.push_str(&render::bar_chart(&summary.histogram));

    if let Some(top_tokens) = &summary.top_tokens {
        out.push_str("\nKata paling sering\n");
        out.push_str(&render::bar_chart(top_tokens));
    }

    out
}
