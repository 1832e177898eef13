use {
    std::{collections::HashMap, fs::File, io::ErrorKind, path::Path},
    tracing::info,
    crate::error::{Error, Result},
};

pub const LABEL_COLUMN: &str = "sentimen";
pub const TOKENS_COLUMN: &str = "tokens_akhir";

/// Label distribution and a short preview of the training CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub headers: Vec<String>,
    pub preview: Vec<Vec<String>>,
    pub total_rows: usize,
    pub histogram: Vec<(String, usize)>,
    pub top_tokens: Option<Vec<(String, usize)>>,
}

pub fn load_summary(path: &Path, preview_rows: usize, top_tokens: usize) -> Result<DatasetSummary> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::DatasetMissing(path.to_path_buf()),
        _ => Error::Io(err),
    })?;

    // short rows are kept, their missing cells read as empty
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_owned()).collect();

    let label_index = column_index(&headers, LABEL_COLUMN).ok_or_else(|| Error::SchemaMismatch {
        column: LABEL_COLUMN.to_owned(),
    })?;
    let tokens_index = column_index(&headers, TOKENS_COLUMN);

    let mut preview = Vec::new();
    let mut total_rows = 0;
    let mut label_counts: HashMap<String, usize> = HashMap::new();
    let mut token_counts: HashMap<String, usize> = HashMap::new();

    for record in reader.records() {
        let record = record?;
        total_rows += 1;

        if preview.len() < preview_rows {
            preview.push(record.iter().map(|v| v.to_owned()).collect());
        }

        let label = record.get(label_index).unwrap_or("").trim();
        if !label.is_empty() {
            *label_counts.entry(label.to_owned()).or_insert(0) += 1;
        }

        if let Some(cell) = tokens_index.and_then(|index| record.get(index)) {
            for token in parse_tokens(cell) {
                *token_counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    info!("read {} training rows from {}", total_rows, path.display());

    Ok(DatasetSummary {
        headers,
        preview,
        total_rows,
        histogram: most_frequent(label_counts, usize::MAX),
        top_tokens: tokens_index.map(|_| most_frequent(token_counts, top_tokens)),
    })
}

fn column_index(headers: &[String], column: &str) -> Option<usize> {
    headers.iter().position(|header| header == column)
}

/// Tokens from either a python list literal (`['a', 'b']`) or plain whitespace separated text.
pub fn parse_tokens(cell: &str) -> Vec<String> {
    cell.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|token| token.trim_matches(|c| c == '\'' || c == '"'))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_owned())
        .collect()
}

fn most_frequent(counts: HashMap<String, usize>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(limit);
    counts
}
