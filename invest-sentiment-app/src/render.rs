use invest_sentiment_core::model::SentimentLabel;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn for_label(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => Self::Success,
            SentimentLabel::Negative => Self::Error,
            SentimentLabel::Neutral | SentimentLabel::Unknown => Self::Warning,
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Info => "[i]",
            Self::Warning => "[!]",
            Self::Error => "[x]",
        }
    }
}

pub fn header(title: &str) -> String {
    format!("\n{}\n{}\n", title, "=".repeat(title.chars().count()))
}

pub fn notice(severity: Severity, message: &str) -> String {
    format!("{} {}\n", severity.marker(), message)
}

/// Left-aligned text table with a header separator.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells.iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_owned()
    };

    let mut out = String::new();
    out.push_str(&format_row(headers.to_vec()));
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(|v| v.as_str()).collect()));
        out.push('\n');
    }
    out
}

/// Horizontal bars scaled so the largest count fills the full width.
pub fn bar_chart(entries: &[(String, usize)]) -> String {
    let label_width = entries.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);

    entries.iter()
        .map(|(label, count)| {
            let bar = if max == 0 { 0 } else { (count * BAR_WIDTH + max - 1) / max };
            format!("{:<width$} | {} {}\n", label, "#".repeat(bar), count, width = label_width)
        })
        .collect()
}
