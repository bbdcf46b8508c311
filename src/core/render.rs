use crate::domain::model::SearchReport;
use crate::utils::error::{NewsError, Result};

pub const FORMATS: &[&str] = &["plain", "json", "csv"];

const TIME_SEPARATOR: char = 'T';

/// Display form of the publication timestamp: everything from the `T`
/// separator onward is dropped. Presentation-only; the stored value
/// keeps the full timestamp.
pub fn display_date(published_at: &str) -> &str {
    match published_at.split_once(TIME_SEPARATOR) {
        Some((date, _)) => date,
        None => published_at,
    }
}

pub fn render(format: &str, report: &SearchReport) -> Result<String> {
    match format {
        "plain" => Ok(render_plain(report)),
        "json" => render_json(report),
        "csv" => render_csv(report),
        other => Err(NewsError::InvalidConfigValue {
            field: "format".to_string(),
            value: other.to_string(),
            reason: format!("Unsupported format. Valid formats: {}", FORMATS.join(", ")),
        }),
    }
}

fn render_plain(report: &SearchReport) -> String {
    if report.is_empty() {
        return "No matching articles.".to_string();
    }

    let mut lines = Vec::with_capacity(report.articles.len() + 1);
    for (index, article) in report.articles.iter().enumerate() {
        let byline = match &article.author {
            Some(author) => format!(" by {}", author),
            None => String::new(),
        };
        lines.push(format!(
            "{:>3}. {} [{}] {}{}\n     {}",
            index + 1,
            display_date(&article.published_at),
            article.section,
            article.title,
            byline,
            article.url,
        ));
    }
    lines.push(format!(
        "\n{} articles fetched at {}",
        report.articles.len(),
        report.fetched_at.to_rfc3339(),
    ));
    lines.join("\n")
}

fn render_json(report: &SearchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn render_csv(report: &SearchReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for article in &report.articles {
        writer.serialize(article)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
