use crate::domain::model::Article;
use crate::domain::ports::LinkOpener;
use crate::utils::error::{NewsError, Result};

#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url)?;
        Ok(())
    }
}

/// Open the Nth listed article (1-based, matching the rendered list).
pub fn open_nth<O: LinkOpener>(articles: &[Article], position: usize, opener: &O) -> Result<()> {
    if position == 0 || position > articles.len() {
        return Err(NewsError::InvalidConfigValue {
            field: "open".to_string(),
            value: position.to_string(),
            reason: format!("No article at position {} (list has {})", position, articles.len()),
        });
    }

    let article = &articles[position - 1];
    tracing::info!("Opening {} in the browser", article.url);
    opener.open(&article.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn articles() -> Vec<Article> {
        vec![
            Article {
                title: "First".to_string(),
                section: "World".to_string(),
                published_at: "2020-05-01T10:00:00Z".to_string(),
                author: None,
                url: "https://news.example.com/first".to_string(),
            },
            Article {
                title: "Second".to_string(),
                section: "World".to_string(),
                published_at: "2020-05-02T10:00:00Z".to_string(),
                author: None,
                url: "https://news.example.com/second".to_string(),
            },
        ]
    }

    #[test]
    fn test_open_nth_uses_one_based_positions() {
        let opener = RecordingOpener::default();
        open_nth(&articles(), 2, &opener).unwrap();

        let opened = opener.opened.lock().unwrap();
        assert_eq!(opened.as_slice(), ["https://news.example.com/second"]);
    }

    #[test]
    fn test_open_nth_rejects_out_of_range() {
        let opener = RecordingOpener::default();

        assert!(open_nth(&articles(), 0, &opener).is_err());
        assert!(open_nth(&articles(), 3, &opener).is_err());
        assert!(opener.opened.lock().unwrap().is_empty());
    }
}
