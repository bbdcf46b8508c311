use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NewsError, Result};
use url::Url;

/// Build the search URL from configuration. The fixed parameters (`q`,
/// `order-by`, `api-key`) come first, followed by any configured extras.
pub fn build_search_url<C: ConfigProvider>(config: &C) -> Result<Url> {
    let mut url = Url::parse(config.endpoint()).map_err(|e| NewsError::InvalidUrl {
        url: config.endpoint().to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(NewsError::InvalidUrl {
                url: config.endpoint().to_string(),
                reason: format!("unsupported scheme: {}", scheme),
            })
        }
    }

    url.query_pairs_mut()
        .append_pair("q", config.query_term())
        .append_pair("order-by", config.order_by())
        .append_pair("api-key", config.api_key());

    for (key, value) in config.extra_params() {
        url.query_pairs_mut().append_pair(key, value);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn settings_with_query(query: &str) -> Settings {
        Settings {
            endpoint: "https://content.example.com/search".to_string(),
            query: query.to_string(),
            order_by: "newest".to_string(),
            api_key: "test-key".to_string(),
            extra_params: vec![],
            connect_timeout_ms: 15_000,
            read_timeout_ms: 10_000,
            format: "plain".to_string(),
            limit: None,
            open: None,
        }
    }

    #[test]
    fn test_build_search_url_contains_fixed_parameters() {
        let url = build_search_url(&settings_with_query("climate")).unwrap();
        let query = url.query().unwrap();

        assert!(query.contains("q=climate"));
        assert!(query.contains("order-by=newest"));
        assert!(query.contains("api-key=test-key"));
    }

    #[test]
    fn test_changing_term_changes_only_q() {
        let first = build_search_url(&settings_with_query("climate")).unwrap();
        let second = build_search_url(&settings_with_query("debates")).unwrap();

        let collect = |url: &Url| {
            url.query_pairs()
                .filter(|(k, _)| k != "q")
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<Vec<_>>()
        };

        assert_eq!(collect(&first), collect(&second));
        assert!(first.query().unwrap().contains("q=climate"));
        assert!(second.query().unwrap().contains("q=debates"));
    }

    #[test]
    fn test_extra_params_are_appended() {
        let mut settings = settings_with_query("climate");
        settings.extra_params = vec![("show-tags".to_string(), "contributor".to_string())];

        let url = build_search_url(&settings).unwrap();
        assert!(url.query().unwrap().contains("show-tags=contributor"));
    }

    #[test]
    fn test_malformed_endpoint_is_rejected() {
        let mut settings = settings_with_query("climate");
        settings.endpoint = "not a url".to_string();

        let err = build_search_url(&settings).unwrap_err();
        assert!(matches!(err, NewsError::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let mut settings = settings_with_query("climate");
        settings.endpoint = "ftp://content.example.com/search".to_string();

        let err = build_search_url(&settings).unwrap_err();
        assert!(matches!(err, NewsError::InvalidUrl { .. }));
    }
}
