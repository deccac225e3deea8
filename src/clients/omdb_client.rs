use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

use crate::error::{CatalogError, Result};
use crate::model::Movie;

/// Remote metadata lookup against the OMDb API. Transport failures are
/// retried; a "movie not found" answer is not.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CatalogError::Lookup(e.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    pub fn base_url() -> String {
        "https://www.omdbapi.com/".to_string()
    }

    /// Fetch the best-match record for a free-text title query.
    pub async fn fetch_movie(&self, title: &str) -> Result<Movie> {
        let retry_strategy = ExponentialBackoff::from_millis(10).map(jitter).take(5);
        let payload = Retry::spawn(retry_strategy, || async move {
            self.fetch_payload_no_retry(title).await
        })
        .await?;
        Self::movie_from_payload(&payload)
    }

    async fn fetch_payload_no_retry(&self, title: &str) -> Result<Value> {
        let resp = self
            .client
            .get(Self::base_url())
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await
            .map_err(|e| {
                CatalogError::Lookup(format!("failed to reach OMDb for '{}': {}", title, e))
            })?;

        if !resp.status().is_success() {
            return Err(CatalogError::Lookup(format!(
                "OMDb returned status {} for '{}'",
                resp.status(),
                title
            )));
        }

        resp.json::<Value>().await.map_err(|e| {
            CatalogError::Lookup(format!(
                "failed to decode OMDb response for '{}': {}",
                title, e
            ))
        })
    }

    fn movie_from_payload(payload: &Value) -> Result<Movie> {
        if payload["Response"].as_str() == Some("False") {
            let reason = payload["Error"].as_str().unwrap_or("Movie not found!");
            return Err(CatalogError::NotFound(reason.to_string()));
        }

        let text = |key: &str| payload[key].as_str().unwrap_or("").to_string();

        let rating_raw = text("imdbRating");
        let rating = if rating_raw.is_empty() || rating_raw == "N/A" {
            0.0
        } else {
            rating_raw.parse::<f64>().map_err(|_| {
                CatalogError::Lookup(format!("invalid imdbRating value '{}'", rating_raw))
            })?
        };

        let year_raw = text("Year");
        let year = parse_leading_year(&year_raw)
            .ok_or_else(|| CatalogError::Lookup(format!("invalid Year value '{}'", year_raw)))?;

        Ok(Movie {
            title: text("Title"),
            year,
            rating,
            poster: text("Poster"),
            notes: String::new(),
            imdb_id: text("imdbID"),
        })
    }
}

/// Series entries come back as ranges like "2008-2013"; keep the first year.
fn parse_leading_year(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_maps_to_a_movie() {
        let payload = json!({
            "Response": "True",
            "Title": "The Matrix",
            "Year": "1999",
            "imdbRating": "8.7",
            "Poster": "http://example.com/poster.jpg",
            "imdbID": "tt0133093",
        });

        let movie = OmdbClient::movie_from_payload(&payload).unwrap();
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year, 1999);
        assert_eq!(movie.rating, 8.7);
        assert_eq!(movie.imdb_id, "tt0133093");
        assert_eq!(movie.notes, "");
    }

    #[test]
    fn unrated_movies_default_to_zero() {
        let payload = json!({
            "Response": "True",
            "Title": "Obscure",
            "Year": "2023",
            "imdbRating": "N/A",
            "Poster": "N/A",
            "imdbID": "tt0000000",
        });

        let movie = OmdbClient::movie_from_payload(&payload).unwrap();
        assert_eq!(movie.rating, 0.0);
    }

    #[test]
    fn negative_answer_is_not_found() {
        let payload = json!({"Response": "False", "Error": "Movie not found!"});
        let err = OmdbClient::movie_from_payload(&payload).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn year_ranges_keep_the_first_year() {
        assert_eq!(parse_leading_year("2008-2013"), Some(2008));
        assert_eq!(parse_leading_year(" 1999 "), Some(1999));
        assert_eq!(parse_leading_year("N/A"), None);
    }
}
