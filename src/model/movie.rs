use serde::{Deserialize, Serialize};

/// One cataloged movie. Field names on disk match the original catalog
/// files, so `Notes` and `ImdbID` may be absent in older data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "ImdbID", default)]
    pub imdb_id: String,
}

impl Movie {
    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.year.to_string(),
            self.rating.to_string(),
            self.poster.clone(),
            self.notes.clone(),
            self.imdb_id.clone(),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Year", "Rating", "Poster", "Notes", "ImdbID"]
    }
}
