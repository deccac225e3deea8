use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Movie};

use super::{write_atomic, Storage};

/// JSON-backed storage: a single object keyed by title, pretty-printed.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            log::error!("File '{}' doesn't exist.", self.path.display());
            return Err(CatalogError::MissingFile(self.path.clone()));
        }
        let contents = fs::read_to_string(&self.path)?;
        let movies: BTreeMap<String, Movie> = serde_json::from_str(&contents).map_err(|e| {
            CatalogError::Format(format!(
                "error decoding JSON data in file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        Catalog::from_movies(movies.into_values().collect())
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        let movies: BTreeMap<&str, &Movie> = catalog
            .iter()
            .map(|movie| (movie.title.as_str(), movie))
            .collect();
        let contents = serde_json::to_string_pretty(&movies)
            .map_err(|e| CatalogError::Format(e.to_string()))?;
        write_atomic(&self.path, contents.as_bytes())?;
        log::info!("Movies successfully saved to '{}'.", self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_movie(title: &str, year: u32, rating: f64) -> Movie {
        Movie {
            title: title.to_string(),
            year,
            rating,
            poster: "http://example.com/poster.jpg".to_string(),
            notes: String::new(),
            imdb_id: String::new(),
        }
    }

    #[test]
    fn load_fails_when_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path().join("movies.json"));

        let err = storage.load().unwrap_err();
        assert!(matches!(err, CatalogError::MissingFile(_)));
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonStorage::new(path).load().unwrap_err();
        assert!(matches!(err, CatalogError::Format(_)));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path().join("movies.json"));

        let mut catalog = Catalog::new();
        catalog.insert(sample_movie("The Matrix", 1999, 8.7)).unwrap();
        catalog.insert(sample_movie("Inception", 2010, 8.8)).unwrap();
        storage.save(&catalog).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("The Matrix").unwrap().year, 1999);
        assert_eq!(loaded.get("Inception").unwrap().rating, 8.8);
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        fs::write(
            &path,
            r#"{"Titanic": {"Title": "Titanic", "Year": 1997, "Rating": 7.9, "Poster": "p.jpg"}}"#,
        )
        .unwrap();

        let catalog = JsonStorage::new(path).load().unwrap();
        let movie = catalog.get("Titanic").unwrap();
        assert_eq!(movie.notes, "");
        assert_eq!(movie.imdb_id, "");
    }
}
