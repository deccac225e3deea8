use std::path::{Path, PathBuf};

use csv::{Reader, StringRecord, Writer};

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Movie};

use super::{write_atomic, Storage};

/// CSV-backed storage: one row per movie under a required header row.
/// `Notes` and `ImdbID` columns are optional and default to empty.
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn movie_from_record(headers: &StringRecord, record: &StringRecord) -> Result<Movie> {
        let field = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .and_then(|pos| record.get(pos))
        };
        let required = |name: &str| {
            field(name).map(str::to_string).ok_or_else(|| {
                CatalogError::Format(format!("missing required CSV column '{}'", name))
            })
        };

        let year_raw = required("Year")?;
        let year = year_raw
            .trim()
            .parse::<u32>()
            .map_err(|_| CatalogError::Format(format!("invalid Year value '{}'", year_raw)))?;

        let rating_raw = required("Rating")?;
        let rating = rating_raw
            .trim()
            .parse::<f64>()
            .map_err(|_| CatalogError::Format(format!("invalid Rating value '{}'", rating_raw)))?;

        Ok(Movie {
            title: required("Title")?,
            year,
            rating,
            poster: required("Poster")?,
            notes: field("Notes").unwrap_or("").to_string(),
            imdb_id: field("ImdbID").unwrap_or("").to_string(),
        })
    }
}

impl Storage for CsvStorage {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            log::error!("File '{}' doesn't exist.", self.path.display());
            return Err(CatalogError::MissingFile(self.path.clone()));
        }
        let mut reader = Reader::from_path(&self.path).map_err(|e| {
            CatalogError::Format(format!(
                "error reading CSV file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        let headers = reader
            .headers()
            .map_err(|e| CatalogError::Format(e.to_string()))?
            .clone();

        let mut movies = vec![];
        for record in reader.records() {
            let record = record.map_err(|e| CatalogError::Format(e.to_string()))?;
            movies.push(Self::movie_from_record(&headers, &record)?);
        }
        Catalog::from_movies(movies)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        let mut wrt = Writer::from_writer(vec![]);
        wrt.write_record(Movie::csv_titles())
            .map_err(|e| CatalogError::Format(e.to_string()))?;
        for movie in catalog.iter() {
            wrt.write_record(movie.to_csvable_array())
                .map_err(|e| CatalogError::Format(e.to_string()))?;
        }
        let contents = wrt
            .into_inner()
            .map_err(|e| CatalogError::Format(e.to_string()))?;
        write_atomic(&self.path, &contents)?;
        log::info!("Movies successfully saved to '{}'.", self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
