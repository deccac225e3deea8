//! Persistence layer for the movie catalog.
//!
//! Each backend rewrites the whole backing file on every mutation; the
//! catalog is small enough that a full load-mutate-save round per command
//! is the contract, not an optimization target.

mod csv_storage;
mod json_storage;

pub use csv_storage::CsvStorage;
pub use json_storage::JsonStorage;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Movie};

/// Uniform contract over the backing file formats. The mutation methods
/// share one shape: load, change the in-memory catalog, and persist only
/// once the change is known valid.
pub trait Storage {
    fn load(&self) -> Result<Catalog>;

    fn save(&self, catalog: &Catalog) -> Result<()>;

    fn path(&self) -> &Path;

    fn add(&self, movie: Movie) -> Result<()> {
        let mut catalog = self.load()?;
        let title = movie.title.clone();
        catalog.insert(movie)?;
        self.save(&catalog)?;
        log::info!("Movie '{}' successfully added.", title);
        Ok(())
    }

    fn delete(&self, title: &str) -> Result<()> {
        let mut catalog = self.load()?;
        if catalog.remove(title).is_none() {
            return Err(CatalogError::NotFound(title.to_string()));
        }
        self.save(&catalog)?;
        log::info!("Movie '{}' deleted.", title);
        Ok(())
    }

    fn update_rating(&self, title: &str, rating: f64) -> Result<()> {
        let mut catalog = self.load()?;
        match catalog.get_mut(title) {
            Some(movie) => movie.rating = rating,
            None => return Err(CatalogError::NotFound(title.to_string())),
        }
        self.save(&catalog)?;
        log::info!("Movie '{}' updated with new rating {}.", title, rating);
        Ok(())
    }

    fn update_notes(&self, title: &str, notes: &str) -> Result<()> {
        let mut catalog = self.load()?;
        match catalog.get_mut(title) {
            Some(movie) => movie.notes = notes.to_string(),
            None => return Err(CatalogError::NotFound(title.to_string())),
        }
        self.save(&catalog)?;
        log::info!("Movie '{}' successfully updated.", title);
        Ok(())
    }
}

/// Pick a backend from the backing file extension.
pub fn open_storage(path: impl Into<PathBuf>) -> Result<Box<dyn Storage>> {
    let path = path.into();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Box::new(JsonStorage::new(path))),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Box::new(CsvStorage::new(path))),
        other => Err(CatalogError::UnsupportedFormat(
            other.unwrap_or("").to_string(),
        )),
    }
}

/// Seed a fresh backing file so a first run starts from an empty catalog.
/// Loading never substitutes an empty catalog for a missing file; callers
/// initialize explicitly through this.
pub fn create_empty_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => fs::write(path, "{}")?,
        Some(ext) if ext.eq_ignore_ascii_case("csv") => {
            fs::write(path, format!("{}\n", Movie::csv_titles().join(",")))?
        }
        other => {
            return Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("").to_string(),
            ))
        }
    }
    Ok(())
}

/// Write to a temp file in the same directory, then rename over the target,
/// so a failed save leaves the previous contents intact.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_storage_rejects_unknown_extensions() {
        let err = open_storage("movies.txt").err().unwrap();
        assert!(matches!(err, CatalogError::UnsupportedFormat(ext) if ext == "txt"));
    }

    #[test]
    fn create_empty_file_seeds_loadable_catalogs() {
        let dir = TempDir::new().unwrap();

        for name in ["movies.json", "movies.csv"] {
            let path = dir.path().join(name);
            create_empty_file(&path).unwrap();
            let storage = open_storage(path).unwrap();
            assert!(storage.load().unwrap().is_empty());
        }
    }
}
