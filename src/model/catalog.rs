use crate::error::{CatalogError, Result};

use super::Movie;

/// The full in-memory movie set. Titles are unique ignoring case; lookups
/// are a linear scan in encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for movie in movies {
            catalog.insert(movie)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, movie: Movie) -> Result<()> {
        if self.contains(&movie.title) {
            return Err(CatalogError::Duplicate(movie.title));
        }
        self.movies.push(movie);
        Ok(())
    }

    pub fn remove(&mut self, title: &str) -> Option<Movie> {
        let pos = self.position(title)?;
        Some(self.movies.remove(pos))
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.position(title).map(|pos| &self.movies[pos])
    }

    pub fn get_mut(&mut self, title: &str) -> Option<&mut Movie> {
        let pos = self.position(title)?;
        Some(&mut self.movies[pos])
    }

    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn position(&self, title: &str) -> Option<usize> {
        let needle = title.to_lowercase();
        self.movies
            .iter()
            .position(|movie| movie.title.to_lowercase() == needle)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
