//! Pure lookups and statistics over an in-memory catalog snapshot.
//!
//! Nothing here mutates the catalog or touches storage. All listings come
//! back in encounter order; the sorts are stable, so equally-rated movies
//! keep their relative order.

use rand::Rng;

use crate::model::{Catalog, Movie};

/// How many movies the aggregate statistics keep at each extreme.
pub const STATS_TOP_N: usize = 5;

/// Case-insensitive substring match on title. An empty needle matches
/// every movie.
pub fn search<'a>(catalog: &'a Catalog, needle: &str) -> Vec<&'a Movie> {
    let needle = needle.to_lowercase();
    catalog
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn sort_by_rating(catalog: &Catalog) -> Vec<&Movie> {
    let mut movies: Vec<&Movie> = catalog.iter().collect();
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    movies
}

pub fn sort_by_year(catalog: &Catalog) -> Vec<&Movie> {
    let mut movies: Vec<&Movie> = catalog.iter().collect();
    movies.sort_by(|a, b| b.year.cmp(&a.year));
    movies
}

/// Movies rated at least `min_rating` and released within the inclusive
/// year bounds. Either bound may be `None` for unbounded.
pub fn filter_by_rating_and_year(
    catalog: &Catalog,
    min_rating: f64,
    start_year: Option<u32>,
    end_year: Option<u32>,
) -> Vec<&Movie> {
    catalog
        .iter()
        .filter(|movie| movie.rating >= min_rating)
        .filter(|movie| start_year.map_or(true, |start| movie.year >= start))
        .filter(|movie| end_year.map_or(true, |end| movie.year <= end))
        .collect()
}

pub fn random_pick(catalog: &Catalog) -> Option<&Movie> {
    if catalog.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..catalog.len());
    catalog.iter().nth(index)
}

pub fn average_rating(catalog: &Catalog) -> Option<f64> {
    if catalog.is_empty() {
        return None;
    }
    let total: f64 = catalog.iter().map(|movie| movie.rating).sum();
    Some(total / catalog.len() as f64)
}

/// Median over all ratings; even-sized catalogs average the two middle
/// values.
pub fn median_rating(catalog: &Catalog) -> Option<f64> {
    if catalog.is_empty() {
        return None;
    }
    let mut ratings: Vec<f64> = catalog.iter().map(|movie| movie.rating).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));
    let mid = ratings.len() / 2;
    if ratings.len() % 2 == 1 {
        Some(ratings[mid])
    } else {
        Some((ratings[mid - 1] + ratings[mid]) / 2.0)
    }
}

/// The `top_n` highest-rated movies. A fixed count, not every movie tied
/// at the maximum rating.
pub fn best_movies(catalog: &Catalog, top_n: usize) -> Vec<&Movie> {
    sort_by_rating(catalog).into_iter().take(top_n).collect()
}

pub fn worst_movies(catalog: &Catalog, top_n: usize) -> Vec<&Movie> {
    let mut movies: Vec<&Movie> = catalog.iter().collect();
    movies.sort_by(|a, b| a.rating.total_cmp(&b.rating));
    movies.into_iter().take(top_n).collect()
}

#[derive(Debug, Clone)]
pub struct CatalogStats {
    pub total_movies: usize,
    pub average_rating: Option<f64>,
    pub median_rating: Option<f64>,
    pub best_movies: Vec<Movie>,
    pub worst_movies: Vec<Movie>,
}

pub fn stats(catalog: &Catalog) -> CatalogStats {
    CatalogStats {
        total_movies: catalog.len(),
        average_rating: average_rating(catalog),
        median_rating: median_rating(catalog),
        best_movies: best_movies(catalog, STATS_TOP_N)
            .into_iter()
            .cloned()
            .collect(),
        worst_movies: worst_movies(catalog, STATS_TOP_N)
            .into_iter()
            .cloned()
            .collect(),
    }
}
