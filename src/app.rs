//! Interactive menu loop driving the storage backend and query utilities.

use std::io::{self, Write};

use crate::clients::OmdbClient;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use crate::query;
use crate::storage::Storage;
use crate::website;

const MENU: [&str; 12] = [
    "Exit",
    "List movies",
    "Add movie",
    "Delete movie",
    "Update movie",
    "Stats",
    "Random movie",
    "Search movie",
    "Movies sorted by rating",
    "Movies sorted by year",
    "Filter movies",
    "Generate website",
];

pub struct MovieApp {
    storage: Box<dyn Storage>,
    client: Option<OmdbClient>,
    config: Config,
}

impl MovieApp {
    pub fn new(storage: Box<dyn Storage>, config: Config) -> Result<Self> {
        let client = match &config.omdb_api_key {
            Some(key) => Some(OmdbClient::new(key.clone())?),
            None => None,
        };
        Ok(Self {
            storage,
            client,
            config,
        })
    }

    pub async fn run(&self) -> Result<()> {
        loop {
            self.display_menu();
            let choice = prompt(&format!("Enter choice (0-{}): ", MENU.len() - 1))?;
            match choice.as_str() {
                "0" => {
                    log::info!("Exiting the application. Goodbye!");
                    return Ok(());
                }
                "1" => report(self.command_list_movies()),
                "2" => report(self.command_add_movie().await),
                "3" => report(self.command_delete_movie()),
                "4" => report(self.command_update_movie()),
                "5" => report(self.command_stats()),
                "6" => report(self.command_random_movie()),
                "7" => report(self.command_search()),
                "8" => report(self.command_sort_by_rating()),
                "9" => report(self.command_sort_by_year()),
                "10" => report(self.command_filter()),
                "11" => report(self.command_generate_website()),
                other => log::warn!(
                    "Invalid choice '{}'. Please enter a number between 0 and {}.",
                    other,
                    MENU.len() - 1
                ),
            }
            prompt("\nPress Enter to return to the menu...")?;
        }
    }

    fn display_menu(&self) {
        println!("\n******* My Movies Database *******");
        println!("Menu:");
        for (index, description) in MENU.iter().enumerate() {
            println!("{}. {}", index, description);
        }
    }

    fn command_list_movies(&self) -> Result<()> {
        let catalog = self.storage.load()?;
        println!("\n{} movies in total\n", catalog.len());
        for movie in &catalog {
            println!("{} ({}): {}", movie.title, movie.year, movie.rating);
        }
        Ok(())
    }

    async fn command_add_movie(&self) -> Result<()> {
        let title = prompt("Enter new movie name: ")?;
        let movie = match &self.client {
            Some(client) => client.fetch_movie(&title).await?,
            None => prompt_movie_details(title)?,
        };
        self.storage.add(movie)
    }

    fn command_delete_movie(&self) -> Result<()> {
        let title = prompt("\nEnter movie name to delete: ")?;
        self.storage.delete(&title)
    }

    fn command_update_movie(&self) -> Result<()> {
        let title = prompt("\nEnter movie name: ")?;
        let field = prompt("Update (r)ating or (n)otes? ")?;
        match field.as_str() {
            "r" => {
                let rating = prompt("Enter new movie rating: ")?
                    .parse::<f64>()
                    .map_err(|_| CatalogError::Format("rating should be a float".to_string()))?;
                self.storage.update_rating(&title, rating)
            }
            "n" => {
                let notes = prompt("Enter movie notes: ")?;
                self.storage.update_notes(&title, &notes)
            }
            other => {
                log::warn!("Unknown field '{}'. Enter 'r' or 'n'.", other);
                Ok(())
            }
        }
    }

    fn command_stats(&self) -> Result<()> {
        let catalog = self.storage.load()?;
        if catalog.is_empty() {
            println!("No movies available to display statistics.");
            return Ok(());
        }
        let stats = query::stats(&catalog);

        println!("\nStatistics for {} movies in the database:", stats.total_movies);
        if let Some(average) = stats.average_rating {
            println!("Average rating: {:.2}", average);
        }
        if let Some(median) = stats.median_rating {
            println!("Median rating: {:.2}", median);
        }
        println!("\nBest movie(s) by rating:");
        for movie in &stats.best_movies {
            println!("{} ({}): {}", movie.title, movie.year, movie.rating);
        }
        println!("\nWorst movie(s) by rating:");
        for movie in &stats.worst_movies {
            println!("{} ({}): {}", movie.title, movie.year, movie.rating);
        }
        Ok(())
    }

    fn command_random_movie(&self) -> Result<()> {
        let catalog = self.storage.load()?;
        match query::random_pick(&catalog) {
            Some(movie) => println!(
                "\nRandom movie: {} ({}): {}",
                movie.title, movie.year, movie.rating
            ),
            None => println!("No movies available in the database."),
        }
        Ok(())
    }

    fn command_search(&self) -> Result<()> {
        let needle = prompt("Enter part of movie name: ")?;
        let catalog = self.storage.load()?;
        let matches = query::search(&catalog, &needle);
        if matches.is_empty() {
            println!("No movies found containing '{}'.", needle);
            return Ok(());
        }
        println!("\nMovies matching '{}':", needle);
        for movie in matches {
            println!(
                "Title: {}, Year: {}, Rating: {}",
                movie.title, movie.year, movie.rating
            );
        }
        Ok(())
    }

    fn command_sort_by_rating(&self) -> Result<()> {
        let catalog = self.storage.load()?;
        println!("\nMovies sorted by rating:");
        for movie in query::sort_by_rating(&catalog) {
            println!("{} ({}): {}", movie.title, movie.year, movie.rating);
        }
        Ok(())
    }

    fn command_sort_by_year(&self) -> Result<()> {
        let catalog = self.storage.load()?;
        println!("\nMovies sorted by year:");
        for movie in query::sort_by_year(&catalog) {
            println!("{} ({}): {}", movie.title, movie.year, movie.rating);
        }
        Ok(())
    }

    fn command_filter(&self) -> Result<()> {
        let min_rating = prompt("Enter the minimum rating to filter by: ")?
            .parse::<f64>()
            .map_err(|_| CatalogError::Format("rating should be a float".to_string()))?;
        let start_year = parse_optional_year(&prompt("Enter the start year (blank for none): ")?)?;
        let end_year = parse_optional_year(&prompt("Enter the end year (blank for none): ")?)?;

        let catalog = self.storage.load()?;
        let filtered = query::filter_by_rating_and_year(&catalog, min_rating, start_year, end_year);
        if filtered.is_empty() {
            println!("No movies matched the filter.");
            return Ok(());
        }
        println!("\nMovies with a rating of {} or higher:", min_rating);
        for movie in filtered {
            println!("{} ({}): {}", movie.title, movie.year, movie.rating);
        }
        Ok(())
    }

    fn command_generate_website(&self) -> Result<()> {
        let catalog = self.storage.load()?;
        let template_path = self.config.template_dir.join("movies_template.html");
        let output_path = self.config.template_dir.join("movie_app.html");
        website::generate_website(&template_path, &output_path, "My Movie App", &catalog)
    }
}

/// Commands report their own failures; one bad command never ends the loop.
fn report(result: Result<()>) {
    if let Err(e) = result {
        log::error!("{}", e);
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(input.trim().to_string())
}

fn prompt_movie_details(title: String) -> Result<Movie> {
    let year = prompt("Enter new movie year: ")?
        .parse::<u32>()
        .map_err(|_| CatalogError::Format("year should be an integer".to_string()))?;
    let rating = prompt("Enter new movie rating: ")?
        .parse::<f64>()
        .map_err(|_| CatalogError::Format("rating should be a float".to_string()))?;
    let poster = prompt("Enter poster URL: ")?;
    Ok(Movie {
        title,
        year,
        rating,
        poster,
        notes: String::new(),
        imdb_id: String::new(),
    })
}

fn parse_optional_year(raw: &str) -> Result<Option<u32>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| CatalogError::Format(format!("invalid year '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_year_parsing() {
        assert_eq!(parse_optional_year("").unwrap(), None);
        assert_eq!(parse_optional_year("1999").unwrap(), Some(1999));
        assert!(parse_optional_year("soon").is_err());
    }
}
