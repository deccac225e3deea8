//! Static website generation from a movie-grid template.
//!
//! The template carries two placeholder tokens; rendering is plain string
//! substitution, no template engine.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::{Catalog, Movie};

pub const TITLE_TOKEN: &str = "__TEMPLATE_TITLE__";
pub const MOVIE_GRID_TOKEN: &str = "__TEMPLATE_MOVIE_GRID__";

/// One grid entry: poster linking to the IMDb page, then title, year,
/// rating and notes.
pub fn movie_fragment(movie: &Movie) -> String {
    format!(
        "<li class=\"movie\">\
         <a href=\"https://www.imdb.com/title/{}\" target=\"_blank\">\
         <img src=\"{}\" class=\"movie-poster\" alt=\"{} Poster\"/>\
         </a>\
         <div class=\"movie-title\">{}</div>\
         <p class=\"movie-year\">{}</p>\
         <p class=\"movie-rating\">Rating: {}</p>\
         <p class=\"movie-notes\">{}</p>\
         </li>",
        movie.imdb_id, movie.poster, movie.title, movie.title, movie.year, movie.rating, movie.notes
    )
}

pub fn render_page(template: &str, page_title: &str, catalog: &Catalog) -> String {
    let grid: String = catalog.iter().map(movie_fragment).collect();
    template
        .replace(TITLE_TOKEN, page_title)
        .replace(MOVIE_GRID_TOKEN, &grid)
}

/// Read the template, render the grid and write the finished page.
pub fn generate_website(
    template_path: &Path,
    output_path: &Path,
    page_title: &str,
    catalog: &Catalog,
) -> Result<()> {
    let template = fs::read_to_string(template_path)?;
    let page = render_page(&template, page_title, catalog);
    fs::write(output_path, page)?;
    log::info!(
        "Website successfully generated at '{}'.",
        output_path.display()
    );
    Ok(())
}
