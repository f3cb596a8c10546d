//! Seed catalog loading
//!
//! The library is seeded once at startup, either from a JSON catalog file or
//! from the built-in catalog below.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::movie::{Genre, Movie};

/// Parse a catalog file: a JSON array of movies
pub fn parse_catalog(content: &str) -> anyhow::Result<Vec<Movie>> {
    serde_json::from_str(content).context("Invalid movie catalog")
}

/// Read and parse a catalog file
pub async fn load_catalog_file(path: &Path) -> anyhow::Result<Vec<Movie>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    parse_catalog(&content)
}

/// Load the seed catalog, falling back to the built-in one when no file is configured
pub async fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<Vec<Movie>> {
    match path {
        Some(path) => {
            tracing::info!("Loading movie catalog from: {}", path.display());
            load_catalog_file(&path).await
        }
        None => Ok(builtin_catalog()),
    }
}

/// Pick the catalog file: a command-line path wins over the settings entry
pub fn resolve_catalog_path(
    cli_path: Option<PathBuf>,
    configured: Option<&Path>,
) -> Option<PathBuf> {
    cli_path.or_else(|| configured.map(Path::to_path_buf))
}

fn entry(
    title: &str,
    subtitle: &str,
    storyline: &str,
    image: &str,
    rating: f32,
    genre: Genre,
    bookmarked: bool,
) -> Movie {
    Movie {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        storyline: storyline.to_string(),
        image_path: format!("images/{}", image),
        rating,
        genre,
        bookmarked,
    }
}

/// Catalog shipped with the application
///
/// No poster files ship with it; its cards show the placeholder.
pub fn builtin_catalog() -> Vec<Movie> {
    vec![
        entry(
            "Kingsglaive",
            "Final Fantasy XV",
            "King Regis, who oversees the land of Lucis, commands his army of soldiers to protect the kingdom from the Niflheim empire's plans to steal the sacred crystal.",
            "Kingsglaive_Final_Fantasy_XV.jpg",
            4.5,
            Genre::Action,
            true,
        ),
        entry(
            "Final Fantasy",
            "Spirits Within",
            "A scientist makes a last stand on Earth with the help of a ragtag team of soldiers against an invasion of alien phantoms.",
            "Final_Fantasy_Spirits_Within.jpg",
            4.0,
            Genre::Action,
            false,
        ),
        entry(
            "Ghost In The Shell",
            "Ghost In The Shell",
            "In the near future, Major is the first of her kind: a human saved from a terrible crash, who is cyber-enhanced to be a perfect soldier devoted to stopping the world's most dangerous criminals.",
            "Ghost_In_The_Shell.jpg",
            3.0,
            Genre::Thriller,
            false,
        ),
        entry(
            "Appleseed Alpha",
            "Appleseed",
            "A young female soldier Deunan and her cyborg partner Briareos survive through the post World War 3 apocalyptic New York in search of human's future hope, the legendary city of Olympus.",
            "Appleseed_Alpha.jpg",
            3.5,
            Genre::Action,
            false,
        ),
        entry(
            "Kung Fu Panda",
            "The Legend of Po",
            "Po, a clumsy panda who works in his father's noodle shop, is unexpectedly chosen to fulfil an ancient prophecy and defend the Valley of Peace.",
            "Kung_Fu_Panda.jpg",
            4.2,
            Genre::Comedy,
            true,
        ),
        entry(
            "The Grand Budapest Hotel",
            "A Concierge's Tale",
            "The adventures of a legendary concierge at a famous European hotel between the wars and the lobby boy who becomes his most trusted friend.",
            "Grand_Budapest_Hotel.jpg",
            4.7,
            Genre::Comedy,
            false,
        ),
    ]
}
