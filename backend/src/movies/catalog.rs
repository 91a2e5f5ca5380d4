//! In-memory movie catalog
//!
//! A process-local map standing in for a database. Ids start at 1 and new
//! movies receive the highest existing id plus one.

use crate::error::ApiError;
use chrono::{DateTime, TimeZone, Utc};
use product_catalog_shared::types::{Movie, NewMovieRequest, Thumbnail};
use product_catalog_shared::validation::{
    validate_movie_name, validate_movie_year, validate_thumbnail_url,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::info;

/// Thread-safe movie store
#[derive(Debug, Default)]
pub struct MovieCatalog {
    movies: RwLock<BTreeMap<u64, Movie>>,
}

impl MovieCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-loaded with the demo titles
    pub fn seeded() -> Self {
        let movies = seed_movies()
            .into_iter()
            .enumerate()
            .map(|(index, movie)| (index as u64 + 1, movie))
            .collect();

        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Every movie keyed by id
    pub async fn list(&self) -> BTreeMap<u64, Movie> {
        self.movies.read().await.clone()
    }

    /// One movie by id
    pub async fn get(&self, id: u64) -> Result<Movie, ApiError> {
        self.movies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))
    }

    /// Validate and store a new movie, returning its id
    pub async fn insert(&self, req: NewMovieRequest) -> Result<(u64, Movie), ApiError> {
        validate_movie_name(&req.name).map_err(ApiError::Validation)?;
        validate_movie_year(req.year).map_err(ApiError::Validation)?;
        for thumbnail in &req.thumbnail {
            validate_thumbnail_url(&thumbnail.url).map_err(ApiError::Validation)?;
        }

        let movie = Movie {
            name: req.name,
            year: req.year,
            tags: req.tags,
            thumbnail: req.thumbnail,
            created_at: Utc::now(),
            modified_at: None,
        };

        let mut movies = self.movies.write().await;
        let id = movies.keys().next_back().map_or(1, |last| last + 1);
        movies.insert(id, movie.clone());

        info!(movie_id = id, name = %movie.name, "Movie inserted");
        Ok((id, movie))
    }

    /// Append a thumbnail to an existing movie
    pub async fn add_thumbnail(&self, id: u64, url: &str) -> Result<Thumbnail, ApiError> {
        validate_thumbnail_url(url).map_err(ApiError::Validation)?;

        let mut movies = self.movies.write().await;
        let movie = movies
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

        let thumbnail = Thumbnail {
            url: url.to_string(),
        };
        movie.thumbnail.push(thumbnail.clone());
        movie.modified_at = Some(Utc::now());

        info!(movie_id = id, url = %url, "Thumbnail added");
        Ok(thumbnail)
    }
}

fn seed_movies() -> Vec<Movie> {
    let seeds: [(&str, i32, [&str; 2], &[&str], u32); 6] = [
        (
            "Back to The Future",
            1985,
            ["Sci-Fi", "Adventure"],
            &[
                "https://example.com/back_to_the_future.jpg",
                "https://example.com/back_to_the_future2.jpg",
            ],
            0,
        ),
        ("Cars", 2006, ["Animation", "Family"], &["https://example.com/cars.jpg"], 2),
        (
            "Transformers",
            2007,
            ["Action", "Sci-Fi"],
            &["https://example.com/transformers.jpg"],
            5,
        ),
        ("The Matrix", 1999, ["Sci-Fi", "Action"], &["https://example.com/the_matrix.jpg"], 9),
        (
            "The Lord of the Rings",
            2001,
            ["Fantasy", "Adventure"],
            &["https://example.com/lord_of_the_rings.jpg"],
            11,
        ),
        ("Mickey 17", 2025, ["Sci-Fi", "Adventure"], &["https://example.com/mickey_17.jpg"], 16),
    ];

    seeds
        .into_iter()
        .map(|(name, year, tags, urls, second)| Movie {
            name: name.to_string(),
            year,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumbnail: urls
                .iter()
                .map(|url| Thumbnail {
                    url: url.to_string(),
                })
                .collect(),
            created_at: seeded_at(second),
            modified_at: None,
        })
        .collect()
}

fn seeded_at(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, second)
        .single()
        .unwrap_or_else(Utc::now)
}
