//! Catalog assembly.
//!
//! Joins the cleaned movie table with localized alternate titles and IMDb
//! ratings, fills missing runtimes, and drops movies without usable genres.
//!
//! # Pipeline
//!
//! 1. Localize titles (inner join on the configured region, lowest `ordering` wins)
//! 2. Left-join ratings
//! 3. Fill missing runtimes with the median runtime
//! 4. Drop movies without genres or carrying an excluded genre

use reelmatch_core::{Catalog, Error, Movie, Result, TitleId, split_list};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::reader::{Delimiter, cell, coerce_f64, read_all};

/// Paths to the cleaned dataset files the catalog is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSources {
    /// `movies_clean.csv`
    pub movies: PathBuf,
    /// `ratings_clean.csv`
    pub ratings: PathBuf,
    /// `title_akas_clean.csv`
    pub title_akas: PathBuf,
}

/// Catalog filtering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOptions {
    /// Region whose alternate titles replace the primary title.
    /// Empty keeps primary titles and skips the join.
    #[serde(default = "default_title_region")]
    pub title_region: String,

    /// Movies tagged with any of these genres are dropped.
    #[serde(default = "default_excluded_genres")]
    pub excluded_genres: Vec<String>,
}

fn default_title_region() -> String {
    "ES".to_string()
}

fn default_excluded_genres() -> Vec<String> {
    vec!["Documentary".to_string(), "Music".to_string()]
}

impl CatalogOptions {
    /// Options that keep primary titles.
    pub fn without_localization() -> Self {
        Self {
            title_region: String::new(),
            ..Default::default()
        }
    }

    /// The localization region, if any.
    pub fn region(&self) -> Option<&str> {
        Some(self.title_region.trim()).filter(|r| !r.is_empty())
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            title_region: default_title_region(),
            excluded_genres: default_excluded_genres(),
        }
    }
}

/// Row of `movies_clean.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieRecord {
    /// Title id.
    pub tconst: String,
    /// Primary title.
    #[serde(rename = "primaryTitle", default)]
    pub primary_title: String,
    /// Runtime cell, coerced later.
    #[serde(rename = "runtimeMinutes", default)]
    pub runtime_minutes: String,
    /// Comma-separated genres.
    #[serde(default)]
    pub genres: String,
}

/// Row of `ratings_clean.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingRecord {
    /// Title id.
    pub tconst: String,
    /// Average rating cell.
    #[serde(rename = "averageRating", default)]
    pub average_rating: String,
    /// Vote count cell.
    #[serde(rename = "numVotes", default)]
    pub num_votes: String,
}

/// Row of `title_akas_clean.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AkaRecord {
    /// Title id the alternate title belongs to.
    #[serde(rename = "titleId")]
    pub title_id: String,
    /// Preference order within the title.
    #[serde(default)]
    pub ordering: String,
    /// Alternate title.
    #[serde(default)]
    pub title: String,
    /// Region code, e.g. `ES`.
    #[serde(default)]
    pub region: String,
}

/// Loads the three dataset files and assembles the catalog.
pub fn load_catalog(sources: &CatalogSources, options: &CatalogOptions) -> Result<Catalog> {
    let movies: Vec<MovieRecord> = read_all(&sources.movies, Delimiter::Comma)?;
    let ratings: Vec<RatingRecord> = read_all(&sources.ratings, Delimiter::Comma)?;
    // Alternate titles are only needed for localization.
    let akas: Vec<AkaRecord> = if options.region().is_some() {
        read_all(&sources.title_akas, Delimiter::Comma)?
    } else {
        Vec::new()
    };

    let catalog = assemble_catalog(movies, &ratings, &akas, options)?;
    log::info!(
        "Loaded catalog: {} movies from {}",
        catalog.len(),
        sources.movies.display()
    );
    Ok(catalog)
}

/// Assembles the catalog from already-parsed rows.
pub fn assemble_catalog(
    movies: Vec<MovieRecord>,
    ratings: &[RatingRecord],
    akas: &[AkaRecord],
    options: &CatalogOptions,
) -> Result<Catalog> {
    let movies = match options.region() {
        Some(region) => localize_titles(movies, akas, region),
        None => movies,
    };

    let ratings = index_ratings(ratings);

    // Median over the joined set, before genre filtering.
    let runtimes: Vec<Option<f64>> = movies
        .iter()
        .map(|m| coerce_f64(&m.runtime_minutes))
        .collect();
    let fill = match median(runtimes.iter().flatten().copied().collect()) {
        Some(m) => m,
        None => {
            log::warn!("No movie has a runtime; filling missing runtimes with 0");
            0.0
        }
    };

    let total = movies.len();
    let mut kept = Vec::with_capacity(total);
    for (record, runtime) in movies.into_iter().zip(runtimes) {
        let Some(genres_raw) = cell(&record.genres).map(str::to_string) else {
            continue;
        };
        let genres = split_list(&genres_raw);
        if genres.iter().any(|g| options.excluded_genres.contains(g)) {
            continue;
        }

        let (average_rating, num_votes) = ratings
            .get(record.tconst.as_str())
            .copied()
            .unwrap_or((None, None));

        kept.push(Movie {
            id: TitleId::new(record.tconst),
            title: record.primary_title,
            genres_raw,
            genres,
            // Saturating cast truncates toward zero like `astype(int)`.
            runtime_minutes: runtime.unwrap_or(fill) as u32,
            average_rating,
            num_votes,
        });
    }

    log::debug!("Catalog filtering kept {} of {} movies", kept.len(), total);
    if kept.is_empty() {
        return Err(Error::EmptyCatalog);
    }
    Ok(Catalog::new(kept))
}

/// Inner-joins movies with the best-ordered alternate title of `region`.
fn localize_titles(movies: Vec<MovieRecord>, akas: &[AkaRecord], region: &str) -> Vec<MovieRecord> {
    // titleId -> (ordering, title); missing ordering sorts last.
    let mut best: HashMap<&str, (f64, &str)> = HashMap::new();
    for aka in akas.iter().filter(|a| a.region.trim() == region) {
        let ordering = coerce_f64(&aka.ordering).unwrap_or(f64::INFINITY);
        best.entry(aka.title_id.as_str())
            .and_modify(|slot| {
                if ordering < slot.0 {
                    *slot = (ordering, aka.title.as_str());
                }
            })
            .or_insert((ordering, aka.title.as_str()));
    }

    let before = movies.len();
    let localized: Vec<MovieRecord> = movies
        .into_iter()
        .filter_map(|mut movie| {
            let (_, title) = best.get(movie.tconst.as_str())?;
            movie.primary_title = (*title).to_string();
            Some(movie)
        })
        .collect();
    log::debug!(
        "Localized {} of {} movies to region {region}",
        localized.len(),
        before
    );
    localized
}

/// First rating row per title wins.
fn index_ratings(ratings: &[RatingRecord]) -> HashMap<&str, (Option<f64>, Option<u64>)> {
    let mut index = HashMap::with_capacity(ratings.len());
    for rating in ratings {
        index.entry(rating.tconst.as_str()).or_insert((
            coerce_f64(&rating.average_rating),
            coerce_f64(&rating.num_votes).map(|v| v as u64),
        ));
    }
    index
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
