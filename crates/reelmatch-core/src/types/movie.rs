//! Catalog movie record.

use serde::{Deserialize, Serialize};

use super::{TitleId, split_list};

/// A movie after catalog assembly: localized title, joined rating,
/// runtime filled in, genres split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// IMDb title identifier.
    pub id: TitleId,
    /// Display title (localized when a region was configured).
    pub title: String,
    /// Genre cell as it appeared in the dataset, e.g. `"Action,Drama"`.
    pub genres_raw: String,
    /// Genres split from `genres_raw`.
    pub genres: Vec<String>,
    /// Runtime in minutes.
    pub runtime_minutes: u32,
    /// IMDb average rating, if the title has one.
    pub average_rating: Option<f64>,
    /// IMDb vote count, if the title has one.
    pub num_votes: Option<u64>,
}

impl Movie {
    /// Creates a movie, deriving `genres` from the raw genre cell.
    pub fn new(
        id: impl Into<TitleId>,
        title: impl Into<String>,
        genres_raw: impl Into<String>,
        runtime_minutes: u32,
    ) -> Self {
        let genres_raw = genres_raw.into();
        Self {
            id: id.into(),
            title: title.into(),
            genres: split_list(&genres_raw),
            genres_raw,
            runtime_minutes,
            average_rating: None,
            num_votes: None,
        }
    }

    /// Sets the rating and vote count.
    pub fn with_rating(mut self, average_rating: f64, num_votes: u64) -> Self {
        self.average_rating = Some(average_rating);
        self.num_votes = Some(num_votes);
        self
    }

    /// Rating with missing values treated as zero.
    pub fn rating_or_zero(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }

    /// Returns whether any of the movie's genres appears in `genres`.
    pub fn has_any_genre<S: AsRef<str>>(&self, genres: &[S]) -> bool {
        self.genres
            .iter()
            .any(|g| genres.iter().any(|other| other.as_ref() == g))
    }
}
