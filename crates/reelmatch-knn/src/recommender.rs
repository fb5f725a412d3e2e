//! Tailored + diversified recommendation lists.
//!
//! The tailored list comes from the genre-vector neighbours of the user's
//! preferred genres. The diversified list draws from movies sharing no
//! preferred genre at all. Both are scored with the same formula, filtered
//! by minimum rating, and spliced according to `diversified_ratio`.

use reelmatch_core::{Catalog, Error, Recommendation, Result, UserId, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::binarizer::GenreBinarizer;
use crate::neighbors::CosineNeighbors;
use crate::scoring::{DEFAULT_SIMILARITY_WEIGHT, Scorer};

/// Recommendation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendParams {
    /// Total list length (upper bound).
    #[serde(default = "default_n_recommendations")]
    pub n_recommendations: usize,

    /// Share of the list reserved for out-of-taste titles, in `[0, 1]`.
    #[serde(default = "default_diversified_ratio")]
    pub diversified_ratio: f64,

    /// Movies rated below this are never recommended.
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,

    /// How many genre neighbours to consider for the tailored list.
    #[serde(default = "default_candidate_pool")]
    pub candidate_pool: usize,

    /// Weight of genre similarity in the total score, in `[0, 1]`.
    #[serde(default = "default_similarity_weight")]
    pub similarity_weight: f64,
}

fn default_n_recommendations() -> usize {
    10
}

fn default_diversified_ratio() -> f64 {
    0.5
}

fn default_min_rating() -> f64 {
    7.0
}

fn default_candidate_pool() -> usize {
    200
}

fn default_similarity_weight() -> f64 {
    DEFAULT_SIMILARITY_WEIGHT
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            n_recommendations: default_n_recommendations(),
            diversified_ratio: default_diversified_ratio(),
            min_rating: default_min_rating(),
            candidate_pool: default_candidate_pool(),
            similarity_weight: default_similarity_weight(),
        }
    }
}

impl RecommendParams {
    /// Sets the list length.
    pub fn with_count(mut self, n: usize) -> Self {
        self.n_recommendations = n;
        self
    }

    /// Sets the diversified share.
    pub fn with_diversified_ratio(mut self, ratio: f64) -> Self {
        self.diversified_ratio = ratio;
        self
    }

    /// Sets the minimum rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Checks ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.diversified_ratio) {
            return Err(Error::validation_field(
                "diversified_ratio",
                format!("must be within [0, 1], got {}", self.diversified_ratio),
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_weight) {
            return Err(Error::validation_field(
                "similarity_weight",
                format!("must be within [0, 1], got {}", self.similarity_weight),
            ));
        }
        if self.candidate_pool == 0 {
            return Err(Error::validation_field(
                "candidate_pool",
                "must be at least 1",
            ));
        }
        if !self.min_rating.is_finite() {
            return Err(Error::validation_field("min_rating", "must be a finite number"));
        }
        Ok(())
    }

    /// `(tailored, diversified)` slot counts.
    pub fn split(&self) -> (usize, usize) {
        // Saturating float-to-int cast floors like `int()`.
        let diverse = (self.n_recommendations as f64 * self.diversified_ratio) as usize;
        let diverse = diverse.min(self.n_recommendations);
        (self.n_recommendations - diverse, diverse)
    }
}

/// Immutable recommendation engine over a catalog.
///
/// Safe to share across threads; every query only reads.
#[derive(Debug)]
pub struct Recommender {
    catalog: Catalog,
    binarizer: GenreBinarizer,
    index: CosineNeighbors,
}

impl Recommender {
    /// Fits the genre encoding and neighbour index on `catalog`.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let binarizer = GenreBinarizer::fit(catalog.movies().iter().map(|m| &m.genres));
        let rows = catalog
            .movies()
            .iter()
            .map(|m| binarizer.transform(&m.genres))
            .collect();
        let index = CosineNeighbors::fit(rows)?;
        log::info!(
            "Recommender ready: {} movies, {} genres",
            catalog.len(),
            binarizer.len()
        );
        Ok(Self {
            catalog,
            binarizer,
            index,
        })
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The fitted genre classes.
    pub fn genres(&self) -> &[String] {
        self.binarizer.classes()
    }

    /// Recommends movies for `user`.
    ///
    /// The result holds at most `n_recommendations` rows: tailored picks
    /// first, then diversified ones, with no title repeated. It may be
    /// shorter when too few movies pass the rating filter.
    pub fn recommend(
        &self,
        user: &UserProfile,
        params: &RecommendParams,
    ) -> Result<Vec<Recommendation>> {
        params.validate()?;
        let scorer = Scorer::new(user, params.similarity_weight);
        let (num_tailored, num_diverse) = params.split();

        let tailored = self.tailored(user, params, &scorer)?;
        let diverse = self.diversified(user, params, &scorer);
        log::debug!(
            "User {}: {} tailored and {} diversified candidates pass min rating {}",
            user.id,
            tailored.len(),
            diverse.len(),
            params.min_rating
        );

        let mut seen = HashSet::new();
        let picks: Vec<Recommendation> = tailored
            .into_iter()
            .take(num_tailored)
            .chain(diverse.into_iter().take(num_diverse))
            .filter(|rec| seen.insert(rec.tconst.clone()))
            .collect();

        log::info!("User {}: {} recommendations", user.id, picks.len());
        Ok(picks)
    }

    /// Looks `user_id` up in `users` and recommends for that profile.
    pub fn recommend_for(
        &self,
        users: &[UserProfile],
        user_id: &UserId,
        params: &RecommendParams,
    ) -> Result<Vec<Recommendation>> {
        let user = users
            .iter()
            .find(|u| &u.id == user_id)
            .ok_or_else(|| Error::UserNotFound {
                id: user_id.to_string(),
            })?;
        self.recommend(user, params)
    }

    fn tailored(
        &self,
        user: &UserProfile,
        params: &RecommendParams,
        scorer: &Scorer<'_>,
    ) -> Result<Vec<Recommendation>> {
        let query = self.binarizer.transform(&user.preferred_genres);
        let neighbours = self.index.kneighbors(&query, params.candidate_pool)?;

        let mut recs: Vec<Recommendation> = neighbours
            .iter()
            .filter_map(|n| self.catalog.get(n.index).map(|movie| (movie, n.similarity())))
            .filter(|(movie, _)| !user.is_favorite(&movie.id))
            .map(|(movie, similarity)| scorer.recommend(movie, similarity))
            .filter(|rec| rec.average_rating >= params.min_rating)
            .collect();
        sort_by_score(&mut recs);
        Ok(recs)
    }

    fn diversified(
        &self,
        user: &UserProfile,
        params: &RecommendParams,
        scorer: &Scorer<'_>,
    ) -> Vec<Recommendation> {
        let mut recs: Vec<Recommendation> = self
            .catalog
            .movies()
            .iter()
            .filter(|movie| !movie.has_any_genre(&user.preferred_genres))
            .filter(|movie| !user.is_favorite(&movie.id))
            .map(|movie| scorer.recommend(movie, 0.0))
            .filter(|rec| rec.average_rating >= params.min_rating)
            .collect();
        sort_by_score(&mut recs);
        recs
    }
}

/// Highest score first; stable, so equal scores keep their incoming order.
fn sort_by_score(recs: &mut [Recommendation]) {
    recs.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
}
