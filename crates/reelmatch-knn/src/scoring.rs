//! Candidate scoring.
//!
//! `total = w * similarity + (1 - w) * (rating/10 + 1/(1 + |runtime - watch|)) / 2`,
//! rounded to two decimals, with `w` defaulting to 0.7.

use reelmatch_core::{Movie, Recommendation, UserProfile};

/// Default weight of genre similarity in the total score.
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.7;

/// Rounds to two decimals, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Closeness of a runtime to the user's usual session; 1 when equal.
pub fn runtime_score(runtime_minutes: u32, watch_time: u32) -> f64 {
    1.0 / (1.0 + (f64::from(runtime_minutes) - f64::from(watch_time)).abs())
}

/// Rating on a 0..1 scale.
pub fn rating_score(rating: f64) -> f64 {
    rating / 10.0
}

/// Scores movies for one user.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    user: &'a UserProfile,
    similarity_weight: f64,
}

impl<'a> Scorer<'a> {
    /// Creates a scorer for `user`.
    pub fn new(user: &'a UserProfile, similarity_weight: f64) -> Self {
        Self {
            user,
            similarity_weight,
        }
    }

    /// Combined score of `movie` given its genre similarity.
    pub fn total_score(&self, movie: &Movie, similarity: f64) -> f64 {
        let quality = (rating_score(movie.rating_or_zero())
            + runtime_score(movie.runtime_minutes, self.user.average_watch_time))
            / 2.0;
        round2(self.similarity_weight * similarity + (1.0 - self.similarity_weight) * quality)
    }

    /// Builds the export row for `movie`.
    pub fn recommend(&self, movie: &Movie, similarity: f64) -> Recommendation {
        Recommendation {
            user_id: self.user.id.clone(),
            tconst: movie.id.clone(),
            primary_title: movie.title.clone(),
            genres: movie.genres_raw.clone(),
            runtime_minutes: movie.runtime_minutes,
            average_rating: movie.rating_or_zero(),
            total_score: self.total_score(movie, similarity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelmatch_core::UserId;

    fn user(watch: u32) -> UserProfile {
        UserProfile {
            id: UserId::from("user_test"),
            favorite_movies: Vec::new(),
            favorite_actors: Vec::new(),
            average_watch_time: watch,
            preferred_genres: vec!["Drama".to_string()],
        }
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(0.8349), 0.83);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_runtime_score() {
        assert_eq!(runtime_score(120, 120), 1.0);
        assert_eq!(runtime_score(121, 120), 0.5);
        assert_eq!(runtime_score(119, 120), 0.5);
        assert_eq!(runtime_score(0, 9), 0.1);
    }

    #[test]
    fn test_rating_score() {
        assert_eq!(rating_score(8.0), 0.8);
        assert_eq!(rating_score(0.0), 0.0);
    }

    #[test]
    fn test_total_score_formula() {
        let u = user(120);
        let scorer = Scorer::new(&u, DEFAULT_SIMILARITY_WEIGHT);
        let movie = Movie::new("tt0000001", "A", "Drama", 120).with_rating(8.0, 10);
        // 0.7 * 1.0 + 0.3 * (0.8 + 1.0) / 2 = 0.97
        assert_eq!(scorer.total_score(&movie, 1.0), 0.97);
        // 0.3 * 0.9 = 0.27
        assert_eq!(scorer.total_score(&movie, 0.0), 0.27);
    }

    #[test]
    fn test_unrated_movie_scores_as_zero_rating() {
        let u = user(90);
        let scorer = Scorer::new(&u, DEFAULT_SIMILARITY_WEIGHT);
        let movie = Movie::new("tt0000002", "B", "Drama", 90);
        // 0.3 * (0 + 1) / 2 = 0.15
        assert_eq!(scorer.total_score(&movie, 0.0), 0.15);
        let rec = scorer.recommend(&movie, 0.0);
        assert_eq!(rec.average_rating, 0.0);
        assert_eq!(rec.user_id.as_str(), "user_test");
        assert_eq!(rec.genres, "Drama");
    }
}
