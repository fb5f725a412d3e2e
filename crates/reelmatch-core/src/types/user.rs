//! User taste profile.

use serde::{Deserialize, Serialize};

use super::{PersonId, TitleId, UserId};

/// A user's declared tastes, as stored in `custom_users.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier.
    pub id: UserId,
    /// Titles the user already loves; never recommended back.
    pub favorite_movies: Vec<TitleId>,
    /// Favourite people. Carried through but not scored.
    pub favorite_actors: Vec<PersonId>,
    /// Typical viewing session length in minutes.
    pub average_watch_time: u32,
    /// Genres the user asked for.
    pub preferred_genres: Vec<String>,
}

impl UserProfile {
    /// Returns whether `id` is one of the user's favourites.
    pub fn is_favorite(&self, id: &TitleId) -> bool {
        self.favorite_movies.contains(id)
    }
}
