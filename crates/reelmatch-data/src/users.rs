//! User profile table: loading, lookup, and synthetic generation.

use rand::Rng;
use rand::seq::SliceRandom;
use reelmatch_core::{Error, PersonId, Result, TitleId, UserId, UserProfile, split_list};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::reader::{Delimiter, open_reader, row_error};

/// Genres synthetic users draw their preferences from.
pub const AVAILABLE_GENRES: [&str; 13] = [
    "Action",
    "Comedy",
    "Drama",
    "Thriller",
    "Romance",
    "Sci-Fi",
    "Horror",
    "Fantasy",
    "Adventure",
    "Animation",
    "Family",
    "Crime",
    "Mystery",
];

/// Default size of a generated profile table.
pub const DEFAULT_USER_COUNT: usize = 100;

/// Column header of `custom_users.csv`.
pub const USER_HEADER: [&str; 5] = [
    "user_id",
    "favorite_movies",
    "favorite_actors",
    "average_watch_time",
    "preferred_genres",
];

/// Row of `custom_users.csv`.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UserRecord {
    user_id: String,
    #[serde(default)]
    favorite_movies: String,
    #[serde(default)]
    favorite_actors: String,
    #[serde(default)]
    average_watch_time: String,
    #[serde(default)]
    preferred_genres: String,
}

impl UserRecord {
    fn into_profile(self, path: &Path) -> Result<UserProfile> {
        let watch_time = parse_watch_time(&self.average_watch_time).ok_or_else(|| {
            Error::dataset(
                path,
                format!(
                    "user {}: average_watch_time '{}' is not a whole number of minutes",
                    self.user_id, self.average_watch_time
                ),
            )
        })?;
        Ok(UserProfile {
            id: UserId::new(self.user_id),
            favorite_movies: split_list(&self.favorite_movies)
                .into_iter()
                .map(TitleId::new)
                .collect(),
            favorite_actors: split_list(&self.favorite_actors)
                .into_iter()
                .map(PersonId::new)
                .collect(),
            average_watch_time: watch_time,
            preferred_genres: split_list(&self.preferred_genres),
        })
    }

    fn from_profile(profile: &UserProfile) -> Self {
        fn join<T: AsRef<str>>(items: &[T]) -> String {
            items
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<&str>>()
                .join(", ")
        }
        Self {
            user_id: profile.id.to_string(),
            favorite_movies: join(&profile.favorite_movies),
            favorite_actors: join(&profile.favorite_actors),
            average_watch_time: profile.average_watch_time.to_string(),
            preferred_genres: join(&profile.preferred_genres),
        }
    }
}

/// Accepts `150` and `150.0`, rejects fractions and negatives.
fn parse_watch_time(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX))
        .then_some(value as u32)
}

/// Loads all user profiles from `custom_users.csv`.
pub fn load_users(path: &Path) -> Result<Vec<UserProfile>> {
    let mut reader = open_reader(path, Delimiter::Comma)?;
    let mut users = Vec::new();
    for record in reader.deserialize::<UserRecord>() {
        let record = record.map_err(|e| row_error(path, e))?;
        users.push(record.into_profile(path)?);
    }
    log::info!("Loaded {} user profiles from {}", users.len(), path.display());
    Ok(users)
}

/// Finds a user by id.
pub fn find_user<'a>(users: &'a [UserProfile], id: &UserId) -> Result<&'a UserProfile> {
    users
        .iter()
        .find(|u| &u.id == id)
        .ok_or_else(|| Error::UserNotFound { id: id.to_string() })
}

/// Writes profiles in the `custom_users.csv` layout.
pub fn write_users(path: &Path, users: &[UserProfile]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io_with_path(e, path))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(USER_HEADER)
        .map_err(|e| Error::dataset_with_source(path, "failed to write user header", e))?;
    for user in users {
        writer
            .serialize(UserRecord::from_profile(user))
            .map_err(|e| Error::dataset_with_source(path, "failed to write user row", e))?;
    }
    writer.flush().map_err(|e| Error::io_with_path(e, path))?;
    log::info!("Wrote {} user profiles to {}", users.len(), path.display());
    Ok(())
}

fn profile(
    id: &str,
    movies: [&str; 2],
    actors: [&str; 2],
    watch_time: u32,
    genres: &[&str],
) -> UserProfile {
    UserProfile {
        id: UserId::from(id),
        favorite_movies: movies.into_iter().map(TitleId::from).collect(),
        favorite_actors: actors.into_iter().map(PersonId::from).collect(),
        average_watch_time: watch_time,
        preferred_genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// The three showcase users with sharply defined tastes.
pub fn special_users() -> Vec<UserProfile> {
    vec![
        profile(
            "user_superhero",
            ["tt0000001", "tt0000002"],
            ["nm0000001", "nm0000002"],
            150,
            &["Action", "Adventure", "Fantasy"],
        ),
        profile(
            "user_drama",
            ["tt0000003", "tt0000004"],
            ["nm0000003", "nm0000004"],
            120,
            &["Drama", "Romance"],
        ),
        profile(
            "user_scifi",
            ["tt0000005", "tt0000006"],
            ["nm0000005", "nm0000006"],
            130,
            &["Sci-Fi", "Thriller"],
        ),
    ]
}

fn random_ids<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> Vec<String> {
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|_| format!("{prefix}{}", rng.gen_range(1_000_000..=9_999_999)))
        .collect()
}

/// Generates `total` profiles: the special users first, then random ones
/// named `user_random_{i}`. With `total < 3` only the first special users
/// are returned.
pub fn generate_users<R: Rng + ?Sized>(rng: &mut R, total: usize) -> Vec<UserProfile> {
    let mut users = special_users();
    users.truncate(total);

    for i in 1..=total.saturating_sub(users.len()) {
        let favorite_movies = random_ids(rng, "tt").into_iter().map(TitleId::new).collect();
        let favorite_actors = random_ids(rng, "nm").into_iter().map(PersonId::new).collect();
        let average_watch_time = rng.gen_range(60..=180);
        let genre_count = rng.gen_range(2..=4);
        let preferred_genres = AVAILABLE_GENRES
            .choose_multiple(rng, genre_count)
            .map(|g| g.to_string())
            .collect();

        users.push(UserProfile {
            id: UserId::new(format!("user_random_{i}")),
            favorite_movies,
            favorite_actors,
            average_watch_time,
            preferred_genres,
        });
    }
    users
}
