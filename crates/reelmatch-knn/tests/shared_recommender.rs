//! The recommender shared across threads, as the CLI's demo uses it.

#![allow(clippy::unwrap_used)]

use reelmatch_core::{Catalog, Movie, TitleId, UserId, UserProfile};
use reelmatch_knn::{RecommendParams, Recommender};
use std::sync::Arc;

fn catalog() -> Catalog {
    let genres = [
        "Action,Adventure,Fantasy",
        "Action,Sci-Fi",
        "Drama,Romance",
        "Drama",
        "Sci-Fi,Thriller",
        "Comedy",
        "Horror",
        "Animation,Comedy",
    ];
    let movies = (0u32..40)
        .map(|i| {
            let raw = genres[i as usize % genres.len()];
            Movie::new(
                format!("tt{:07}", 200 + i),
                format!("Movie {i}"),
                raw,
                80 + (i * 7) % 90,
            )
            .with_rating(5.0 + f64::from(i % 50) / 10.0, 100)
        })
        .collect();
    Catalog::new(movies)
}

fn user(id: &str, genres: &[&str], watch: u32) -> UserProfile {
    UserProfile {
        id: UserId::from(id),
        favorite_movies: vec![TitleId::from("tt0000201")],
        favorite_actors: Vec::new(),
        average_watch_time: watch,
        preferred_genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

#[test]
fn test_threads_match_sequential_results() {
    let recommender = Arc::new(Recommender::new(catalog()).unwrap());
    let params = RecommendParams::default().with_min_rating(6.0);
    let users = vec![
        user("user_superhero", &["Action", "Adventure", "Fantasy"], 150),
        user("user_drama", &["Drama", "Romance"], 120),
        user("user_scifi", &["Sci-Fi", "Thriller"], 130),
    ];

    let sequential: Vec<_> = users
        .iter()
        .map(|u| recommender.recommend(u, &params).unwrap())
        .collect();

    let handles: Vec<_> = users
        .into_iter()
        .map(|u| {
            let recommender = Arc::clone(&recommender);
            let params = params.clone();
            std::thread::spawn(move || recommender.recommend(&u, &params).unwrap())
        })
        .collect();
    let threaded: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(sequential, threaded);
}

#[test]
fn test_list_shape_for_showcase_user() {
    let recommender = Recommender::new(catalog()).unwrap();
    let drama = user("user_drama", &["Drama", "Romance"], 120);
    let params = RecommendParams::default().with_min_rating(6.0);

    let recs = recommender.recommend(&drama, &params).unwrap();
    assert_eq!(recs.len(), 10);
    assert!(recs.iter().all(|r| r.user_id == drama.id));
    assert!(recs.iter().all(|r| r.average_rating >= 6.0));
    assert!(recs.iter().all(|r| r.tconst.as_str() != "tt0000201"));

    // First half from the user's genres, second half from outside them
    assert!(recs[..5].iter().all(|r| r.genres.contains("Drama")));
    assert!(
        recs[5..]
            .iter()
            .all(|r| !r.genres.contains("Drama") && !r.genres.contains("Romance"))
    );

    let mut ids: Vec<_> = recs.iter().map(|r| r.tconst.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), recs.len());
}
