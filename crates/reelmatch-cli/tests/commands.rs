//! End-to-end runs of the subcommands over a small dataset.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use clap::Parser;
use reelmatch_cli::cli::Args;
use reelmatch_cli::commands::{self, ParamOverrides, cmd_demo, cmd_recommend, load_showcase};
use reelmatch_cli::{Error, ReelmatchConfig};
use reelmatch_core::UserId;
use tempfile::TempDir;

const MOVIES: &str = "\
tconst,titleType,primaryTitle,startYear,runtimeMinutes,genres
tt0000101,movie,Space Wars,1999,120,\"Action,Sci-Fi\"
tt0000102,movie,Love Letters,2003,110,\"Drama,Romance\"
tt0000103,movie,Deep Sea,2008,130,\"Sci-Fi,Thriller\"
tt0000104,movie,Laugh Riot,2012,95,Comedy
tt0000105,movie,Weak Plot,2015,100,Drama
";

const RATINGS: &str = "\
tconst,averageRating,numVotes
tt0000101,8.6,1000
tt0000102,8.2,1000
tt0000103,8.1,1000
tt0000104,8.4,1000
tt0000105,6.0,1000
";

const USERS: &str = "\
user_id,favorite_movies,favorite_actors,average_watch_time,preferred_genres
user_drama,tt0000900,nm0000900,120,\"Drama, Romance\"
user_scifi,tt0000901,nm0000901,130,\"Sci-Fi, Thriller\"
";

fn fixture() -> (TempDir, ReelmatchConfig) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("movies_clean.csv"), MOVIES).unwrap();
    std::fs::write(dir.path().join("ratings_clean.csv"), RATINGS).unwrap();
    std::fs::write(dir.path().join("custom_users.csv"), USERS).unwrap();

    let mut config = ReelmatchConfig::default();
    config.dataset.dir = dir.path().to_path_buf();
    config.catalog.title_region = String::new();
    config.demo.users = vec!["user_drama".to_string(), "user_scifi".to_string()];
    config.demo.output = dir.path().join("out").join("recommendations.csv");
    (dir, config)
}

#[test]
fn test_recommend_single_user() {
    let (dir, config) = fixture();
    let output = dir.path().join("drama.csv");
    let overrides = ParamOverrides {
        count: Some(2),
        ratio: Some(0.5),
        min_rating: Some(7.0),
    };

    let recs = cmd_recommend(
        &config,
        &UserId::from("user_drama"),
        &overrides,
        Some(&output),
    )
    .unwrap();

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].tconst.as_str(), "tt0000102");
    assert_eq!(recs[0].total_score, 0.84);
    // Diversified pick shares no genre with the user
    assert!(!recs[1].genres.contains("Drama"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with(
        "user_id,tconst,primaryTitle,genres,runtimeMinutes,averageRating,total_score\n"
    ));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn test_recommend_unknown_user_is_user_error() {
    let (_dir, config) = fixture();
    let err = cmd_recommend(
        &config,
        &UserId::from("user_nobody"),
        &ParamOverrides::default(),
        None,
    )
    .unwrap_err();
    assert!(err.is_user_error());
    assert!(err.to_string().contains("user_nobody"));
}

#[test]
fn test_recommend_rejects_bad_ratio() {
    let (_dir, config) = fixture();
    let overrides = ParamOverrides {
        ratio: Some(1.5),
        ..Default::default()
    };
    let err = cmd_recommend(&config, &UserId::from("user_drama"), &overrides, None).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(reelmatch_core::Error::Validation { .. })
    ));
}

#[tokio::test]
async fn test_demo_exports_users_in_order() {
    let (_dir, config) = fixture();
    let all = cmd_demo(&config, None, None).await.unwrap();

    // Weak Plot falls under the demo's 8.0 floor; each user sees the other four
    assert_eq!(all.len(), 8);
    assert!(all[..4].iter().all(|r| r.user_id.as_str() == "user_drama"));
    assert!(all[4..].iter().all(|r| r.user_id.as_str() == "user_scifi"));
    assert_eq!(all[0].tconst.as_str(), "tt0000102");
    assert_eq!(all[4].tconst.as_str(), "tt0000103");
    assert!(all.iter().all(|r| r.average_rating >= 8.0));

    let csv = std::fs::read_to_string(&config.demo.output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[1].starts_with("user_drama,tt0000102,Love Letters,"));
    assert!(lines[5].starts_with("user_scifi,tt0000103,Deep Sea,"));
}

#[tokio::test]
async fn test_demo_min_rating_override() {
    let (dir, config) = fixture();
    let output = dir.path().join("strict.csv");
    let all = cmd_demo(&config, Some(8.5), Some(output.clone()))
        .await
        .unwrap();

    assert!(all.iter().all(|r| r.tconst.as_str() == "tt0000101"));
    assert!(output.exists());
    assert!(!config.demo.output.exists());
}

#[tokio::test]
async fn test_demo_missing_showcase_user() {
    let (_dir, mut config) = fixture();
    config.demo.users.push("user_superhero".to_string());
    let err = cmd_demo(&config, None, None).await.unwrap_err();
    assert!(err.is_user_error());
}

#[tokio::test]
async fn test_run_from_config_file() {
    let (dir, config) = fixture();
    let config_path = dir.path().join("reelmatch.toml");
    std::fs::write(&config_path, config.to_toml_string().unwrap()).unwrap();
    let output = dir.path().join("from_run.csv");

    let args = Args::try_parse_from([
        "reelmatch",
        "--config",
        config_path.to_str().unwrap(),
        "recommend",
        "--user",
        "user_scifi",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    commands::run(args).await.unwrap();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.lines().nth(1).unwrap().starts_with("user_scifi,tt0000103,"));
}

#[tokio::test]
async fn test_run_generate_then_recommend() {
    let (dir, config) = fixture();
    let users = dir.path().join("generated.csv");

    let args = Args::try_parse_from([
        "reelmatch",
        "generate-users",
        "--count",
        "5",
        "--seed",
        "3",
        "--output",
        users.to_str().unwrap(),
    ])
    .unwrap();
    commands::run(args).await.unwrap();

    let mut config = config;
    config.dataset.users = users;
    let recs = cmd_recommend(
        &config,
        &UserId::from("user_superhero"),
        &ParamOverrides::default(),
        None,
    )
    .unwrap();
    // Space Wars is the only Action title
    assert_eq!(recs[0].tconst.as_str(), "tt0000101");
}

#[test]
fn test_load_showcase_keeps_configured_order() {
    let (_dir, mut config) = fixture();
    config.demo.users = vec!["user_scifi".to_string(), "user_drama".to_string()];

    let (users, recommender) = load_showcase(&config).unwrap();
    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["user_scifi", "user_drama"]);
    assert_eq!(recommender.catalog().len(), 5);
}

#[tokio::test(flavor = "current_thread")]
async fn test_demo_on_single_threaded_runtime() {
    let (_dir, config) = fixture();
    let all = cmd_demo(&config, None, None).await.unwrap();
    assert_eq!(all.len(), 8);
}

#[tokio::test]
async fn test_run_config_command_skips_dataset_loading() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("conf").join("reelmatch.toml");
    let path = config_path.to_str().unwrap();

    // Default dataset paths do not exist here; config commands never read them.
    for argv in [
        vec!["reelmatch", "--config", path, "config", "init"],
        vec!["reelmatch", "--config", path, "config", "set", "demo.preview_rows", "5"],
    ] {
        commands::run(Args::try_parse_from(argv).unwrap()).await.unwrap();
    }

    let config = ReelmatchConfig::load(Some(path)).unwrap();
    assert_eq!(config.demo.preview_rows, 5);
}
