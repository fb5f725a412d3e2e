//! Subcommand implementations.

use crate::cli::{Args, Command};
use crate::config::ReelmatchConfig;
use crate::config_handlers::handle_config_command;
use crate::error::Result;
use crate::table::{render_recommendations, render_user};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reelmatch_core::{Recommendation, UserId, UserProfile};
use reelmatch_data::{
    ActorCleanReport, clean_actors, find_user, generate_users, load_catalog, load_users,
    write_recommendations, write_users,
};
use reelmatch_knn::{RecommendParams, Recommender};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{Instrument, info, info_span};

/// Runs the parsed command line.
pub async fn run(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();
    let load_config = || ReelmatchConfig::load(config_path);

    match args.command {
        Command::Config { action } => handle_config_command(config_path, action)?,
        Command::Recommend {
            user,
            count,
            ratio,
            min_rating,
            output,
        } => {
            let overrides = ParamOverrides {
                count,
                ratio,
                min_rating,
            };
            cmd_recommend(
                &load_config()?,
                &UserId::new(user),
                &overrides,
                output.as_deref(),
            )?;
        }
        Command::Demo { min_rating, output } => {
            cmd_demo(&load_config()?, min_rating, output)
                .instrument(info_span!("demo"))
                .await?;
        }
        Command::CleanActors { input, output } => {
            cmd_clean_actors(&load_config()?, input, output)?;
        }
        Command::GenerateUsers {
            count,
            seed,
            output,
        } => {
            cmd_generate_users(&load_config()?, count, seed, output)?;
        }
    }
    Ok(())
}

/// Command-line adjustments to the configured recommendation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamOverrides {
    /// List length.
    pub count: Option<usize>,
    /// Diversified share.
    pub ratio: Option<f64>,
    /// Minimum rating.
    pub min_rating: Option<f64>,
}

impl ParamOverrides {
    /// Applies the set overrides on top of `base`.
    pub fn apply(&self, base: &RecommendParams) -> RecommendParams {
        let mut params = base.clone();
        if let Some(n) = self.count {
            params = params.with_count(n);
        }
        if let Some(ratio) = self.ratio {
            params = params.with_diversified_ratio(ratio);
        }
        if let Some(rating) = self.min_rating {
            params = params.with_min_rating(rating);
        }
        params
    }
}

/// Builds the recommender from the configured dataset files.
pub fn load_recommender(config: &ReelmatchConfig) -> Result<Recommender> {
    let catalog = load_catalog(&config.dataset.catalog_sources(), &config.catalog)?;
    Ok(Recommender::new(catalog)?)
}

/// Recommends for one user, prints the result, and optionally exports it.
pub fn cmd_recommend(
    config: &ReelmatchConfig,
    user_id: &UserId,
    overrides: &ParamOverrides,
    output: Option<&Path>,
) -> Result<Vec<Recommendation>> {
    let _span = info_span!("recommend", user = %user_id).entered();

    let params = overrides.apply(&config.recommend);
    params.validate()?;

    let users = load_users(&config.dataset.users_path())?;
    let user = find_user(&users, user_id)?;
    let recommender = load_recommender(config)?;
    let recs = recommender.recommend(user, &params)?;

    print!("{}", render_user(user));
    println!();
    print!("{}", render_recommendations(&recs));

    if let Some(path) = output {
        write_recommendations(path, &recs)?;
        info!(path = %path.display(), rows = recs.len(), "Exported recommendations");
    }
    Ok(recs)
}

/// Runs every showcase user and writes the combined export.
///
/// Users are scored concurrently; rows come back in configured user order.
pub async fn cmd_demo(
    config: &ReelmatchConfig,
    min_rating: Option<f64>,
    output: Option<PathBuf>,
) -> Result<Vec<Recommendation>> {
    let params = RecommendParams {
        min_rating: min_rating.unwrap_or(config.demo.min_rating),
        ..config.recommend.clone()
    };
    params.validate()?;

    let loader_config = config.clone();
    let (showcase, recommender) =
        tokio::task::spawn_blocking(move || load_showcase(&loader_config)).await??;

    let recommender = Arc::new(recommender);
    let per_user = recommend_concurrently(recommender, showcase.clone(), params).await?;

    let mut all = Vec::new();
    for (user, recs) in showcase.iter().zip(per_user) {
        print!("{}", render_user(user));
        print!("{}", render_recommendations(&recs));
        println!();
        all.extend(recs);
    }

    let output = output.unwrap_or_else(|| config.demo.output.clone());
    write_recommendations(&output, &all)?;
    info!(path = %output.display(), rows = all.len(), "Exported recommendations");

    let preview = &all[..all.len().min(config.demo.preview_rows)];
    println!("Preview of {}:", output.display());
    print!("{}", render_recommendations(preview));
    Ok(all)
}

/// Resolves the showcase users and builds the recommender.
///
/// Reads every dataset file, so async callers run it on a blocking task.
pub fn load_showcase(config: &ReelmatchConfig) -> Result<(Vec<UserProfile>, Recommender)> {
    let users = load_users(&config.dataset.users_path())?;
    let showcase = config
        .demo
        .user_ids()
        .iter()
        .map(|id| find_user(&users, id).cloned())
        .collect::<reelmatch_core::Result<Vec<_>>>()?;
    Ok((showcase, load_recommender(config)?))
}

/// Scores each user on a blocking task; results keep the input order.
pub async fn recommend_concurrently(
    recommender: Arc<Recommender>,
    users: Vec<UserProfile>,
    params: RecommendParams,
) -> Result<Vec<Vec<Recommendation>>> {
    let params = Arc::new(params);
    let mut tasks = JoinSet::new();
    for (index, user) in users.into_iter().enumerate() {
        let recommender = Arc::clone(&recommender);
        let params = Arc::clone(&params);
        tasks.spawn_blocking(move || (index, recommender.recommend(&user, &params)));
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, recs) = joined?;
        results.push((index, recs?));
    }
    results.sort_by_key(|(index, _)| *index);
    Ok(results.into_iter().map(|(_, recs)| recs).collect())
}

/// Cleans the raw actor dump against the movie table.
pub fn cmd_clean_actors(
    config: &ReelmatchConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<ActorCleanReport> {
    let _span = info_span!("clean_actors").entered();

    let input = input.unwrap_or_else(|| config.dataset.name_basics.clone());
    let output = output.unwrap_or_else(|| config.dataset.dir.join(&config.dataset.actors_output));
    let report = clean_actors(&input, &config.dataset.movies_path(), &output)?;

    println!(
        "Wrote {} actor rows ({} people read) to {}",
        report.rows_written,
        report.rows_read,
        output.display()
    );
    Ok(report)
}

/// Generates synthetic profiles and writes them, returning the output path.
pub fn cmd_generate_users(
    config: &ReelmatchConfig,
    count: usize,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let _span = info_span!("generate_users", count).entered();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let users = generate_users(&mut rng, count);

    let output = output.unwrap_or_else(|| config.dataset.users_path());
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| reelmatch_core::Error::io_with_path(e, parent))?;
    }
    write_users(&output, &users)?;

    println!("Wrote {} user profiles to {}", users.len(), output.display());
    Ok(output)
}
