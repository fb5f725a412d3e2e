//! Reelmatch configuration file.
//!
//! Resolution order: `--config` / `REELMATCH_CONFIG`, then `./reelmatch.toml`
//! when present, then built-in defaults.

use reelmatch_core::{Error, Result, UserId};
use reelmatch_data::{CatalogOptions, CatalogSources};
use reelmatch_knn::RecommendParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "reelmatch.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReelmatchConfig {
    /// Dataset file locations.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Catalog filtering.
    #[serde(default)]
    pub catalog: CatalogOptions,

    /// Recommendation defaults.
    #[serde(default)]
    pub recommend: RecommendParams,

    /// Showcase run.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Where the dataset files live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Directory holding the cleaned CSVs.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Movie table, relative to `dir`.
    #[serde(default = "default_movies")]
    pub movies: PathBuf,

    /// Ratings table, relative to `dir`.
    #[serde(default = "default_ratings")]
    pub ratings: PathBuf,

    /// Alternate titles table, relative to `dir`.
    #[serde(default = "default_title_akas")]
    pub title_akas: PathBuf,

    /// User profiles, relative to `dir`.
    #[serde(default = "default_users")]
    pub users: PathBuf,

    /// Raw IMDb `name.basics` dump.
    #[serde(default = "default_name_basics")]
    pub name_basics: PathBuf,

    /// Cleaned actor table output.
    #[serde(default = "default_actors_output")]
    pub actors_output: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from("Dataset/clean")
}

fn default_movies() -> PathBuf {
    PathBuf::from("movies_clean.csv")
}

fn default_ratings() -> PathBuf {
    PathBuf::from("ratings_clean.csv")
}

fn default_title_akas() -> PathBuf {
    PathBuf::from("title_akas_clean.csv")
}

fn default_users() -> PathBuf {
    PathBuf::from("custom_users.csv")
}

fn default_name_basics() -> PathBuf {
    PathBuf::from("Dataset/name.basics.tsv")
}

fn default_actors_output() -> PathBuf {
    PathBuf::from("actors_clean.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            movies: default_movies(),
            ratings: default_ratings(),
            title_akas: default_title_akas(),
            users: default_users(),
            name_basics: default_name_basics(),
            actors_output: default_actors_output(),
        }
    }
}

impl DatasetConfig {
    /// Catalog input paths.
    pub fn catalog_sources(&self) -> CatalogSources {
        CatalogSources {
            movies: self.movies_path(),
            ratings: self.dir.join(&self.ratings),
            title_akas: self.dir.join(&self.title_akas),
        }
    }

    /// Resolved movie table path.
    pub fn movies_path(&self) -> PathBuf {
        self.dir.join(&self.movies)
    }

    /// Resolved user profile path.
    pub fn users_path(&self) -> PathBuf {
        self.dir.join(&self.users)
    }
}

/// Settings of the `demo` showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Users to showcase, in output order.
    #[serde(default = "default_demo_users")]
    pub users: Vec<String>,

    /// Minimum rating for the showcase, usually stricter than the default.
    #[serde(default = "default_demo_min_rating")]
    pub min_rating: f64,

    /// Combined export file.
    #[serde(default = "default_demo_output")]
    pub output: PathBuf,

    /// Rows echoed after export.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_demo_users() -> Vec<String> {
    vec![
        "user_superhero".to_string(),
        "user_drama".to_string(),
        "user_scifi".to_string(),
    ]
}

fn default_demo_min_rating() -> f64 {
    8.0
}

fn default_demo_output() -> PathBuf {
    PathBuf::from("recommendations.csv")
}

fn default_preview_rows() -> usize {
    20
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            users: default_demo_users(),
            min_rating: default_demo_min_rating(),
            output: default_demo_output(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl DemoConfig {
    /// Showcase users as ids.
    pub fn user_ids(&self) -> Vec<UserId> {
        self.users.iter().map(|u| UserId::new(u.as_str())).collect()
    }
}

impl ReelmatchConfig {
    /// Path the config would be read from.
    pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
        explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist; the default path falls back to
    /// built-in defaults when absent.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit);
        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            log::debug!("No {} found; using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.recommend.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
