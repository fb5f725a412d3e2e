//! Actor table cleaning.
//!
//! Streams the raw IMDb `name.basics` TSV, explodes `knownForTitles` into
//! one row per title, keeps only titles present in the movie catalog, and
//! sanitizes birth years.

use reelmatch_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use crate::reader::{Delimiter, cell, coerce_f64, open_reader, read_all, row_error};

/// Birth years outside this range are treated as corrupt.
pub const BIRTH_YEAR_RANGE: std::ops::RangeInclusive<u32> = 1900..=2025;

/// Row of the raw `name.basics.tsv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameBasicsRecord {
    /// Person id.
    pub nconst: String,
    /// Display name.
    #[serde(rename = "primaryName", default)]
    pub primary_name: String,
    /// Birth year cell.
    #[serde(rename = "birthYear", default)]
    pub birth_year: String,
    /// Death year cell.
    #[serde(rename = "deathYear", default)]
    pub death_year: String,
    /// Comma-separated professions.
    #[serde(rename = "primaryProfession", default)]
    pub primary_profession: String,
    /// Comma-separated title ids.
    #[serde(rename = "knownForTitles", default)]
    pub known_for_titles: String,
}

/// Column header of `actors_clean.csv`.
pub const ACTOR_HEADER: [&str; 6] = [
    "nconst",
    "primaryName",
    "birthYear",
    "deathYear",
    "primaryProfession",
    "knownForTitles",
];

/// Row of the cleaned `actors_clean.csv`; one title per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorRecord {
    /// Person id.
    pub nconst: String,
    /// Display name.
    #[serde(rename = "primaryName")]
    pub primary_name: Option<String>,
    /// Birth year, if plausible.
    #[serde(rename = "birthYear")]
    pub birth_year: Option<u32>,
    /// Death year cell.
    #[serde(rename = "deathYear")]
    pub death_year: Option<String>,
    /// Comma-separated professions.
    #[serde(rename = "primaryProfession")]
    pub primary_profession: Option<String>,
    /// A single catalog title id.
    #[serde(rename = "knownForTitles")]
    pub known_for_title: String,
}

/// Row counts of an actor cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActorCleanReport {
    /// Rows in the raw TSV.
    pub rows_read: usize,
    /// Rows written to the cleaned CSV.
    pub rows_written: usize,
}

#[derive(Deserialize)]
struct TitleOnly {
    tconst: String,
}

/// Reads the set of catalog title ids from `movies_clean.csv`.
pub fn load_title_ids(movies: &Path) -> Result<HashSet<String>> {
    let rows: Vec<TitleOnly> = read_all(movies, Delimiter::Comma)?;
    Ok(rows.into_iter().map(|r| r.tconst).collect())
}

/// Stateful row filter; holds the `(nconst, title)` pairs already emitted.
#[derive(Debug)]
pub struct ActorCleaner<'a> {
    known_titles: &'a HashSet<String>,
    seen: HashSet<(String, String)>,
}

impl<'a> ActorCleaner<'a> {
    /// Creates a cleaner that keeps only titles in `known_titles`.
    pub fn new(known_titles: &'a HashSet<String>) -> Self {
        Self {
            known_titles,
            seen: HashSet::new(),
        }
    }

    /// Cleans one raw row into zero or more output rows.
    pub fn clean(&mut self, record: &NameBasicsRecord) -> Vec<ActorRecord> {
        let Some(titles) = cell(&record.known_for_titles) else {
            return Vec::new();
        };

        let birth_year = coerce_f64(&record.birth_year)
            .filter(|y| {
                *y >= f64::from(*BIRTH_YEAR_RANGE.start()) && *y <= f64::from(*BIRTH_YEAR_RANGE.end())
            })
            .map(|y| y as u32);

        let mut out = Vec::new();
        for title in titles.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !self.known_titles.contains(title) {
                continue;
            }
            if !self
                .seen
                .insert((record.nconst.clone(), title.to_string()))
            {
                continue;
            }
            out.push(ActorRecord {
                nconst: record.nconst.clone(),
                primary_name: cell(&record.primary_name).map(str::to_string),
                birth_year,
                death_year: cell(&record.death_year).map(str::to_string),
                primary_profession: cell(&record.primary_profession).map(str::to_string),
                known_for_title: title.to_string(),
            });
        }
        out
    }
}

/// Cleans `name_basics` against the titles in `movies` and writes `output`.
pub fn clean_actors(name_basics: &Path, movies: &Path, output: &Path) -> Result<ActorCleanReport> {
    let known_titles = load_title_ids(movies)?;
    log::debug!("Loaded {} catalog titles for actor filtering", known_titles.len());

    let mut reader = open_reader(name_basics, Delimiter::Tab)?;
    let file = File::create(output).map_err(|e| Error::io_with_path(e, output))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(ACTOR_HEADER)
        .map_err(|e| Error::dataset_with_source(output, "failed to write actor header", e))?;

    let mut cleaner = ActorCleaner::new(&known_titles);
    let mut report = ActorCleanReport::default();
    for record in reader.deserialize::<NameBasicsRecord>() {
        let record = record.map_err(|e| row_error(name_basics, e))?;
        report.rows_read += 1;
        for actor in cleaner.clean(&record) {
            writer
                .serialize(&actor)
                .map_err(|e| Error::dataset_with_source(output, "failed to write actor row", e))?;
            report.rows_written += 1;
        }
    }
    writer.flush().map_err(|e| Error::io_with_path(e, output))?;

    log::info!(
        "Cleaned actors: {} rows read, {} rows written to {}",
        report.rows_read,
        report.rows_written,
        output.display()
    );
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(nconst: &str, birth: &str, titles: &str) -> NameBasicsRecord {
        NameBasicsRecord {
            nconst: nconst.to_string(),
            primary_name: format!("Person {nconst}"),
            birth_year: birth.to_string(),
            death_year: "\\N".to_string(),
            primary_profession: "actor".to_string(),
            known_for_titles: titles.to_string(),
        }
    }

    fn titles(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explodes_known_titles() {
        let known = titles(&["tt0000001", "tt0000003"]);
        let mut cleaner = ActorCleaner::new(&known);
        let rows = cleaner.clean(&record("nm0000001", "1960", "tt0000001,tt0000002,tt0000003"));
        let kept: Vec<&str> = rows.iter().map(|r| r.known_for_title.as_str()).collect();
        assert_eq!(kept, vec!["tt0000001", "tt0000003"]);
    }

    #[test]
    fn test_null_known_titles_dropped() {
        let known = titles(&["tt0000001"]);
        let mut cleaner = ActorCleaner::new(&known);
        assert!(cleaner.clean(&record("nm0000001", "1960", "\\N")).is_empty());
        assert!(cleaner.clean(&record("nm0000001", "1960", "")).is_empty());
    }

    #[test]
    fn test_duplicate_pairs_dropped() {
        let known = titles(&["tt0000001"]);
        let mut cleaner = ActorCleaner::new(&known);
        assert_eq!(cleaner.clean(&record("nm0000001", "1960", "tt0000001")).len(), 1);
        assert!(cleaner.clean(&record("nm0000001", "1960", "tt0000001")).is_empty());
        assert_eq!(cleaner.clean(&record("nm0000002", "1960", "tt0000001")).len(), 1);
    }

    #[test]
    fn test_birth_year_sanitized() {
        let known = titles(&["tt0000001"]);
        let mut cleaner = ActorCleaner::new(&known);
        let ok = cleaner.clean(&record("nm0000001", "1975", "tt0000001"));
        assert_eq!(ok[0].birth_year, Some(1975));
        let too_old = cleaner.clean(&record("nm0000002", "1850", "tt0000001"));
        assert_eq!(too_old[0].birth_year, None);
        let garbage = cleaner.clean(&record("nm0000003", "19x5", "tt0000001"));
        assert_eq!(garbage[0].birth_year, None);
        let future = cleaner.clean(&record("nm0000004", "2031", "tt0000001"));
        assert_eq!(future[0].birth_year, None);
    }

    #[test]
    fn test_null_cells_become_none() {
        let known = titles(&["tt0000001"]);
        let mut cleaner = ActorCleaner::new(&known);
        let rows = cleaner.clean(&record("nm0000001", "1960", "tt0000001"));
        assert_eq!(rows[0].death_year, None);
        assert_eq!(rows[0].primary_profession.as_deref(), Some("actor"));
    }
}
