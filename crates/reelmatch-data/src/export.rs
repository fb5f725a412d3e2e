//! Recommendation export.
//!
//! The exported CSV is the hand-off point to BI dashboards, so the header
//! is always written, even when there are no rows.

use reelmatch_core::{Error, Recommendation, Result};
use std::fs::File;
use std::path::Path;

/// Column header of the recommendations file.
pub const RECOMMENDATION_HEADER: [&str; 7] = [
    "user_id",
    "tconst",
    "primaryTitle",
    "genres",
    "runtimeMinutes",
    "averageRating",
    "total_score",
];

/// Writes recommendations to `path`, replacing any existing file.
pub fn write_recommendations(path: &Path, recommendations: &[Recommendation]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
    }

    let file = File::create(path).map_err(|e| Error::io_with_path(e, path))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let write_err = |e: csv::Error| Error::dataset_with_source(path, "failed to write recommendation", e);
    writer.write_record(RECOMMENDATION_HEADER).map_err(write_err)?;
    for rec in recommendations {
        writer.serialize(rec).map_err(write_err)?;
    }
    writer.flush().map_err(|e| Error::io_with_path(e, path))?;

    log::info!(
        "Wrote {} recommendations to {}",
        recommendations.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reelmatch_core::{TitleId, UserId};

    fn rec(user: &str, tconst: &str, score: f64) -> Recommendation {
        Recommendation {
            user_id: UserId::from(user),
            tconst: TitleId::from(tconst),
            primary_title: "El club de la lucha".to_string(),
            genres: "Drama".to_string(),
            runtime_minutes: 139,
            average_rating: 8.8,
            total_score: score,
        }
    }

    #[test]
    fn test_write_recommendations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("recommendations.csv");
        write_recommendations(&path, &[rec("user_drama", "tt0137523", 0.83)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "user_id,tconst,primaryTitle,genres,runtimeMinutes,averageRating,total_score"
        );
        assert_eq!(
            lines.next().unwrap(),
            "user_drama,tt0137523,El club de la lucha,Drama,139,8.8,0.83"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_export_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recommendations.csv");
        write_recommendations(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_genres_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recommendations.csv");
        let mut r = rec("user_scifi", "tt0133093", 0.9);
        r.genres = "Action,Sci-Fi".to_string();
        write_recommendations(&path, &[r]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Action,Sci-Fi\""));
    }
}
